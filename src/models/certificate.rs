//! Certificate information extracted from a PKCS#12 bundle

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;
use x509_parser::prelude::*;

/// A single certificate pulled out of a decrypted bundle.
///
/// Parsing is best-effort: the raw DER is always kept, while the metadata
/// fields stay `None` when the bytes cannot be parsed as X.509. A
/// certificate without a readable not-after cannot be judged expired.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedCertificate {
    /// Keystore alias of the entry this certificate came from
    pub alias: String,
    /// Certificate subject
    pub subject: Option<String>,
    /// Certificate issuer
    pub issuer: Option<String>,
    /// Serial number (hex string)
    pub serial: Option<String>,
    /// Not valid before
    pub not_before: Option<DateTime<Utc>>,
    /// Not valid after
    pub not_after: Option<DateTime<Utc>>,
    /// Raw certificate in DER format
    #[serde(skip)]
    pub raw_der: Vec<u8>,
}

impl ExtractedCertificate {
    /// Build a record from DER bytes, reading what metadata can be read
    pub fn from_der(alias: &str, der: &[u8]) -> Self {
        match X509Certificate::from_der(der) {
            Ok((_, cert)) => {
                let serial = cert
                    .serial
                    .to_bytes_be()
                    .iter()
                    .map(|b| format!("{:02X}", b))
                    .collect::<Vec<_>>()
                    .join(":");

                Self {
                    alias: alias.to_string(),
                    subject: Some(cert.subject().to_string()),
                    issuer: Some(cert.issuer().to_string()),
                    serial: Some(serial),
                    not_before: asn1_time_to_datetime(cert.validity().not_before),
                    not_after: asn1_time_to_datetime(cert.validity().not_after),
                    raw_der: der.to_vec(),
                }
            }
            Err(_) => Self {
                alias: alias.to_string(),
                subject: None,
                issuer: None,
                serial: None,
                not_before: None,
                not_after: None,
                raw_der: der.to_vec(),
            },
        }
    }

    /// Whether the certificate was expired at `now`.
    ///
    /// Expired means the not-after instant lies strictly before `now`. A
    /// certificate without a readable not-after counts as non-expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.not_after {
            Some(not_after) => not_after < now,
            None => false,
        }
    }

    /// Days until expiry (negative if expired)
    pub fn days_until_expiry(&self) -> Option<i64> {
        self.not_after
            .map(|not_after| not_after.signed_duration_since(Utc::now()).num_days())
    }

    /// Get the PEM encoded certificate
    pub fn to_pem(&self) -> String {
        let b64 = base64::Engine::encode(&base64::engine::general_purpose::STANDARD, &self.raw_der);
        let mut pem = String::from("-----BEGIN CERTIFICATE-----\n");
        for chunk in b64.as_bytes().chunks(64) {
            pem.push_str(std::str::from_utf8(chunk).unwrap_or(""));
            pem.push('\n');
        }
        pem.push_str("-----END CERTIFICATE-----\n");
        pem
    }
}

/// Convert ASN.1 time to chrono DateTime
fn asn1_time_to_datetime(time: ASN1Time) -> Option<DateTime<Utc>> {
    Utc.timestamp_opt(time.timestamp(), 0).single()
}
