//! Check result and options types

use crate::models::ExtractedCertificate;
use crate::utils::CheckError;
use serde::Serialize;

/// Options controlling what a [`CheckResult`] carries
#[derive(Debug, Clone, Copy)]
pub struct CheckOptions {
    /// Attach the extracted certificates to the result (default `false`)
    pub include_certificates: bool,
    /// Attach the captured error, or `null`, to the result (default `true`)
    pub include_error: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            include_certificates: false,
            include_error: true,
        }
    }
}

/// Outcome of a bundle check, produced fresh per invocation.
///
/// At most one of `is_pfx_outdated` and `is_password_or_pfx_invalid` is set;
/// both stay false for a usable bundle. `will_work` is derived from the raw
/// flags and the captured error, never set directly.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    /// At least one certificate in the bundle is past its not-after
    pub is_pfx_outdated: bool,
    /// The bundle could not be read or decrypted
    pub is_password_or_pfx_invalid: bool,
    /// The bundle decrypted cleanly and nothing is expired
    pub will_work: bool,
    /// Captured condition, if any. The outer `Option` tracks whether the
    /// field was requested via [`CheckOptions::include_error`]; the inner one
    /// whether anything was captured (serialized as `null` when not).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Option<CheckError>>,
    /// Every certificate found in the bundle, in keystore enumeration order,
    /// present when requested via [`CheckOptions::include_certificates`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_certs: Option<Vec<ExtractedCertificate>>,
}

impl CheckResult {
    /// The captured condition, when the error field was requested and a
    /// failure (or the expiration signal) occurred
    pub fn captured_error(&self) -> Option<&CheckError> {
        self.error.as_ref().and_then(|error| error.as_ref())
    }

    /// Certificates carried by the result; empty when not requested
    pub fn certificates(&self) -> &[ExtractedCertificate] {
        self.valid_certs.as_deref().unwrap_or(&[])
    }
}
