//! Certificate expiration evaluation

use crate::models::ExtractedCertificate;
use chrono::{DateTime, Utc};

/// Count certificates whose not-after lies strictly before `now`.
///
/// The caller captures `now` once per check, so every certificate is
/// compared against the same instant. Certificates without a readable
/// not-after contribute nothing to the count.
pub fn count_expired(certs: &[ExtractedCertificate], now: DateTime<Utc>) -> usize {
    certs.iter().filter(|cert| cert.is_expired_at(now)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn cert_expiring_at(not_after: Option<DateTime<Utc>>) -> ExtractedCertificate {
        ExtractedCertificate {
            alias: "test".to_string(),
            subject: None,
            issuer: None,
            serial: None,
            not_before: None,
            not_after,
            raw_der: Vec::new(),
        }
    }

    #[test]
    fn test_counts_only_certificates_past_not_after() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let certs = vec![
            cert_expiring_at(Some(now - Duration::days(1))),
            cert_expiring_at(Some(now + Duration::days(30))),
            cert_expiring_at(Some(now - Duration::seconds(1))),
        ];

        assert_eq!(count_expired(&certs, now), 2);
    }

    #[test]
    fn test_not_after_equal_to_now_is_not_expired() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let certs = vec![cert_expiring_at(Some(now))];

        assert_eq!(count_expired(&certs, now), 0);
    }

    #[test]
    fn test_missing_not_after_is_not_expired() {
        let now = Utc::now();
        let certs = vec![cert_expiring_at(None)];

        assert_eq!(count_expired(&certs, now), 0);
    }

    #[test]
    fn test_empty_sequence_has_no_expired_certificates() {
        assert_eq!(count_expired(&[], Utc::now()), 0);
    }
}
