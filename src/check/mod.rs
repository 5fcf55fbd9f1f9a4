//! Bundle checking pipeline
//!
//! Orchestrates the load → decrypt → extract → evaluate steps and folds the
//! terminal outcome into a [`CheckResult`]. The pipeline is one synchronous
//! pass: one read, one decryption attempt, one classification. There are no
//! retries; callers wanting another attempt invoke the check again.

pub mod decryptor;
pub mod expiry;
pub mod extractor;
pub mod loader;

use crate::models::{CheckOptions, CheckResult, ExtractedCertificate};
use crate::utils::CheckError;
use chrono::{DateTime, Utc};
use std::path::Path;

/// Terminal classification of one check invocation.
///
/// Exactly one outcome is reached per invocation. Expiration is its own
/// variant rather than a failure so that it can never be confused with a
/// decryption problem when the result flags are derived.
#[derive(Debug)]
pub enum BundleOutcome {
    /// Decrypted cleanly with no expired certificates
    Valid { certs: Vec<ExtractedCertificate> },
    /// Decrypted cleanly but at least one certificate is past its not-after
    Outdated {
        certs: Vec<ExtractedCertificate>,
        expired: usize,
    },
    /// The bundle could not be read or decrypted
    Invalid { error: CheckError },
}

/// Check the PKCS#12 bundle at `path` against `passphrase`.
///
/// Always returns a [`CheckResult`]; failures are captured inside the result
/// rather than propagated. The current wall-clock time is captured once so
/// every certificate is evaluated against the same instant.
pub fn check_bundle(
    path: impl AsRef<Path>,
    passphrase: &str,
    options: CheckOptions,
) -> CheckResult {
    let now = Utc::now();
    let outcome = classify(path.as_ref(), passphrase, now);
    aggregate(outcome, options)
}

/// Run the load → decrypt → extract → evaluate pipeline at a fixed instant
pub fn classify(path: &Path, passphrase: &str, now: DateTime<Utc>) -> BundleOutcome {
    let data = match loader::read_bundle(path) {
        Ok(data) => data,
        Err(error) => return BundleOutcome::Invalid { error },
    };
    tracing::debug!("read {} bytes from {}", data.len(), path.display());

    let keystore = match decryptor::decrypt_bundle(&data, passphrase) {
        Ok(keystore) => keystore,
        Err(error) => return BundleOutcome::Invalid { error },
    };

    let certs = extractor::extract_certificates(&keystore);
    tracing::debug!("extracted {} certificate(s)", certs.len());

    let expired = expiry::count_expired(&certs, now);
    if expired > 0 {
        BundleOutcome::Outdated { certs, expired }
    } else {
        BundleOutcome::Valid { certs }
    }
}

/// Fold a terminal outcome into the returned result, applying output options.
///
/// `will_work` is computed from the raw flags and the captured condition
/// before the display options are applied, so hiding the error field never
/// changes the verdict.
pub fn aggregate(outcome: BundleOutcome, options: CheckOptions) -> CheckResult {
    let (is_pfx_outdated, is_password_or_pfx_invalid, error, certs) = match outcome {
        BundleOutcome::Valid { certs } => (false, false, None, certs),
        // The expiration signal doubles as the captured error, so an outdated
        // bundle reports will_work = false through the error clause as well.
        BundleOutcome::Outdated { certs, expired } => (
            true,
            false,
            Some(CheckError::Expired { count: expired }),
            certs,
        ),
        BundleOutcome::Invalid { error } => (false, true, Some(error), Vec::new()),
    };

    let will_work = !is_pfx_outdated && !is_password_or_pfx_invalid && error.is_none();

    CheckResult {
        is_pfx_outdated,
        is_password_or_pfx_invalid,
        will_work,
        error: options.include_error.then_some(error),
        valid_certs: options.include_certificates.then_some(certs),
    }
}
