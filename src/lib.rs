//! pfx-check Library
//!
//! A diagnostic check for password-protected PKCS#12 bundles:
//! - Decrypts the bundle with the supplied passphrase
//! - Extracts every certificate embedded in it
//! - Flags bundles carrying expired certificates
//! - Classifies each bundle as usable, invalid, or outdated
//!
//! It is a diagnostic tool only: no chain validation, revocation checking,
//! or signature verification is performed.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pfx_check::{check_bundle, CheckOptions};
//!
//! let result = check_bundle("client.p12", "secret", CheckOptions::default());
//! if result.will_work {
//!     // The bundle decrypts and none of its certificates are expired.
//! }
//! ```

pub mod check;
pub mod cli;
pub mod models;
pub mod output;
pub mod utils;

// Re-export commonly used types
pub use check::{check_bundle, BundleOutcome};
pub use cli::Cli;
pub use models::{CheckOptions, CheckResult, ExtractedCertificate};
pub use utils::CheckError;
