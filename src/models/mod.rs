//! Data models for bundle checks

pub mod certificate;
pub mod check_result;

pub use certificate::ExtractedCertificate;
pub use check_result::{CheckOptions, CheckResult};
