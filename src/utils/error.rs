//! Custom error types for pfx-check
//!
//! This module defines the failure taxonomy of a bundle check using
//! `thiserror`. A check never propagates one of these to the caller: the
//! entry point always returns a result, and any failure is captured inside
//! it.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// A condition captured while checking a bundle
#[derive(Error, Debug, Clone)]
pub enum CheckError {
    /// The bundle file could not be read from storage
    #[error("Failed to read bundle {path}: {message}")]
    Storage { path: String, message: String },

    /// The bundle could not be decrypted (wrong passphrase or corrupt file)
    #[error("Failed to decrypt PKCS#12 bundle: {message}")]
    Decryption { message: String },

    /// The bundle decrypted but carries expired certificates.
    ///
    /// This is the expiration signal, not a decryption failure: it marks the
    /// bundle outdated rather than invalid.
    #[error("Bundle contains {count} expired certificate(s)")]
    Expired { count: usize },
}

impl CheckError {
    /// Short machine-readable tag for the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            CheckError::Storage { .. } => "storage",
            CheckError::Decryption { .. } => "decryption",
            CheckError::Expired { .. } => "expired",
        }
    }

    /// Whether this is the expiration signal rather than a real failure
    pub fn is_expiration(&self) -> bool {
        matches!(self, CheckError::Expired { .. })
    }
}

impl Serialize for CheckError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("CheckError", 2)?;
        state.serialize_field("kind", self.kind())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let storage = CheckError::Storage {
            path: "/tmp/missing.p12".to_string(),
            message: "No such file or directory".to_string(),
        };
        let decryption = CheckError::Decryption {
            message: "MAC verification failed".to_string(),
        };
        let expired = CheckError::Expired { count: 2 };

        assert_eq!(storage.kind(), "storage");
        assert_eq!(decryption.kind(), "decryption");
        assert_eq!(expired.kind(), "expired");

        assert!(expired.is_expiration());
        assert!(!storage.is_expiration());
        assert!(!decryption.is_expiration());
    }

    #[test]
    fn test_error_serializes_kind_and_message() {
        let error = CheckError::Expired { count: 1 };
        let json = serde_json::to_value(&error).unwrap();

        assert_eq!(json["kind"], "expired");
        assert_eq!(json["message"], "Bundle contains 1 expired certificate(s)");
    }
}
