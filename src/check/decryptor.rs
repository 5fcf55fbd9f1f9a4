//! PKCS#12 decryption
//!
//! Wraps the p12-keystore decoder: bundle bytes plus passphrase in,
//! decrypted keystore out. The passphrase is borrowed for the call and not
//! retained anywhere.

use crate::utils::CheckError;
use p12_keystore::KeyStore;

/// Decrypt a PKCS#12 bundle with the given passphrase.
///
/// Every decoder failure (wrong passphrase, truncated file, unsupported
/// structure) maps to [`CheckError::Decryption`]; the underlying message is
/// preserved for diagnostics.
pub fn decrypt_bundle(data: &[u8], passphrase: &str) -> Result<KeyStore, CheckError> {
    KeyStore::from_pkcs12(data, passphrase).map_err(|e| CheckError::Decryption {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_are_a_decryption_error() {
        let error = decrypt_bundle(b"not a pkcs12 container", "secret").unwrap_err();
        assert_eq!(error.kind(), "decryption");
    }

    #[test]
    fn test_empty_input_is_a_decryption_error() {
        let error = decrypt_bundle(&[], "secret").unwrap_err();
        assert_eq!(error.kind(), "decryption");
    }
}
