//! Certificate extraction from a decrypted keystore

use crate::models::ExtractedCertificate;
use p12_keystore::{KeyStore, KeyStoreEntry};

/// Collect every certificate in the keystore, in enumeration order.
///
/// Private-key chain entries contribute their certificates in chain order;
/// the key material itself is skipped. Standalone certificate entries
/// contribute themselves. An empty keystore yields an empty sequence, not an
/// error.
pub fn extract_certificates(keystore: &KeyStore) -> Vec<ExtractedCertificate> {
    keystore
        .entries()
        .flat_map(|(alias, entry)| match entry {
            KeyStoreEntry::PrivateKeyChain(chain) => chain
                .chain()
                .iter()
                .map(|cert| ExtractedCertificate::from_der(alias, cert.as_der()))
                .collect::<Vec<_>>(),
            KeyStoreEntry::Certificate(cert) => {
                vec![ExtractedCertificate::from_der(alias, cert.as_der())]
            }
        })
        .collect()
}
