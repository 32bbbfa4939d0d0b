use std::sync::Arc;
use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use rustls::sign::CertifiedKey;
use crate::ssl::enums::load_failure::LoadFailure;
use crate::ssl::structs::key_entry::KeyEntry;

impl std::fmt::Debug for KeyEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyEntry")
            .field("alias", &self.alias)
            .field("chain_length", &self.chain.len())
            .field("algorithm", &self.certified_key.key.algorithm())
            .finish()
    }
}

impl KeyEntry {
    pub fn new(
        alias: &str,
        chain: Vec<CertificateDer<'static>>,
        key: &PrivateKeyDer<'_>,
    ) -> Result<Self, LoadFailure> {
        if chain.is_empty() {
            return Err(LoadFailure::NoCertificates);
        }
        let signing_key = rustls::crypto::ring::sign::any_supported_type(key)
            .map_err(|e| LoadFailure::UnsupportedKey(format!("{}", e)))?;
        Ok(Self {
            alias: alias.to_string(),
            certified_key: Arc::new(CertifiedKey::new(chain.clone(), signing_key)),
            chain,
        })
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Leaf first.
    pub fn chain(&self) -> &[CertificateDer<'static>] {
        &self.chain
    }

    pub fn certified_key(&self) -> Arc<CertifiedKey> {
        self.certified_key.clone()
    }
}
