use std::sync::Arc;
use rustls::SignatureScheme;
use rustls::pki_types::CertificateDer;
use rustls::sign::CertifiedKey;
use crate::ssl::structs::key_entry::KeyEntry;
use crate::ssl::structs::signing_handle::SigningHandle;

impl std::fmt::Debug for SigningHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningHandle")
            .field("aliases", &self.aliases())
            .finish()
    }
}

impl SigningHandle {
    pub fn new(entries: Vec<KeyEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|entry| (entry.alias.clone(), entry))
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Sorted.
    pub fn aliases(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn entry(&self, alias: &str) -> Option<&KeyEntry> {
        self.entries.get(alias)
    }

    pub fn certified_key(&self, alias: &str) -> Option<Arc<CertifiedKey>> {
        self.entries.get(alias).map(KeyEntry::certified_key)
    }

    /// The first entry, in alias order, able to sign with one of `schemes`.
    pub fn choose(&self, schemes: &[SignatureScheme]) -> Option<Arc<CertifiedKey>> {
        self.entries
            .values()
            .find(|entry| entry.certified_key.key.choose_scheme(schemes).is_some())
            .map(KeyEntry::certified_key)
    }

    /// Every certificate of every chain, without duplicates.
    pub fn certificates(&self) -> Vec<CertificateDer<'static>> {
        let mut certificates: Vec<CertificateDer<'static>> = Vec::new();
        for entry in self.entries.values() {
            for certificate in entry.chain.iter() {
                if !certificates.contains(certificate) {
                    certificates.push(certificate.clone());
                }
            }
        }
        certificates
    }
}
