use std::sync::Arc;
use rustls::{DistinguishedName, RootCertStore};
use rustls::pki_types::CertificateDer;
use rustls::server::WebPkiClientVerifier;
use rustls::server::danger::ClientCertVerifier;
use crate::ssl::enums::ssl_error::SslError;
use crate::ssl::structs::verification_handle::VerificationHandle;

impl std::fmt::Debug for VerificationHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerificationHandle")
            .field("trusted", &self.trusted.len())
            .field("roots", &self.roots.len())
            .field("includes_platform_roots", &self.includes_platform_roots)
            .finish()
    }
}

impl VerificationHandle {
    /// `trusted` are the configured certificates; `platform` only feed the
    /// root store.
    pub fn new(
        trusted: Vec<CertificateDer<'static>>,
        platform: Vec<CertificateDer<'static>>,
        includes_platform_roots: bool,
    ) -> Self {
        let mut roots = RootCertStore::empty();
        roots.add_parsable_certificates(trusted.iter().cloned());
        roots.add_parsable_certificates(platform);
        Self {
            trusted,
            roots: Arc::new(roots),
            includes_platform_roots,
        }
    }

    pub fn trusted_certificates(&self) -> &[CertificateDer<'static>] {
        &self.trusted
    }

    pub fn len(&self) -> usize {
        self.trusted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trusted.is_empty()
    }

    pub fn includes_platform_roots(&self) -> bool {
        self.includes_platform_roots
    }

    pub fn is_trusted(&self, certificate: &CertificateDer<'_>) -> bool {
        self.trusted.iter().any(|trusted| trusted.as_ref() == certificate.as_ref())
    }

    pub fn root_store(&self) -> Arc<RootCertStore> {
        self.roots.clone()
    }

    /// Subjects of every trust anchor, as sent in a certificate request.
    pub fn accepted_issuers(&self) -> Vec<DistinguishedName> {
        self.roots.subjects()
    }

    /// A verifier requiring client certificates issued by these roots.
    pub fn client_verifier(&self) -> Result<Arc<dyn ClientCertVerifier>, SslError> {
        WebPkiClientVerifier::builder_with_provider(
            self.roots.clone(),
            Arc::new(rustls::crypto::ring::default_provider()),
        )
        .build()
        .map_err(|e| SslError::Configuration(e.to_string()))
    }
}
