use std::sync::Arc;
use rustls::server::{ClientHello, ResolvesServerCert};
use rustls::sign::CertifiedKey;
use crate::ssl::structs::credential_reloader::CredentialReloader;
use crate::ssl::structs::dynamic_certificate_resolver::DynamicCertificateResolver;

impl std::fmt::Debug for DynamicCertificateResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicCertificateResolver")
            .field("aliases", &self.reloader.signing_handle().aliases())
            .finish()
    }
}

impl DynamicCertificateResolver {
    pub fn new(reloader: Arc<CredentialReloader>) -> Self {
        Self { reloader }
    }

    pub fn reloader(&self) -> &Arc<CredentialReloader> {
        &self.reloader
    }

    pub fn has_certificate(&self) -> bool {
        !self.reloader.signing_handle().is_empty()
    }
}

impl ResolvesServerCert for DynamicCertificateResolver {
    fn resolve(&self, client_hello: ClientHello<'_>) -> Option<Arc<CertifiedKey>> {
        self.reloader.signing_handle().choose(client_hello.signature_schemes())
    }
}
