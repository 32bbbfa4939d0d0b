use std::sync::Arc;
use rustls::RootCertStore;
use rustls::pki_types::CertificateDer;

#[derive(Clone)]
pub struct VerificationHandle {
    pub(crate) trusted: Vec<CertificateDer<'static>>,
    pub(crate) roots: Arc<RootCertStore>,
    pub(crate) includes_platform_roots: bool,
}
