use std::sync::Arc;
use rustls::pki_types::CertificateDer;
use rustls::sign::CertifiedKey;

#[derive(Clone)]
pub struct KeyEntry {
    pub(crate) alias: String,
    pub(crate) chain: Vec<CertificateDer<'static>>,
    pub(crate) certified_key: Arc<CertifiedKey>,
}
