use std::sync::Arc;
use crate::ssl::structs::credential_reloader::CredentialReloader;

pub struct DynamicCertificateResolver {
    pub(crate) reloader: Arc<CredentialReloader>,
}
