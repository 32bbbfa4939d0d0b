use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use crate::ssl::structs::credential_reloader::CredentialReloader;
use crate::ssl::structs::tls_configuration::TlsConfiguration;

pub struct SslService {
    pub(crate) global: TlsConfiguration,
    pub(crate) profiles: BTreeMap<String, TlsConfiguration>,
    pub(crate) reloaders: HashMap<TlsConfiguration, Arc<CredentialReloader>>,
}
