use std::time::Duration;
use crate::ssl::enums::key_material_source::KeyMaterialSource;
use crate::ssl::enums::trust_material_source::TrustMaterialSource;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TlsConfiguration {
    pub key_source: KeyMaterialSource,
    pub trust_source: TrustMaterialSource,
    pub protocol: String,
    pub session_cache_size: usize,
    pub session_cache_timeout: Duration,
}
