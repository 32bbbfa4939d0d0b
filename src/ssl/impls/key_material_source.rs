use std::path::Path;
use crate::ssl::enums::key_material_source::KeyMaterialSource;

const REDACTED: &str = "<redacted>";

impl std::fmt::Debug for KeyMaterialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyMaterialSource::None => f.write_str("None"),
            KeyMaterialSource::Store { path, algorithm, .. } => f
                .debug_struct("Store")
                .field("path", path)
                .field("store_password", &REDACTED)
                .field("key_password", &REDACTED)
                .field("algorithm", algorithm)
                .finish(),
            KeyMaterialSource::Pem { key_path, key_password, cert_path } => f
                .debug_struct("Pem")
                .field("key_path", key_path)
                .field("key_password", &key_password.as_ref().map(|_| REDACTED))
                .field("cert_path", cert_path)
                .finish()
        }
    }
}

impl KeyMaterialSource {
    pub fn is_none(&self) -> bool {
        matches!(self, KeyMaterialSource::None)
    }

    /// Files this source reads, as configured.
    pub fn paths(&self) -> Vec<&Path> {
        match self {
            KeyMaterialSource::None => Vec::new(),
            KeyMaterialSource::Store { path, .. } => vec![path.as_path()],
            KeyMaterialSource::Pem { key_path, cert_path, .. } => {
                let mut paths = vec![key_path.as_path()];
                if let Some(cert_path) = cert_path {
                    paths.push(cert_path.as_path());
                }
                paths
            }
        }
    }
}
