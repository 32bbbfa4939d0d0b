use std::path::Path;
use crate::ssl::enums::trust_material_source::TrustMaterialSource;
use crate::ssl::ssl::DEFAULT_ALGORITHM;

impl std::fmt::Debug for TrustMaterialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrustMaterialSource::Store { path, password, algorithm } => f
                .debug_struct("Store")
                .field("path", path)
                .field("password", &password.as_ref().map(|_| "<redacted>"))
                .field("algorithm", algorithm)
                .finish(),
            TrustMaterialSource::Pem { ca_paths, include_platform_roots } => f
                .debug_struct("Pem")
                .field("ca_paths", ca_paths)
                .field("include_platform_roots", include_platform_roots)
                .finish(),
            TrustMaterialSource::DerivedFromKey => f.write_str("DerivedFromKey")
        }
    }
}

impl Default for TrustMaterialSource {
    fn default() -> Self {
        TrustMaterialSource::Store {
            path: None,
            password: None,
            algorithm: String::from(DEFAULT_ALGORITHM),
        }
    }
}

impl TrustMaterialSource {
    pub fn paths(&self) -> Vec<&Path> {
        match self {
            TrustMaterialSource::Store { path, .. } => path.iter().map(|path| path.as_path()).collect(),
            TrustMaterialSource::Pem { ca_paths, .. } => ca_paths.iter().map(|path| path.as_path()).collect(),
            TrustMaterialSource::DerivedFromKey => Vec::new()
        }
    }
}
