use std::path::PathBuf;

#[derive(Clone, PartialEq, Eq, Hash)]
pub enum TrustMaterialSource {
    /// A container of trusted certificates. An unset path means the
    /// platform's default trusted roots.
    Store {
        path: Option<PathBuf>,
        password: Option<String>,
        algorithm: String,
    },
    Pem {
        ca_paths: Vec<PathBuf>,
        include_platform_roots: bool,
    },
    /// Trust exactly the certificates of the key source.
    DerivedFromKey,
}
