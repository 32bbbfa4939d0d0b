use std::path::PathBuf;

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub enum KeyMaterialSource {
    #[default]
    None,
    Store {
        path: PathBuf,
        store_password: String,
        key_password: String,
        algorithm: String,
    },
    Pem {
        key_path: PathBuf,
        key_password: Option<String>,
        cert_path: Option<PathBuf>,
    },
}
