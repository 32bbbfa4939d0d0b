use std::path::Path;
use crate::ssl::enums::store_format::StoreFormat;

impl StoreFormat {
    /// `.jks` is Java's proprietary keystore; everything else is read as
    /// PKCS#12 (`.p12`, `.pfx`, or no recognised extension).
    pub fn from_path(path: &Path) -> StoreFormat {
        match path.extension().map(|ext| ext.to_string_lossy().to_ascii_lowercase()) {
            Some(ext) if ext == "jks" => StoreFormat::Jks,
            _ => StoreFormat::Pkcs12
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StoreFormat::Pkcs12 => "PKCS12",
            StoreFormat::Jks => "JKS"
        }
    }
}

impl std::fmt::Display for StoreFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
