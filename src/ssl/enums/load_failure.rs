use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadFailure {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to open container (wrong password or corrupt file): {0}")]
    Container(String),
    #[error("Unsupported container format: {0}")]
    UnsupportedFormat(String),
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
    #[error("No usable private key entries found")]
    NoKeyEntries,
    #[error("No certificates found")]
    NoCertificates,
    #[error("Expected exactly one private key in key file, found {0}")]
    KeyCount(usize),
    #[error("Private key is encrypted but no password is configured")]
    EncryptedKeyWithoutPassword,
    #[error("Failed to parse private key: {0}")]
    KeyParse(String),
    #[error("Failed to parse certificate: {0}")]
    CertificateParse(String),
    #[error("Private key does not match the certificate's public key")]
    KeyMismatch,
    #[error("Unsupported key type: {0}")]
    UnsupportedKey(String),
}
