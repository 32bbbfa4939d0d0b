use std::path::PathBuf;
use sha1::{Digest, Sha1};
use crate::ssl::structs::source_fingerprint::SourceFingerprint;

impl SourceFingerprint {
    /// SHA-1 over each path, its length and its bytes. An unreadable file
    /// contributes its error kind, so it still differs from any readable state.
    pub fn of(paths: &[PathBuf]) -> SourceFingerprint {
        let mut hasher = Sha1::new();
        for path in paths {
            hasher.update(path.to_string_lossy().as_bytes());
            match std::fs::read(path) {
                Ok(data) => {
                    hasher.update((data.len() as u64).to_be_bytes());
                    hasher.update(&data);
                }
                Err(e) => {
                    hasher.update(b"\0unreadable\0");
                    hasher.update(e.kind().to_string().as_bytes());
                }
            }
        }
        SourceFingerprint {
            digest: hex::encode(hasher.finalize().as_slice()),
        }
    }

    pub fn digest(&self) -> &str {
        &self.digest
    }
}

impl std::fmt::Display for SourceFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.digest)
    }
}
