use std::sync::Arc;
use crate::ssl::structs::signing_handle::SigningHandle;
use crate::ssl::structs::source_fingerprint::SourceFingerprint;
use crate::ssl::structs::verification_handle::VerificationHandle;

pub struct LiveCredentials {
    pub(crate) signing: Arc<SigningHandle>,
    pub(crate) verification: Arc<VerificationHandle>,
    pub(crate) fingerprint: SourceFingerprint,
    pub(crate) loaded_at: chrono::DateTime<chrono::Utc>,
}
