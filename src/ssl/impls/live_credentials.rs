use std::sync::Arc;
use crate::ssl::structs::live_credentials::LiveCredentials;
use crate::ssl::structs::signing_handle::SigningHandle;
use crate::ssl::structs::source_fingerprint::SourceFingerprint;
use crate::ssl::structs::verification_handle::VerificationHandle;

impl std::fmt::Debug for LiveCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveCredentials")
            .field("signing", &self.signing)
            .field("verification", &self.verification)
            .field("fingerprint", &self.fingerprint)
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}

impl LiveCredentials {
    pub fn new(signing: SigningHandle, verification: VerificationHandle, fingerprint: SourceFingerprint) -> Self {
        Self {
            signing: Arc::new(signing),
            verification: Arc::new(verification),
            fingerprint,
            loaded_at: chrono::Utc::now(),
        }
    }

    pub fn signing_handle(&self) -> Arc<SigningHandle> {
        self.signing.clone()
    }

    pub fn verification_handle(&self) -> Arc<VerificationHandle> {
        self.verification.clone()
    }

    pub fn fingerprint(&self) -> &SourceFingerprint {
        &self.fingerprint
    }

    pub fn loaded_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.loaded_at
    }
}
