use crate::ssl::enums::ssl_error::SslError;

/// Receives the outcome of every reload attempt of a watched configuration.
///
/// Exactly one of the two methods runs per attempt. Both run on the thread
/// that performed the rebuild, which is usually the watch service's worker,
/// so long-running work belongs on another thread.
pub trait ReloadListener: Send + Sync {
    /// New credentials are live.
    fn on_reload(&self);

    /// The rebuild failed; the previous credentials stay live.
    fn on_failure(&self, error: &SslError);
}
