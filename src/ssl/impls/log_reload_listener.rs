use log::{error, info};
use crate::ssl::enums::ssl_error::SslError;
use crate::ssl::structs::log_reload_listener::LogReloadListener;
use crate::ssl::traits::reload_listener::ReloadListener;

impl LogReloadListener {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl ReloadListener for LogReloadListener {
    fn on_reload(&self) {
        info!("[SSL] [{}] New credentials are live", self.name);
    }

    fn on_failure(&self, error: &SslError) {
        error!("[SSL] [{}] Still serving the previous credentials: {}", self.name, error);
    }
}
