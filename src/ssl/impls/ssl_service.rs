use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use log::info;
use crate::config::structs::settings::Settings;
use crate::ssl::enums::ssl_error::SslError;
use crate::ssl::structs::credential_reloader::CredentialReloader;
use crate::ssl::structs::environment::Environment;
use crate::ssl::structs::ssl_service::SslService;
use crate::ssl::structs::tls_configuration::TlsConfiguration;
use crate::ssl::traits::reload_listener::ReloadListener;
use crate::watcher::traits::watch_service::WatchService;

impl std::fmt::Debug for SslService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SslService")
            .field("profiles", &self.profiles.keys().collect::<Vec<_>>())
            .field("credential_sets", &self.reloaders.len())
            .finish()
    }
}

impl SslService {
    /// Resolves the global scope and every profile on top of it, then loads
    /// each distinct configuration once. Profiles resolving to the same
    /// configuration share one reloader.
    pub fn new(
        global: &Settings,
        profiles: &BTreeMap<String, Settings>,
        environment: Environment,
    ) -> Result<Self, SslError> {
        let global_configuration = TlsConfiguration::resolve(global, None)?;
        let mut resolved = BTreeMap::new();
        for (name, settings) in profiles.iter() {
            resolved.insert(name.clone(), TlsConfiguration::resolve(global, Some(settings))?);
        }

        let mut reloaders: HashMap<TlsConfiguration, Arc<CredentialReloader>> = HashMap::new();
        for configuration in std::iter::once(&global_configuration).chain(resolved.values()) {
            if reloaders.contains_key(configuration) {
                continue;
            }
            let reloader = CredentialReloader::new(configuration.clone(), environment.clone())?;
            reloaders.insert(configuration.clone(), Arc::new(reloader));
        }
        info!(
            "[SSL] {} profile(s) resolved to {} credential set(s)",
            resolved.len(),
            reloaders.len()
        );

        Ok(Self {
            global: global_configuration,
            profiles: resolved,
            reloaders,
        })
    }

    pub fn global_configuration(&self) -> &TlsConfiguration {
        &self.global
    }

    pub fn profile_configuration(&self, name: &str) -> Option<&TlsConfiguration> {
        self.profiles.get(name)
    }

    pub fn profiles(&self) -> Vec<String> {
        self.profiles.keys().cloned().collect()
    }

    pub fn global(&self) -> Option<Arc<CredentialReloader>> {
        self.reloader_for(&self.global)
    }

    pub fn profile(&self, name: &str) -> Option<Arc<CredentialReloader>> {
        self.profiles
            .get(name)
            .and_then(|configuration| self.reloader_for(configuration))
    }

    pub fn reloader_for(&self, configuration: &TlsConfiguration) -> Option<Arc<CredentialReloader>> {
        self.reloaders.get(configuration).cloned()
    }

    pub fn reloaders(&self) -> Vec<Arc<CredentialReloader>> {
        self.reloaders.values().cloned().collect()
    }

    /// Watches the backing files of every credential set. Every set is
    /// attempted; the first failure is returned.
    pub fn watch(&self, service: Arc<dyn WatchService>) -> Result<(), SslError> {
        let mut first_error = None;
        for reloader in self.reloaders.values() {
            if let Err(e) = reloader.watch(service.clone()) {
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(())
        }
    }

    pub fn unwatch(&self) {
        for reloader in self.reloaders.values() {
            reloader.unwatch();
        }
    }

    pub fn register_listener(&self, listener: Arc<dyn ReloadListener>) {
        for reloader in self.reloaders.values() {
            reloader.register_listener(listener.clone());
        }
    }

    /// Forces a reload of every credential set.
    pub fn reload_all(&self) -> Vec<(TlsConfiguration, Result<(), SslError>)> {
        self.reloaders
            .iter()
            .map(|(configuration, reloader)| (configuration.clone(), reloader.reload()))
            .collect()
    }
}
