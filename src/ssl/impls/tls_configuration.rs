use std::path::PathBuf;
use rustls::SupportedProtocolVersion;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::settings::Settings;
use crate::ssl::enums::key_material_source::KeyMaterialSource;
use crate::ssl::enums::ssl_error::SslError;
use crate::ssl::enums::trust_material_source::TrustMaterialSource;
use crate::ssl::ssl::*;
use crate::ssl::structs::environment::Environment;
use crate::ssl::structs::tls_configuration::TlsConfiguration;

impl Default for TlsConfiguration {
    fn default() -> Self {
        Self {
            key_source: KeyMaterialSource::None,
            trust_source: TrustMaterialSource::default(),
            protocol: String::from(DEFAULT_PROTOCOL),
            session_cache_size: DEFAULT_SESSION_CACHE_SIZE,
            session_cache_timeout: DEFAULT_SESSION_CACHE_TIMEOUT,
        }
    }
}

impl TlsConfiguration {
    /// Resolves one scope. Every key set in `scoped` wins over the same key in
    /// `global`; anything set in neither falls back to the defaults.
    ///
    /// A scope naming its own key material (`key.path` or `keystore.path`)
    /// also decides the key source kind, so a global path of the other kind
    /// is dropped before layering. Trust material (`ca` or `truststore.path`)
    /// is handled the same way.
    ///
    /// Never touches the filesystem; only malformed numbers, durations,
    /// booleans or lists given for single-valued keys are rejected here.
    pub fn resolve(global: &Settings, scoped: Option<&Settings>) -> Result<TlsConfiguration, ConfigurationError> {
        let settings = match scoped {
            Some(scoped) => {
                let mut replaced: Vec<&str> = Vec::new();
                if KEY_KIND_KEYS.iter().any(|key| scoped.contains(key)) {
                    replaced.extend(KEY_KIND_KEYS);
                }
                if TRUST_KIND_KEYS.iter().any(|key| scoped.contains(key)) {
                    replaced.extend(TRUST_KIND_KEYS);
                }
                global.without(&replaced).merged_with(scoped)
            }
            None => global.clone()
        };
        let key_source = Self::resolve_key_source(&settings)?;
        let trust_source = Self::resolve_trust_source(&settings, &key_source)?;
        Ok(TlsConfiguration {
            key_source,
            trust_source,
            protocol: settings.get_scalar(PROTOCOL)?.unwrap_or(DEFAULT_PROTOCOL).to_string(),
            session_cache_size: settings.get_as_usize(SESSION_CACHE_SIZE)?.unwrap_or(DEFAULT_SESSION_CACHE_SIZE),
            session_cache_timeout: settings.get_as_time(SESSION_CACHE_TIMEOUT)?.unwrap_or(DEFAULT_SESSION_CACHE_TIMEOUT),
        })
    }

    fn resolve_key_source(settings: &Settings) -> Result<KeyMaterialSource, ConfigurationError> {
        if let Some(key_path) = settings.get_scalar(KEY_PATH)? {
            return Ok(KeyMaterialSource::Pem {
                key_path: PathBuf::from(key_path),
                key_password: settings.get_scalar(KEY_PASSWORD)?.map(String::from),
                cert_path: settings.get_scalar(CERT)?.map(PathBuf::from),
            });
        }
        if let Some(path) = settings.get_scalar(KEYSTORE_PATH)? {
            let store_password = settings.get_scalar(KEYSTORE_PASSWORD)?.unwrap_or_default().to_string();
            let key_password = settings
                .get_scalar(KEYSTORE_KEY_PASSWORD)?
                .map(String::from)
                .unwrap_or_else(|| store_password.clone());
            return Ok(KeyMaterialSource::Store {
                path: PathBuf::from(path),
                store_password,
                key_password,
                algorithm: settings.get_scalar(KEYSTORE_ALGORITHM)?.unwrap_or(DEFAULT_ALGORITHM).to_string(),
            });
        }
        Ok(KeyMaterialSource::None)
    }

    fn resolve_trust_source(
        settings: &Settings,
        key_source: &KeyMaterialSource,
    ) -> Result<TrustMaterialSource, ConfigurationError> {
        let include_platform_roots = settings.get_as_bool(INCLUDE_PLATFORM_ROOTS)?;
        if let Some(ca_paths) = settings.get_list(CA) {
            return Ok(TrustMaterialSource::Pem {
                ca_paths: ca_paths.into_iter().map(PathBuf::from).collect(),
                include_platform_roots: include_platform_roots.unwrap_or(false),
            });
        }
        let password = settings.get_scalar(TRUSTSTORE_PASSWORD)?.map(String::from);
        let algorithm = settings.get_scalar(TRUSTSTORE_ALGORITHM)?.unwrap_or(DEFAULT_ALGORITHM).to_string();
        if let Some(path) = settings.get_scalar(TRUSTSTORE_PATH)? {
            return Ok(TrustMaterialSource::Store {
                path: Some(PathBuf::from(path)),
                password,
                algorithm,
            });
        }
        let any_trust_setting = [TRUSTSTORE_PASSWORD, TRUSTSTORE_ALGORITHM, INCLUDE_PLATFORM_ROOTS]
            .iter()
            .any(|key| settings.contains(key));
        if !key_source.is_none() && !any_trust_setting {
            return Ok(TrustMaterialSource::DerivedFromKey);
        }
        Ok(TrustMaterialSource::Store {
            path: None,
            password,
            algorithm,
        })
    }

    pub fn protocol_versions(&self) -> Result<Vec<&'static SupportedProtocolVersion>, SslError> {
        match self.protocol.to_ascii_uppercase().as_str() {
            "TLS" => Ok(vec![&rustls::version::TLS13, &rustls::version::TLS12]),
            "TLSV1.3" => Ok(vec![&rustls::version::TLS13]),
            "TLSV1.2" => Ok(vec![&rustls::version::TLS12]),
            _ => Err(SslError::Configuration(format!("unsupported protocol '{}'", self.protocol)))
        }
    }

    /// Every file the key and trust sources read, resolved against
    /// `environment`, without duplicates.
    pub fn backing_files(&self, environment: &Environment) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = Vec::new();
        let paths = self.key_source.paths().into_iter().chain(self.trust_source.paths());
        for path in paths {
            let resolved = environment.resolve_path(path);
            if !files.contains(&resolved) {
                files.push(resolved);
            }
        }
        files
    }
}
