use crate::common::ConfigError;

use std::path::PathBuf;

pub const BACKEND_URL_VAR: &str = "ROBOTTRADER_BACKEND_URL";
pub const BACKEND_KEY_VAR: &str = "ROBOTTRADER_BACKEND_KEY";

/// Where the hosted auth/REST backend lives and the public key it expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
}

impl BackendConfig {
    pub fn new(url: &str, anon_key: &str) -> Result<Self, ConfigError> {
        let url = url.trim().trim_end_matches('/');
        if url.is_empty() {
            return Err(ConfigError::Missing(BACKEND_URL_VAR));
        }
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::Invalid {
                name: BACKEND_URL_VAR,
                reason: format!("'{}' is not an http(s) URL", url),
            });
        }

        let anon_key = anon_key.trim();
        if anon_key.is_empty() {
            return Err(ConfigError::Missing(BACKEND_KEY_VAR));
        }

        Ok(Self {
            url: url.to_string(),
            anon_key: anon_key.to_string(),
        })
    }

    /// Reads the backend settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var(BACKEND_URL_VAR)
            .map_err(|_| ConfigError::Missing(BACKEND_URL_VAR))?;
        let key = std::env::var(BACKEND_KEY_VAR)
            .map_err(|_| ConfigError::Missing(BACKEND_KEY_VAR))?;

        Self::new(&url, &key)
    }

    /// Settings baked into the browser bundle at compile time.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        let url = option_env!("ROBOTTRADER_BACKEND_URL")
            .ok_or(ConfigError::Missing(BACKEND_URL_VAR))?;
        let key = option_env!("ROBOTTRADER_BACKEND_KEY")
            .ok_or(ConfigError::Missing(BACKEND_KEY_VAR))?;

        Self::new(url, key)
    }

    /// Scheme and host of the backend, used for the CSP `connect-src`.
    pub fn origin(&self) -> &str {
        let after_scheme = self.url.find("://").map_or(0, |i| i + 3);
        match self.url[after_scheme..].find('/') {
            Some(slash) => &self.url[..after_scheme + slash],
            None => &self.url,
        }
    }
}

/// Settings for the static host binary.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// Directory holding `index.html` and the compiled `pkg/` bundle.
    pub site_root: PathBuf,
    pub backend: BackendConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let site_root = std::env::var("SITE_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./dist"));

        Ok(Self {
            bind_addr,
            site_root,
            backend: BackendConfig::from_env()?,
        })
    }
}
