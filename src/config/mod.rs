//
//  gitlab-cli
//  config/mod.rs
//

//! # Configuration
//!
//! Process-wide client settings: API endpoint, private token, user agent,
//! sudo user, HTTP proxy, and request timeout. Settings come from three
//! sources, later ones winning:
//!
//! 1. the TOML config file in the platform config directory
//!    (Linux: `~/.config/gl/config.toml`),
//! 2. environment variables (`GITLAB_API_ENDPOINT`,
//!    `GITLAB_API_PRIVATE_TOKEN`, `GITLAB_API_HTTP_PROXY`),
//! 3. explicit setters / CLI flags.
//!
//! The endpoint is validated on first use by the client, not here: a missing
//! endpoint surfaces as `Error::MissingCredentials` before any network call.
//! The configuration is captured by value when a client is built; changing
//! settings afterwards means building a new client. Sharing one `Config`
//! mutably across threads is not supported.
//!
//! ## Example config file
//!
//! ```toml
//! endpoint = "https://gitlab.example.com/api/v4"
//! private_token = "secret"
//! sudo = "deploy-bot"
//! timeout = 30
//! ```

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::api::{Error, Result};

/// Environment variable for the API endpoint URL.
pub const ENV_ENDPOINT: &str = "GITLAB_API_ENDPOINT";
/// Environment variable for the private token.
pub const ENV_PRIVATE_TOKEN: &str = "GITLAB_API_PRIVATE_TOKEN";
/// Environment variable for an HTTP proxy URL.
pub const ENV_HTTP_PROXY: &str = "GITLAB_API_HTTP_PROXY";

/// Default `User-Agent` header value.
pub const DEFAULT_USER_AGENT: &str = concat!("gitlab-cli/", env!("CARGO_PKG_VERSION"));

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration.
///
/// All fields are optional except the timeout; only the endpoint is required
/// to actually issue a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base API URL including the versioned path prefix,
    /// e.g. `https://gitlab.example.com/api/v4`.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Private token sent as the `PRIVATE-TOKEN` header.
    #[serde(default)]
    pub private_token: Option<String>,

    /// Custom `User-Agent`; defaults to [`DEFAULT_USER_AGENT`].
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Username to impersonate, sent as the `sudo` parameter on every
    /// authenticated request.
    #[serde(default)]
    pub sudo: Option<String>,

    /// HTTP proxy URL for all requests.
    #[serde(default)]
    pub proxy: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: None,
            private_token: None,
            user_agent: None,
            sudo: None,
            proxy: None,
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Builds a configuration from the config file merged with environment
    /// overrides. A missing file is not an error.
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Reads a configuration from a specific TOML file.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        toml::from_str(&raw).map_err(|e| Error::Config(format!("invalid {}: {e}", path.display())))
    }

    /// Serializes the configuration to the config file, creating parent
    /// directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| Error::Config("no config directory available".to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("cannot create {}: {e}", parent.display())))?;
        }
        let raw = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("cannot serialize config: {e}")))?;
        std::fs::write(&path, raw)
            .map_err(|e| Error::Config(format!("cannot write {}: {e}", path.display())))
    }

    /// Platform config file location (`config.toml` under the `gl` app dir).
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", crate::APP_NAME).map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Overrides settings from the `GITLAB_API_*` environment variables.
    pub fn apply_env(&mut self) {
        if let Ok(endpoint) = std::env::var(ENV_ENDPOINT) {
            if !endpoint.is_empty() {
                self.endpoint = Some(endpoint);
            }
        }
        if let Ok(token) = std::env::var(ENV_PRIVATE_TOKEN) {
            if !token.is_empty() {
                self.private_token = Some(token);
            }
        }
        if let Ok(proxy) = std::env::var(ENV_HTTP_PROXY) {
            if !proxy.is_empty() {
                self.proxy = Some(proxy);
            }
        }
    }

    /// Builder-style endpoint setter.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Builder-style token setter.
    pub fn with_private_token(mut self, token: impl Into<String>) -> Self {
        self.private_token = Some(token.into());
        self
    }

    /// Builder-style sudo setter.
    pub fn with_sudo(mut self, user: impl Into<String>) -> Self {
        self.sudo = Some(user.into());
        self
    }

    /// Builder-style user-agent setter.
    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// The effective `User-Agent` value.
    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.endpoint.is_none());
        assert!(config.private_token.is_none());
        assert_eq!(config.timeout, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.user_agent(), DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "endpoint = \"https://gitlab.example.com/api/v4\"\n\
             private_token = \"secret\"\n\
             sudo = \"other-user\"\n\
             timeout = 10"
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(
            config.endpoint.as_deref(),
            Some("https://gitlab.example.com/api/v4")
        );
        assert_eq!(config.private_token.as_deref(), Some("secret"));
        assert_eq!(config.sudo.as_deref(), Some("other-user"));
        assert_eq!(config.timeout, 10);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "endpoint = \"https://api.example.com\"").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.timeout, DEFAULT_TIMEOUT_SECS);
        assert!(config.private_token.is_none());
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "endpoint = [not toml").unwrap();
        assert!(matches!(
            Config::load_from(file.path()),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_builder_setters() {
        let config = Config::default()
            .with_endpoint("https://api.example.com")
            .with_private_token("secret")
            .with_sudo("admin")
            .with_user_agent("custom/1.0");
        assert_eq!(config.endpoint.as_deref(), Some("https://api.example.com"));
        assert_eq!(config.user_agent(), "custom/1.0");
    }
}
