use std::fmt;

use serde::Deserialize;

use crate::domain::TokenConfig;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub token: TokenSettings,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound on the time spent handling one request
    pub request_timeout_secs: u64,
}

/// Signing key and token lifetime
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct TokenSettings {
    pub key: String,
    pub expiration_minutes: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

/// Output layout of the log subscriber
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Single line per event with timestamp, level, call site and fields
    #[default]
    #[serde(alias = "pretty")]
    Console,
    Json,
}

/// Values supplied on the command line or through the bare `IP`, `PORT`,
/// `KEY` and `EXP` environment variables. Set fields win over everything
/// loaded by [`AppConfig::load`].
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub ip: Option<String>,
    pub port: Option<u16>,
    pub key: Option<String>,
    pub exp: Option<u32>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            request_timeout_secs: 10,
        }
    }
}

impl Default for TokenSettings {
    fn default() -> Self {
        let defaults = TokenConfig::default();

        Self {
            key: String::from_utf8_lossy(defaults.signing_key()).into_owned(),
            expiration_minutes: defaults.expiration_minutes(),
        }
    }
}

impl fmt::Debug for TokenSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSettings")
            .field("key", &"[hidden]")
            .field("expiration_minutes", &self.expiration_minutes)
            .finish()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Load from `config/default`, `config/local` and `APP__*` environment
    /// variables, in increasing order of precedence.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(ip) = &overrides.ip {
            self.server.host = ip.clone();
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(key) = &overrides.key {
            self.token.key = key.clone();
        }
        if let Some(exp) = overrides.exp {
            self.token.expiration_minutes = exp;
        }
        self
    }

    /// The immutable signing configuration handed to the token core
    pub fn token_config(&self) -> TokenConfig {
        TokenConfig::new(self.token.key.as_bytes(), self.token.expiration_minutes)
    }
}
