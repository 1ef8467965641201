//! Process configuration

mod app_config;

pub use app_config::{
    AppConfig, ConfigOverrides, LogFormat, LoggingConfig, ServerConfig, TokenSettings,
};
