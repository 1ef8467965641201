//! CLI module for the token server
//!
//! Every flag falls back to the environment variable of the same name in
//! upper case (`IP`, `PORT`, `KEY`, `EXP`) and then to the loaded
//! configuration. An empty variable counts as unset.

pub mod serve;

use std::str::FromStr;

use anyhow::Context;
use clap::{Args, Parser};

use crate::config::ConfigOverrides;

/// Token Server - issue and validate signed bearer tokens
#[derive(Parser)]
#[command(name = "token-server")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub serve: ServeArgs,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ServeArgs {
    /// Server IP address to bind to [env: IP]
    #[arg(long)]
    pub ip: Option<String>,

    /// Server port [env: PORT]
    #[arg(long)]
    pub port: Option<u16>,

    /// Token signing key [env: KEY]
    #[arg(long)]
    pub key: Option<String>,

    /// Expiration in minutes [env: EXP]
    #[arg(long)]
    pub exp: Option<u32>,
}

impl ServeArgs {
    /// Flags, falling back to the process environment
    pub fn overrides(&self) -> anyhow::Result<ConfigOverrides> {
        self.overrides_with(|name| std::env::var(name).ok())
    }

    /// Flags, falling back to `lookup` for the bare variable names
    pub fn overrides_with<F>(&self, lookup: F) -> anyhow::Result<ConfigOverrides>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let port = match self.port {
            Some(port) => Some(port),
            None => parse_env(env("PORT"), "PORT", "Port must be an integer")?,
        };
        let exp = match self.exp {
            Some(exp) => Some(exp),
            None => parse_env(
                env("EXP"),
                "EXP",
                "Expiration must be minutes in integer form",
            )?,
        };

        Ok(ConfigOverrides {
            ip: self.ip.clone().or_else(|| env("IP")),
            port,
            key: self.key.clone().or_else(|| env("KEY")),
            exp,
        })
    }
}

fn parse_env<T>(value: Option<String>, name: &str, message: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .map(|raw| {
            raw.parse::<T>()
                .with_context(|| format!("{message}: {name}={raw:?}"))
        })
        .transpose()
}
