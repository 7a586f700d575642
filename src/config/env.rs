//! Process configuration from environment variables (`.env` is loaded by the binary first).

use crate::error::ConfigError;
use std::net::SocketAddr;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;
pub const DEFAULT_LOG_FILTER: &str = "numerical_method_api=info,tower_http=info";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    pub body_limit: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source. `DATABASE_URL` and `SERVER_PORT` are required.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &'static str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let require = |name: &'static str| get(name).ok_or(ConfigError::MissingVar(name));

        let database_url = require("DATABASE_URL")?;
        let port = parse_var("SERVER_PORT", &require("SERVER_PORT")?)?;
        let host = get("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.into());
        let max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(v) => parse_var("DATABASE_MAX_CONNECTIONS", &v)?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        let body_limit = match get("BODY_LIMIT_BYTES") {
            Some(v) => parse_var("BODY_LIMIT_BYTES", &v)?,
            None => DEFAULT_BODY_LIMIT,
        };

        Ok(AppConfig {
            database_url,
            host,
            port,
            max_connections,
            body_limit,
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::InvalidVar {
            name: "SERVER_HOST",
            value: self.host.clone(),
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidVar {
        name,
        value: value.to_string(),
    })
}
