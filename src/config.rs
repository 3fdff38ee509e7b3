use anyhow::Context;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::warn;

use crate::database::CapacityPolicy;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub capacity: CapacityPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            capacity: CapacityPolicy::Enforce,
        }
    }
}

impl AppConfig {
    /// Reads `HOST`, `PORT`, `STATIC_DIR` and `ROSTER_ENFORCE_CAPACITY`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, with values taken from `lookup`. Unset or
    /// unparsable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("Ignoring invalid PORT {:?}, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => defaults.port,
        };

        let static_dir = lookup("STATIC_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        let capacity = match lookup("ROSTER_ENFORCE_CAPACITY") {
            Some(raw) => match parse_flag(&raw) {
                Some(true) => CapacityPolicy::Enforce,
                Some(false) => CapacityPolicy::Unbounded,
                None => {
                    warn!(
                        "Ignoring invalid ROSTER_ENFORCE_CAPACITY {:?}, capacity stays enforced",
                        raw
                    );
                    defaults.capacity
                }
            },
            None => defaults.capacity,
        };

        Self {
            host,
            port,
            static_dir,
            capacity,
        }
    }

    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        socket_addr(&self.host, self.port)
    }

    /// The next port up, tried when `bind_addr` is taken.
    pub fn fallback_bind_addr(&self) -> anyhow::Result<SocketAddr> {
        let port = self
            .port
            .checked_add(1)
            .context("no fallback port above 65535")?;
        socket_addr(&self.host, port)
    }
}

fn socket_addr(host: &str, port: u16) -> anyhow::Result<SocketAddr> {
    format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("cannot parse bind address {}:{}", host, port))
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
