// src/config.rs
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::store::products::DEFAULT_KEY;

const DEFAULT_STORE_PATH: &str = "data/storage.json";
/// How many ports past `PORT` the server tries before giving up.
pub const PORT_FALLBACKS: u16 = 20;

/// Runtime settings, read from the environment (and `.env` via dotenvy).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// `None` keeps the inventory in memory only.
    pub store_path: Option<PathBuf>,
    pub store_key: String,
    pub currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            store_path: Some(PathBuf::from(DEFAULT_STORE_PATH)),
            store_key: DEFAULT_KEY.to_string(),
            currency: "R$".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source. Unparseable values fall
    /// back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = lookup("HOST").and_then(|h| h.parse().ok()).unwrap_or(defaults.host);
        let port = lookup("PORT").and_then(|p| p.parse::<u16>().ok()).unwrap_or(defaults.port);
        let store_path = match lookup("STORE_PATH") {
            Some(path) if path.trim().is_empty() => None,
            Some(path) => Some(PathBuf::from(path)),
            None => defaults.store_path,
        };
        let store_key = lookup("STORE_KEY")
            .filter(|k| !k.is_empty())
            .unwrap_or(defaults.store_key);
        let currency = lookup("CURRENCY_SYMBOL").unwrap_or(defaults.currency);

        Self { host, port, store_path, store_key, currency }
    }

    /// Addresses to try binding, in order: `PORT` and the next
    /// `PORT_FALLBACKS` ports, stopping at the top of the port range.
    pub fn listen_addrs(&self) -> Vec<SocketAddr> {
        let last = self.port.saturating_add(PORT_FALLBACKS);
        (self.port..=last).map(|port| SocketAddr::from((self.host, port))).collect()
    }
}
