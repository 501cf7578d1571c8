use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid bind address {0}")]
    InvalidAddress(String),
    #[error("could not bind fallback address {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("could not read bound address: {0}")]
    LocalAddr(#[source] std::io::Error),
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Process settings, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl AppConfig {
    /// Reads `HOST`, `PORT` and `STATIC_DIR`. Call `dotenvy::dotenv()` first
    /// if a `.env` file should be honoured.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            // An unparseable port falls back to the default.
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        }
    }

    pub fn addr(&self) -> Result<SocketAddr, StartupError> {
        self.addr_with_port(self.port)
    }

    /// The single retry address used when the primary port is taken.
    pub fn fallback_addr(&self) -> Result<SocketAddr, StartupError> {
        self.addr_with_port(self.port.saturating_add(1))
    }

    fn addr_with_port(&self, port: u16) -> Result<SocketAddr, StartupError> {
        let raw = format!("{}:{}", self.host, port);
        raw.parse()
            .map_err(|_| StartupError::InvalidAddress(raw.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(from_pairs(&[]), AppConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let cfg = from_pairs(&[("HOST", "0.0.0.0"), ("PORT", "9090"), ("STATIC_DIR", "/srv/web")]);
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 9090);
        assert_eq!(cfg.static_dir, PathBuf::from("/srv/web"));
        assert_eq!(cfg.addr().unwrap().to_string(), "0.0.0.0:9090");
        assert_eq!(cfg.fallback_addr().unwrap().port(), 9091);
    }

    #[test]
    fn bad_port_falls_back_to_default() {
        assert_eq!(from_pairs(&[("PORT", "eighty")]).port, DEFAULT_PORT);
    }

    #[test]
    fn local_addr_failure_is_not_reported_as_serve_error() {
        let err = StartupError::LocalAddr(std::io::Error::new(
            std::io::ErrorKind::NotConnected,
            "gone",
        ));
        assert_eq!(err.to_string(), "could not read bound address: gone");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn bad_host_is_an_error() {
        let cfg = from_pairs(&[("HOST", "not a host")]);
        assert!(matches!(cfg.addr(), Err(StartupError::InvalidAddress(_))));
    }
}
