//! Host configuration.
//!
//! DESIGN
//! ======
//! Read once at startup from environment variables (after loading `.env` if
//! present). Paths default to the repository layout so `cargo run` from the
//! repo root serves the shell and a `wasm-pack build theme` output as-is.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_PKG_DIR: &str = "theme/pkg";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Page shell, stylesheets and images.
    pub static_dir: PathBuf,
    /// `wasm-bindgen` output for the theme crate.
    pub pkg_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            pkg_dir: PathBuf::from(DEFAULT_PKG_DIR),
        }
    }
}

impl Config {
    /// Build from `PORT`, `STATIC_DIR` and `PKG_DIR`.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`Config::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => defaults.port,
        };
        Ok(Self {
            port,
            static_dir: lookup("STATIC_DIR").map_or(defaults.static_dir, PathBuf::from),
            pkg_dir: lookup("PKG_DIR").map_or(defaults.pkg_dir, PathBuf::from),
        })
    }

    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
