//! Application settings loading from config.toml
//!
//! Every section and key is optional; anything left out falls back to the
//! defaults below. Environment overrides are applied afterwards by
//! [`super::environment::apply_env_overrides`].

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::io::ErrorKind;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// `[server]` section
    pub server: ServerConfig,
    /// `[storage]` section
    pub storage: StorageConfig,
    /// `[carts]` section
    pub carts: CartConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to bind (default `127.0.0.1:8080`)
    pub addr: SocketAddr,
}

/// Locations of the JSON data files
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StorageConfig {
    /// Products JSON file (default `data/products.json`)
    pub products_file: PathBuf,
    /// Carts JSON file (default `data/carts.json`)
    pub carts_file: PathBuf,
}

/// Cart behaviour switches
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CartConfig {
    /// Reject adding unknown product ids to a cart
    pub validate_products: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            products_file: PathBuf::from("data/products.json"),
            carts_file: PathBuf::from("data/carts.json"),
        }
    }
}

/// Loads settings from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid or a value has the wrong type
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path.as_ref().display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path.as_ref().display()),
    })
}

/// Loads settings from `path`, or the defaults if the file does not exist.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> Result<Settings> {
    match std::fs::metadata(path.as_ref()) {
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("No config file at {:?}, using defaults", path.as_ref());
            Ok(Settings::default())
        }
        _ => load_config(path),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::TestDir;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            [server]
            addr = "0.0.0.0:3000"

            [storage]
            products_file = "/var/lib/shop/products.json"
            carts_file = "/var/lib/shop/carts.json"

            [carts]
            validate_products = true
        "#;

        let settings: Settings = toml::from_str(toml_str).unwrap();
        assert_eq!(settings.server.addr.port(), 3000);
        assert_eq!(
            settings.storage.products_file,
            PathBuf::from("/var/lib/shop/products.json")
        );
        assert!(settings.carts.validate_products);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let settings: Settings = toml::from_str("[carts]\nvalidate_products = true\n").unwrap();

        assert_eq!(settings.server, ServerConfig::default());
        assert_eq!(settings.storage, StorageConfig::default());
        assert!(settings.carts.validate_products);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TestDir::new();
        let settings = load_config_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = TestDir::new();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\naddr = 12").unwrap();

        let err = load_config_or_default(&path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
