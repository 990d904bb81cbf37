//! Environment variable overrides for the loaded settings.
//!
//! Values usually come from the process environment or the `.env` file read by
//! `dotenvy` at startup:
//!
//! * `STOREFRONT_CONFIG` - path of the TOML file (default `config.toml`)
//! * `STOREFRONT_ADDR` - listener address
//! * `PRODUCTS_FILE`, `CARTS_FILE` - data file locations
//! * `VALIDATE_CART_PRODUCTS` - `true`/`false`

use super::settings::Settings;
use crate::errors::{Error, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Gets the config file path from `STOREFRONT_CONFIG`, defaulting to `config.toml`.
#[must_use]
pub fn config_path() -> PathBuf {
    std::env::var("STOREFRONT_CONFIG").map_or_else(|_| PathBuf::from("config.toml"), PathBuf::from)
}

/// Applies environment overrides to `settings` using the process environment.
///
/// # Errors
/// Returns an error if an override is present but cannot be parsed.
pub fn apply_env_overrides(settings: Settings) -> Result<Settings> {
    apply_overrides(settings, |key| std::env::var(key).ok())
}

/// Applies overrides looked up through `lookup`.
///
/// # Errors
/// Returns an error if an override is present but cannot be parsed.
pub fn apply_overrides<F>(mut settings: Settings, lookup: F) -> Result<Settings>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(addr) = lookup("STOREFRONT_ADDR") {
        settings.server.addr = addr.parse::<SocketAddr>().map_err(|e| Error::Config {
            message: format!("Invalid STOREFRONT_ADDR '{addr}': {e}"),
        })?;
    }
    if let Some(path) = lookup("PRODUCTS_FILE") {
        settings.storage.products_file = PathBuf::from(path);
    }
    if let Some(path) = lookup("CARTS_FILE") {
        settings.storage.carts_file = PathBuf::from(path);
    }
    if let Some(flag) = lookup("VALIDATE_CART_PRODUCTS") {
        settings.carts.validate_products = flag.parse::<bool>().map_err(|e| Error::Config {
            message: format!("Invalid VALIDATE_CART_PRODUCTS '{flag}': {e}"),
        })?;
    }
    Ok(settings)
}
