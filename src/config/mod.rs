//! Configuration management for the listener, data files and cart behaviour

/// Environment variable overrides (`.env` aware)
pub mod environment;

/// Settings loading from config.toml
pub mod settings;

pub use settings::Settings;

use crate::errors::Result;

/// Loads the effective settings: the TOML file named by `STOREFRONT_CONFIG`
/// (defaults if absent) with environment overrides applied on top.
///
/// # Errors
/// Returns an error if the config file is malformed or an override is invalid.
pub fn load_app_configuration() -> Result<Settings> {
    let path = environment::config_path();
    let settings = settings::load_config_or_default(&path)?;
    let settings = environment::apply_env_overrides(settings)?;
    tracing::info!(config = %path.display(), "Configuration loaded");
    Ok(settings)
}
