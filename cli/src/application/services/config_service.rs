//! Application service — configuration use-cases.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::config::{AdmitConfig, apply_config_value};

/// Load configuration.
///
/// # Errors
///
/// Returns an error if the store cannot load the configuration.
pub fn load_config(store: &impl ConfigStore) -> Result<AdmitConfig> {
    store.load()
}

/// Save configuration.
///
/// # Errors
///
/// Returns an error if the store cannot persist the configuration.
pub fn save_config(store: &impl ConfigStore, config: &AdmitConfig) -> Result<()> {
    store.save(config)
}

/// Validate and persist a single setting, returning the updated configuration.
///
/// Nothing is written when the key or value is rejected.
///
/// # Errors
///
/// Returns an error if the key or value is invalid, or the store fails.
pub fn set_value(store: &impl ConfigStore, key: &str, value: &str) -> Result<AdmitConfig> {
    let mut config = load_config(store)?;
    apply_config_value(&mut config, key, value)?;
    save_config(store, &config)?;
    tracing::info!(key, value, "configuration updated");
    Ok(config)
}
