//! Infrastructure implementation of the `ConfigStore` port.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::application::ports::ConfigStore;
use crate::domain::config::AdmitConfig;

/// Environment variable that overrides the configuration file location.
pub const CONFIG_ENV: &str = "ADMIT_CONFIG";

/// Production implementation of `ConfigStore` that uses a YAML file on disk.
///
/// Location precedence: explicit override (`--config`), then `ADMIT_CONFIG`,
/// then `~/.admit/config.yaml`.
#[derive(Debug, Default, Clone)]
pub struct YamlConfigStore {
    path_override: Option<PathBuf>,
}

impl YamlConfigStore {
    #[must_use]
    pub fn new(path_override: Option<PathBuf>) -> Self {
        Self { path_override }
    }
}

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<AdmitConfig> {
        let path = self.path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(AdmitConfig::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let config: AdmitConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("cannot parse {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("invalid settings in {}", path.display()))?;
        Ok(config)
    }

    fn save(&self, config: &AdmitConfig) -> Result<()> {
        let path = self.path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("cannot create {}", parent.display()))?;
        }
        let content = serde_yaml::to_string(config).context("cannot serialize config")?;
        std::fs::write(&path, content)
            .with_context(|| format!("cannot write {}", path.display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600))
                .with_context(|| format!("cannot set permissions on {}", path.display()))?;
        }
        Ok(())
    }

    fn path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.path_override {
            return Ok(path.clone());
        }
        if let Ok(val) = std::env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(val));
        }
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
        Ok(home.join(".admit").join("config.yaml"))
    }
}
