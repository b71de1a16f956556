use super::types::{MindbridgeConfig, RawMindbridgeConfig, RawServerSection, ServerSection};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Environment variable that relocates the project config directory
pub const PROJECT_CONFIG_DIR_ENV: &str = "MINDBRIDGE_PROJECT_CONFIG_DIR";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load merged configuration (user + project)
    pub fn load() -> Result<MindbridgeConfig> {
        Self::load_from_paths(&Self::user_config_path(), &Self::project_config_path())
    }

    /// Load and merge the two layers from explicit paths. Missing files are skipped.
    pub fn load_from_paths(user: &Path, project: &Path) -> Result<MindbridgeConfig> {
        let mut raw = RawMindbridgeConfig::default();

        // Layer 1: User config
        if let Some(user_config) = Self::read_layer(user)? {
            raw = Self::merge_raw(raw, user_config);
        }

        // Layer 2: Project config
        if let Some(project_config) = Self::read_layer(project)? {
            raw = Self::merge_raw(raw, project_config);
        }

        Ok(Self::finalize(raw))
    }

    /// Get user config path
    pub fn user_config_path() -> PathBuf {
        mindbridge_paths::user_config_file()
    }

    /// Get project config path
    /// Can be overridden with MINDBRIDGE_PROJECT_CONFIG_DIR
    pub fn project_config_path() -> PathBuf {
        if let Ok(dir) = std::env::var(PROJECT_CONFIG_DIR_ENV) {
            PathBuf::from(dir).join("config.toml")
        } else {
            PathBuf::from(".mindbridge/config.toml")
        }
    }

    fn read_layer(path: &Path) -> Result<Option<RawMindbridgeConfig>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let layer = toml::from_str(&contents)
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        tracing::debug!("Loaded config layer from {}", path.display());
        Ok(Some(layer))
    }

    /// Merge two raw configs (overlay values override base only if explicitly set)
    fn merge_raw(base: RawMindbridgeConfig, overlay: RawMindbridgeConfig) -> RawMindbridgeConfig {
        RawMindbridgeConfig {
            server: RawServerSection {
                host: overlay.server.host.or(base.server.host),
                port: overlay.server.port.or(base.server.port),
                cors_origins: overlay.server.cors_origins.or(base.server.cors_origins),
            },
        }
    }

    /// Convert raw config to final config with defaults applied
    fn finalize(raw: RawMindbridgeConfig) -> MindbridgeConfig {
        let defaults = ServerSection::default();
        MindbridgeConfig {
            server: ServerSection {
                host: raw.server.host.unwrap_or(defaults.host),
                port: raw.server.port.unwrap_or(defaults.port),
                cors_origins: raw.server.cors_origins.unwrap_or(defaults.cors_origins),
            },
        }
    }
}
