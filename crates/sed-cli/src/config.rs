//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use sed_core::Thresholds;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the entries file.
    pub entries_path: PathBuf,

    /// Day limits for the compliance rules.
    #[serde(default)]
    pub thresholds: Thresholds,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs_data_path().unwrap_or_else(|| PathBuf::from("."));
        Self {
            entries_path: data_dir.join("entries.json"),
            thresholds: Thresholds::default(),
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (SED_*, nested keys split on "__")
        figment = figment.merge(Env::prefixed("SED_").split("__"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("sed-tracker"))
}

/// Returns the platform-specific data directory.
///
/// On Linux: `~/.local/share/sed-tracker`
pub fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("sed-tracker"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirs_data_path_ends_with_app_name() {
        let path = dirs_data_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "sed-tracker");
    }

    #[test]
    fn test_default_config_uses_data_dir_for_entries() {
        let config = Config::default();
        let data_dir = dirs_data_path().unwrap();
        assert_eq!(config.entries_path, data_dir.join("entries.json"));
        assert_eq!(config.thresholds, Thresholds::default());
    }

    #[test]
    fn test_config_file_overrides_thresholds() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            "entries_path = \"/srv/sed/entries.json\"\n\n[thresholds]\nhome_visit_warning_days = 60\n",
        )
        .unwrap();

        let config = Config::load_from(Some(&path)).unwrap();
        assert_eq!(config.entries_path, PathBuf::from("/srv/sed/entries.json"));
        assert_eq!(config.thresholds.home_visit_warning_days, 60);
        assert_eq!(config.thresholds.home_visit_limit_days, 183);
    }
}
