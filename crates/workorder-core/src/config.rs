use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Work order file used when none is given on the command line.
    #[serde(default)]
    pub default_file: Option<String>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/workorder/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("workorder/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("workorder\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Reads a config file, falling back to defaults when it is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            if let Ok(content) = std::fs::read_to_string(path) {
                if let Ok(config) = toml::from_str(&content) {
                    return config;
                }
            }
        }
        Self::default()
    }

    /// Explicit path wins over the configured default.
    pub fn resolve_file(&self, explicit: Option<String>) -> Option<String> {
        explicit.or_else(|| self.default_file.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_from_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("nope.toml"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_reads_default_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "default_file = \"orders.csv\"\n").unwrap();

        let config = AppConfig::load_from(&path);
        assert_eq!(config.default_file.as_deref(), Some("orders.csv"));
    }

    #[test]
    fn test_invalid_toml_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "default_file = [").unwrap();

        assert_eq!(AppConfig::load_from(&path), AppConfig::default());
    }

    #[test]
    fn test_resolve_file_prefers_explicit() {
        let config = AppConfig {
            default_file: Some("fallback.csv".to_string()),
        };
        assert_eq!(
            config.resolve_file(Some("given.csv".to_string())).as_deref(),
            Some("given.csv")
        );
        assert_eq!(config.resolve_file(None).as_deref(), Some("fallback.csv"));
        assert_eq!(AppConfig::default().resolve_file(None), None);
    }
}
