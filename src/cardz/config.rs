use crate::error::{CardzError, Result};
use crate::model::{DEFAULT_FORM_CATEGORY, DEFAULT_PLACEHOLDER_BASE, FORM_CATEGORIES};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PREVIEW_LINES: usize = 2;

/// Configuration for cardz, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CardzConfig {
    /// Dataset to seed the catalog with instead of the bundled one
    pub seed_path: Option<PathBuf>,

    /// Prefix of generated image URIs; the encoded title is appended
    pub placeholder_base: String,

    /// Category preselected in the creation form
    pub default_category: String,

    /// Description lines shown under each card in the list
    pub preview_lines: usize,
}

impl Default for CardzConfig {
    fn default() -> Self {
        Self {
            seed_path: None,
            placeholder_base: DEFAULT_PLACEHOLDER_BASE.to_string(),
            default_category: DEFAULT_FORM_CATEGORY.to_string(),
            preview_lines: DEFAULT_PREVIEW_LINES,
        }
    }
}

impl CardzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: CardzConfig = serde_json::from_str(&content).map_err(|e| {
            CardzError::Config(format!("{}: {}", config_path.display(), e))
        })?;
        Ok(config.normalized())
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Replaces values the app cannot use with their defaults.
    pub fn normalized(mut self) -> Self {
        if !FORM_CATEGORIES.contains(&self.default_category.as_str()) {
            warn!(
                category = %self.default_category,
                "default_category is not a form category, using {}",
                DEFAULT_FORM_CATEGORY
            );
            self.default_category = DEFAULT_FORM_CATEGORY.to_string();
        }
        if self.placeholder_base.trim().is_empty() {
            self.placeholder_base = DEFAULT_PLACEHOLDER_BASE.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CardzConfig::default();
        assert_eq!(config.placeholder_base, DEFAULT_PLACEHOLDER_BASE);
        assert_eq!(config.default_category, "Framework");
        assert_eq!(config.preview_lines, 2);
        assert!(config.seed_path.is_none());
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = CardzConfig::load(dir.path()).unwrap();
        assert_eq!(config, CardzConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let config = CardzConfig {
            seed_path: Some(PathBuf::from("/tmp/cards.json")),
            default_category: "Outil".into(),
            ..CardzConfig::default()
        };
        config.save(dir.path()).unwrap();

        let loaded = CardzConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"preview_lines": 0}"#).unwrap();

        let loaded = CardzConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.preview_lines, 0);
        assert_eq!(loaded.placeholder_base, DEFAULT_PLACEHOLDER_BASE);
    }

    #[test]
    fn test_invalid_default_category_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"default_category": "Mainframe", "placeholder_base": " "}"#,
        )
        .unwrap();

        let loaded = CardzConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.default_category, DEFAULT_FORM_CATEGORY);
        assert_eq!(loaded.placeholder_base, DEFAULT_PLACEHOLDER_BASE);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ nope").unwrap();
        let err = CardzConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, CardzError::Config(_)));
    }
}
