use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory of content files the preview tool browses.
    pub content_path: PathBuf,
    /// Segmenter tuning, mapped onto the engine's options by the caller.
    #[serde(default)]
    pub segmenter: SegmenterConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SegmenterConfig {
    #[serde(default = "default_max_title_words")]
    pub max_title_words: usize,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            max_title_words: default_max_title_words(),
        }
    }
}

fn default_max_title_words() -> usize {
    8
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded content path
        config.content_path = Self::expand_path(&config.content_path).unwrap_or(config.content_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/content-blocks");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/content-blocks/config.toml"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            content_path: PathBuf::from("/tmp/test-content"),
            segmenter: SegmenterConfig { max_title_words: 5 },
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original.content_path, deserialized.content_path);
        assert_eq!(deserialized.segmenter.max_title_words, 5);
    }

    #[test]
    fn test_segmenter_section_is_optional() {
        let config: Config = toml::from_str(r#"content_path = "/tmp/content""#).unwrap();
        assert_eq!(config.segmenter.max_title_words, 8);

        let config: Config = toml::from_str(
            r#"
content_path = "/tmp/content"

[segmenter]
max_title_words = 3
"#,
        )
        .unwrap();
        assert_eq!(config.segmenter.max_title_words, 3);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = Config::expand_path(Path::new("~/test/path")).unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("CONTENT_TEST_VAR", "/test/env/path");
        }

        let expanded = Config::expand_path(Path::new("$CONTENT_TEST_VAR/subdir")).unwrap();
        assert_eq!(expanded, PathBuf::from("/test/env/path/subdir"));

        unsafe {
            env::remove_var("CONTENT_TEST_VAR");
        }
    }

    #[test]
    fn test_expand_path_leaves_plain_paths_alone() {
        assert_eq!(
            Config::expand_path(Path::new("/absolute/path")).unwrap(),
            PathBuf::from("/absolute/path")
        );
        assert_eq!(
            Config::expand_path(Path::new("relative/path")).unwrap(),
            PathBuf::from("relative/path")
        );
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&missing).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_config_rejects_bad_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "content_path = [not toml").unwrap();

        let result = Config::load_from_path(&config_file);
        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        let test_config = Config {
            content_path: PathBuf::from("/tmp/test-content"),
            segmenter: SegmenterConfig::default(),
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded.content_path, test_config.content_path);
        assert_eq!(loaded.segmenter.max_title_words, 8);
    }

    #[test]
    fn test_config_with_tilde_in_toml() {
        let config: Config = toml::from_str(r#"content_path = "~/test/content""#).unwrap();
        let expanded = Config::expand_path(&config.content_path).unwrap_or(config.content_path);

        let expanded_str = expanded.to_string_lossy();
        assert!(!expanded_str.starts_with('~'));
        assert!(expanded_str.contains("test/content"));
    }
}
