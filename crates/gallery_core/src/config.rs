//! Engine configuration

use crate::AppError;
use directories::ProjectDirs;
use gallery_fs::{SortBy, SortOrder, ViewOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Engine configuration
///
/// Never read implicitly: the host decides where it comes from and hands
/// the result to [`Engine::new`](crate::Engine::new).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub thumbnails: ThumbnailConfig,
    pub view: ViewConfig,
    pub slideshow: SlideshowConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbnailConfig {
    pub max_width: u32,
    pub max_height: u32,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            max_width: 120,
            max_height: 120,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl ViewConfig {
    /// Initial view options for a freshly listed directory
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions::default().sorted(self.sort_by, self.sort_order)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideshowConfig {
    pub interval_ms: u64,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self { interval_ms: 1000 }
    }
}

impl SlideshowConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl EngineConfig {
    /// Parse TOML text; missing keys fall back to defaults
    pub fn from_toml_str(content: &str) -> Result<Self, AppError> {
        let config: Self = toml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `path`, or defaults when the file does not exist
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config = Self::from_toml_str(&content)?;
            tracing::info!("Configuration loaded from {:?}", path);
            Ok(config)
        } else {
            tracing::info!("Using default configuration");
            Ok(Self::default())
        }
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        tracing::info!("Configuration saved to {:?}", path);
        Ok(())
    }

    /// Conventional per-user location of the configuration file
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("com", "ImageGallery", "ImageGallery")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("./config.toml"))
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.thumbnails.max_width == 0 || self.thumbnails.max_height == 0 {
            return Err(AppError::Config(
                "thumbnail bounds must be at least 1x1".to_string(),
            ));
        }
        if self.slideshow.interval_ms == 0 {
            return Err(AppError::Config(
                "slideshow interval must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.thumbnails.max_width, 120);
        assert_eq!(config.thumbnails.max_height, 120);
        assert_eq!(config.view.sort_by, SortBy::Name);
        assert_eq!(config.view.sort_order, SortOrder::Ascending);
        assert_eq!(config.slideshow.interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = EngineConfig::from_toml_str(
            r#"
            [view]
            sort_by = "size"
            sort_order = "desc"
            "#,
        )
        .unwrap();

        assert_eq!(config.view.sort_by, SortBy::Size);
        assert_eq!(config.view.sort_order, SortOrder::Descending);
        assert_eq!(config.thumbnails, ThumbnailConfig::default());
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        let err = EngineConfig::from_toml_str("[thumbnails]\nmax_width = 0\n").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        let err = EngineConfig::from_toml_str("[slideshow]\ninterval_ms = \"fast\"\n").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_save_and_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("config.toml");

        let mut config = EngineConfig::default();
        config.slideshow.interval_ms = 2500;
        config.thumbnails.max_width = 200;
        config.save_to(&path).unwrap();

        assert_eq!(EngineConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = EngineConfig::load_from(&tmp.path().join("absent.toml")).unwrap();
        assert_eq!(config, EngineConfig::default());
    }
}
