use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Cut-offs used by the categorizer and the run report.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub min_confidence: f64,
    pub min_score: f64,
    pub margin_ratio: f64,
    pub margin_boost: f64,
    /// Reporting only.
    pub low_confidence: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_confidence: 30.0,
            min_score: 2.0,
            margin_ratio: 0.5,
            margin_boost: 1.2,
            low_confidence: 50.0,
        }
    }
}

impl Thresholds {
    /// Rejects values that would push confidence outside [0, 100].
    pub fn validate(&self) -> Result<(), ConfigError> {
        check("min_confidence", self.min_confidence, 0.0, 100.0)?;
        check("min_score", self.min_score, 0.0, f64::MAX)?;
        check("margin_ratio", self.margin_ratio, 0.0, 1.0)?;
        check("margin_boost", self.margin_boost, 1.0, f64::MAX)?;
        check("low_confidence", self.low_confidence, 0.0, 100.0)
    }
}

fn check(name: &'static str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidThreshold { name, value })
    }
}

/// Explicit column names; anything left out is auto-detected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ColumnOverrides {
    pub hint: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub catalog_path: Option<PathBuf>,
    pub target_column: String,
    pub columns: ColumnOverrides,
    pub overwrite: bool,
    pub backup_dir: Option<PathBuf>,
    pub max_backups: usize,
    pub checkpoint_every: usize,
    pub thresholds: Thresholds,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            target_column: "Category".to_string(),
            columns: ColumnOverrides::default(),
            overwrite: false,
            backup_dir: None,
            max_backups: 5,
            checkpoint_every: 5000,
            thresholds: Thresholds::default(),
        }
    }
}

impl AppConfig {
    /// Catalog path from the config, or `cli_path` when given.
    pub fn resolve_catalog(&self, cli_path: Option<&str>) -> Result<PathBuf, ConfigError> {
        cli_path
            .map(PathBuf::from)
            .or_else(|| self.catalog_path.clone())
            .ok_or(ConfigError::MissingCatalogPath)
    }

    /// Backup folder; defaults to `Backups` next to the catalog.
    pub fn resolve_backup_dir(&self, catalog: &Path) -> PathBuf {
        self.backup_dir.clone().unwrap_or_else(|| {
            catalog
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join("Backups")
        })
    }
}

pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    config.thresholds.validate()?;
    Ok(config)
}

/// Like [`load_config`], but a missing file yields the defaults.
pub fn load_config_or_default(path: &str) -> Result<AppConfig, ConfigError> {
    if !Path::new(path).exists() {
        return Ok(AppConfig::default());
    }
    load_config(path)
}
