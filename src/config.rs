//! Configuration management for the generator.
//!
//! This module handles loading, validating, and saving the generation
//! configuration. TOML is the primary on-disk format; YAML and JSON
//! files are accepted as well, dispatched on the file extension.
//!
//! `Config::validate` is the single gate for the invariants the pure
//! generation layer assumes. The scale generator, namer, and assembler
//! never re-check them; every CLI path validates before generating.

use crate::models::{
    Category, CategoryScaleConfig, LineHeightPreset, ResponsiveConfig, ScaleConfig, ScaleMethod,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name searched for in the working directory when no explicit
/// config path is given.
pub const DEFAULT_CONFIG_FILE: &str = "typescale.toml";

/// One `CategoryScaleConfig` per fixed category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Categories {
    /// Display (hero) text configuration
    pub display: CategoryScaleConfig,
    /// Title (heading) text configuration
    pub title: CategoryScaleConfig,
    /// Body text configuration
    pub body: CategoryScaleConfig,
    /// Code text configuration
    pub code: CategoryScaleConfig,
}

impl Categories {
    /// The configuration for one category.
    #[must_use]
    pub fn get(&self, category: Category) -> &CategoryScaleConfig {
        match category {
            Category::Display => &self.display,
            Category::Title => &self.title,
            Category::Body => &self.body,
            Category::Code => &self.code,
        }
    }
}

/// Complete generation configuration.
///
/// # File Location
///
/// Resolution order when no `--config` path is given:
/// 1. `./typescale.toml`
/// 2. `<platform config dir>/typescale/typescale.toml`
///    (e.g. `~/.config/typescale/typescale.toml` on Linux)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Per-category scale settings
    #[serde(default)]
    pub categories: Categories,
    /// Responsive (mobile breakpoint) settings
    #[serde(default)]
    pub responsive: ResponsiveConfig,
}

impl Config {
    /// Gets the platform-specific user config file path.
    pub fn user_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("typescale");
        Ok(config_dir.join(DEFAULT_CONFIG_FILE))
    }

    /// Resolves the config file path to load.
    ///
    /// An explicit path wins; otherwise `./typescale.toml` if present;
    /// otherwise the user config path (which may not exist - callers get
    /// a load error with that path in the message).
    pub fn resolve_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path);
        }

        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        if local.exists() {
            return Ok(local);
        }

        Self::user_config_path()
    }

    /// Loads a configuration file, dispatching the parser on extension.
    ///
    /// `.toml` (default), `.yaml`/`.yml`, and `.json` are supported.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("toml");

        let config: Self = match extension {
            "yaml" | "yml" => serde_yml::from_str(&content)
                .context(format!("Failed to parse YAML config: {}", path.display()))?,
            "json" => serde_json::from_str(&content)
                .context(format!("Failed to parse JSON config: {}", path.display()))?,
            _ => toml::from_str(&content)
                .context(format!("Failed to parse TOML config: {}", path.display()))?,
        };

        Ok(config)
    }

    /// Saves the configuration as pretty TOML using an atomic write.
    ///
    /// Uses the temp file + rename pattern so a crash mid-write never
    /// leaves a truncated config behind.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).context(format!(
                "Failed to create config directory: {}",
                parent.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = path.with_extension("toml.tmp");
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;
        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        Ok(())
    }

    /// Validates every invariant the generation layer assumes.
    ///
    /// Checks, per enabled category:
    /// - `min > 0` (a zero min stalls the modular progression, and no
    ///   generated font size may be non-positive)
    /// - `min < max`
    /// - `rounding` is 1, 2, or 4
    /// - `ratio > 1` when the method is modular
    /// - `steps >= 2` when the method is linear
    /// - at least one weight
    ///
    /// Plus, when responsive mobile derivation is active:
    /// - `scale_multiplier` in (0, 1]
    pub fn validate(&self) -> Result<()> {
        for category in Category::ALL {
            let cat = self.categories.get(category);
            if !cat.enabled {
                continue;
            }

            let scale = &cat.scale;
            if scale.min <= 0.0 {
                anyhow::bail!("{category}: min must be positive (got {})", scale.min);
            }
            if scale.min >= scale.max {
                anyhow::bail!(
                    "{category}: min ({}) must be less than max ({})",
                    scale.min,
                    scale.max
                );
            }
            if ![1.0, 2.0, 4.0].contains(&scale.rounding) {
                anyhow::bail!(
                    "{category}: rounding must be 1, 2, or 4 (got {})",
                    scale.rounding
                );
            }
            if scale.method == ScaleMethod::Modular && scale.ratio <= 1.0 {
                anyhow::bail!(
                    "{category}: modular ratio must be greater than 1 (got {})",
                    scale.ratio
                );
            }
            if scale.method == ScaleMethod::Linear && scale.steps < 2 {
                anyhow::bail!(
                    "{category}: linear steps must be at least 2 (got {})",
                    scale.steps
                );
            }
            if cat.weights.is_empty() {
                anyhow::bail!("{category}: enabled category needs at least one weight");
            }
        }

        if self.responsive.mobile_active() {
            let multiplier = self.responsive.mobile.scale_multiplier;
            if multiplier <= 0.0 || multiplier > 1.0 {
                anyhow::bail!(
                    "responsive: mobile scale multiplier must be in (0, 1] (got {multiplier})"
                );
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            categories: Categories::default(),
            responsive: ResponsiveConfig::default(),
        }
    }
}

impl Default for Categories {
    fn default() -> Self {
        let category = |method: ScaleMethod,
                        min: f64,
                        max: f64,
                        ratio: f64,
                        rounding: f64,
                        line_height: LineHeightPreset,
                        font_family: &str| CategoryScaleConfig {
            enabled: true,
            scale: ScaleConfig {
                method,
                min,
                max,
                ratio,
                steps: 5,
                rounding,
            },
            line_height,
            font_family: font_family.to_string(),
            weights: vec!["Regular".to_string()],
        };

        Self {
            display: category(
                ScaleMethod::Modular,
                36.0,
                96.0,
                1.25,
                4.0,
                LineHeightPreset::Tighter,
                "Inter",
            ),
            title: category(
                ScaleMethod::Modular,
                20.0,
                40.0,
                1.2,
                2.0,
                LineHeightPreset::Tight,
                "Inter",
            ),
            body: category(
                ScaleMethod::Modular,
                12.0,
                20.0,
                1.125,
                2.0,
                LineHeightPreset::Normal,
                "Inter",
            ),
            code: category(
                ScaleMethod::Modular,
                12.0,
                16.0,
                1.125,
                2.0,
                LineHeightPreset::Normal,
                "JetBrains Mono",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let mut config = Config::default();
        config.categories.body.scale.min = 24.0;
        config.categories.body.scale.max = 12.0;

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("body"), "unexpected message: {err}");
        assert!(err.contains("min"));
    }

    #[test]
    fn test_validate_rejects_nonpositive_min() {
        // min = 0 would keep the modular progression stuck at zero and
        // never terminate; a negative min would emit negative font
        // sizes. Both must die at the gate.
        let mut config = Config::default();
        config.categories.body.scale.min = 0.0;
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("positive"), "unexpected message: {err}");

        config.categories.body.scale.method = ScaleMethod::Linear;
        config.categories.body.scale.min = -8.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_rounding() {
        let mut config = Config::default();
        config.categories.title.scale.rounding = 3.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_flat_modular_ratio() {
        let mut config = Config::default();
        config.categories.display.scale.ratio = 1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_single_linear_step() {
        let mut config = Config::default();
        config.categories.body.scale.method = ScaleMethod::Linear;
        config.categories.body.scale.steps = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_weights() {
        let mut config = Config::default();
        config.categories.code.weights.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_skips_disabled_categories() {
        let mut config = Config::default();
        config.categories.code.weights.clear();
        config.categories.code.enabled = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_multiplier() {
        let mut config = Config::default();
        config.responsive.enabled = true;
        config.responsive.mobile.enabled = true;
        config.responsive.mobile.scale_multiplier = 1.5;
        assert!(config.validate().is_err());

        // Multiplier is ignored while mobile derivation is inactive.
        config.responsive.mobile.enabled = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load_roundtrip_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("typescale.toml");

        let mut config = Config::default();
        config.responsive.enabled = true;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_yaml_and_json() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::default();

        let yaml_path = temp_dir.path().join("typescale.yaml");
        fs::write(&yaml_path, serde_yml::to_string(&config).unwrap()).unwrap();
        assert_eq!(Config::load_from(&yaml_path).unwrap(), config);

        let json_path = temp_dir.path().join("typescale.json");
        fs::write(&json_path, serde_json::to_string(&config).unwrap()).unwrap();
        assert_eq!(Config::load_from(&json_path).unwrap(), config);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("typescale.toml");
        fs::write(&path, "[responsive]\nenabled = true\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.responsive.enabled);
        assert_eq!(config.categories, Categories::default());
    }

    #[test]
    fn test_load_missing_file_errors_with_path() {
        let err = Config::load_from(Path::new("/nonexistent/typescale.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/typescale.toml"));
    }

    #[test]
    fn test_resolve_path_prefers_explicit() {
        let explicit = PathBuf::from("/tmp/custom.toml");
        let resolved = Config::resolve_path(Some(explicit.clone())).unwrap();
        assert_eq!(resolved, explicit);
    }
}
