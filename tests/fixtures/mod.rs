//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use std::path::PathBuf;
use tempfile::TempDir;
use typescale::config::Config;
use typescale::models::ScaleMethod;

/// Path to the typescale binary
pub fn typescale_bin() -> &'static str {
    env!("CARGO_BIN_EXE_typescale")
}

/// Creates a deterministic single-category test config.
///
/// Body only, modular 12-20 at ratio 1.125 rounded to 2 - generates the
/// known size sequence [12, 14, 16, 18, 20].
pub fn test_config_body_only() -> Config {
    let mut config = Config::default();
    config.categories.display.enabled = false;
    config.categories.title.enabled = false;
    config.categories.code.enabled = false;
    config.categories.body.scale.method = ScaleMethod::Modular;
    config.categories.body.scale.min = 12.0;
    config.categories.body.scale.max = 20.0;
    config.categories.body.scale.ratio = 1.125;
    config.categories.body.scale.rounding = 2.0;
    config.categories.body.weights = vec!["Regular".to_string()];
    config
}

/// A config with a responsive mobile breakpoint and a body size cap.
pub fn test_config_responsive() -> Config {
    let mut config = test_config_body_only();
    config.responsive.enabled = true;
    config.responsive.mobile.enabled = true;
    config.responsive.mobile.scale_multiplier = 0.875;
    config.responsive.mobile_max_sizes.body = Some(16.0);
    config
}

/// Writes a config to `typescale.toml` inside a fresh temp dir.
///
/// Returns the config file path and the temp dir guard (keep it alive
/// for the duration of the test).
pub fn write_temp_config(config: &Config) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("typescale.toml");
    config.save_to(&path).expect("Failed to write test config");
    (path, temp_dir)
}

/// Writes raw config file content with the given file name.
pub fn write_temp_config_raw(file_name: &str, content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(file_name);
    std::fs::write(&path, content).expect("Failed to write test config");
    (path, temp_dir)
}
