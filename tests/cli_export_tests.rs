//! End-to-end tests for `typescale export`.
#![allow(unused_variables)] // Temp dirs must be kept alive even if not directly accessed

use std::fs;
use std::process::Command;

mod fixtures;
use fixtures::*;

fn run_export(config_path: &std::path::Path, format: &str) -> std::process::Output {
    Command::new(typescale_bin())
        .args([
            "export",
            "--config",
            config_path.to_str().unwrap(),
            "--format",
            format,
        ])
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_export_json_to_stdout() {
    let (config_path, temp) = write_temp_config(&test_config_body_only());
    let output = run_export(&config_path, "json");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["typography"]["body"]["base"]["lineHeight"], 24);
}

#[test]
fn test_export_yaml_flat_lines() {
    let (config_path, temp) = write_temp_config(&test_config_body_only());
    let output = run_export(&config_path, "yaml");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("typography.body.base: 16px/24px Inter Regular 0%"));
}

#[test]
fn test_export_css_properties() {
    let (config_path, temp) = write_temp_config(&test_config_body_only());
    let output = run_export(&config_path, "css");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(":root {"));
    assert!(stdout.contains("--body-base-size: 16px;"));
    assert!(stdout.contains(".text-body-base {"));
}

#[test]
fn test_export_tailwind_keys() {
    let (config_path, temp) = write_temp_config(&test_config_responsive());
    let output = run_export(&config_path, "tailwind");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("module.exports = {"));
    assert!(stdout.contains("'body-base-desktop':"));
    assert!(stdout.contains("'body-base-mobile':"));
}

#[test]
fn test_export_to_file() {
    let (config_path, temp) = write_temp_config(&test_config_body_only());
    let out_path = temp.path().join("tokens.css");

    let output = Command::new(typescale_bin())
        .args([
            "export",
            "--config",
            config_path.to_str().unwrap(),
            "--format",
            "css",
            "--output",
            out_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let content = fs::read_to_string(&out_path).unwrap();
    assert!(content.contains("--body-base-size: 16px;"));
}

#[test]
fn test_export_respects_mobile_cap() {
    let (config_path, temp) = write_temp_config(&test_config_responsive());
    let output = run_export(&config_path, "json");
    assert_eq!(output.status.code(), Some(0));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let mobile_body = value["typography"]["mobile"]["body"].as_object().unwrap();
    for (name, token) in mobile_body {
        let size = token["fontSize"].as_f64().unwrap();
        assert!(size <= 16.0, "mobile body {name} is {size}px, above the cap");
    }
}

#[test]
fn test_export_accepts_yaml_config() {
    let config = test_config_body_only();
    let (config_path, temp) = write_temp_config_raw(
        "typescale.yaml",
        &serde_yml::to_string(&config).expect("serialize yaml"),
    );

    let output = run_export(&config_path, "json");
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}
