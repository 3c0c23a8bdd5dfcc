//! Integration tests for configuration management

use course_advisor::config::{Config, ConfigOverrides};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a temporary config directory
fn setup_temp_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");
    (temp_dir, config_file)
}

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    // Should have non-empty defaults for critical fields
    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert_eq!(config.recommend.max_credits, 22);
    assert_eq!(config.recommend.top_n, 3);
    assert_eq!(config.recommend.max_candidates, 20);
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
catalog = "./catalog.csv"
profile = "./profile.toml"

[recommend]
max_credits = 18
top_n = 5
max_candidates = 15
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.catalog, "./catalog.csv");
    assert_eq!(config.paths.profile, "./profile.toml");
    assert_eq!(config.recommend.max_credits, 18);
    assert_eq!(config.recommend.top_n, 5);
    assert_eq!(config.recommend.max_candidates, 15);
}

#[test]
fn test_config_from_toml_partial() {
    // Missing fields within sections use defaults
    let toml_str = r#"
[logging]
level = "error"

[paths]

[recommend]
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, ""); // Default empty
    assert!(!config.logging.verbose); // Default false
    assert_eq!(config.recommend.max_credits, 0); // Filled by merge_defaults later
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$COURSE_ADVISOR/test.log"

[paths]
catalog = "$COURSE_ADVISOR/catalog.csv"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    // Variable should be expanded to actual path
    assert!(config.logging.file.contains("courseadvisor"));
    assert!(!config.logging.file.contains("$COURSE_ADVISOR"));
    assert!(config.paths.catalog.contains("courseadvisor"));
    assert!(!config.paths.catalog.contains("$COURSE_ADVISOR"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    // Test get
    let level = config.get("level");
    assert!(level.is_some());

    // Test set
    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config
        .set("verbose", "true")
        .expect("Failed to set verbose");
    assert_eq!(config.get("verbose").unwrap(), "true");
    assert!(config.logging.verbose);

    config
        .set("max_credits", "18")
        .expect("Failed to set max_credits");
    assert_eq!(config.recommend.max_credits, 18);

    config.set("top-n", "5").expect("Failed to set top-n");
    assert_eq!(config.recommend.top_n, 5);

    // Test unknown key
    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_set_rejects_invalid_numbers() {
    let mut config = Config::from_defaults();

    assert!(config.set("max_credits", "twenty").is_err());
    assert!(config.set("max_credits", "0").is_err());
    assert!(config.set("top_n", "-1").is_err());
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    // Change a value
    config.set("max_credits", "12").expect("Failed to set");
    assert_eq!(config.recommend.max_credits, 12);

    // Unset should restore default
    config
        .unset("max_credits", &defaults)
        .expect("Failed to unset max_credits");
    assert_eq!(config.recommend.max_credits, defaults.recommend.max_credits);
}

#[test]
fn test_config_save_and_load() {
    let (_temp_dir, config_file) = setup_temp_config();

    // Create and save a config
    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config.set("top_n", "7").expect("Failed to set top_n");

    // Manually save to our test location
    if let Some(parent) = config_file.parent() {
        fs::create_dir_all(parent).expect("Failed to create dir");
    }
    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    // Load and verify
    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded_config = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded_config.logging.level, "info");
    assert_eq!(loaded_config.recommend.top_n, 7);
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        catalog: Some("./my_catalog.csv".to_string()),
        profile: Some("./my_profile.toml".to_string()),
        max_credits: Some(16),
        top_n: Some(10),
        max_candidates: Some(8),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.catalog, "./my_catalog.csv");
    assert_eq!(config.paths.profile, "./my_profile.toml");
    assert_eq!(config.recommend.max_credits, 16);
    assert_eq!(config.recommend.top_n, 10);
    assert_eq!(config.recommend.max_candidates, 8);
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let default_top_n = config.recommend.top_n;

    // Apply partial overrides - only level changes
    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        ..ConfigOverrides::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.recommend.top_n, default_top_n);
}

#[test]
fn test_config_display_format() {
    let config = Config::from_defaults();
    let display_str = format!("{config}");

    // Should contain section headers (lowercase)
    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[paths]"));
    assert!(display_str.contains("[recommend]"));

    // Should contain field names
    assert!(display_str.contains("level"));
    assert!(display_str.contains("catalog"));
    assert!(display_str.contains("max_credits"));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    // Minimal config with empty/zero fields
    let toml_str = r#"
[logging]
level = "error"
file = ""
verbose = false

[paths]
catalog = ""
profile = ""

[recommend]
max_credits = 0
top_n = 0
max_candidates = 0
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    // Merge should add missing fields from defaults
    let changed = config.merge_defaults(&defaults);

    assert!(
        changed,
        "merge_defaults should return true when fields are added"
    );
    assert_eq!(config.recommend.max_credits, 22);
    assert_eq!(config.recommend.top_n, 3);
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"
verbose = false

[paths]
catalog = ""
profile = ""

[recommend]
max_credits = 12
top_n = 0
max_candidates = 0
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    let defaults = Config::from_defaults();

    config.merge_defaults(&defaults);

    // Custom values should be preserved
    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.recommend.max_credits, 12);
}

#[test]
fn test_get_courseadvisor_dir() {
    let dir = Config::get_courseadvisor_dir();

    // Should contain "courseadvisor" in the path
    assert!(dir.to_string_lossy().contains("courseadvisor"));

    // Should not be empty or just "."
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();

    // Should end with config.toml or dconfig.toml
    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
