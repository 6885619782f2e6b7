use textlens::config::{Config, API_URL_ENV};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.api.base_url, "http://localhost:8000");
    assert!(config.ui.mouse_enabled);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.file, "textlens.log");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Empty base URL should fail
    config.api.base_url = String::new();
    assert!(config.validate().is_err());

    // Non-HTTP scheme should fail
    config.api.base_url = "ftp://example.com".to_string();
    assert!(config.validate().is_err());

    // Reset and test empty log file with logging enabled
    config.api.base_url = "http://localhost:8000".to_string();
    config.logging.enabled = true;
    config.logging.file = String::new();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("base_url = \"http://localhost:8000\""));
    assert!(toml_str.contains("mouse_enabled = true"));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[api]
base_url = "https://analysis.internal:9000"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.api.base_url, "https://analysis.internal:9000");
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert!(config.ui.mouse_enabled); // default value
    assert_eq!(config.logging.file, "textlens.log"); // default value
}

#[test]
fn test_empty_config_deserialization() {
    // Test that empty TOML uses all defaults
    let empty_toml = "";
    let config: Config = toml::from_str(empty_toml).unwrap();
    let default_config = Config::default();

    assert_eq!(config.api.base_url, default_config.api.base_url);
    assert_eq!(config.ui.mouse_enabled, default_config.ui.mouse_enabled);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    // Create a temporary path that doesn't exist
    let temp_dir = std::env::temp_dir().join("textlens_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    // Ensure the directory doesn't exist initially
    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    // Generate config should create the directory structure
    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());

    // Verify the directory was created
    assert!(temp_dir.exists());
    assert!(config_path.parent().unwrap().exists());
    assert!(config_path.exists());

    // Verify the file contains expected content
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# textlens configuration file"));
    assert!(content.contains("base_url = \"http://localhost:8000\""));

    // Clean up
    let _ = fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_env_var_overrides_base_url() {
    // No other test calls Config::load(), so the variable cannot leak
    // into a concurrently running test.
    std::env::set_var(API_URL_ENV, "http://override.local:1234");
    let config = Config::load();
    std::env::remove_var(API_URL_ENV);

    assert_eq!(config.unwrap().api.base_url, "http://override.local:1234");
}

#[test]
fn test_default_config_path_is_under_app_dir() {
    let path = Config::get_default_config_path().unwrap();
    assert!(path.ends_with("textlens/config.toml"), "path was: {}", path.display());
}

#[test]
fn test_load_from_file_rejects_bad_toml() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join("textlens_test_bad_config");
    let _ = fs::remove_dir_all(&temp_dir);
    fs::create_dir_all(&temp_dir).unwrap();

    let config_path = temp_dir.join("config.toml");
    fs::write(&config_path, "[api\nbase_url = ").unwrap();

    assert!(Config::load_from_file(&config_path).is_err());

    let _ = fs::remove_dir_all(&temp_dir);
}
