// tests/config_test.rs
use std::io::Write;
use tag_release::config::{load_config, Config};
use tempfile::NamedTempFile;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.editor.fallback, "vi");
    assert_eq!(config.output.message_file, "RELEASE_MSG");
    assert!(!config.output.include_commits);
    assert!(!config.behavior.skip_confirmation);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[editor]
fallback = "nano"

[output]
message_file = "commit-msg.txt"
include_commits = true
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.editor.fallback, "nano");
    assert_eq!(config.output.message_file, "commit-msg.txt");
    assert!(config.output.include_commits);
    // Unspecified sections fall back to defaults
    assert!(!config.behavior.skip_confirmation);
}

#[test]
fn test_load_partial_file_keeps_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[behavior]\nskip_confirmation = true\n")
        .unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert!(config.behavior.skip_confirmation);
    assert_eq!(config.editor.fallback, "vi");
    assert_eq!(config.output.message_file, "RELEASE_MSG");
}

#[test]
fn test_load_invalid_toml_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"not valid toml [").unwrap();
    temp_file.flush().unwrap();

    assert!(load_config(Some(temp_file.path().to_str().unwrap())).is_err());
}

#[test]
fn test_load_missing_explicit_path_is_an_error() {
    assert!(load_config(Some("/nonexistent/tagrelease.toml")).is_err());
}
