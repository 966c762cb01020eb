//! Integration tests for layered Settings loading.
//!
//! These tests assume no global config file and no `SIBTREE_*` variables;
//! environment overrides are covered in `config_env_test.rs`, which runs in
//! its own process.

use std::fs;

use tempfile::TempDir;

use sibtree::application::ApplicationError;
use sibtree::config::Settings;
use sibtree::domain::ShapeStyle;

#[test]
fn given_explicit_file_when_loading_then_overrides_only_given_keys() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.toml");
    fs::write(
        &path,
        r#"
[shape]
branch = "+- "
last_branch = "\\- "

[console]
sentinel = "."
"#,
    )
    .unwrap();

    let settings = Settings::load(Some(&path)).expect("load settings");

    assert_eq!(settings.shape.branch, "+- ");
    assert_eq!(settings.shape.last_branch, "\\- ");
    assert_eq!(settings.shape.continuation, "|  ");
    assert_eq!(settings.console.sentinel, ".");
}

#[test]
fn given_missing_explicit_file_when_loading_then_fails_with_config_error() {
    let temp = TempDir::new().unwrap();
    let result = Settings::load(Some(&temp.path().join("absent.toml")));
    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_invalid_toml_when_loading_then_fails_with_config_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.toml");
    fs::write(&path, "[shape\nbranch = ").unwrap();

    match Settings::load(Some(&path)) {
        Err(ApplicationError::Config { message }) => assert!(message.contains("broken.toml")),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn given_no_files_when_loading_then_uses_defaults() {
    let settings = Settings::load(None).expect("load settings");
    assert_eq!(ShapeStyle::from(&settings.shape), ShapeStyle::default());
    assert_eq!(settings.console.sentinel, "#");
}

#[test]
fn given_custom_glyphs_when_rendering_then_session_uses_them() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("glyphs.toml");
    fs::write(&path, "[shape]\nbranch = \"+ \"\nlast_branch = \"- \"\n").unwrap();
    let settings = Settings::load(Some(&path)).unwrap();

    let mut session = sibtree::application::Session::new(&settings);
    session
        .build_from_console("root\nkid\n#\n#\n#\n".as_bytes(), Vec::new())
        .unwrap();

    assert_eq!(session.shape().unwrap(), "root\n   - kid\n");
}
