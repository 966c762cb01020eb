//! Environment overrides for Settings.
//!
//! Kept in a separate test binary: the variables set here are process-wide.

use std::env;
use std::fs;

use tempfile::TempDir;

use sibtree::config::Settings;

#[test]
fn given_env_vars_when_loading_then_override_file_values() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("file.toml");
    fs::write(&path, "[shape]\nplaceholder = \"<file>\"\n[console]\nsentinel = \"-\"\n").unwrap();

    env::set_var("SIBTREE_SHAPE__PLACEHOLDER", "<env>");
    env::set_var("SIBTREE_CONSOLE__SENTINEL", "none");
    let settings = Settings::load(Some(&path));
    env::remove_var("SIBTREE_SHAPE__PLACEHOLDER");
    env::remove_var("SIBTREE_CONSOLE__SENTINEL");

    let settings = settings.expect("load settings");
    assert_eq!(settings.shape.placeholder, "<env>");
    assert_eq!(settings.console.sentinel, "none");
    assert_eq!(settings.shape.branch, "/ ");
}
