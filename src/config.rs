//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/sibtree/sibtree.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `SIBTREE_*` prefix, `__` between section and key

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::application::DEFAULT_SENTINEL;
use crate::domain::ShapeStyle;
use crate::util::path::expand_path;

/// Glyphs for the ASCII shape view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShapeConfig {
    /// Column under an ancestor with a later sibling
    pub continuation: String,
    /// Column under a last-sibling ancestor
    pub padding: String,
    /// Branch to a node with a following sibling
    pub branch: String,
    /// Branch to the last sibling
    pub last_branch: String,
    /// Shown for nodes without a label
    pub placeholder: String,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        let style = ShapeStyle::default();
        Self {
            continuation: style.continuation,
            padding: style.padding,
            branch: style.branch,
            last_branch: style.last_branch,
            placeholder: style.placeholder,
        }
    }
}

impl From<&ShapeConfig> for ShapeStyle {
    fn from(config: &ShapeConfig) -> Self {
        Self {
            continuation: config.continuation.clone(),
            padding: config.padding.clone(),
            branch: config.branch.clone(),
            last_branch: config.last_branch.clone(),
            placeholder: config.placeholder.clone(),
        }
    }
}

/// Interactive construction settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Line that means "no node here"
    pub sentinel: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL.into(),
        }
    }
}

/// Raw shape config for intermediate parsing (`None` → inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawShapeConfig {
    pub continuation: Option<String>,
    pub padding: Option<String>,
    pub branch: Option<String>,
    pub last_branch: Option<String>,
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawConsoleConfig {
    pub sentinel: Option<String>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub shape: RawShapeConfig,
    pub console: RawConsoleConfig,
}

/// Unified configuration for sibtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    pub shape: ShapeConfig,
    pub console: ConsoleConfig,
}

/// Get the XDG config directory for sibtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "sibtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("sibtree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl ShapeConfig {
    fn merge(&self, overlay: &RawShapeConfig) -> Self {
        Self {
            continuation: overlay
                .continuation
                .clone()
                .unwrap_or_else(|| self.continuation.clone()),
            padding: overlay.padding.clone().unwrap_or_else(|| self.padding.clone()),
            branch: overlay.branch.clone().unwrap_or_else(|| self.branch.clone()),
            last_branch: overlay
                .last_branch
                .clone()
                .unwrap_or_else(|| self.last_branch.clone()),
            placeholder: overlay
                .placeholder
                .clone()
                .unwrap_or_else(|| self.placeholder.clone()),
        }
    }
}

impl Settings {
    /// Overlay wins where it specifies a value, otherwise keep self.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            shape: self.shape.merge(&overlay.shape),
            console: ConsoleConfig {
                sentinel: overlay
                    .console
                    .sentinel
                    .clone()
                    .unwrap_or_else(|| self.console.sentinel.clone()),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `explicit` - Optional config file (`~` and `$VAR` are expanded); must exist
    pub fn load(explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!(path = %global_path.display(), "loading global config");
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        // 3. Explicit config file
        if let Some(path) = explicit {
            let path = expand_path(&path.to_string_lossy());
            if !path.is_file() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            debug!(path = %path.display(), "loading config file");
            current = current.merge_with(&load_raw_settings(&path)?);
        }

        // 4. Environment variables
        Self::apply_env_overrides(current)
    }

    /// Apply SIBTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("SIBTREE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("shape.continuation") {
            settings.shape.continuation = val;
        }
        if let Ok(val) = config.get_string("shape.padding") {
            settings.shape.padding = val;
        }
        if let Ok(val) = config.get_string("shape.branch") {
            settings.shape.branch = val;
        }
        if let Ok(val) = config.get_string("shape.last_branch") {
            settings.shape.last_branch = val;
        }
        if let Ok(val) = config.get_string("shape.placeholder") {
            settings.shape.placeholder = val;
        }
        if let Ok(val) = config.get_string("console.sentinel") {
            settings.console.sentinel = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r##"# sibtree configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/sibtree/sibtree.toml
#   Explicit: --config <FILE>
#   Env:      SIBTREE_* environment variables (e.g. SIBTREE_SHAPE__PLACEHOLDER)

[shape]
# Column under an ancestor that still has a later sibling
# continuation = "|  "
# Column under an ancestor that was the last of its siblings
# padding = "   "
# Branch to a node that has a following sibling
# branch = "/ "
# Branch to the last node of a sibling chain
# last_branch = "`` "
# Text drawn for a node without a label
# placeholder = "(null)"

[console]
# Input line meaning "no node here" during interactive construction
# sentinel = "#"
"##
        .to_string()
    }
}
