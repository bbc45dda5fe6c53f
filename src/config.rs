use crate::error::{HeaderError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The base config directory name under ~/.config/
const CONFIG_DIR_NAME: &str = "run-header";

/// The filename for the configuration file.
const CONFIG_FILENAME: &str = "config.toml";

/// Default config file content with explanatory comments.
///
/// Written the first time [`load_config`] runs so users can see every option
/// without looking anything up.
const DEFAULT_CONFIG_WITH_COMMENTS: &str = r#"# run-header configuration

# Prefix for breadcrumb link targets.
# - "": links point at /pipelines and /pipelines/<name>
# - "/dashboard": links point at /dashboard/pipelines/...
base_path = ""

# Use ANSI colors in text output.
color = true

# Default output format for `run-header render`: "text" or "json".
format = "text"
"#;

// ============================================================================
// Config
// ============================================================================

/// Output format for rendered headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable header, optionally colored.
    #[default]
    Text,
    /// The view model as pretty-printed JSON.
    Json,
}

/// User preferences for rendering run headers.
///
/// Missing fields in a config file fall back to their defaults, so partial
/// configs work.
///
/// # Example
///
/// ```toml
/// base_path = "/dashboard"
/// color = false
/// format = "json"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prefix for breadcrumb link targets.
    pub base_path: String,

    /// Whether text output uses ANSI colors.
    pub color: bool,

    /// Default output format.
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_path: String::new(),
            color: true,
            format: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Link routes derived from `base_path`.
    pub fn routes(&self) -> Routes {
        Routes::new(&self.base_path)
    }
}

// ============================================================================
// Routes
// ============================================================================

/// Link targets for breadcrumb segments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Routes {
    base_path: String,
}

impl Routes {
    /// Create routes under `base_path`. A trailing slash is ignored.
    pub fn new(base_path: &str) -> Self {
        Self {
            base_path: base_path.trim_end_matches('/').to_string(),
        }
    }

    /// Target of the pipeline list.
    pub fn pipelines(&self) -> String {
        format!("{}/pipelines", self.base_path)
    }

    /// Target of a single pipeline's page.
    pub fn pipeline(&self, name: &str) -> String {
        format!("{}/pipelines/{}", self.base_path, name)
    }
}

// ============================================================================
// Config File Management
// ============================================================================

/// Get the config directory path (~/.config/run-header/).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| HeaderError::Config("Could not determine home directory".to_string()))?;
    Ok(home.join(".config").join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (~/.config/run-header/config.toml).
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILENAME))
}

/// Parse config TOML.
pub fn parse_config(content: &str) -> Result<Config> {
    toml::from_str(content)
        .map_err(|e| HeaderError::Config(format!("Failed to parse config: {}", e)))
}

/// Load the configuration from `~/.config/run-header/config.toml`.
///
/// If the file doesn't exist, it is created with default values and
/// comments explaining each option.
///
/// # Errors
///
/// Returns an error if:
/// - The home directory cannot be determined
/// - The config directory cannot be created
/// - The config file cannot be read (other than not existing)
/// - The config file contains invalid TOML
pub fn load_config() -> Result<Config> {
    let path = config_path()?;

    if !path.exists() {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&path, DEFAULT_CONFIG_WITH_COMMENTS)?;
        return Ok(Config::default());
    }

    load_config_from(&path)
}

/// Load the configuration from a specific file without creating it.
///
/// A missing file yields the default configuration.
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| {
        HeaderError::Config(format!(
            "Failed to parse config file at {:?}: {}",
            path, e
        ))
    })
}
