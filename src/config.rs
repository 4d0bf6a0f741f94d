//! Generator configuration loaded from `relgen.toml`.
//!
//! ```toml
//! [generator]
//! dialect = "postgres"
//!
//! [output]
//! terminator = ";"
//! show_parameters = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SqlResult;
use crate::transpiler::Dialect;

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "relgen.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub dialect: Dialect,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Appended to every printed statement
    #[serde(default = "default_terminator")]
    pub terminator: String,
    #[serde(default = "default_show_parameters")]
    pub show_parameters: bool,
}

fn default_terminator() -> String {
    ";".to_string()
}

fn default_show_parameters() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            terminator: default_terminator(),
            show_parameters: default_show_parameters(),
        }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> SqlResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load_from(path: &Path) -> SqlResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Candidate files, most specific first.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("relgen").join("config.toml"));
        }
        paths
    }

    /// Load the first existing file of [`Config::search_paths`], or the
    /// defaults when there is none.
    pub fn load() -> SqlResult<Self> {
        match Self::search_paths().into_iter().find(|p| p.is_file()) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading configuration");
                Self::load_from(&path)
            }
            None => Ok(Self::default()),
        }
    }
}
