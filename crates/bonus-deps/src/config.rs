//! Configuration management for bonus-deps.
//!
//! Settings come from three layers, later ones winning:
//!
//! 1. Built-in defaults (`deps.gv`, `pdf`, `dot`, viewer on)
//! 2. A YAML file: `--config <FILE>`, or `bonus-deps.yaml` in the scan
//!    directory when present
//! 3. Command-line flags, applied through [`Overrides`]

use crate::dot::DEFAULT_COMMENT;
use crate::error::{Error, Result};
use crate::render::{DEFAULT_DOT_PROGRAM, DEFAULT_FORMAT};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the configuration file looked up in the scan directory
pub const CONFIG_FILE_NAME: &str = "bonus-deps.yaml";

/// Default name of the DOT description file
pub const DEFAULT_OUTPUT: &str = "deps.gv";

/// Run configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Description file, relative to the scan directory unless absolute
    pub output: PathBuf,

    /// Graphviz output format (`dot -T<format>`)
    pub format: String,

    /// Graphviz program
    pub dot: PathBuf,

    /// Render the description to an image
    pub render: bool,

    /// Open the rendered image
    pub view: bool,

    /// Comment written at the top of the description
    pub comment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            format: DEFAULT_FORMAT.to_string(),
            dot: PathBuf::from(DEFAULT_DOT_PROGRAM),
            render: true,
            view: true,
            comment: DEFAULT_COMMENT.to_string(),
        }
    }
}

/// Command-line values that replace configured ones when set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Replaces [`Config::output`]
    pub output: Option<PathBuf>,
    /// Replaces [`Config::format`]
    pub format: Option<String>,
    /// Replaces [`Config::dot`]
    pub dot: Option<PathBuf>,
    /// Forces [`Config::render`] off
    pub no_render: bool,
    /// Forces [`Config::view`] off
    pub no_view: bool,
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`]
    /// if it is not valid configuration YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        serde_yaml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))
    }

    /// Resolve the file layer for a run over `dir`.
    ///
    /// An explicit path must exist. Without one, `bonus-deps.yaml` in `dir`
    /// is used if present, otherwise the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen file cannot be loaded (see [`Config::load`]).
    pub fn discover(dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "Loading configuration");
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            debug!(path = %candidate.display(), "Loading configuration");
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply command-line overrides.
    #[must_use]
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(output) = overrides.output {
            self.output = output;
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
        if let Some(dot) = overrides.dot {
            self.dot = dot;
        }
        if overrides.no_render {
            self.render = false;
        }
        if overrides.no_view {
            self.view = false;
        }
        self
    }

    /// Full path of the description file for a run over `dir`.
    #[must_use]
    pub fn output_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.output)
    }
}
