//! Rendering the DOT description to an image and opening it.
//!
//! The [`Renderer`] trait is the seam between the builder and the host's
//! Graphviz installation. [`GraphvizRenderer`] shells out to `dot` and the
//! platform's default opener.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// Default Graphviz program.
pub const DEFAULT_DOT_PROGRAM: &str = "dot";

/// Default output format passed to `dot -T`.
pub const DEFAULT_FORMAT: &str = "pdf";

/// Turns a written DOT description into an image and displays it.
pub trait Renderer {
    /// Render the description at `source`, returning the image path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the backend is missing or fails.
    fn render(&self, source: &Path) -> Result<PathBuf>;

    /// Open `image` in a viewer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if no viewer can be launched.
    fn view(&self, image: &Path) -> Result<()>;
}

/// Renderer backed by the Graphviz `dot` executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphvizRenderer {
    program: PathBuf,
    format: String,
}

impl Default for GraphvizRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_DOT_PROGRAM, DEFAULT_FORMAT)
    }
}

impl GraphvizRenderer {
    /// Create a renderer using `program` with output format `format`.
    pub fn new(program: impl Into<PathBuf>, format: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            format: format.into(),
        }
    }

    /// Path of the image produced for `source`: the format is appended as an
    /// extra extension (`deps.gv` -> `deps.gv.pdf`).
    #[must_use]
    pub fn image_path(&self, source: &Path) -> PathBuf {
        let mut name = source.as_os_str().to_os_string();
        name.push(".");
        name.push(&self.format);
        PathBuf::from(name)
    }
}

impl Renderer for GraphvizRenderer {
    fn render(&self, source: &Path) -> Result<PathBuf> {
        let image = self.image_path(source);
        debug!(
            program = %self.program.display(),
            format = %self.format,
            source = %source.display(),
            "Invoking Graphviz"
        );

        let output = Command::new(&self.program)
            .arg(format!("-T{}", self.format))
            .arg("-o")
            .arg(&image)
            .arg(source)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                Error::Render(format!(
                    "failed to run `{}` (is Graphviz installed?): {e}",
                    self.program.display()
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Render(format!(
                "`{}` failed with {}: {}",
                self.program.display(),
                output.status,
                stderr.trim()
            )));
        }

        info!(image = %image.display(), "Rendered dependency graph");
        Ok(image)
    }

    fn view(&self, image: &Path) -> Result<()> {
        let mut command = opener_command();
        command
            .arg(image)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        debug!(image = %image.display(), command = ?command, "Opening viewer");

        // The viewer outlives us; don't wait on it.
        command
            .spawn()
            .map_err(|e| Error::Render(format!("failed to open viewer: {e}")))?;
        Ok(())
    }
}

#[cfg(target_os = "macos")]
fn opener_command() -> Command {
    Command::new("open")
}

#[cfg(target_os = "windows")]
fn opener_command() -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command() -> Command {
    Command::new("xdg-open")
}
