//! The dependency graph build: discover, parse, link, write, render.
//!
//! A run is a straight-line batch. The whole graph is built before anything
//! is written, so the first bad file aborts the run with no output on disk.

use crate::config::Config;
use crate::discovery::find_problem_files;
use crate::dot::to_dot;
use crate::error::{Error, Result};
use crate::graph::DependencyGraph;
use crate::record;
use crate::render::Renderer;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Problem files read.
    pub files: usize,
    /// Distinct problems in the graph.
    pub nodes: usize,
    /// Edges written, one per bonus entry.
    pub edges: usize,
    /// The DOT description file.
    pub description: PathBuf,
    /// The rendered image, if rendering was enabled.
    pub image: Option<PathBuf>,
}

/// Read every problem file in `dir` into a graph.
///
/// Returns the graph and the number of files read.
///
/// # Errors
///
/// Fails on the first file that cannot be read or parsed. Files after it are
/// not touched.
pub fn build_graph(dir: &Path) -> Result<(DependencyGraph, usize)> {
    let files = find_problem_files(dir)?;
    info!(dir = %dir.display(), count = files.len(), "Discovered problem files");

    let mut graph = DependencyGraph::new();
    for path in &files {
        let record = record::load(path)?;
        debug!(
            file = %path.display(),
            id = %record.id,
            bonuses = record.bonuses.len(),
            "Linking problem"
        );
        graph.add_record(&record);
    }

    if graph.is_empty() {
        warn!(dir = %dir.display(), "No bonus links found, the graph will be empty");
    }

    Ok((graph, files.len()))
}

/// Write the DOT description of `graph` to `path`.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be written.
pub fn write_description(graph: &DependencyGraph, path: &Path, comment: &str) -> Result<()> {
    std::fs::write(path, to_dot(graph, comment)).map_err(|e| Error::io(path, e))?;
    info!(path = %path.display(), edges = graph.edge_count(), "Wrote graph description");
    Ok(())
}

/// Run the full pipeline over `dir`.
///
/// # Errors
///
/// Returns the first parse, field, I/O or render error encountered.
pub fn run(dir: &Path, config: &Config, renderer: &dyn Renderer) -> Result<RunSummary> {
    let (graph, files) = build_graph(dir)?;

    let description = config.output_path(dir);
    write_description(&graph, &description, &config.comment)?;

    let image = if config.render {
        let image = renderer.render(&description)?;
        if config.view {
            renderer.view(&image)?;
        }
        Some(image)
    } else {
        None
    };

    Ok(RunSummary {
        files,
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        description,
        image,
    })
}
