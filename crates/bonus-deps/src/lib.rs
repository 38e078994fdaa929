//! bonus-deps - Render bonus-unlock dependency graphs.
//!
//! Scans a directory for `*.problem` files, links each problem to the
//! problems its bonuses unlock, writes a Graphviz description (`deps.gv`),
//! renders it and opens the result.
//!
//! # Example
//!
//! ```no_run
//! use bonus_deps::builder;
//! use bonus_deps::config::Config;
//! use bonus_deps::render::GraphvizRenderer;
//! use std::path::Path;
//!
//! let config = Config::default();
//! let renderer = GraphvizRenderer::new(&config.dot, &config.format);
//! let summary = builder::run(Path::new("."), &config, &renderer)?;
//! println!("{} edges", summary.edges);
//! # Ok::<(), bonus_deps::Error>(())
//! ```

#![forbid(unsafe_code)]

pub mod builder;
pub mod config;
pub mod discovery;
pub mod domain;
pub mod dot;
pub mod error;
pub mod graph;
pub mod record;
pub mod render;

pub use error::{Error, Result};
