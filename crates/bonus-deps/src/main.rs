//! bonus-deps CLI binary.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use bonus_deps::builder;
use bonus_deps::config::{Config, Overrides};
use bonus_deps::render::GraphvizRenderer;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

/// Render the bonus dependency graph of a directory of `.problem` files.
#[derive(Parser, Debug)]
#[command(name = "bonus-deps")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory to scan for `*.problem` files
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Graph description file (relative to the scan directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Graphviz output format (pdf, svg, png, ...)
    #[arg(short, long)]
    format: Option<String>,

    /// Path to the Graphviz `dot` program
    #[arg(long)]
    dot: Option<PathBuf>,

    /// Render the image but don't open a viewer
    #[arg(long)]
    no_view: bool,

    /// Only write the graph description
    #[arg(long)]
    no_render: bool,

    /// Configuration file (defaults to `bonus-deps.yaml` in the scan directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // RUST_LOG takes precedence, e.g. RUST_LOG=bonus_deps=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            for cause in e.chain().skip(1) {
                eprintln!("  {}: {cause}", "caused by".dimmed());
            }
            exit_code(&e)
        }
    }
}

/// Exit status for a failed run: 2 when a problem file needs fixing, 1 for
/// everything else (rendering, configuration, I/O).
fn exit_code(error: &anyhow::Error) -> ExitCode {
    let input_error = error
        .chain()
        .filter_map(|cause| cause.downcast_ref::<bonus_deps::Error>())
        .any(bonus_deps::Error::is_input_error);
    if input_error {
        eprintln!(
            "  {}: fix the problem file above and run again",
            "hint".yellow()
        );
        ExitCode::from(2)
    } else {
        ExitCode::FAILURE
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::discover(&cli.dir, cli.config.as_deref())
        .context("failed to load configuration")?
        .with_overrides(Overrides {
            output: cli.output,
            format: cli.format,
            dot: cli.dot,
            no_render: cli.no_render,
            no_view: cli.no_view,
        });
    tracing::debug!(?config, "Resolved configuration");

    let renderer = GraphvizRenderer::new(&config.dot, &config.format);
    let summary = builder::run(&cli.dir, &config, &renderer)
        .with_context(|| format!("failed to build dependency graph in {}", cli.dir.display()))?;

    println!(
        "Wrote {} ({} edges across {} problems from {} files)",
        summary.description.display().to_string().green(),
        summary.edges.to_string().bold(),
        summary.nodes,
        summary.files
    );
    if let Some(image) = &summary.image {
        println!("Rendered {}", image.display().to_string().green());
    }

    Ok(())
}
