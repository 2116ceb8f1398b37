//! Scaffold — inspect the component graph a project manifest produces.
//!
//! # Usage
//!
//! ```text
//! scaffold plan <manifest> [--json]
//! scaffold workflows <manifest> [--find <name>]
//! scaffold credentials <manifest>
//! ```

mod commands;

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{credentials::CredentialsArgs, plan::PlanArgs, workflows::WorkflowsArgs};
use scaffold_core::{load_manifest, Project};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "scaffold",
    version,
    about = "Build and inspect the GitHub facets of a project manifest",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every component the manifest registers, in registration order.
    Plan(PlanArgs),

    /// List workflows in canonical order, or look one up by name.
    Workflows(WorkflowsArgs),

    /// Show the resolved credentials strategy.
    Credentials(CredentialsArgs),
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Load a manifest and build its project graph.
pub(crate) fn build_project(path: &Path) -> Result<Project> {
    let manifest = load_manifest(path)
        .with_context(|| format!("failed to load manifest '{}'", path.display()))?;
    manifest
        .build()
        .with_context(|| format!("failed to build project '{}'", manifest.name))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("SCAFFOLD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Plan(args) => args.run(),
        Commands::Workflows(args) => args.run(),
        Commands::Credentials(args) => args.run(),
    }
}
