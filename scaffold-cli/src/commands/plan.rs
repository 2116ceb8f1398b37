//! `scaffold plan <manifest> [--json]`

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use scaffold_core::Project;

use crate::build_project;

/// List every component the manifest registers.
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Path to the project manifest (YAML).
    pub manifest: PathBuf,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl PlanArgs {
    pub fn run(self) -> Result<()> {
        let project = build_project(&self.manifest)?;
        let rows = rows(&project);
        if self.json {
            let report = PlanReport {
                project: project.name().0.clone(),
                components: rows,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        println!(
            "{} {} ({} components)",
            "Project".bold(),
            project.name(),
            project.len()
        );
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct PlanReport {
    project: String,
    components: Vec<ComponentRow>,
}

#[derive(Debug, Serialize, Tabled)]
struct ComponentRow {
    #[tabled(rename = "id")]
    id: usize,
    #[tabled(rename = "kind")]
    kind: String,
    #[tabled(rename = "detail")]
    detail: String,
}

fn rows(project: &Project) -> Vec<ComponentRow> {
    project
        .components()
        .iter()
        .enumerate()
        .map(|(id, component)| ComponentRow {
            id,
            kind: component.kind().to_string(),
            detail: component.label(),
        })
        .collect()
}
