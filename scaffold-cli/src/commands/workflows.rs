//! `scaffold workflows <manifest> [--find <name>]`

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Args;

use scaffold_core::{facets::Workflow, GitHub};

use crate::build_project;

/// List workflows sorted by name, or look one up.
#[derive(Args, Debug)]
pub struct WorkflowsArgs {
    /// Path to the project manifest (YAML).
    pub manifest: PathBuf,

    /// Print only the workflow with this exact name.
    #[arg(long, value_name = "NAME")]
    pub find: Option<String>,
}

impl WorkflowsArgs {
    pub fn run(self) -> Result<()> {
        let project = build_project(&self.manifest)?;
        let github = GitHub::find_self(&project)
            .ok_or_else(|| anyhow!("project '{}' has no GitHub component", project.name()))?;

        if let Some(name) = self.find.as_deref() {
            let workflow = github
                .find_workflow(&project, name)
                .ok_or_else(|| anyhow!("workflow '{name}' not found"))?;
            print_workflow(workflow);
            return Ok(());
        }

        let workflows = github.workflows(&project);
        if workflows.is_empty() {
            println!("No workflows defined.");
            return Ok(());
        }
        if !github.workflows_enabled() {
            println!("(workflows are disabled for this project)");
        }
        for workflow in workflows {
            print_workflow(workflow);
        }
        Ok(())
    }
}

fn print_workflow(workflow: &Workflow) {
    println!(
        "{} ({} trigger(s), {} job(s))",
        workflow.name(),
        workflow.triggers().len(),
        workflow.jobs().len()
    );
    for (id, job) in workflow.jobs() {
        println!("  - {id} [{}] {} step(s)", job.runs_on, job.steps.len());
    }
}
