//! `scaffold credentials <manifest>`

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;

use scaffold_core::GitHub;

use crate::build_project;

/// Show how automation will authenticate.
#[derive(Args, Debug)]
pub struct CredentialsArgs {
    /// Path to the project manifest (YAML).
    pub manifest: PathBuf,
}

impl CredentialsArgs {
    pub fn run(self) -> Result<()> {
        let project = build_project(&self.manifest)?;
        let github = GitHub::find_self(&project)
            .ok_or_else(|| anyhow!("project '{}' has no GitHub component", project.name()))?;
        let credentials = github.projen_credentials();

        println!("{} {}", "Strategy:".bold(), credentials.describe());
        println!("{} {}", "Token:".bold(), credentials.token_ref());
        for step in credentials.setup_steps() {
            let action = step.uses.as_deref().unwrap_or("-");
            println!("{} {} ({action})", "Setup:".bold(), step.name);
        }
        Ok(())
    }
}
