//! YAML project manifest.
//!
//! A manifest describes one project: the options for its GitHub aggregator
//! plus the workflows, pull-request template and dependency bot to add
//! through the aggregator's factories.
//!
//! ```yaml
//! name: my-app
//! github:
//!   mergify: false
//!   projen_credentials:
//!     app: {}
//! workflows:
//!   - name: build
//!     triggers:
//!       - workflow_dispatch
//!       - push:
//!           branches: [main]
//! pull_request_template:
//!   - "Fixes #"
//! dependabot:
//!   schedule_interval: weekly
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ScaffoldError;
use crate::facets::{DependabotOptions, Job, Workflow, WorkflowTrigger};
use crate::github::{GitHub, GitHubOptions};
use crate::project::Project;
use crate::types::ProjectName;

/// One workflow entry of a manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowSpec {
    pub name: String,
    #[serde(default, with = "serde_yaml::with::singleton_map_recursive")]
    pub triggers: Vec<WorkflowTrigger>,
    #[serde(default)]
    pub jobs: BTreeMap<String, Job>,
}

/// Root of a project manifest file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub name: ProjectName,
    #[serde(default)]
    pub github: GitHubOptions,
    #[serde(default)]
    pub workflows: Vec<WorkflowSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_request_template: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependabot: Option<DependabotOptions>,
}

impl Manifest {
    /// Create the project and populate it.
    ///
    /// The aggregator is built first; if that fails the error is returned
    /// before any factory runs.
    pub fn build(&self) -> Result<Project, ScaffoldError> {
        let mut project = Project::new(self.name.clone());
        let github = GitHub::new(&mut project, self.github.clone())?;

        for spec in &self.workflows {
            let id = github.add_workflow(&mut project, spec.name.clone())?;
            if let Some(workflow) = project.get_mut::<Workflow>(id) {
                for trigger in &spec.triggers {
                    workflow.on(trigger.clone());
                }
                for (job_id, job) in &spec.jobs {
                    workflow.add_job(job_id.clone(), job.clone())?;
                }
            }
        }
        if let Some(lines) = &self.pull_request_template {
            github.add_pull_request_template(&mut project, lines.iter().cloned())?;
        }
        if let Some(options) = &self.dependabot {
            github.add_dependabot(&mut project, Some(options.clone()))?;
        }
        Ok(project)
    }
}

/// Parse a manifest from YAML text.
pub fn parse_manifest(yaml: &str) -> Result<Manifest, serde_yaml::Error> {
    serde_yaml::from_str(yaml)
}

/// Load a manifest file.
///
/// Returns `ScaffoldError::ManifestNotFound` if absent,
/// `ScaffoldError::Parse` (with path + line context) if malformed YAML.
pub fn load_manifest(path: &Path) -> Result<Manifest, ScaffoldError> {
    if !path.exists() {
        return Err(ScaffoldError::ManifestNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    parse_manifest(&contents).map_err(|e| ScaffoldError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
