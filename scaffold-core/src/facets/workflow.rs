//! Named automation pipelines.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ScaffoldError;
use crate::project::Project;
use crate::types::ProjectId;

pub const DEFAULT_RUNNER: &str = "ubuntu-latest";

/// Event that starts a workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowTrigger {
    Push {
        #[serde(default)]
        branches: Vec<String>,
    },
    PullRequest {
        #[serde(default)]
        branches: Vec<String>,
    },
    WorkflowDispatch,
    Schedule {
        cron: String,
    },
}

/// A single step of a job.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Step {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uses: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub with: BTreeMap<String, String>,
}

impl Step {
    /// A step running a published action.
    pub fn uses(name: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uses: Some(action.into()),
            ..Self::default()
        }
    }

    /// A step running a shell command.
    pub fn run(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            run: Some(command.into()),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_input(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.with.insert(key.into(), value.into());
        self
    }
}

/// A job: steps executed in order on one runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    #[serde(default = "default_runner")]
    pub runs_on: String,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Default for Job {
    fn default() -> Self {
        Self {
            runs_on: default_runner(),
            steps: Vec::new(),
        }
    }
}

fn default_runner() -> String {
    DEFAULT_RUNNER.to_string()
}

/// A named workflow. Names are unique by convention only.
#[derive(Debug, Clone, PartialEq)]
pub struct Workflow {
    pub(crate) project: ProjectId,
    name: String,
    triggers: Vec<WorkflowTrigger>,
    jobs: BTreeMap<String, Job>,
}

impl Workflow {
    pub fn new(project: &Project, name: impl Into<String>) -> Self {
        Self {
            project: project.id(),
            name: name.into(),
            triggers: Vec::new(),
            jobs: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn triggers(&self) -> &[WorkflowTrigger] {
        &self.triggers
    }

    pub fn jobs(&self) -> &BTreeMap<String, Job> {
        &self.jobs
    }

    /// Add a trigger; an identical trigger is only kept once.
    pub fn on(&mut self, trigger: WorkflowTrigger) {
        if !self.triggers.contains(&trigger) {
            self.triggers.push(trigger);
        }
    }

    pub fn add_job(&mut self, id: impl Into<String>, job: Job) -> Result<(), ScaffoldError> {
        let id = id.into();
        if self.jobs.contains_key(&id) {
            return Err(ScaffoldError::DuplicateJob {
                workflow: self.name.clone(),
                job: id,
            });
        }
        self.jobs.insert(id, job);
        Ok(())
    }
}
