//! The GitHub aggregator.
//!
//! [`GitHub::new`] resolves credentials, builds the enabled child facets and
//! commits them together with the aggregator in one staged registration, so
//! a failure at any step leaves the project untouched. Afterwards the
//! aggregator is found again with [`GitHub::find_self`] and grows the project
//! through its factory methods.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use serde::{Deserialize, Serialize};

use crate::credentials::{self, GithubCredentials};
use crate::discovery;
use crate::error::ScaffoldError;
use crate::facets::{
    Dependabot, DependabotOptions, Mergify, MergifyOptions, PullRequestLint, PullRequestLintOptions,
    PullRequestTemplate, Workflow,
};
use crate::project::Project;
use crate::types::{ComponentId, ProjectId};

/// Options for [`GitHub::new`]. Every field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubOptions {
    /// Declarative signal for whoever materializes workflow files. Workflows
    /// can still be added while this is off.
    pub workflows: bool,
    pub mergify: bool,
    pub mergify_options: MergifyOptions,
    pub pull_request_lint: bool,
    pub pull_request_lint_options: PullRequestLintOptions,
    /// Written as a single-key map, e.g. `app: {}`.
    #[serde(with = "serde_yaml::with::singleton_map_recursive")]
    pub projen_credentials: Option<GithubCredentials>,
    /// Deprecated: secret name of a personal access token. Use
    /// `projen_credentials` instead.
    pub projen_token_secret: Option<String>,
}

impl Default for GitHubOptions {
    fn default() -> Self {
        Self {
            workflows: true,
            mergify: true,
            mergify_options: MergifyOptions::default(),
            pull_request_lint: true,
            pull_request_lint_options: PullRequestLintOptions::default(),
            projen_credentials: None,
            projen_token_secret: None,
        }
    }
}

/// Coordinates the GitHub facets of a project.
///
/// Fields are fixed at construction, so a clone is interchangeable with the
/// registered instance. Clone it out of [`GitHub::find_self`] when a factory
/// call needs the project mutably.
#[derive(Debug, Clone, PartialEq)]
pub struct GitHub {
    pub(crate) project: ProjectId,
    mergify: Option<ComponentId>,
    workflows_enabled: bool,
    projen_credentials: GithubCredentials,
}

impl GitHub {
    /// Build the aggregator and its enabled children, and register them all
    /// on `project`. Returns a copy of the registered aggregator. On error
    /// nothing is registered.
    pub fn new(project: &mut Project, options: GitHubOptions) -> Result<GitHub, ScaffoldError> {
        let projen_credentials =
            credentials::resolve(options.projen_credentials, options.projen_token_secret)?;

        let mergify = options
            .mergify
            .then(|| Mergify::new(project, options.mergify_options))
            .transpose()?;
        let pull_request_lint = options
            .pull_request_lint
            .then(|| PullRequestLint::new(project, options.pull_request_lint_options))
            .transpose()?;

        // Children are staged first so the aggregator can hold their ids.
        let mut registration = project.begin();
        let mergify = mergify.map(|m| registration.stage(m)).transpose()?;
        if let Some(lint) = pull_request_lint {
            registration.stage(lint)?;
        }
        let github = GitHub {
            project: project.id(),
            mergify,
            workflows_enabled: options.workflows,
            projen_credentials,
        };
        let id = registration.stage(github.clone())?;
        project.commit(registration)?;

        tracing::info!(
            project = %project.name(),
            id = %id,
            mergify = mergify.is_some(),
            workflows_enabled = options.workflows,
            "github aggregator registered"
        );
        Ok(github)
    }

    /// The first aggregator registered on `project`, if any.
    pub fn find_self(project: &Project) -> Option<&GitHub> {
        discovery::find_singleton::<GitHub>(project).map(|(_, github)| github)
    }

    /// Id of the merge-automation child, when it was enabled.
    pub fn mergify(&self) -> Option<ComponentId> {
        self.mergify
    }

    pub fn workflows_enabled(&self) -> bool {
        self.workflows_enabled
    }

    pub fn projen_credentials(&self) -> &GithubCredentials {
        &self.projen_credentials
    }

    /// Register a new workflow. Duplicate names are allowed.
    pub fn add_workflow(
        &self,
        project: &mut Project,
        name: impl Into<String>,
    ) -> Result<ComponentId, ScaffoldError> {
        self.check_owner(project)?;
        let workflow = Workflow::new(project, name);
        project.register(workflow)
    }

    pub fn add_pull_request_template<I, S>(
        &self,
        project: &mut Project,
        lines: I,
    ) -> Result<ComponentId, ScaffoldError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.check_owner(project)?;
        let template = PullRequestTemplate::new(project, lines);
        project.register(template)
    }

    /// Register a dependency bot; `None` takes the bot's own defaults.
    pub fn add_dependabot(
        &self,
        project: &mut Project,
        options: Option<DependabotOptions>,
    ) -> Result<ComponentId, ScaffoldError> {
        self.check_owner(project)?;
        let dependabot = Dependabot::new(project, options.unwrap_or_default());
        project.register(dependabot)
    }

    /// Every workflow on the project, sorted by name with locale-aware
    /// collation. Recomputed on each call.
    pub fn workflows<'p>(&self, project: &'p Project) -> Vec<&'p Workflow> {
        let order = NameOrder::new();
        discovery::find_all_sorted_by::<Workflow, _>(project, |a, b| order.compare(a.name(), b.name()))
            .into_iter()
            .map(|(_, workflow)| workflow)
            .filter(|workflow| workflow.project == self.project)
            .collect()
    }

    /// The workflow named exactly `name`, if any.
    pub fn find_workflow<'p>(&self, project: &'p Project, name: &str) -> Option<&'p Workflow> {
        self.workflows(project).into_iter().find(|w| w.name() == name)
    }

    fn check_owner(&self, project: &Project) -> Result<(), ScaffoldError> {
        if project.id() != self.project {
            return Err(ScaffoldError::ProjectMismatch {
                expected: self.project,
                found: project.id(),
            });
        }
        Ok(())
    }
}

/// Locale-aware name order using the CLDR root collation: accents and case
/// only break ties, and lowercase sorts before uppercase.
struct NameOrder(Option<Collator>);

impl NameOrder {
    fn new() -> Self {
        match Collator::try_new(&Default::default(), CollatorOptions::new()) {
            Ok(collator) => Self(Some(collator)),
            Err(err) => {
                tracing::warn!(error = %err, "root collation unavailable; ordering names by code point");
                Self(None)
            }
        }
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.0 {
            Some(collator) => collator.compare(a, b),
            None => a.cmp(b),
        }
    }
}
