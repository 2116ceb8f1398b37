//! Pull-request title linting.

use serde::{Deserialize, Serialize};

use crate::error::{invalid, ScaffoldError};
use crate::project::Project;
use crate::types::{ComponentKind, ProjectId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PullRequestLintOptions {
    /// Require titles to follow conventional-commit form.
    pub semantic_title: bool,
    /// Accepted conventional-commit types.
    pub types: Vec<String>,
    pub require_scope: bool,
}

impl Default for PullRequestLintOptions {
    fn default() -> Self {
        Self {
            semantic_title: true,
            types: ["feat", "fix", "chore"].map(String::from).to_vec(),
            require_scope: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PullRequestLint {
    pub(crate) project: ProjectId,
    options: PullRequestLintOptions,
}

impl PullRequestLint {
    pub fn new(project: &Project, options: PullRequestLintOptions) -> Result<Self, ScaffoldError> {
        if options.semantic_title && options.types.is_empty() {
            return Err(invalid(
                ComponentKind::PullRequestLint,
                "semantic titles need at least one accepted type",
            ));
        }
        Ok(Self {
            project: project.id(),
            options,
        })
    }

    pub fn options(&self) -> &PullRequestLintOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_accept_conventional_types() {
        let opts = PullRequestLintOptions::default();
        assert!(opts.semantic_title);
        assert_eq!(opts.types, vec!["feat", "fix", "chore"]);
    }

    #[test]
    fn empty_types_only_rejected_with_semantic_title() {
        let project = Project::new("app");
        let empty = PullRequestLintOptions { types: vec![], ..Default::default() };
        assert!(PullRequestLint::new(&project, empty.clone()).is_err());
        let off = PullRequestLintOptions { semantic_title: false, ..empty };
        assert!(PullRequestLint::new(&project, off).is_ok());
    }
}
