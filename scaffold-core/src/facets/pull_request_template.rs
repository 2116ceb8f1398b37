//! Pull-request description template.

use crate::project::Project;
use crate::types::ProjectId;

/// Body of the pull-request template, kept line by line and verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestTemplate {
    pub(crate) project: ProjectId,
    lines: Vec<String>,
}

impl PullRequestTemplate {
    pub fn new<I, S>(project: &Project, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            project: project.id(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}
