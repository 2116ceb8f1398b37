//! Error types for scaffold-core.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::{ComponentKind, ProjectId};

/// All errors that can arise while building or loading a component graph.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Both the deprecated credential field and its replacement were supplied.
    #[error("`{legacy}` is deprecated and cannot be combined with `{replacement}`; use `{replacement}` only")]
    ConflictingCredentialConfiguration {
        legacy: &'static str,
        replacement: &'static str,
    },

    /// A component was offered to a project other than the one it was built for.
    #[error("component belongs to {expected} but was registered on {found}")]
    ProjectMismatch { expected: ProjectId, found: ProjectId },

    /// The project grew between `begin` and `commit` of a staged registration.
    #[error("staged registration expected {expected} components on the project, found {found}")]
    StaleRegistration { expected: usize, found: usize },

    /// A child facet rejected its options.
    #[error("invalid {kind} options: {reason}")]
    InvalidFacet { kind: ComponentKind, reason: String },

    /// A workflow already has a job with this id.
    #[error("workflow '{workflow}' already has a job named '{job}'")]
    DuplicateJob { workflow: String, job: String },

    /// Underlying I/O failure while reading a manifest.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error on load — includes file path and line context from serde_yaml.
    #[error("failed to parse manifest at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The manifest file did not exist at the given path.
    #[error("manifest not found at {path}")]
    ManifestNotFound { path: PathBuf },
}

pub(crate) fn invalid(kind: ComponentKind, reason: impl Into<String>) -> ScaffoldError {
    ScaffoldError::InvalidFacet {
        kind,
        reason: reason.into(),
    }
}
