//! Scaffold core library — component registry, discovery, GitHub aggregator.
//!
//! Public API surface:
//! - [`types`] — identifier newtypes and the [`ComponentKind`] tag
//! - [`project`] — append-only [`Project`] and staged [`Registration`]
//! - [`component`] — the closed [`Component`] sum type and the [`Facet`] trait
//! - [`discovery`] — typed lookup by kind
//! - [`credentials`] — [`GithubCredentials`] and its resolution
//! - [`github`] — the [`GitHub`] aggregator
//! - [`facets`] — child facets (mergify, PR lint, PR template, dependabot, workflow)
//! - [`manifest`] — YAML manifest loading
//! - [`error`] — [`ScaffoldError`]

pub mod component;
pub mod credentials;
pub mod discovery;
pub mod error;
pub mod facets;
pub mod github;
pub mod manifest;
pub mod project;
pub mod types;

pub use component::{Component, Facet};
pub use credentials::{AppOptions, GithubCredentials, DEFAULT_TOKEN_SECRET};
pub use error::ScaffoldError;
pub use github::{GitHub, GitHubOptions};
pub use manifest::{load_manifest, parse_manifest, Manifest, WorkflowSpec};
pub use project::{Project, Registration};
pub use types::{ComponentId, ComponentKind, ProjectId, ProjectName};
