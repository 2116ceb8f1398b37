//! Child facets owned or created by the GitHub aggregator.
//!
//! These hold their options and a back-reference to the project; turning
//! them into files happens elsewhere.

mod dependabot;
mod mergify;
mod pull_request_lint;
mod pull_request_template;
mod workflow;

pub use dependabot::{Dependabot, DependabotOptions, ScheduleInterval, VersioningStrategy};
pub use mergify::{Mergify, MergifyOptions, MergifyRule};
pub use pull_request_lint::{PullRequestLint, PullRequestLintOptions};
pub use pull_request_template::PullRequestTemplate;
pub use workflow::{Job, Step, Workflow, WorkflowTrigger, DEFAULT_RUNNER};
