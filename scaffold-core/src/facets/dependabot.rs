//! Dependency update bot.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::project::Project;
use crate::types::ProjectId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleInterval {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl fmt::Display for ScheduleInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleInterval::Daily => write!(f, "daily"),
            ScheduleInterval::Weekly => write!(f, "weekly"),
            ScheduleInterval::Monthly => write!(f, "monthly"),
        }
    }
}

/// How version constraints are edited when a dependency is bumped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VersioningStrategy {
    /// Only update lockfiles; leave manifest constraints alone.
    #[default]
    LockfileOnly,
    Auto,
    Widen,
    Increase,
    IncreaseIfNecessary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DependabotOptions {
    pub schedule_interval: ScheduleInterval,
    pub versioning_strategy: VersioningStrategy,
    /// Skip updates of the scaffolding tool itself.
    pub ignore_projen: bool,
    pub labels: Vec<String>,
}

impl Default for DependabotOptions {
    fn default() -> Self {
        Self {
            schedule_interval: ScheduleInterval::default(),
            versioning_strategy: VersioningStrategy::default(),
            ignore_projen: true,
            labels: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependabot {
    pub(crate) project: ProjectId,
    options: DependabotOptions,
}

impl Dependabot {
    pub fn new(project: &Project, options: DependabotOptions) -> Self {
        Self {
            project: project.id(),
            options,
        }
    }

    pub fn options(&self) -> &DependabotOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let opts: DependabotOptions =
            serde_yaml::from_str("schedule_interval: weekly\nversioning_strategy: increase-if-necessary\n")
                .expect("parse");
        assert_eq!(opts.schedule_interval, ScheduleInterval::Weekly);
        assert_eq!(opts.versioning_strategy, VersioningStrategy::IncreaseIfNecessary);
        assert!(opts.ignore_projen);
        assert!(opts.labels.is_empty());
    }
}
