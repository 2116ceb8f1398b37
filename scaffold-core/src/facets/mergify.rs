//! Merge-automation policy.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{invalid, ScaffoldError};
use crate::project::Project;
use crate::types::{ComponentKind, ProjectId};

/// A single merge rule: when every condition holds, run the actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergifyRule {
    pub name: String,
    pub conditions: Vec<String>,
    #[serde(default)]
    pub actions: BTreeMap<String, serde_yaml::Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MergifyOptions {
    #[serde(default)]
    pub rules: Vec<MergifyRule>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mergify {
    pub(crate) project: ProjectId,
    rules: Vec<MergifyRule>,
}

impl Mergify {
    pub fn new(project: &Project, options: MergifyOptions) -> Result<Self, ScaffoldError> {
        options.rules.iter().try_for_each(validate)?;
        Ok(Self {
            project: project.id(),
            rules: options.rules,
        })
    }

    pub fn rules(&self) -> &[MergifyRule] {
        &self.rules
    }

    pub fn add_rule(&mut self, rule: MergifyRule) -> Result<(), ScaffoldError> {
        validate(&rule)?;
        self.rules.push(rule);
        Ok(())
    }
}

fn validate(rule: &MergifyRule) -> Result<(), ScaffoldError> {
    if rule.name.trim().is_empty() {
        return Err(invalid(ComponentKind::Mergify, "rule name must not be empty"));
    }
    if rule.conditions.is_empty() {
        return Err(invalid(
            ComponentKind::Mergify,
            format!("rule '{}' needs at least one condition", rule.name),
        ));
    }
    Ok(())
}
