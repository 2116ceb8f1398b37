//! The closed set of component kinds a project can hold.
//!
//! Every concrete facet is one variant of [`Component`]. Discovery projects a
//! component back onto its concrete type with [`Facet::from_component`], a
//! plain pattern match, so there is no runtime type inspection anywhere.

use crate::facets::{Dependabot, Mergify, PullRequestLint, PullRequestTemplate, Workflow};
use crate::github::GitHub;
use crate::types::{ComponentKind, ProjectId};

/// A registered unit of project configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    GitHub(GitHub),
    Mergify(Mergify),
    PullRequestLint(PullRequestLint),
    PullRequestTemplate(PullRequestTemplate),
    Dependabot(Dependabot),
    Workflow(Workflow),
}

impl Component {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::GitHub(_) => ComponentKind::GitHub,
            Component::Mergify(_) => ComponentKind::Mergify,
            Component::PullRequestLint(_) => ComponentKind::PullRequestLint,
            Component::PullRequestTemplate(_) => ComponentKind::PullRequestTemplate,
            Component::Dependabot(_) => ComponentKind::Dependabot,
            Component::Workflow(_) => ComponentKind::Workflow,
        }
    }

    /// Back-reference to the owning project.
    pub fn project(&self) -> ProjectId {
        match self {
            Component::GitHub(c) => c.project(),
            Component::Mergify(c) => c.project(),
            Component::PullRequestLint(c) => c.project(),
            Component::PullRequestTemplate(c) => c.project(),
            Component::Dependabot(c) => c.project(),
            Component::Workflow(c) => c.project(),
        }
    }

    /// Short human-readable description, used for listings.
    pub fn label(&self) -> String {
        match self {
            Component::GitHub(c) => format!(
                "workflows {}, credentials {}",
                if c.workflows_enabled() { "enabled" } else { "disabled" },
                c.projen_credentials().describe()
            ),
            Component::Mergify(c) => format!("{} rule(s)", c.rules().len()),
            Component::PullRequestLint(c) => {
                if c.options().semantic_title {
                    format!("semantic title: {}", c.options().types.join(", "))
                } else {
                    "semantic title off".to_string()
                }
            }
            Component::PullRequestTemplate(c) => format!("{} line(s)", c.lines().len()),
            Component::Dependabot(c) => format!("{} updates", c.options().schedule_interval),
            Component::Workflow(c) => c.name().to_string(),
        }
    }
}

/// Implemented by every concrete component type.
pub trait Facet: Sized {
    /// Capability tag of this facet type.
    const KIND: ComponentKind;

    /// Project this facet was constructed for. Fixed at construction.
    fn project(&self) -> ProjectId;

    fn into_component(self) -> Component;

    fn from_component(component: &Component) -> Option<&Self>;

    fn from_component_mut(component: &mut Component) -> Option<&mut Self>;
}

macro_rules! impl_facet {
    ($ty:ty, $variant:ident) => {
        impl Facet for $ty {
            const KIND: ComponentKind = ComponentKind::$variant;

            fn project(&self) -> ProjectId {
                self.project
            }

            fn into_component(self) -> Component {
                Component::$variant(self)
            }

            fn from_component(component: &Component) -> Option<&Self> {
                match component {
                    Component::$variant(c) => Some(c),
                    _ => None,
                }
            }

            fn from_component_mut(component: &mut Component) -> Option<&mut Self> {
                match component {
                    Component::$variant(c) => Some(c),
                    _ => None,
                }
            }
        }
    };
}

impl_facet!(GitHub, GitHub);
impl_facet!(Mergify, Mergify);
impl_facet!(PullRequestLint, PullRequestLint);
impl_facet!(PullRequestTemplate, PullRequestTemplate);
impl_facet!(Dependabot, Dependabot);
impl_facet!(Workflow, Workflow);
