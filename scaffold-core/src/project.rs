//! Append-only component registry.
//!
//! # Registration protocol
//!
//! Components are plain values until they are handed to a project:
//! - [`Project::register`] — append one facet immediately
//! - [`Project::begin`] / [`Project::commit`] — stage several facets and
//!   append them all at once, or none of them
//!
//! Components are never removed. [`ComponentId`]s are positions in
//! registration order and stay valid for the life of the project.

use crate::component::{Component, Facet};
use crate::discovery;
use crate::error::ScaffoldError;
use crate::types::{ComponentId, ProjectId, ProjectName};

/// An ordered container of components.
#[derive(Debug)]
pub struct Project {
    id: ProjectId,
    name: ProjectName,
    components: Vec<Component>,
}

impl Project {
    pub fn new(name: impl Into<ProjectName>) -> Self {
        Self {
            id: ProjectId::next(),
            name: name.into(),
            components: Vec::new(),
        }
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// All components, in registration order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Append a single facet.
    ///
    /// Fails with [`ScaffoldError::ProjectMismatch`] if the facet was built
    /// for another project.
    pub fn register<T: Facet>(&mut self, facet: T) -> Result<ComponentId, ScaffoldError> {
        let mut registration = self.begin();
        let id = registration.stage(facet)?;
        self.commit(registration)?;
        Ok(id)
    }

    /// Start a staged registration. Ids handed out by the returned
    /// [`Registration`] become valid once it is committed.
    pub fn begin(&self) -> Registration {
        Registration {
            project: self.id,
            base: self.components.len(),
            staged: Vec::new(),
        }
    }

    /// Append every staged facet, in staging order.
    pub fn commit(&mut self, registration: Registration) -> Result<Vec<ComponentId>, ScaffoldError> {
        if registration.project != self.id {
            return Err(ScaffoldError::ProjectMismatch {
                expected: registration.project,
                found: self.id,
            });
        }
        if registration.base != self.components.len() {
            return Err(ScaffoldError::StaleRegistration {
                expected: registration.base,
                found: self.components.len(),
            });
        }

        let ids: Vec<ComponentId> = (registration.base..registration.base + registration.staged.len())
            .map(ComponentId)
            .collect();
        for (id, component) in ids.iter().zip(&registration.staged) {
            tracing::debug!(
                project = %self.name,
                id = %id,
                kind = %component.kind(),
                "registered component"
            );
        }
        self.components.extend(registration.staged);
        Ok(ids)
    }

    /// Typed access by handle. `None` if the id is out of range or names a
    /// component of another kind.
    pub fn get<T: Facet>(&self, id: ComponentId) -> Option<&T> {
        self.components.get(id.0).and_then(T::from_component)
    }

    /// Mutable typed access by handle. Only the facet's own contents can
    /// change; membership stays append-only.
    pub fn get_mut<T: Facet>(&mut self, id: ComponentId) -> Option<&mut T> {
        self.components.get_mut(id.0).and_then(T::from_component_mut)
    }

    /// First component of kind `T` in registration order.
    pub fn find_singleton<T: Facet>(&self) -> Option<(ComponentId, &T)> {
        discovery::find_singleton(self)
    }

    /// Every component of kind `T` in registration order.
    pub fn find_all<T: Facet>(&self) -> Vec<(ComponentId, &T)> {
        discovery::find_all(self)
    }
}

/// Facets staged for a single atomic append to a [`Project`].
#[derive(Debug)]
#[must_use = "staged components are only registered once committed"]
pub struct Registration {
    project: ProjectId,
    base: usize,
    staged: Vec<Component>,
}

impl Registration {
    /// Stage a facet and return the id it will have once committed.
    pub fn stage<T: Facet>(&mut self, facet: T) -> Result<ComponentId, ScaffoldError> {
        if facet.project() != self.project {
            return Err(ScaffoldError::ProjectMismatch {
                expected: facet.project(),
                found: self.project,
            });
        }
        let id = self.next_id();
        self.staged.push(facet.into_component());
        Ok(id)
    }

    /// Id the next staged facet will receive.
    pub fn next_id(&self) -> ComponentId {
        ComponentId(self.base + self.staged.len())
    }

    pub fn project(&self) -> ProjectId {
        self.project
    }

    pub fn len(&self) -> usize {
        self.staged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facets::{PullRequestTemplate, Workflow};

    #[test]
    fn register_appends_in_order() {
        let mut project = Project::new("app");
        let a = project.register(Workflow::new(&project, "a")).expect("register a");
        let b = project.register(Workflow::new(&project, "b")).expect("register b");
        assert_eq!(a, ComponentId(0));
        assert_eq!(b, ComponentId(1));
        assert_eq!(project.len(), 2);
        assert_eq!(project.get::<Workflow>(b).map(Workflow::name), Some("b"));
    }

    #[test]
    fn register_rejects_foreign_facet() {
        let other = Project::new("other");
        let mut project = Project::new("app");
        let err = project.register(Workflow::new(&other, "x")).unwrap_err();
        assert!(matches!(err, ScaffoldError::ProjectMismatch { .. }), "got: {err}");
        assert!(project.is_empty());
    }

    #[test]
    fn get_with_wrong_kind_is_none() {
        let mut project = Project::new("app");
        let id = project.register(Workflow::new(&project, "a")).expect("register");
        assert!(project.get::<PullRequestTemplate>(id).is_none());
        assert!(project.get::<Workflow>(ComponentId(7)).is_none());
    }

    #[test]
    fn staged_ids_match_committed_ids() {
        let mut project = Project::new("app");
        project.register(Workflow::new(&project, "first")).expect("register");

        let mut registration = project.begin();
        assert!(registration.is_empty());
        assert_eq!(registration.project(), project.id());
        let x = registration.stage(Workflow::new(&project, "x")).expect("stage x");
        let y = registration.stage(Workflow::new(&project, "y")).expect("stage y");
        assert_eq!(registration.len(), 2);
        assert_eq!(project.len(), 1, "nothing appended before commit");

        let ids = project.commit(registration).expect("commit");
        assert_eq!(ids, vec![x, y]);
        assert_eq!(project.get::<Workflow>(y).map(Workflow::name), Some("y"));
    }

    #[test]
    fn dropped_registration_leaves_project_unchanged() {
        let project = Project::new("app");
        {
            let mut registration = project.begin();
            registration.stage(Workflow::new(&project, "x")).expect("stage");
        }
        assert!(project.is_empty());
    }

    #[test]
    fn stale_registration_is_rejected() {
        let mut project = Project::new("app");
        let mut registration = project.begin();
        registration.stage(Workflow::new(&project, "late")).expect("stage");
        project.register(Workflow::new(&project, "early")).expect("register");

        let err = project.commit(registration).unwrap_err();
        assert!(matches!(err, ScaffoldError::StaleRegistration { expected: 0, found: 1 }));
        assert_eq!(project.len(), 1);
    }
}
