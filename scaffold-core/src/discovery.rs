//! Typed discovery over a project's components.
//!
//! Facets are optional and attach themselves as they are created, so they are
//! looked up structurally by kind instead of through a pre-declared index.
//! Every call re-derives its answer from the project's current contents.

use std::cmp::Ordering;

use crate::component::Facet;
use crate::project::Project;
use crate::types::ComponentId;

/// First component of kind `T` in registration order. Absence is a normal
/// outcome.
pub fn find_singleton<T: Facet>(project: &Project) -> Option<(ComponentId, &T)> {
    project
        .components()
        .iter()
        .enumerate()
        .find_map(|(index, c)| T::from_component(c).map(|t| (ComponentId(index), t)))
}

/// Every component of kind `T`, in registration order.
pub fn find_all<T: Facet>(project: &Project) -> Vec<(ComponentId, &T)> {
    project
        .components()
        .iter()
        .enumerate()
        .filter_map(|(index, c)| T::from_component(c).map(|t| (ComponentId(index), t)))
        .collect()
}

/// Every component of kind `T`, ordered by `compare`. The sort is stable, so
/// equal elements keep registration order.
pub fn find_all_sorted_by<T, F>(project: &Project, mut compare: F) -> Vec<(ComponentId, &T)>
where
    T: Facet,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut found = find_all::<T>(project);
    found.sort_by(|(_, a), (_, b)| compare(*a, *b));
    found
}
