use std::cmp::Ordering;

use crate::system::{Space, SystemBody};

use super::shadow::ShadowEntry;
use super::state::SortMode;

/// Total ordering of two sibling bodies.
///
/// In distance mode, bodies with a live instance come first, nearest to the
/// player first; the rest fall back to orbital order. Ties end on the body
/// id so the result never depends on input order.
pub fn compare(a: &SystemBody, b: &SystemBody, mode: SortMode, space: Option<&Space>) -> Ordering {
    let by_orbit = || a.orbit_key().total_cmp(&b.orbit_key());

    let primary = match mode {
        SortMode::Orbit => by_orbit(),
        SortMode::Distance => {
            let da = space.and_then(|s| s.body_distance(a.id));
            let db = space.and_then(|s| s.body_distance(b.id));
            match (da, db) {
                (Some(da), Some(db)) => da.total_cmp(&db).then_with(by_orbit),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => by_orbit(),
            }
        }
    };

    primary.then_with(|| a.id.cmp(&b.id))
}

/// Recursively order every child list of the tree.
pub fn sort_tree(entry: &mut ShadowEntry<'_>, mode: SortMode, space: Option<&Space>) {
    entry
        .children
        .sort_by(|a, b| compare(a.body, b.body, mode, space));
    for child in &mut entry.children {
        sort_tree(child, mode, space);
    }
}
