// ============================================================================
// Menu Core - Active-Path Marker
// File: crates/menu-core/src/tree/marker.rs
// Description: Active node detection and expansion along the active path
// ============================================================================

use crate::domain::{MenuItemRecord, MenuNode};

/// Mark the node for the current page as active and expand its neighborhood.
///
/// All flags are cleared first, so repeated calls give the same result. The
/// forest is walked depth-first in sibling order and the first node that
/// matches wins; later matches are ignored. A node matches when its route name
/// equals `current_route`, or else when its raw URL equals `current_path`
/// exactly.
///
/// The active node, each of its ancestors, and each of its direct children
/// get `expanded = true`. Returns the child-index path from the root list to
/// the active node, or `None` when nothing matched.
pub fn mark_active(
    roots: &mut [MenuNode],
    current_route: Option<&str>,
    current_path: Option<&str>,
) -> Option<Vec<usize>> {
    for root in roots.iter_mut() {
        root.walk_mut(&mut |node| {
            node.active = false;
            node.expanded = false;
        });
    }

    let mut trail = Vec::new();
    if !find_active(roots, current_route, current_path, &mut trail) {
        return None;
    }

    let (&last, ancestors) = trail.split_last()?;
    let mut level = roots;
    for &slot in ancestors {
        let node = level.get_mut(slot)?;
        node.expanded = true;
        level = node.children.as_mut_slice();
    }

    let active = level.get_mut(last)?;
    active.active = true;
    active.expanded = true;
    for child in &mut active.children {
        child.expanded = true;
    }

    Some(trail)
}

/// Pre-order search. `trail` is the ancestor chain: pushed on the way down,
/// popped on return, and left pointing at the match when one is found.
fn find_active(
    nodes: &[MenuNode],
    current_route: Option<&str>,
    current_path: Option<&str>,
    trail: &mut Vec<usize>,
) -> bool {
    for (slot, node) in nodes.iter().enumerate() {
        trail.push(slot);
        if is_match(&node.item, current_route, current_path)
            || find_active(&node.children, current_route, current_path, trail)
        {
            return true;
        }
        trail.pop();
    }
    false
}

fn is_match(item: &MenuItemRecord, current_route: Option<&str>, current_path: Option<&str>) -> bool {
    if let (Some(name), Some(route)) = (item.route_name(), current_route) {
        if name == route {
            return true;
        }
    }
    matches!((item.literal_url(), current_path), (Some(url), Some(path)) if url == path)
}
