// ============================================================================
// Menu Core - Tree Builder
// File: crates/menu-core/src/tree/builder.rs
// Description: Flat parent-referencing records -> owned, ordered forest
// ============================================================================

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::{debug, warn};

use menu_shared::ItemId;

use crate::domain::{MenuItemRecord, MenuNode};

/// Assemble a forest from flat records and return its roots.
///
/// Records are indexed by id, parent links are resolved once into child index
/// lists, and the owned tree is materialized from those lists. A record whose
/// parent is absent from the set becomes a root. Every child list, and the root
/// list, is sorted by `order`; ties keep input order.
///
/// Parent cycles are a caller error. They are still contained: members of a
/// cycle cannot be reached from a root, so the first of them in input order is
/// promoted to a root and the cycle is cut where it closes.
pub fn build_tree(records: Vec<MenuItemRecord>) -> Vec<MenuNode> {
    if records.is_empty() {
        return Vec::new();
    }

    let mut index: HashMap<ItemId, usize> = HashMap::with_capacity(records.len());
    for (slot, record) in records.iter().enumerate() {
        match index.entry(record.id) {
            Entry::Vacant(entry) => {
                entry.insert(slot);
            }
            Entry::Occupied(_) => {
                warn!("Duplicate menu item id {}, parent lookups use its first record", record.id);
            }
        }
    }

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); records.len()];
    let mut roots = Vec::new();

    for (slot, record) in records.iter().enumerate() {
        match record.parent_id.and_then(|parent_id| index.get(&parent_id).copied()) {
            Some(parent) => children[parent].push(slot),
            None => {
                if let Some(parent_id) = record.parent_id {
                    debug!("Menu item {} references missing parent {}, treating as root", record.id, parent_id);
                }
                roots.push(slot);
            }
        }
    }

    roots.sort_by_key(|&slot| records[slot].order);
    for siblings in &mut children {
        siblings.sort_by_key(|&slot| records[slot].order);
    }

    let mut pending: Vec<Option<MenuItemRecord>> = records.into_iter().map(Some).collect();
    let mut forest: Vec<MenuNode> = roots
        .iter()
        .filter_map(|&slot| materialize(slot, &children, &mut pending))
        .collect();

    for slot in 0..pending.len() {
        if let Some(record) = &pending[slot] {
            warn!(
                "Menu item {} is part of a parent cycle (parent {:?}), promoting to root",
                record.id, record.parent_id
            );
            if let Some(node) = materialize(slot, &children, &mut pending) {
                forest.push(node);
            }
        }
    }

    forest
}

/// Move the record at `slot` and its unvisited descendants into an owned node.
/// Records already taken are skipped, which is what cuts cycles.
fn materialize(
    slot: usize,
    children: &[Vec<usize>],
    pending: &mut [Option<MenuItemRecord>],
) -> Option<MenuNode> {
    let record = pending[slot].take()?;
    let mut node = MenuNode::new(record);
    node.children = children[slot]
        .iter()
        .filter_map(|&child| materialize(child, children, pending))
        .collect();
    Some(node)
}
