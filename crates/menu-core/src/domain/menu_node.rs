// ============================================================================
// Menu Core - Menu Node
// File: crates/menu-core/src/domain/menu_node.rs
// Description: Materialized tree node built fresh for every render
// ============================================================================

use serde::Serialize;

use super::MenuItemRecord;

/// One node of the rendered menu tree. Children are owned exclusively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuNode {
    #[serde(flatten)]
    pub item: MenuItemRecord,
    pub children: Vec<MenuNode>,
    pub active: bool,
    pub expanded: bool,
}

impl MenuNode {
    pub fn new(item: MenuItemRecord) -> Self {
        Self {
            item,
            children: Vec::new(),
            active: false,
            expanded: false,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Pre-order visit of this node and all of its descendants.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a MenuNode)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }

    pub fn walk_mut(&mut self, visit: &mut impl FnMut(&mut MenuNode)) {
        visit(self);
        for child in &mut self.children {
            child.walk_mut(visit);
        }
    }

    /// Number of nodes in this subtree, itself included.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(MenuNode::count).sum::<usize>()
    }
}
