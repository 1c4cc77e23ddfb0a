//! Store snapshot and render output

use serde::Serialize;

use super::{Menu, MenuItemRecord, MenuNode};

/// Everything the store returns for one menu name, fetched in one query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuSnapshot {
    pub menu: Option<Menu>,
    pub items: Vec<MenuItemRecord>,
}

impl MenuSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Annotated forest handed to the templating layer
#[derive(Debug, Clone, Serialize)]
pub struct RenderedMenu {
    pub menu: Option<Menu>,
    pub roots: Vec<MenuNode>,
    pub current_path: Option<String>,
    pub current_route: Option<String>,
}

impl RenderedMenu {
    pub fn active_node(&self) -> Option<&MenuNode> {
        let mut found = None;
        for root in &self.roots {
            root.walk(&mut |node| {
                if found.is_none() && node.active {
                    found = Some(node);
                }
            });
        }
        found
    }

    pub fn node_count(&self) -> usize {
        self.roots.iter().map(MenuNode::count).sum()
    }
}
