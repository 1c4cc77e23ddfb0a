//! # Menu Core - Domain Module
//! 
//! Domain entities for the menu application.

pub mod menu;
pub mod menu_item;
pub mod menu_node;
pub mod rendered;

// Re-export all entities
pub use menu::Menu;
pub use menu_item::MenuItemRecord;
pub use menu_node::MenuNode;
pub use rendered::{MenuSnapshot, RenderedMenu};
