//! Common types

/// Primary key of a menu row.
pub type MenuId = i64;

/// Primary key of a menu item row, unique within the whole store.
pub type ItemId = i64;
