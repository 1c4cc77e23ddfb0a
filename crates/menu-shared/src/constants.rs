//! Application-wide constants

/// Href rendered for items that have neither a resolvable route nor a raw URL.
pub const PLACEHOLDER_HREF: &str = "#";

pub const DEFAULT_CONFIG_FILE: &str = "config/default";
