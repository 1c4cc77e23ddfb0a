//! # Menu Core
//! 
//! Domain entities, tree assembly, active-path marking, route resolution,
//! and repository traits for the menu application.

pub mod domain;
pub mod tree;
pub mod routing;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
pub use routing::{RouteTable, UrlResolver};
pub use tree::{build_tree, mark_active};
