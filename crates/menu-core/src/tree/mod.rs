//! Tree assembly and active-path marking

pub mod builder;
pub mod marker;

pub use builder::build_tree;
pub use marker::mark_active;
