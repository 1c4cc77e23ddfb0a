//! Repository traits (ports)

pub mod menu_repository;

pub use menu_repository::MenuRepository;

#[cfg(any(test, feature = "mock"))]
pub use menu_repository::MockMenuRepository;
