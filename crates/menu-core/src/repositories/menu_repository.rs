//! Menu repository trait (port)

use async_trait::async_trait;

use crate::domain::MenuSnapshot;
use crate::error::DomainError;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// All items of the named menu plus the menu identity, loaded in one query.
    /// An unknown name yields an empty snapshot.
    async fn fetch_items(&self, menu_name: &str) -> Result<MenuSnapshot, DomainError>;
}
