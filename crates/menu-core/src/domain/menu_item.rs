// ============================================================================
// Menu Core - Menu Item Entity
// File: crates/menu-core/src/domain/menu_item.rs
// Description: Flat, parent-referencing menu item record
// ============================================================================

use serde::{Deserialize, Serialize};
use validator::Validate;

use menu_shared::ItemId;

use crate::routing::UrlResolver;

/// Menu item as loaded from the store. Hierarchy is expressed through `parent_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct MenuItemRecord {
    pub id: ItemId,
    pub parent_id: Option<ItemId>,

    /// Position among siblings, ascending
    #[validate(range(min = 0, message = "Order must not be negative"))]
    pub order: i32,

    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,

    /// Literal URL, e.g. `/about/` or `https://example.com`
    #[validate(length(max = 500, message = "Raw URL too long"))]
    pub raw_url: Option<String>,

    /// Route name without parameters, e.g. `blog:index`
    #[validate(length(max = 200, message = "Named URL too long"))]
    pub named_url: Option<String>,

    pub open_in_new_tab: bool,
}

impl MenuItemRecord {
    pub fn new(id: ItemId, title: String) -> Result<Self, validator::ValidationErrors> {
        let item = Self {
            id,
            parent_id: None,
            order: 0,
            title: title.trim().to_string(),
            raw_url: None,
            named_url: None,
            open_in_new_tab: false,
        };

        item.validate()?;
        Ok(item)
    }

    pub fn with_parent(mut self, parent_id: ItemId) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    pub fn with_raw_url(mut self, raw_url: impl Into<String>) -> Self {
        self.raw_url = Some(raw_url.into().trim().to_string());
        self
    }

    pub fn with_named_url(mut self, named_url: impl Into<String>) -> Self {
        self.named_url = Some(named_url.into().trim().to_string());
        self
    }

    pub fn open_in_new_tab(mut self) -> Self {
        self.open_in_new_tab = true;
        self
    }

    /// Route name, if one is set and non-empty
    pub fn route_name(&self) -> Option<&str> {
        self.named_url.as_deref().filter(|s| !s.is_empty())
    }

    /// Literal URL, if one is set and non-empty
    pub fn literal_url(&self) -> Option<&str> {
        self.raw_url.as_deref().filter(|s| !s.is_empty())
    }

    /// Href to render for this item.
    ///
    /// The named route is reversed first; when it is absent or cannot be
    /// reversed the raw URL is used, and when that is empty too the
    /// placeholder is returned.
    pub fn effective_url<R>(&self, resolver: &R, placeholder: &str) -> String
    where
        R: UrlResolver + ?Sized,
    {
        if let Some(name) = self.route_name() {
            if let Some(url) = resolver.resolve_named_url(name) {
                return url;
            }
            tracing::debug!("Named route {} of item {} did not reverse", name, self.id);
        }

        match self.literal_url() {
            Some(url) => url.to_string(),
            None => placeholder.to_string(),
        }
    }
}
