// ============================================================================
// Menu Core - Menu Entity
// File: crates/menu-core/src/domain/menu.rs
// Description: Named container of menu items
// ============================================================================

use serde::{Deserialize, Serialize};
use validator::Validate;

use menu_shared::MenuId;

/// Menu entity, the identity handed to the templating layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Menu {
    pub id: MenuId,

    /// Internal name, used to look the menu up
    #[validate(length(min = 2, max = 100, message = "Menu name must be between 2 and 100 characters"))]
    pub name: String,

    #[validate(length(max = 200, message = "Menu title too long"))]
    pub title: String,
}

impl Menu {
    pub fn new(id: MenuId, name: String, title: String) -> Result<Self, validator::ValidationErrors> {
        let menu = Self {
            id,
            name: name.trim().to_string(),
            title: title.trim().to_string(),
        };

        menu.validate()?;
        Ok(menu)
    }

    /// Human-readable title, falling back to the internal name
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.name
        } else {
            &self.title
        }
    }
}
