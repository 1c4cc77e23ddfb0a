//! Request and response DTOs

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use menu_core::domain::{Menu, MenuItemRecord, MenuNode, RenderedMenu};

/// Query string of `GET /api/v1/menus/{name}`
#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    /// Path of the page the menu is drawn on
    pub path: Option<String>,
}

#[derive(Debug, Validate)]
pub struct DrawMenuRequest {
    #[validate(length(min = 1, max = 100, message = "Menu name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(
        length(max = 2048, message = "Path too long"),
        custom(function = "validate_absolute_path")
    )]
    pub path: Option<String>,
}

fn validate_absolute_path(path: &str) -> Result<(), ValidationError> {
    if path.starts_with('/') {
        Ok(())
    } else {
        let mut err = ValidationError::new("absolute_path");
        err.message = Some("Path must start with '/'".into());
        Err(err)
    }
}

#[derive(Debug, Serialize)]
pub struct MenuInfoDto {
    pub id: i64,
    pub name: String,
    pub title: String,
}

impl From<Menu> for MenuInfoDto {
    fn from(menu: Menu) -> Self {
        Self {
            title: menu.display_title().to_string(),
            id: menu.id,
            name: menu.name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MenuNodeDto {
    pub id: i64,
    pub title: String,
    pub href: String,
    pub open_in_new_tab: bool,
    pub active: bool,
    pub expanded: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuNodeDto>,
}

impl MenuNodeDto {
    fn from_node(node: MenuNode, href: &impl Fn(&MenuItemRecord) -> String) -> Self {
        Self {
            href: href(&node.item),
            id: node.item.id,
            title: node.item.title,
            open_in_new_tab: node.item.open_in_new_tab,
            active: node.active,
            expanded: node.expanded,
            children: node
                .children
                .into_iter()
                .map(|child| MenuNodeDto::from_node(child, href))
                .collect(),
        }
    }
}

/// Rendered menu as consumed by the templating layer
#[derive(Debug, Serialize)]
pub struct MenuDto {
    pub menu: Option<MenuInfoDto>,
    pub items: Vec<MenuNodeDto>,
    pub current_path: Option<String>,
    pub current_route: Option<String>,
}

impl MenuDto {
    pub fn from_rendered(rendered: RenderedMenu, href: impl Fn(&MenuItemRecord) -> String) -> Self {
        Self {
            menu: rendered.menu.map(MenuInfoDto::from),
            items: rendered
                .roots
                .into_iter()
                .map(|node| MenuNodeDto::from_node(node, &href))
                .collect(),
            current_path: rendered.current_path,
            current_route: rendered.current_route,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(path: Option<&str>) -> DrawMenuRequest {
        DrawMenuRequest { name: "main_menu".to_string(), path: path.map(str::to_string) }
    }

    #[test]
    fn test_path_must_be_absolute() {
        assert!(request(Some("/about/")).validate().is_ok());
        assert!(request(None).validate().is_ok());

        let errors = request(Some("about")).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("path"));
    }
}
