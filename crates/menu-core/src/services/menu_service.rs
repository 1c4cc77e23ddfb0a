// ============================================================================
// Menu Core - Menu Service
// File: crates/menu-core/src/services/menu_service.rs
// ============================================================================
//! Draws a menu: fetch, assemble, mark the active path

use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::{MenuItemRecord, MenuSnapshot, RenderedMenu};
use crate::error::DomainError;
use crate::repositories::MenuRepository;
use crate::routing::UrlResolver;
use crate::tree::{build_tree, mark_active};

/// Menu rendering service. Every call builds its own forest.
pub struct MenuService<R: MenuRepository, U: UrlResolver> {
    menu_repo: Arc<R>,
    resolver: Arc<U>,
    placeholder_href: String,
}

impl<R: MenuRepository, U: UrlResolver> MenuService<R, U> {
    pub fn new(menu_repo: Arc<R>, resolver: Arc<U>, placeholder_href: String) -> Self {
        Self {
            menu_repo,
            resolver,
            placeholder_href,
        }
    }

    /// Build the annotated tree for `menu_name`.
    ///
    /// Without a request path nothing is marked active or expanded.
    pub async fn draw_menu(
        &self,
        menu_name: &str,
        request_path: Option<&str>,
    ) -> Result<RenderedMenu, DomainError> {
        let MenuSnapshot { menu, items } = self.menu_repo.fetch_items(menu_name).await?;

        if items.is_empty() {
            info!("Menu {} has no items", menu_name);
            return Ok(RenderedMenu {
                menu: None,
                roots: Vec::new(),
                current_path: request_path.map(str::to_string),
                current_route: None,
            });
        }

        let item_count = items.len();
        let mut roots = build_tree(items);
        debug!("Built menu {} with {} items and {} roots", menu_name, item_count, roots.len());

        let mut current_route = None;
        if let Some(path) = request_path {
            current_route = self.resolver.resolve_current_route(path);
            match mark_active(&mut roots, current_route.as_deref(), Some(path)) {
                Some(trail) => debug!("Active item in menu {} at depth {}", menu_name, trail.len()),
                None => debug!("No active item in menu {} for path {}", menu_name, path),
            }
        }

        Ok(RenderedMenu {
            menu,
            roots,
            current_path: request_path.map(str::to_string),
            current_route,
        })
    }

    /// Href to render for an item
    pub fn href(&self, item: &MenuItemRecord) -> String {
        item.effective_url(self.resolver.as_ref(), &self.placeholder_href)
    }
}
