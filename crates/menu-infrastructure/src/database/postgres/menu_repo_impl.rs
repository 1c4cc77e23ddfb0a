// ============================================================================
// Menu Infrastructure - PostgreSQL Menu Repository
// File: crates/menu-infrastructure/src/database/postgres/menu_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::{debug, error};

use menu_core::domain::{Menu, MenuItemRecord, MenuSnapshot};
use menu_core::error::DomainError;
use menu_core::repositories::MenuRepository;

pub struct PgMenuRepository {
    pool: PgPool,
}

impl PgMenuRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping: one item joined with its menu
#[derive(Debug, FromRow)]
struct MenuItemRow {
    pub menu_id: i64,
    pub menu_name: String,
    pub menu_title: String,
    pub id: i64,
    pub parent_id: Option<i64>,
    pub sort_order: i32,
    pub title: String,
    pub raw_url: String,
    pub named_url: String,
    pub open_in_new_tab: bool,
}

impl From<MenuItemRow> for MenuItemRecord {
    fn from(row: MenuItemRow) -> Self {
        MenuItemRecord {
            id: row.id,
            parent_id: row.parent_id,
            order: row.sort_order,
            title: row.title,
            raw_url: non_blank(row.raw_url),
            named_url: non_blank(row.named_url),
            open_in_new_tab: row.open_in_new_tab,
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Menu identity comes from the first row; no rows means no menu.
fn into_snapshot(rows: Vec<MenuItemRow>) -> MenuSnapshot {
    let menu = rows.first().map(|row| Menu {
        id: row.menu_id,
        name: row.menu_name.clone(),
        title: row.menu_title.clone(),
    });

    MenuSnapshot {
        menu,
        items: rows.into_iter().map(MenuItemRecord::from).collect(),
    }
}

#[async_trait]
impl MenuRepository for PgMenuRepository {
    async fn fetch_items(&self, menu_name: &str) -> Result<MenuSnapshot, DomainError> {
        let rows: Vec<MenuItemRow> = sqlx::query_as(
            r#"
            SELECT
                m.id AS menu_id, m.name AS menu_name, m.title AS menu_title,
                i.id, i.parent_id, i."order" AS sort_order, i.title,
                i.raw_url, i.named_url, i.open_in_new_tab
            FROM menu_items i
            JOIN menus m ON m.id = i.menu_id
            WHERE m.name = $1
            ORDER BY i.parent_id NULLS FIRST, i."order", i.id
            "#
        )
        .bind(menu_name)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error fetching menu {}: {}", menu_name, e);
            DomainError::DatabaseError(e.to_string())
        })?;

        debug!("Fetched {} items for menu {}", rows.len(), menu_name);
        Ok(into_snapshot(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, parent_id: Option<i64>, raw_url: &str, named_url: &str) -> MenuItemRow {
        MenuItemRow {
            menu_id: 7,
            menu_name: "main_menu".to_string(),
            menu_title: "Main".to_string(),
            id,
            parent_id,
            sort_order: 0,
            title: format!("Item {}", id),
            raw_url: raw_url.to_string(),
            named_url: named_url.to_string(),
            open_in_new_tab: false,
        }
    }

    #[test]
    fn test_blank_urls_become_none() {
        let record = MenuItemRecord::from(row(1, None, "", "  "));
        assert_eq!(record.raw_url, None);
        assert_eq!(record.named_url, None);

        let record = MenuItemRecord::from(row(2, Some(1), "/about/", "about"));
        assert_eq!(record.raw_url.as_deref(), Some("/about/"));
        assert_eq!(record.named_url.as_deref(), Some("about"));
        assert_eq!(record.parent_id, Some(1));
    }

    #[test]
    fn test_snapshot_takes_menu_from_first_row() {
        let snapshot = into_snapshot(vec![row(1, None, "/", ""), row(2, Some(1), "", "about")]);
        let menu = snapshot.menu.unwrap();
        assert_eq!(menu.id, 7);
        assert_eq!(menu.name, "main_menu");
        assert_eq!(snapshot.items.len(), 2);
    }

    #[test]
    fn test_no_rows_means_no_menu() {
        let snapshot = into_snapshot(Vec::new());
        assert!(snapshot.menu.is_none());
        assert!(snapshot.is_empty());
    }
}
