// ============================================================================
// Menu API - Menu Handlers
// File: crates/menu-api/src/handlers/menu.rs
// ============================================================================
//! Rendered menu endpoint

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::info;
use validator::Validate;

use menu_core::repositories::MenuRepository;

use crate::dto::{DrawMenuRequest, MenuDto, MenuQuery};
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Draw menu handler - GET /api/v1/menus/{name}?path=/current/page/
pub async fn draw_menu<R: MenuRepository + 'static>(
    State(state): State<AppState<R>>,
    Path(name): Path<String>,
    Query(query): Query<MenuQuery>,
) -> Result<Json<ApiResponse<MenuDto>>, ApiError> {
    let request = DrawMenuRequest { name, path: query.path };
    request.validate()?;

    info!("Drawing menu {} for path {:?}", request.name, request.path);

    let service = &state.menu_service;
    let rendered = service.draw_menu(&request.name, request.path.as_deref()).await?;
    let dto = MenuDto::from_rendered(rendered, |item| service.href(item));

    Ok(Json(ApiResponse::success(dto)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use menu_core::domain::{Menu, MenuItemRecord, MenuSnapshot};
    use menu_core::repositories::MockMenuRepository;
    use menu_core::routing::RouteTable;
    use menu_core::services::MenuService;
    use menu_core::DomainError;

    use crate::{build_router, AppState};

    fn snapshot() -> MenuSnapshot {
        let item = |id, title: &str| MenuItemRecord::new(id, title.to_string()).unwrap();
        MenuSnapshot {
            menu: Some(Menu::new(1, "main_menu".to_string(), String::new()).unwrap()),
            items: vec![
                item(1, "Home").with_named_url("home"),
                item(2, "About").with_order(1).with_named_url("about"),
                item(3, "Team").with_parent(2),
                item(4, "Docs").with_order(2).with_raw_url("https://docs.example.com").open_in_new_tab(),
            ],
        }
    }

    fn app(repo: MockMenuRepository) -> axum::Router {
        let routes = RouteTable::from_pairs([("home", "/"), ("about", "/about/")]).unwrap();
        let service = MenuService::new(Arc::new(repo), Arc::new(routes), "#".to_string());
        build_router(AppState::new(service))
    }

    async fn get(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_draw_menu_returns_marked_tree() {
        let mut repo = MockMenuRepository::new();
        repo.expect_fetch_items()
            .withf(|name: &str| name == "main_menu")
            .returning(|_| Ok(snapshot()));

        let (status, body) = get(app(repo), "/api/v1/menus/main_menu?path=/about/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        let data = &body["data"];
        assert_eq!(data["menu"]["title"], "main_menu");
        assert_eq!(data["current_route"], "about");

        let items = data["items"].as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["href"], "/");
        assert_eq!(items[0]["expanded"], false);
        assert_eq!(items[1]["active"], true);
        assert_eq!(items[1]["children"][0]["title"], "Team");
        assert_eq!(items[1]["children"][0]["href"], "#");
        assert_eq!(items[1]["children"][0]["expanded"], true);
        assert_eq!(items[2]["href"], "https://docs.example.com");
        assert_eq!(items[2]["open_in_new_tab"], true);
    }

    #[tokio::test]
    async fn test_unknown_menu_is_empty() {
        let mut repo = MockMenuRepository::new();
        repo.expect_fetch_items().returning(|_| Ok(MenuSnapshot::empty()));

        let (status, body) = get(app(repo), "/api/v1/menus/nope").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["data"]["menu"].is_null());
        assert_eq!(body["data"]["items"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_relative_path_rejected() {
        let mut repo = MockMenuRepository::new();
        repo.expect_fetch_items().never();

        let (status, body) = get(app(repo), "/api/v1/menus/main_menu?path=about").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_overlong_name_rejected() {
        let mut repo = MockMenuRepository::new();
        repo.expect_fetch_items().never();

        let uri = format!("/api/v1/menus/{}", "m".repeat(101));
        let (status, body) = get(app(repo), &uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_database_error_is_500() {
        let mut repo = MockMenuRepository::new();
        repo.expect_fetch_items()
            .returning(|_| Err(DomainError::DatabaseError("timeout".to_string())));

        let (status, body) = get(app(repo), "/api/v1/menus/main_menu").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "DATABASE_ERROR");
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get(app(MockMenuRepository::new()), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }
}
