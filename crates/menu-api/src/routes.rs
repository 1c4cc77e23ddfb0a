//! Router assembly

use axum::{routing::get, Router};

use menu_core::repositories::MenuRepository;

use crate::handlers::{health, menu};
use crate::state::AppState;

pub fn build_router<R: MenuRepository + 'static>(state: AppState<R>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Menu routes
        .route("/api/v1/menus/{name}", get(menu::draw_menu::<R>))
        .with_state(state)
}
