use std::sync::Arc;

use menu_core::repositories::MenuRepository;
use menu_core::routing::RouteTable;
use menu_core::services::MenuService;

pub struct AppState<R: MenuRepository> {
    pub menu_service: Arc<MenuService<R, RouteTable>>,
}

impl<R: MenuRepository> AppState<R> {
    pub fn new(menu_service: MenuService<R, RouteTable>) -> Self {
        Self { menu_service: Arc::new(menu_service) }
    }
}

// manual impl: derive would require R: Clone
impl<R: MenuRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self { menu_service: self.menu_service.clone() }
    }
}
