//! URL resolution: current path -> route name, route name -> URL

pub mod route_table;

pub use route_table::RouteTable;

/// Resolves request paths and named routes.
///
/// Failing to resolve is an expected outcome and is reported as `None`.
pub trait UrlResolver: Send + Sync {
    /// Canonical route name for the page at `path`
    fn resolve_current_route(&self, path: &str) -> Option<String>;

    /// Concrete URL of a named route that takes no parameters
    fn resolve_named_url(&self, name: &str) -> Option<String>;
}
