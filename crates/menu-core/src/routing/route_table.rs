// ============================================================================
// Menu Core - Route Table
// File: crates/menu-core/src/routing/route_table.rs
// Description: Ordered table of named routes used for URL resolution
// ============================================================================

use std::collections::HashMap;

use regex::Regex;
use tracing::debug;

use menu_shared::config::RouteSettings;

use super::UrlResolver;
use crate::error::DomainError;

/// A single named route.
///
/// Patterns are absolute paths. A segment written `{param}` or
/// `{converter:param}` matches a variable part of the path; known converters
/// are `str`, `int`, `slug` and `path` (the last one may span segments).
#[derive(Debug, Clone)]
pub struct Route {
    pub name: String,
    pub pattern: String,
    matcher: Regex,
    has_params: bool,
}

impl Route {
    pub fn new(name: &str, pattern: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidRoutePattern {
            name: name.to_string(),
            pattern: pattern.to_string(),
        };

        if name.trim().is_empty() || !pattern.starts_with('/') {
            return Err(invalid());
        }

        let mut has_params = false;
        let mut parts = Vec::new();
        for segment in pattern.split('/') {
            match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                Some(param) => {
                    parts.push(converter_regex(param).ok_or_else(invalid)?);
                    has_params = true;
                }
                None if segment.contains('{') || segment.contains('}') => return Err(invalid()),
                None => parts.push(regex::escape(segment)),
            }
        }

        let matcher = Regex::new(&format!("^{}$", parts.join("/"))).map_err(|_| invalid())?;

        Ok(Self {
            name: name.to_string(),
            pattern: pattern.to_string(),
            matcher,
            has_params,
        })
    }

    pub fn matches(&self, path: &str) -> bool {
        self.matcher.is_match(path)
    }

    pub fn has_params(&self) -> bool {
        self.has_params
    }
}

fn converter_regex(param: &str) -> Option<String> {
    let (converter, name) = param.split_once(':').unwrap_or(("str", param));
    let valid_name = !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid_name {
        return None;
    }

    let regex = match converter {
        "str" => "[^/]+",
        "int" => "[0-9]+",
        "slug" => "[-a-zA-Z0-9_]+",
        "path" => ".+",
        _ => return None,
    };
    Some(regex.to_string())
}

/// Named routes in declaration order. The first matching route wins.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
    by_name: HashMap<String, usize>,
}

impl RouteTable {
    pub fn new(settings: &[RouteSettings]) -> Result<Self, DomainError> {
        Self::from_pairs(settings.iter().map(|r| (r.name.as_str(), r.pattern.as_str())))
    }

    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut table = Self::default();
        for (name, pattern) in pairs {
            table.push(Route::new(name, pattern)?)?;
        }
        Ok(table)
    }

    fn push(&mut self, route: Route) -> Result<(), DomainError> {
        if self.by_name.contains_key(&route.name) {
            return Err(DomainError::DuplicateRouteName(route.name));
        }
        self.by_name.insert(route.name.clone(), self.routes.len());
        self.routes.push(route);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Route> {
        self.by_name.get(name).map(|&i| &self.routes[i])
    }
}

impl UrlResolver for RouteTable {
    fn resolve_current_route(&self, path: &str) -> Option<String> {
        let route = self.routes.iter().find(|r| r.matches(path));
        if route.is_none() {
            debug!("No route matches path {}", path);
        }
        route.map(|r| r.name.clone())
    }

    fn resolve_named_url(&self, name: &str) -> Option<String> {
        self.get(name)
            .filter(|r| !r.has_params())
            .map(|r| r.pattern.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::from_pairs([
            ("home", "/"),
            ("about", "/about/"),
            ("blog:index", "/blog/"),
            ("blog:archive", "/blog/archive/{int:year}/"),
            ("blog:detail", "/blog/{slug:slug}/"),
            ("files", "/files/{path:rest}"),
        ])
        .unwrap()
    }

    #[test]
    fn test_resolve_static_paths() {
        let routes = table();
        assert_eq!(routes.resolve_current_route("/"), Some("home".to_string()));
        assert_eq!(routes.resolve_current_route("/about/"), Some("about".to_string()));
        assert_eq!(routes.resolve_current_route("/about"), None);
        assert_eq!(routes.resolve_current_route("/contact/"), None);
    }

    #[test]
    fn test_resolve_parameterized_paths_in_order() {
        let routes = table();
        assert_eq!(routes.resolve_current_route("/blog/archive/2024/"), Some("blog:archive".to_string()));
        assert_eq!(routes.resolve_current_route("/blog/first-post/"), Some("blog:detail".to_string()));
        assert_eq!(routes.resolve_current_route("/blog/a/b/"), None);
        assert_eq!(routes.resolve_current_route("/files/a/b/c.txt"), Some("files".to_string()));
    }

    #[test]
    fn test_reverse_only_parameterless_routes() {
        let routes = table();
        assert_eq!(routes.resolve_named_url("about"), Some("/about/".to_string()));
        assert_eq!(routes.resolve_named_url("blog:index"), Some("/blog/".to_string()));
        assert_eq!(routes.resolve_named_url("blog:detail"), None);
        assert_eq!(routes.resolve_named_url("unknown"), None);
    }

    #[test]
    fn test_pattern_special_characters_are_literal() {
        let routes = RouteTable::from_pairs([("report", "/report.v1/")]).unwrap();
        assert!(routes.resolve_current_route("/report.v1/").is_some());
        assert!(routes.resolve_current_route("/reportXv1/").is_none());
    }

    #[test]
    fn test_invalid_patterns_rejected() {
        assert!(RouteTable::from_pairs([("rel", "about/")]).is_err());
        assert!(RouteTable::from_pairs([("open", "/a/{id/")]).is_err());
        assert!(RouteTable::from_pairs([("conv", "/a/{uuid:id}/")]).is_err());
        assert!(RouteTable::from_pairs([("blank", "/a/{}/")]).is_err());
        assert!(RouteTable::from_pairs([("", "/")]).is_err());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = RouteTable::from_pairs([("home", "/"), ("home", "/index/")]);
        assert!(matches!(result, Err(DomainError::DuplicateRouteName(name)) if name == "home"));
    }

    #[test]
    fn test_from_settings() {
        let settings = vec![RouteSettings { name: "about".into(), pattern: "/about/".into() }];
        let routes = RouteTable::new(&settings).unwrap();
        assert_eq!(routes.len(), 1);
        assert!(!routes.is_empty());
    }
}
