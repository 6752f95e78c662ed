//! Route registry: every route is added through here so `GET /` can list exactly what the
//! router serves.

use crate::state::AppState;
use axum::{
    extract::State,
    handler::Handler,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SitemapEntry {
    pub path: String,
    pub methods: Vec<&'static str>,
}

/// Registered paths in registration order, methods grouped per path.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Sitemap {
    pub routes: Vec<SitemapEntry>,
}

impl Sitemap {
    fn record(&mut self, method: &'static str, path: &str) {
        let display = display_path(path);
        match self.routes.iter_mut().find(|e| e.path == display) {
            Some(entry) if !entry.methods.contains(&method) => entry.methods.push(method),
            Some(_) => {}
            None => self.routes.push(SitemapEntry {
                path: display,
                methods: vec![method],
            }),
        }
    }
}

/// `/Character/:id` -> `/Character/{id}`.
fn display_path(path: &str) -> String {
    path.split('/')
        .map(|seg| match seg.strip_prefix(':') {
            Some(name) => format!("{{{name}}}"),
            None => seg.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/")
}

pub struct RouteRegistry {
    router: Router<AppState>,
    sitemap: Sitemap,
}

impl Default for RouteRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self {
            router: Router::new(),
            sitemap: Sitemap::default(),
        }
    }

    pub fn get<H, T>(mut self, path: &'static str, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        self.sitemap.record("GET", path);
        self.router = self.router.route(path, get(handler));
        self
    }

    pub fn post<H, T>(mut self, path: &'static str, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        self.sitemap.record("POST", path);
        self.router = self.router.route(path, post(handler));
        self
    }

    pub fn delete<H, T>(mut self, path: &'static str, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        self.sitemap.record("DELETE", path);
        self.router = self.router.route(path, delete(handler));
        self
    }

    pub fn finish(self) -> (Router<AppState>, Sitemap) {
        (self.router, self.sitemap)
    }
}

/// GET / : listing of every registered route with its methods.
pub async fn sitemap(State(state): State<AppState>) -> Json<Sitemap> {
    Json(state.sitemap.as_ref().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_methods_by_path_in_order() {
        let mut map = Sitemap::default();
        map.record("GET", "/");
        map.record("POST", "/favorites");
        map.record("DELETE", "/favorites/:id");
        map.record("GET", "/favorites/:id");
        map.record("GET", "/favorites/:id");
        assert_eq!(
            map.routes,
            vec![
                SitemapEntry { path: "/".into(), methods: vec!["GET"] },
                SitemapEntry { path: "/favorites".into(), methods: vec!["POST"] },
                SitemapEntry { path: "/favorites/{id}".into(), methods: vec!["DELETE", "GET"] },
            ]
        );
    }

    #[test]
    fn display_path_rewrites_params() {
        assert_eq!(display_path("/Character/:id"), "/Character/{id}");
        assert_eq!(display_path("/User/Favorites"), "/User/Favorites");
        assert_eq!(display_path("/"), "/");
    }
}
