//! Router assembly. Every route goes through [`RouteRegistry`] so the sitemap stays complete.

mod common;
mod sitemap;

pub use common::common_routes;
pub use sitemap::{RouteRegistry, Sitemap, SitemapEntry};

use crate::db::Backend;
use crate::handlers::{
    add_favorite, delete_favorite, get_character, list_characters, list_favorites, list_planets,
    list_users, wipe_database,
};
use crate::state::AppState;
use axum::Router;
use sqlx::AnyPool;
use tower::Layer;
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};

/// Request bodies above this are rejected before reaching a handler.
pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Fully layered service: trailing slashes are trimmed before routing.
pub type App = NormalizePath<Router>;

/// Record routes: characters, users, planets, favorites, wipe, sitemap.
pub fn record_routes(registry: RouteRegistry) -> RouteRegistry {
    registry
        .get("/", sitemap::sitemap)
        .get("/Character", list_characters)
        .get("/Character/:id", get_character)
        .get("/User", list_users)
        .get("/User/Favorites", list_favorites)
        .get("/Planet", list_planets)
        .post("/favorites", add_favorite)
        .delete("/favorites/:id", delete_favorite)
        .get("/wipeall", wipe_database)
}

/// Router with state and middleware, before path normalization.
pub fn router(pool: AnyPool, backend: Backend) -> Router {
    let (routes, sitemap) = common_routes(record_routes(RouteRegistry::new())).finish();
    let state = AppState::new(pool, backend, sitemap);
    routes
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// The service `main` serves. Normalization must wrap the router; inside it would run after matching.
pub fn app(pool: AnyPool, backend: Backend) -> App {
    NormalizePathLayer::trim_trailing_slash().layer(router(pool, backend))
}
