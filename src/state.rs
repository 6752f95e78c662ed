//! Shared application state for all routes: the storage context plus the route listing.

use crate::db::Backend;
use crate::routes::Sitemap;
use sqlx::AnyPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: AnyPool,
    pub backend: Backend,
    /// Built alongside the router; served by `GET /`.
    pub sitemap: Arc<Sitemap>,
}

impl AppState {
    pub fn new(pool: AnyPool, backend: Backend, sitemap: Sitemap) -> Self {
        Self {
            pool,
            backend,
            sitemap: Arc::new(sitemap),
        }
    }
}
