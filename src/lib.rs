//! Galaxy favorites: JSON REST backend over users, characters, planets and the favorites joining them.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod records;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use db::{connect, Backend};
pub use error::{ApiError, AppError, ConfigError};
pub use records::{Character, Favorite, NewFavorite, Planet, User};
pub use routes::{app, router, App};
pub use seed::{apply_seed, load_seed, SeedData};
pub use service::RecordService;
pub use state::AppState;
pub use store::{ensure_schema, wipe_all};
