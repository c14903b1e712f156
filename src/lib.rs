//! Mediarack: media catalog CRUD service over PostgreSQL.

pub mod config;
pub mod error;
pub mod model;
pub mod state;
pub mod store;
pub mod service;
pub mod handlers;
pub mod routes;

pub use config::AppConfig;
pub use error::AppError;
pub use model::{MediaInput, MediaItem};
pub use state::AppState;
pub use store::{connect, ensure_database_exists, ensure_media_table};
pub use routes::{app_router, common_routes, media_routes};
pub use service::{MediaService, RequestValidator};
