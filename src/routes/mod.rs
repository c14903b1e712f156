//! Route assembly. `app_router` is shared by the binary and the integration
//! tests so both exercise the same middleware stack.

pub mod common;
pub mod media;

pub use common::common_routes;
pub use media::media_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Full API router: common routes at the root, media routes under `/api`,
/// request tracing, and open CORS (the page may be served from elsewhere).
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api", media_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
