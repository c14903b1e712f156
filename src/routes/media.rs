//! Media resource routes.

use crate::handlers::media::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn media_routes(state: AppState) -> Router {
    Router::new()
        .route("/media", get(list).post(create))
        .route(
            "/media/:id",
            get(read).put(update).delete(delete_handler),
        )
        .with_state(state)
}
