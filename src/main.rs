//! Server binary: bootstrap the database, mount the API and the client page,
//! and serve.

use mediarack::{app_router, connect, ensure_database_exists, ensure_media_table};
use mediarack::{AppConfig, AppState};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("mediarack=info".parse()?))
        .init();

    let config = AppConfig::from_env();
    ensure_database_exists(&config.database_url).await?;
    let pool = connect(&config).await?;
    ensure_media_table(&pool).await?;

    let state = AppState { pool };
    let app = Router::new()
        .merge(app_router(state))
        .fallback_service(ServeDir::new(&config.assets_dir));

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
