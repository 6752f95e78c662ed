//! Server entry point: reads configuration from the environment, prepares the schema,
//! optionally seeds, and serves the API.

use axum::{extract::Request, ServiceExt};
use galaxy_favorites::{app, apply_seed, connect, ensure_schema, load_seed, AppConfig};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("galaxy_favorites=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let (pool, backend) = connect(&config.database_url, config.max_connections).await?;
    tracing::info!(backend = backend.name(), "connected to database");
    ensure_schema(&pool, backend).await?;

    if let Some(path) = &config.seed_path {
        let seed = load_seed(path).await?;
        let counts = apply_seed(&pool, &seed).await?;
        tracing::info!(
            users = counts.users,
            characters = counts.characters,
            planets = counts.planets,
            "seed applied"
        );
    }

    let app = app(pool, backend);
    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;
    Ok(())
}
