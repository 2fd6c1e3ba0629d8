//! Site server: picks a store from `DATABASE_URL`, seeds default content, serves the API.

use ministry_site::{
    apply_migrations, ensure_database_exists, site_router, spawn_seeding, AppState, MemStorage,
    PgStorage, SiteConfig, Storage,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ministry_site=info,tower_http=info")),
        )
        .init();

    let config = SiteConfig::from_env()?;

    let storage: Arc<dyn Storage> = match config.database_url.as_deref() {
        Some(database_url) => {
            ensure_database_exists(database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(database_url)
                .await?;
            apply_migrations(&pool, &config.db_schema).await?;
            Arc::new(PgStorage::new(pool, config.db_schema.clone()))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; using in-memory storage, data is lost on exit");
            Arc::new(MemStorage::new())
        }
    };

    if config.seed_on_start {
        spawn_seeding(storage.clone());
    }

    let app = site_router(AppState::new(storage), config.body_limit_bytes);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
