mod config;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use murmur_api::{AppStateInner, router};
use murmur_db::Database;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "murmur=debug,murmur_api=debug,murmur_db=info,tower_http=debug".into()
            }),
        )
        .init();

    let config = Config::from_env()?;
    info!(
        host = %config.host,
        port = config.port,
        db_path = %config.db_path.display(),
        db_readers = config.db_readers,
        "Starting murmur"
    );

    let db = Arc::new(Database::open(&config.db_path, config.db_readers)?);
    let app = router(Arc::new(AppStateInner::new(db)));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("murmur listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
