use std::sync::Arc;

use axum::Router;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use configs::{AppConfig, DatabaseConfig};
use service::item::{repo::seaorm::SeaOrmItemRepository, ItemService};
use service::runtime;

use crate::errors::StartupError;
use crate::routes::{self, AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open the database, create the schema if absent, and wire the item service.
pub async fn build_state(db_cfg: &DatabaseConfig) -> Result<AppState, StartupError> {
    runtime::ensure_env(&db_cfg.url).await?;

    let db = models::db::connect_with_config(db_cfg).await?;
    migration::Migrator::up(&db, None)
        .await
        .map_err(|e| StartupError::Runtime(format!("migrations failed: {e}")))?;
    info!(event = "schema_ready", "database schema up to date");

    let repo = SeaOrmItemRepository::new(db);
    Ok(AppState::new(ItemService::new(Arc::new(repo))))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // 无法监听信号时不主动停机
        warn!(error = %e, "cannot listen for Ctrl+C; graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
}

/// Public entry: build the app and run the HTTP server until Ctrl+C
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    let state = build_state(&cfg.database).await?;
    let app: Router = routes::build_router(state, build_cors());

    let bind = cfg.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .map_err(|e| StartupError::InvalidConfig(format!("cannot bind {bind}: {e}")))?;
    let addr = listener.local_addr().map_err(anyhow::Error::from)?;
    info!(%addr, "items server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(anyhow::Error::from)?;
    Ok(())
}
