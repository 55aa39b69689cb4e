use std::net::SocketAddr;

use axum::Router;
use common::env::ensure_database_dir;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Config file when present, otherwise defaults; `DATABASE_URL` (or the
/// built-in SQLite file) fills an empty database url.
pub fn load_config() -> Result<AppConfig, StartupError> {
    let mut cfg = match configs::load_default() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(error = %e, "config file not loaded; using defaults");
            AppConfig::default()
        }
    };
    if cfg.database.url.trim().is_empty() {
        cfg.database.url = models::db::DATABASE_URL.clone();
    }
    cfg.normalize_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    Ok(cfg)
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address: {e}")))
}

/// Connect, migrate and assemble the router for `cfg`.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    ensure_database_dir(&cfg.database.url).await?;
    let db = models::db::connect_with_config(&cfg.database).await?;
    models::db::migrate(&db).await?;
    let state = ServerState::new(db, cfg)?;
    Ok(routes::build_router(state, build_cors()))
}

/// Public entry: build the app for an already loaded config and serve it
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    let app = build_app(&cfg).await?;

    let addr = bind_addr(&cfg)?;
    info!(%addr, page_size = cfg.pagination.page_size, "starting company registry");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
