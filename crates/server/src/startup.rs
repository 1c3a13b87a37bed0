use std::{env, net::SocketAddr};

use axum::Router;
use configs::{AppConfig, ServerConfig};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Defaults overridden by `SERVER_HOST`/`SERVER_PORT`, for when no config
/// file is present.
pub fn config_from_env() -> AppConfig {
    let mut cfg = AppConfig::default();
    if let Ok(host) = env::var("SERVER_HOST") {
        cfg.server.host = host;
    }
    if let Some(port) = env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
        cfg.server.port = port;
    }
    cfg
}

pub fn bind_addr(server: &ServerConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", server.host, server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("{}:{}: {e}", server.host, server.port)))
}

/// Router over fresh in-memory stores.
pub fn build_app() -> Router {
    routes::build_router(AppState::in_memory(), build_cors())
}

/// Bind and serve until the listener fails.
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let addr = bind_addr(&config.server)?;
    let app = build_app();

    info!(%addr, "starting therapist service");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
