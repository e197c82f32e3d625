//! polgate gateway binary.
//!
//! Loads `POLGATE_CONFIG` (default `polgate.yaml`), compiles the policy
//! registry, and serves the constraint stage in front of a placeholder
//! downstream.

use tracing_subscriber::{fmt, EnvFilter};

use polgate_core::error::{PolGateError, Result};
use polgate_gateway::{app_state, config, router};

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = config::config_path();
    let cfg = config::load_from_file(&path)?;
    let listen = cfg.gateway.listen_addr()?;

    let state = app_state::AppState::from_config(cfg)?;
    let app = router::build_router(state, router::placeholder_downstream());

    tracing::info!(%listen, config = %path, "polgate-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| PolGateError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| PolGateError::Internal(format!("server failed: {e}")))
}
