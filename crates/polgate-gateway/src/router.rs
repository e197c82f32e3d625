//! Axum router wiring.
//!
//! Ops endpoints are served directly. Every other request goes through the
//! constraint stage and then to the downstream pipeline.

use axum::{middleware, routing::get, Router};

use crate::{app_state::AppState, dispatch, ops};

pub fn build_router(state: AppState, downstream: Router) -> Router {
    let pipeline = downstream.layer(middleware::from_fn_with_state(
        state.clone(),
        dispatch::enforce,
    ));

    Router::new()
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
        .fallback_service(pipeline)
}

/// Stand-in for the proxy application: acknowledges whatever reaches it.
pub fn placeholder_downstream() -> Router {
    Router::new().fallback(|| async { "OK" })
}
