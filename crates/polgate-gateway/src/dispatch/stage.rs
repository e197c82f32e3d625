//! The constraint stage: decides per request whether to forward or respond.

use std::sync::Arc;
use std::time::Instant;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::request::Parts;
use axum::http::Method;
use axum::middleware::Next;
use axum::response::Response;

use polgate_core::{
    invoke, ObjectWrite, Passthrough, PolicyRegistry, Rejection, RequestDescriptor,
    ValidationOutcome,
};

use crate::app_state::AppState;
use crate::metadata::PolicyResolver;
use crate::obs::metrics::GatewayMetrics;

/// Pipeline decision for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageDecision {
    /// Constraint checking did not apply.
    Skip(Passthrough),
    /// The validator accepted the write.
    Allow,
    /// Emit this response instead of calling the next stage.
    Respond(Rejection),
}

pub struct ConstraintStage {
    write_methods: Vec<Method>,
    registry: Arc<PolicyRegistry>,
    resolver: PolicyResolver,
    metrics: Arc<GatewayMetrics>,
}

impl ConstraintStage {
    pub fn new(
        write_methods: Vec<Method>,
        registry: Arc<PolicyRegistry>,
        resolver: PolicyResolver,
        metrics: Arc<GatewayMetrics>,
    ) -> Self {
        Self {
            write_methods,
            registry,
            resolver,
            metrics,
        }
    }

    /// Parse, resolve, select, validate. Terminal in one pass.
    pub async fn evaluate(&self, parts: &Parts) -> StageDecision {
        let target = match self.target(parts) {
            Ok(t) => t,
            Err(reason) => {
                tracing::debug!(method = %parts.method, path = %parts.uri.path(), reason = reason.as_str(), "constraints not applicable");
                self.metrics.passthrough.inc(&[("reason", reason.as_str())]);
                return StageDecision::Skip(reason);
            }
        };

        let started = Instant::now();
        let lookup = self
            .resolver
            .resolve_policy(&target.account, &target.container)
            .await;
        let resolved = self.registry.resolve(&lookup);
        let validator = resolved.validator();

        tracing::debug!(
            account = %target.account,
            container = %target.container,
            object = %target.object,
            policy = lookup.label(),
            validator = validator.name(),
            fallback = resolved.is_default(),
            "checking object write"
        );

        let write = ObjectWrite {
            target: &target,
            uri: &parts.uri,
            headers: &parts.headers,
        };
        let outcome = invoke(validator.handle(), &write, &target.object);

        let labels = [
            ("policy", lookup.label()),
            ("validator", validator.name()),
            ("outcome", outcome.as_str()),
        ];
        self.metrics.constraint_checks.inc(&labels);
        self.metrics
            .check_duration
            .observe(&[("validator", validator.name())], started.elapsed());

        match outcome {
            ValidationOutcome::Allowed => StageDecision::Allow,
            ValidationOutcome::Rejected(rejection) => {
                tracing::warn!(
                    account = %target.account,
                    container = %target.container,
                    object = %target.object,
                    policy = lookup.label(),
                    validator = validator.name(),
                    status = rejection.status.as_u16(),
                    "object write rejected"
                );
                StageDecision::Respond(rejection)
            }
        }
    }

    fn target(&self, parts: &Parts) -> Result<RequestDescriptor, Passthrough> {
        if !self.write_methods.contains(&parts.method) {
            return Err(Passthrough::Method);
        }
        RequestDescriptor::parse(&parts.method, parts.uri.path())
    }
}

/// Axum middleware wrapping the downstream pipeline.
pub async fn enforce(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let (parts, body) = req.into_parts();
    match state.stage().evaluate(&parts).await {
        StageDecision::Skip(_) | StageDecision::Allow => {
            next.run(Request::from_parts(parts, body)).await
        }
        StageDecision::Respond(rejection) => rejection_response(rejection),
    }
}

/// Emit a validator's rejection verbatim.
pub fn rejection_response(rejection: Rejection) -> Response {
    let mut resp = Response::new(Body::from(rejection.body));
    *resp.status_mut() = rejection.status;
    *resp.headers_mut() = rejection.headers;
    resp
}
