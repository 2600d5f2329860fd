//! Logging middleware

use std::time::Instant;

use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use tracing::{info, warn};

/// Request logging middleware
///
/// Emits one line per request with method, path, status and latency.
/// Failures other than plain 404s log at warn.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let status = response.status();
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

    if status.is_server_error() || (status.is_client_error() && status.as_u16() != 404) {
        warn!(%method, path, status = status.as_u16(), latency_ms, "request completed");
    } else {
        info!(%method, path, status = status.as_u16(), latency_ms, "request completed");
    }

    response
}
