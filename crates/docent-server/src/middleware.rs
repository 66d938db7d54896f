//! Middleware for the REST API server.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::info;

/// Create CORS middleware.
///
/// Origins come from the comma-separated `DOCENT_ALLOWED_ORIGINS` variable;
/// when unset, any origin is allowed.
pub fn cors_layer() -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    match std::env::var("DOCENT_ALLOWED_ORIGINS") {
        Ok(raw) if !raw.trim().is_empty() => {
            let origins: Vec<HeaderValue> = raw
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .filter_map(|origin| origin.parse().ok())
                .collect();
            info!(origins = origins.len(), "CORS restricted to configured origins");
            layer.allow_origin(AllowOrigin::list(origins))
        }
        _ => layer.allow_origin(Any),
    }
}

/// Request logging middleware.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = std::time::Instant::now();

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();

    info!(
        method = %method,
        uri = %uri,
        status = %status.as_u16(),
        duration_ms = %duration.as_millis(),
        "Request completed"
    );

    response
}
