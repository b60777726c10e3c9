use axum::http::StatusCode;

/// Liveness probe. Says nothing about database reachability; a handler that
/// touches the pool reports that through its own error mapping.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is live", content_type = "text/plain", body = String)
    ),
    tag = "Health"
)]
pub async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, "healthy")
}
