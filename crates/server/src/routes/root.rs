use axum::http::StatusCode;

const BANNER: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));

/// Service banner: package name and version
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service name and version", content_type = "text/plain", body = String)
    ),
    tag = "Health"
)]
pub async fn root() -> (StatusCode, &'static str) {
    (StatusCode::OK, BANNER)
}
