use axum::http::StatusCode;

/// Liveness probe answering "OK" whenever the process can serve requests
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is alive", content_type = "text/plain", body = String)
    ),
    tag = "Health"
)]
pub async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}
