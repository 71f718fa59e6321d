use axum::http::StatusCode;

/// Returns the fixed greeting. Nothing is read from the request, so headers,
/// query parameters, and bodies are ignored and every call produces the same
/// response.
#[utoipa::path(
    get,
    path = "/hello",
    responses(
        (status = 200, description = "Fixed greeting", content_type = "text/plain", body = String)
    ),
    tag = "Hello"
)]
pub async fn hello() -> (StatusCode, &'static str) {
    (StatusCode::OK, "Hello World!")
}
