mod doc;
mod routes;
mod utils;

use axum::{Router, routing::get};
use log::info;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::doc::ApiDoc;
use crate::utils::shutdown::shutdown_signal;

const DEFAULT_PORT: u16 = 3000;

/// Builds the application router with every route registered explicitly.
///
/// All routes are public: no authentication middleware is attached and the
/// permissive CORS layer accepts requests from any origin. Requests that
/// match no route (or match with the wrong method) are answered by the
/// router itself with 404/405.
fn app() -> Router {
    Router::new()
        .route("/hello", get(routes::hello::hello))
        .route("/health", get(routes::health::health))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(CompressionLayer::new()),
        )
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let port = std::env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .unwrap();
    info!("Running axum on http://localhost:{port}");

    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}
