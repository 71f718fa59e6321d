use crate::routes::{health, hello};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(hello::hello, health::health),
    tags(
        (name = "Hello", description = "Greeting endpoints"),
        (name = "Health", description = "Liveness endpoints"),
    ),
    info(
        title = "Hello Service API",
        version = "1.0.0",
        description = "Minimal public greeting service",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
