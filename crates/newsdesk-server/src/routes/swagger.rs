//! OpenAPI Documentation

use utoipa::OpenApi;

use super::proxy::{ErrorResponse, GenerateRequest, GenerateResponse};

#[derive(OpenApi)]
#[openapi(
    paths(super::proxy::proxy),
    components(schemas(GenerateRequest, GenerateResponse, ErrorResponse)),
    tags(
        (name = "Proxy", description = "Gemini relay with the Korean news-summary persona")
    )
)]
pub struct ApiDoc;
