//! OpenAPI specification for the relay API

use utoipa::OpenApi;

use crate::{
    error::ErrorResponse,
    generation::{GenerateRequest, GenerationType},
};

/// OpenAPI specification for the Genrelay API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Genrelay API",
        version = "1.0.0",
        description = "Relays tagged generation requests to fixed Gemini endpoints using a server-held API key"
    ),
    paths(crate::routes::generate::generate),
    components(schemas(GenerateRequest, GenerationType, ErrorResponse)),
    tags(
        (name = "Generation", description = "Generative AI relay")
    )
)]
pub struct RelayApiDoc;
