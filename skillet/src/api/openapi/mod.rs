//! Defines the OpenAPI document for the entire API, plus commonly used
//! OpenAPI parameters and responses to be used in conjunction with the
//! [`utoipa::path`] proc macro on actix handlers.

use actix_web::{get, web, Scope};
use skillet_core::api_models;
use utoipa::OpenApi;

use crate::api::endpoints::{health, home, recipes};
use crate::api::errors::{EndpointResponseBuilder, EndpointResult};

pub mod param;
pub mod response;



/// OpenAPI documentation for all endpoints, compiled at build time
/// from their [`utoipa::path`] annotations.
#[derive(OpenApi)]
#[openapi(
    paths(
        home::get_home_page,
        recipes::get_recipe_by_id,
        recipes::get_recipes_by_category,
        recipes::search_recipes,
        health::ping,
    ),
    components(
        schemas(
            api_models::ErrorReason,
            api_models::ResponseWithErrorReason,

            api_models::PingResponse,

            api_models::RecipeAuthor,
            api_models::RecipeCategory,
            api_models::Recipe,
            api_models::RecipeListResponse,
            api_models::RecipeResponse,
            api_models::RecipeSearchResponse,
        ),
    ),
    info(
        title = "Skillet API",
        description = "Public recipe browsing API for the Skillet site."
    ),
    servers(
        (
            url = "/",
            description = "This server"
        )
    )
)]
pub struct ApiDocumentation;



/// Get the OpenAPI schema document for this API, as JSON.
#[get("/openapi.json")]
pub async fn openapi_json() -> EndpointResult {
    EndpointResponseBuilder::ok()
        .with_json_body(ApiDocumentation::openapi())
        .build()
}


pub fn api_docs_router() -> Scope {
    web::scope("/api-docs").service(openapi_json)
}
