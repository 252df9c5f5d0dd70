use actix_web::get;
use futures_util::StreamExt;
use skillet_core::api_models::RecipeListResponse;
use skillet_database::entities::recipe::RecipeQuery;

use crate::api::errors::{EndpointResponseBuilder, EndpointResult};
use crate::api::openapi;
use crate::api::traits::IntoApiModel;
use crate::state::ApplicationState;



/// Get the home page
///
/// This endpoint returns the home page document: every published recipe,
/// newest first. Unpublished recipes are never included.
///
/// A site without any published recipes produces a `200 OK` response
/// with an empty recipe list, not an error.
#[utoipa::path(
    get,
    path = "/",
    tag = "recipes",
    responses(
        (
            status = 200,
            description = "The home page document with all published recipes.",
            body = RecipeListResponse,
        ),
        openapi::response::InternalServerError,
    )
)]
#[get("/")]
pub async fn get_home_page(state: ApplicationState) -> EndpointResult {
    let mut database_connection = state.acquire_database_connection().await?;


    let mut recipe_stream = RecipeQuery::get_all_published(&mut database_connection).await;

    let mut recipes = Vec::new();
    while let Some(recipe) = recipe_stream.next().await {
        recipes.push(recipe?.into_api_model());
    }


    EndpointResponseBuilder::ok()
        .with_json_body(RecipeListResponse {
            title: "Home | Recipes".to_string(),
            recipes,
        })
        .build()
}
