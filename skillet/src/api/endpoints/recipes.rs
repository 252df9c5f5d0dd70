use actix_web::{get, web, Scope};
use futures_util::StreamExt;
use serde::Deserialize;
use skillet_core::api_models::{
    ErrorReason,
    RecipeListResponse,
    RecipeResponse,
    RecipeSearchResponse,
};
use skillet_core::ids::{CategoryId, RecipeId};
use skillet_database::entities::category::CategoryQuery;
use skillet_database::entities::recipe::RecipeQuery;
use utoipa::IntoParams;

use crate::api::endpoints::parse_id;
use crate::api::errors::{EndpointResponseBuilder, EndpointResult};
use crate::api::openapi::{self, response::AsErrorReason};
use crate::api::traits::IntoApiModel;
use crate::api::OptionalIfModifiedSince;
use crate::declare_openapi_error_reason_response;
use crate::state::ApplicationState;



declare_openapi_error_reason_response!(
    pub struct PublishedRecipeNotFound {
        description => "No published recipe exists under the requested ID. \
                        Unpublished recipes produce exactly this response as well.",
        reason => ErrorReason::recipe_not_found()
    }
);


/// Get a published recipe
///
/// This endpoint returns the page document for a single published recipe.
/// Unpublished recipes are reported as missing, making them indistinguishable
/// from IDs that don't exist at all.
///
/// The response carries a `Last-Modified` header, and the endpoint supports
/// conditional requests through the `If-Modified-Since` header.
#[utoipa::path(
    get,
    path = "/recipes/{recipe_id}",
    tag = "recipes",
    params(
        (
            "recipe_id" = i64,
            Path,
            description = "Integer ID of the recipe."
        ),
        openapi::param::IfModifiedSince,
    ),
    responses(
        (
            status = 200,
            description = "The recipe page document.",
            body = RecipeResponse,
        ),
        openapi::response::Unmodified,
        (
            status = 404,
            response = inline(AsErrorReason<PublishedRecipeNotFound>)
        ),
        openapi::response::IdUrlParameterError,
        openapi::response::InternalServerError,
    )
)]
#[get("/{recipe_id}")]
pub async fn get_recipe_by_id(
    state: ApplicationState,
    parameters: web::Path<(String,)>,
    if_modified_since: OptionalIfModifiedSince,
) -> EndpointResult {
    let mut database_connection = state.acquire_database_connection().await?;


    let target_recipe_id = parse_id::<RecipeId>(parameters.into_inner().0)?;


    let recipe =
        RecipeQuery::get_published_by_id(&mut database_connection, target_recipe_id).await?;

    let Some(recipe) = recipe else {
        return EndpointResponseBuilder::not_found()
            .with_error_reason(ErrorReason::recipe_not_found())
            .build();
    };


    let recipe_last_modified_at = recipe.last_modified_at;

    if if_modified_since.enabled_and_has_not_changed_since(&recipe_last_modified_at) {
        return EndpointResponseBuilder::not_modified()
            .with_last_modified_at(&recipe_last_modified_at)
            .build();
    }


    let page_title = format!("{} | Recipes", recipe.title);

    EndpointResponseBuilder::ok()
        .with_json_body(RecipeResponse {
            title: page_title,
            recipe: recipe.into_api_model(),
        })
        .with_last_modified_at(&recipe_last_modified_at)
        .build()
}




declare_openapi_error_reason_response!(
    pub struct CategoryHasNoPublishedRecipes {
        description => "The requested category contains no published recipes. \
                        Nonexistent categories produce exactly this response as well.",
        reason => ErrorReason::category_has_no_published_recipes()
    }
);


/// Get published recipes in a category
///
/// This endpoint returns the page document for a single category:
/// its published recipes, newest first.
///
/// A category without any published recipes responds with `404 Not Found`,
/// and so does a category ID that doesn't exist at all.
/// The two cases are deliberately not told apart.
#[utoipa::path(
    get,
    path = "/recipes/category/{category_id}",
    tag = "recipes",
    params(
        (
            "category_id" = i64,
            Path,
            description = "Integer ID of the category."
        )
    ),
    responses(
        (
            status = 200,
            description = "The category page document with its published recipes.",
            body = RecipeListResponse,
        ),
        (
            status = 404,
            response = inline(AsErrorReason<CategoryHasNoPublishedRecipes>)
        ),
        openapi::response::IdUrlParameterError,
        openapi::response::InternalServerError,
    )
)]
#[get("/category/{category_id}")]
pub async fn get_recipes_by_category(
    state: ApplicationState,
    parameters: web::Path<(String,)>,
) -> EndpointResult {
    let mut database_connection = state.acquire_database_connection().await?;


    let target_category_id = parse_id::<CategoryId>(parameters.into_inner().0)?;


    let category = CategoryQuery::get_by_id(&mut database_connection, target_category_id).await?;

    let Some(category) = category else {
        return EndpointResponseBuilder::not_found()
            .with_error_reason(ErrorReason::category_has_no_published_recipes())
            .build();
    };


    let mut recipe_stream =
        RecipeQuery::get_published_by_category(&mut database_connection, target_category_id).await;

    let mut recipes = Vec::new();
    while let Some(recipe) = recipe_stream.next().await {
        recipes.push(recipe?.into_api_model());
    }

    if recipes.is_empty() {
        return EndpointResponseBuilder::not_found()
            .with_error_reason(ErrorReason::category_has_no_published_recipes())
            .build();
    }


    EndpointResponseBuilder::ok()
        .with_json_body(RecipeListResponse {
            title: format!("{} - Category | Recipes", category.name),
            recipes,
        })
        .build()
}




declare_openapi_error_reason_response!(
    pub struct SearchQueryMissing {
        description => "The `q` query parameter is missing, empty, \
                        or contains only whitespace.",
        reason => ErrorReason::missing_search_query()
    }
);


#[derive(Deserialize, Debug, IntoParams)]
pub struct RecipeSearchParameters {
    /// Text to look for in published recipe titles and descriptions
    /// (case-insensitive).
    pub q: Option<String>,
}


/// Search published recipes
///
/// This endpoint returns the search page document: published recipes whose
/// title or description contains the `q` query parameter (case-insensitively),
/// newest first. SQL pattern characters in the query are matched literally.
///
/// A missing, empty, or whitespace-only `q` responds with `404 Not Found`.
/// A well-formed query without any matches is a valid search result,
/// producing `200 OK` with an empty recipe list.
#[utoipa::path(
    get,
    path = "/recipes/search",
    tag = "recipes",
    params(
        RecipeSearchParameters,
    ),
    responses(
        (
            status = 200,
            description = "The search page document with matching published recipes.",
            body = RecipeSearchResponse,
        ),
        (
            status = 404,
            response = inline(AsErrorReason<SearchQueryMissing>)
        ),
        openapi::response::InternalServerError,
    )
)]
#[get("/search")]
pub async fn search_recipes(
    state: ApplicationState,
    query_parameters: web::Query<RecipeSearchParameters>,
) -> EndpointResult {
    let mut database_connection = state.acquire_database_connection().await?;


    let Some(search_query) = query_parameters.into_inner().q else {
        return EndpointResponseBuilder::not_found()
            .with_error_reason(ErrorReason::missing_search_query())
            .build();
    };

    if search_query.trim().is_empty() {
        return EndpointResponseBuilder::not_found()
            .with_error_reason(ErrorReason::missing_search_query())
            .build();
    }


    let mut recipe_stream =
        RecipeQuery::search_published(&mut database_connection, &search_query).await;

    let mut recipes = Vec::new();
    while let Some(recipe) = recipe_stream.next().await {
        recipes.push(recipe?.into_api_model());
    }


    EndpointResponseBuilder::ok()
        .with_json_body(RecipeSearchResponse {
            title: "Search | Recipes".to_string(),
            query: search_query,
            recipes,
        })
        .build()
}




// `{recipe_id}` has to stay registered last, otherwise it would capture
// requests meant for the `search` and `category` routes.
#[rustfmt::skip]
pub fn recipes_router() -> Scope {
    web::scope("/recipes")
        .service(search_recipes)
        .service(get_recipes_by_category)
        .service(get_recipe_by_id)
}
