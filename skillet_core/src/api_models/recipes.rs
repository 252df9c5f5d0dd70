use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::ids::{CategoryId, RecipeId, UserId};


/// The author of a recipe, as embedded in recipe documents.
#[derive(Serialize, PartialEq, Eq, Clone, Debug, ToSchema)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(serde::Deserialize))]
pub struct RecipeAuthor {
    #[schema(value_type = i64)]
    pub id: UserId,

    pub username: String,

    pub display_name: String,
}


/// The category a recipe belongs to, as embedded in recipe documents.
#[derive(Serialize, PartialEq, Eq, Clone, Debug, ToSchema)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(serde::Deserialize))]
pub struct RecipeCategory {
    #[schema(value_type = i64)]
    pub id: CategoryId,

    pub name: String,
}


#[derive(Serialize, PartialEq, Eq, Clone, Debug, ToSchema)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(serde::Deserialize))]
pub struct Recipe {
    #[schema(value_type = i64)]
    pub id: RecipeId,

    pub title: String,

    pub description: String,

    pub slug: String,

    pub preparation_time: i32,

    pub preparation_time_unit: String,

    pub servings: i32,

    pub servings_unit: String,

    pub preparation_steps: String,

    pub preparation_steps_is_html: bool,

    pub is_published: bool,

    pub author: RecipeAuthor,

    pub category: Option<RecipeCategory>,

    pub created_at: DateTime<Utc>,

    pub last_modified_at: DateTime<Utc>,
}



/// Response shape shared by the home page and the per-category listing.
///
/// An empty `recipes` array on the home page is a valid response;
/// the per-category listing responds with a 404 instead.
#[derive(Serialize, Clone, PartialEq, Eq, Debug, ToSchema)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(serde::Deserialize))]
pub struct RecipeListResponse {
    pub title: String,

    pub recipes: Vec<Recipe>,
}



#[derive(Serialize, Clone, PartialEq, Eq, Debug, ToSchema)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(serde::Deserialize))]
#[schema(
    example = json!({
        "title": "Klasične palačinke | Recipes",
        "recipe": {
            "id": 1,
            "title": "Klasične palačinke",
            "description": "Tanke palačinke, kot jih je delala babica.",
            "slug": "klasicne-palacinke",
            "preparation_time": 30,
            "preparation_time_unit": "Minutes",
            "servings": 4,
            "servings_unit": "Portions",
            "preparation_steps": "Zmešaj sestavine in peci v vroči ponvi.",
            "preparation_steps_is_html": false,
            "is_published": true,
            "author": {
                "id": 1,
                "username": "ana",
                "display_name": "Ana",
            },
            "category": {
                "id": 1,
                "name": "Sladice",
            },
            "created_at": "2023-06-27T20:34:27.217273Z",
            "last_modified_at": "2023-06-27T20:34:27.217273Z",
        }
    })
)]
pub struct RecipeResponse {
    pub title: String,

    pub recipe: Recipe,
}



#[derive(Serialize, Clone, PartialEq, Eq, Debug, ToSchema)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(serde::Deserialize))]
pub struct RecipeSearchResponse {
    pub title: String,

    pub query: String,

    pub recipes: Vec<Recipe>,
}
