use skillet_core::api_models::{Recipe, RecipeAuthor, RecipeCategory};
use skillet_database::entities::recipe::{
    RecipeAuthorModel,
    RecipeCategoryModel,
    RecipeWithDetailsModel,
};

use crate::api::traits::IntoApiModel;



impl IntoApiModel for RecipeAuthorModel {
    type ApiModel = RecipeAuthor;

    fn into_api_model(self) -> Self::ApiModel {
        RecipeAuthor {
            id: self.id,
            username: self.username,
            display_name: self.display_name,
        }
    }
}


impl IntoApiModel for RecipeCategoryModel {
    type ApiModel = RecipeCategory;

    fn into_api_model(self) -> Self::ApiModel {
        RecipeCategory {
            id: self.id,
            name: self.name,
        }
    }
}


impl IntoApiModel for RecipeWithDetailsModel {
    type ApiModel = Recipe;

    fn into_api_model(self) -> Self::ApiModel {
        Recipe {
            id: self.id,
            title: self.title,
            description: self.description,
            slug: self.slug,
            preparation_time: self.preparation_time,
            preparation_time_unit: self.preparation_time_unit,
            servings: self.servings,
            servings_unit: self.servings_unit,
            preparation_steps: self.preparation_steps,
            preparation_steps_is_html: self.preparation_steps_is_html,
            is_published: self.is_published,
            author: self.author.into_api_model(),
            category: self.category.map(IntoApiModel::into_api_model),
            created_at: self.created_at,
            last_modified_at: self.last_modified_at,
        }
    }
}
