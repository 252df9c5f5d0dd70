use std::fmt;

use chrono::{DateTime, Utc};
use skillet_core::ids::{CategoryId, RecipeId, UserId};

use crate::IntoExternalModel;


/// A bare recipe row, with related entities left as IDs.
pub struct RecipeModel {
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

    pub author_id: UserId,

    pub category_id: Option<CategoryId>,

    pub created_at: DateTime<Utc>,

    pub last_modified_at: DateTime<Utc>,
}

impl fmt::Display for RecipeModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}


/// A reference to the user who authored a recipe.
pub struct RecipeAuthorModel {
    pub id: UserId,

    pub username: String,

    pub display_name: String,
}


/// A reference to the category a recipe belongs to.
pub struct RecipeCategoryModel {
    pub id: CategoryId,

    pub name: String,
}


/// A recipe row joined with its author and (optional) category.
pub struct RecipeWithDetailsModel {
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

    pub author: RecipeAuthorModel,

    pub category: Option<RecipeCategoryModel>,

    pub created_at: DateTime<Utc>,

    pub last_modified_at: DateTime<Utc>,
}

impl fmt::Display for RecipeWithDetailsModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}



#[derive(sqlx::FromRow)]
pub(crate) struct InternalRecipeModel {
    pub(crate) id: i64,

    pub(crate) title: String,

    pub(crate) description: String,

    pub(crate) slug: String,

    pub(crate) preparation_time: i32,

    pub(crate) preparation_time_unit: String,

    pub(crate) servings: i32,

    pub(crate) servings_unit: String,

    pub(crate) preparation_steps: String,

    pub(crate) preparation_steps_is_html: bool,

    pub(crate) is_published: bool,

    pub(crate) author_id: i64,

    pub(crate) category_id: Option<i64>,

    pub(crate) created_at: DateTime<Utc>,

    pub(crate) last_modified_at: DateTime<Utc>,
}

impl IntoExternalModel for InternalRecipeModel {
    type ExternalModel = RecipeModel;

    fn into_external_model(self) -> Self::ExternalModel {
        let recipe_id = RecipeId::new(self.id);
        let author_id = UserId::new(self.author_id);
        let category_id = self.category_id.map(CategoryId::new);

        Self::ExternalModel {
            id: recipe_id,
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
            author_id,
            category_id,
            created_at: self.created_at,
            last_modified_at: self.last_modified_at,
        }
    }
}



#[derive(sqlx::FromRow)]
pub(crate) struct InternalRecipeWithDetailsModel {
    pub(crate) id: i64,

    pub(crate) title: String,

    pub(crate) description: String,

    pub(crate) slug: String,

    pub(crate) preparation_time: i32,

    pub(crate) preparation_time_unit: String,

    pub(crate) servings: i32,

    pub(crate) servings_unit: String,

    pub(crate) preparation_steps: String,

    pub(crate) preparation_steps_is_html: bool,

    pub(crate) is_published: bool,

    pub(crate) author_id: i64,

    pub(crate) author_username: String,

    pub(crate) author_display_name: String,

    // Both of these are either present or NULL together;
    // the row is produced by a LEFT JOIN on the category table.
    pub(crate) category_id: Option<i64>,

    pub(crate) category_name: Option<String>,

    pub(crate) created_at: DateTime<Utc>,

    pub(crate) last_modified_at: DateTime<Utc>,
}

impl IntoExternalModel for InternalRecipeWithDetailsModel {
    type ExternalModel = RecipeWithDetailsModel;

    fn into_external_model(self) -> Self::ExternalModel {
        let author = RecipeAuthorModel {
            id: UserId::new(self.author_id),
            username: self.author_username,
            display_name: self.author_display_name,
        };

        let category = self
            .category_id
            .zip(self.category_name)
            .map(|(category_id, category_name)| RecipeCategoryModel {
                id: CategoryId::new(category_id),
                name: category_name,
            });

        Self::ExternalModel {
            id: RecipeId::new(self.id),
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
            author,
            category,
            created_at: self.created_at,
            last_modified_at: self.last_modified_at,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_displays_as_its_title() {
        let recipe = RecipeModel {
            id: RecipeId::new(1),
            title: "Potica".to_string(),
            description: "Traditional rolled dough cake.".to_string(),
            slug: "potica".to_string(),
            preparation_time: 180,
            preparation_time_unit: "Minutes".to_string(),
            servings: 12,
            servings_unit: "Slices".to_string(),
            preparation_steps: "Prepare the dough, then the filling.".to_string(),
            preparation_steps_is_html: false,
            is_published: true,
            author_id: UserId::new(1),
            category_id: None,
            created_at: Utc::now(),
            last_modified_at: Utc::now(),
        };

        assert_eq!(recipe.to_string(), "Potica");
    }
}
