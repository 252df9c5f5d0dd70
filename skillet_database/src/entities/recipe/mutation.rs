use chrono::Utc;
use skillet_core::{
    ids::{CategoryId, RecipeId, UserId},
    validation::{
        validate_field_character_length,
        validate_slug,
        ModelValidationError,
        RECIPE_DESCRIPTION_MAXIMUM_LENGTH,
        RECIPE_PREPARATION_TIME_UNIT_MAXIMUM_LENGTH,
        RECIPE_SERVINGS_UNIT_MAXIMUM_LENGTH,
        RECIPE_TITLE_MAXIMUM_LENGTH,
    },
};
use sqlx::SqliteConnection;

use super::RecipeModel;
use crate::{IntoExternalModel, QueryError, QueryResult};



#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NewRecipe {
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
}

impl NewRecipe {
    /// Checks the field length and slug invariants, producing a value
    /// that [`RecipeMutation::create`] accepts.
    pub fn validated(self) -> Result<ValidatedNewRecipe, ModelValidationError> {
        validate_field_character_length("title", RECIPE_TITLE_MAXIMUM_LENGTH, &self.title)?;

        validate_field_character_length(
            "description",
            RECIPE_DESCRIPTION_MAXIMUM_LENGTH,
            &self.description,
        )?;

        validate_slug(&self.slug)?;

        validate_field_character_length(
            "preparation_time_unit",
            RECIPE_PREPARATION_TIME_UNIT_MAXIMUM_LENGTH,
            &self.preparation_time_unit,
        )?;

        validate_field_character_length(
            "servings_unit",
            RECIPE_SERVINGS_UNIT_MAXIMUM_LENGTH,
            &self.servings_unit,
        )?;

        Ok(ValidatedNewRecipe { inner: self })
    }
}


/// A [`NewRecipe`] whose field invariants have been checked,
/// obtained through [`NewRecipe::validated`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ValidatedNewRecipe {
    inner: NewRecipe,
}




pub struct RecipeMutation;

impl RecipeMutation {
    pub async fn create(
        database_connection: &mut SqliteConnection,
        new_recipe: ValidatedNewRecipe,
    ) -> QueryResult<RecipeModel> {
        let new_recipe = new_recipe.inner;

        let new_recipe_created_at = Utc::now();
        let new_recipe_last_modified_at = new_recipe_created_at;

        let newly_created_recipe = sqlx::query_as::<_, super::InternalRecipeModel>(
            "INSERT INTO recipes \
                (title, description, slug, \
                 preparation_time, preparation_time_unit, \
                 servings, servings_unit, \
                 preparation_steps, preparation_steps_is_html, \
                 is_published, author_id, category_id, \
                 created_at, last_modified_at) \
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
                RETURNING \
                    id, title, description, slug, \
                    preparation_time, preparation_time_unit, \
                    servings, servings_unit, \
                    preparation_steps, preparation_steps_is_html, \
                    is_published, author_id, category_id, \
                    created_at, last_modified_at",
        )
        .bind(new_recipe.title)
        .bind(new_recipe.description)
        .bind(new_recipe.slug)
        .bind(new_recipe.preparation_time)
        .bind(new_recipe.preparation_time_unit)
        .bind(new_recipe.servings)
        .bind(new_recipe.servings_unit)
        .bind(new_recipe.preparation_steps)
        .bind(new_recipe.preparation_steps_is_html)
        .bind(new_recipe.is_published)
        .bind(new_recipe.author_id.into_i64())
        .bind(new_recipe.category_id.map(CategoryId::into_i64))
        .bind(new_recipe_created_at)
        .bind(new_recipe_last_modified_at)
        .fetch_one(database_connection)
        .await?;

        Ok(newly_created_recipe.into_external_model())
    }

    /// Flips the publication flag on a recipe,
    /// bumping its last modification time.
    ///
    /// Returns `false` when no recipe exists under the given ID.
    pub async fn set_published(
        database_connection: &mut SqliteConnection,
        recipe_id: RecipeId,
        is_published: bool,
    ) -> QueryResult<bool> {
        let last_modified_at = Utc::now();

        let query_result =
            sqlx::query("UPDATE recipes SET is_published = ?, last_modified_at = ? WHERE id = ?")
                .bind(is_published)
                .bind(last_modified_at)
                .bind(recipe_id.into_i64())
                .execute(database_connection)
                .await?;

        Ok(query_result.rows_affected() == 1)
    }

    pub async fn delete(
        database_connection: &mut SqliteConnection,
        recipe_id: RecipeId,
    ) -> QueryResult<bool> {
        let query_result = sqlx::query("DELETE FROM recipes WHERE id = ?")
            .bind(recipe_id.into_i64())
            .execute(database_connection)
            .await?;


        if query_result.rows_affected() > 1 {
            return Err(QueryError::database_inconsistency(
                "attempted to delete a recipe by ID, but more than one row matched",
            ));
        }

        Ok(query_result.rows_affected() == 1)
    }
}
