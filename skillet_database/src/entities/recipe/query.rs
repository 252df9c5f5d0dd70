use futures_core::stream::BoxStream;
use skillet_core::ids::{CategoryId, RecipeId};
use sqlx::SqliteConnection;

use super::RecipeWithDetailsModel;
use crate::{IntoExternalModel, QueryError, QueryResult};

type RawRecipeWithDetailsStream<'c> =
    BoxStream<'c, Result<super::InternalRecipeWithDetailsModel, sqlx::Error>>;

create_async_stream_wrapper!(
    pub struct RecipeWithDetailsStream<'c>;
    transforms stream RawRecipeWithDetailsStream<'c> => stream of QueryResult<super::RecipeWithDetailsModel>:
        |value|
            value.map(
                |some| some
                    .map(super::InternalRecipeWithDetailsModel::into_external_model)
                    .map_err(|error| QueryError::SqlxError { error })
            )
);


/// Escapes `%`, `_`, and the escape character itself, so the result
/// can be embedded in a `LIKE ... ESCAPE '\'` pattern verbatim.
fn escape_like_pattern(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}


pub struct RecipeQuery;

impl RecipeQuery {
    /// All published recipes, newest (highest ID) first.
    pub async fn get_all_published(
        database_connection: &mut SqliteConnection,
    ) -> RecipeWithDetailsStream<'_> {
        let internal_recipe_stream = sqlx::query_as::<_, super::InternalRecipeWithDetailsModel>(
            "SELECT \
                    recipes.id, recipes.title, recipes.description, recipes.slug, \
                    recipes.preparation_time, recipes.preparation_time_unit, \
                    recipes.servings, recipes.servings_unit, \
                    recipes.preparation_steps, recipes.preparation_steps_is_html, \
                    recipes.is_published, \
                    authors.id AS author_id, \
                    authors.username AS author_username, \
                    authors.display_name AS author_display_name, \
                    categories.id AS category_id, \
                    categories.name AS category_name, \
                    recipes.created_at, recipes.last_modified_at \
                FROM recipes \
                INNER JOIN users AS authors ON authors.id = recipes.author_id \
                LEFT JOIN categories ON categories.id = recipes.category_id \
                WHERE recipes.is_published = TRUE \
                ORDER BY recipes.id DESC",
        )
        .fetch(database_connection);

        RecipeWithDetailsStream::new(internal_recipe_stream)
    }

    /// Published recipes in the given category, newest (highest ID) first.
    ///
    /// A category without published recipes yields an empty stream, exactly
    /// like a category that doesn't exist at all.
    pub async fn get_published_by_category(
        database_connection: &mut SqliteConnection,
        category_id: CategoryId,
    ) -> RecipeWithDetailsStream<'_> {
        let internal_recipe_stream = sqlx::query_as::<_, super::InternalRecipeWithDetailsModel>(
            "SELECT \
                    recipes.id, recipes.title, recipes.description, recipes.slug, \
                    recipes.preparation_time, recipes.preparation_time_unit, \
                    recipes.servings, recipes.servings_unit, \
                    recipes.preparation_steps, recipes.preparation_steps_is_html, \
                    recipes.is_published, \
                    authors.id AS author_id, \
                    authors.username AS author_username, \
                    authors.display_name AS author_display_name, \
                    categories.id AS category_id, \
                    categories.name AS category_name, \
                    recipes.created_at, recipes.last_modified_at \
                FROM recipes \
                INNER JOIN users AS authors ON authors.id = recipes.author_id \
                LEFT JOIN categories ON categories.id = recipes.category_id \
                WHERE recipes.is_published = TRUE AND recipes.category_id = ? \
                ORDER BY recipes.id DESC",
        )
        .bind(category_id.into_i64())
        .fetch(database_connection);

        RecipeWithDetailsStream::new(internal_recipe_stream)
    }

    /// Looks up a single *published* recipe by ID.
    ///
    /// Unpublished recipes are reported as absent, which is what keeps them
    /// indistinguishable from nonexistent ones on the public surface.
    pub async fn get_published_by_id(
        database_connection: &mut SqliteConnection,
        recipe_id: RecipeId,
    ) -> QueryResult<Option<RecipeWithDetailsModel>> {
        let internal_recipe = sqlx::query_as::<_, super::InternalRecipeWithDetailsModel>(
            "SELECT \
                    recipes.id, recipes.title, recipes.description, recipes.slug, \
                    recipes.preparation_time, recipes.preparation_time_unit, \
                    recipes.servings, recipes.servings_unit, \
                    recipes.preparation_steps, recipes.preparation_steps_is_html, \
                    recipes.is_published, \
                    authors.id AS author_id, \
                    authors.username AS author_username, \
                    authors.display_name AS author_display_name, \
                    categories.id AS category_id, \
                    categories.name AS category_name, \
                    recipes.created_at, recipes.last_modified_at \
                FROM recipes \
                INNER JOIN users AS authors ON authors.id = recipes.author_id \
                LEFT JOIN categories ON categories.id = recipes.category_id \
                WHERE recipes.id = ? AND recipes.is_published = TRUE",
        )
        .bind(recipe_id.into_i64())
        .fetch_optional(database_connection)
        .await?;

        Ok(internal_recipe.map(|recipe| recipe.into_external_model()))
    }

    /// Looks up a single recipe by ID regardless of its publication state.
    pub async fn get_by_id(
        database_connection: &mut SqliteConnection,
        recipe_id: RecipeId,
    ) -> QueryResult<Option<RecipeWithDetailsModel>> {
        let internal_recipe = sqlx::query_as::<_, super::InternalRecipeWithDetailsModel>(
            "SELECT \
                    recipes.id, recipes.title, recipes.description, recipes.slug, \
                    recipes.preparation_time, recipes.preparation_time_unit, \
                    recipes.servings, recipes.servings_unit, \
                    recipes.preparation_steps, recipes.preparation_steps_is_html, \
                    recipes.is_published, \
                    authors.id AS author_id, \
                    authors.username AS author_username, \
                    authors.display_name AS author_display_name, \
                    categories.id AS category_id, \
                    categories.name AS category_name, \
                    recipes.created_at, recipes.last_modified_at \
                FROM recipes \
                INNER JOIN users AS authors ON authors.id = recipes.author_id \
                LEFT JOIN categories ON categories.id = recipes.category_id \
                WHERE recipes.id = ?",
        )
        .bind(recipe_id.into_i64())
        .fetch_optional(database_connection)
        .await?;

        Ok(internal_recipe.map(|recipe| recipe.into_external_model()))
    }

    /// Published recipes whose title or description contains `search_query`
    /// (case-insensitively), newest (highest ID) first.
    ///
    /// `%`, `_`, and `\` in the query are matched literally.
    pub async fn search_published<'c>(
        database_connection: &'c mut SqliteConnection,
        search_query: &str,
    ) -> RecipeWithDetailsStream<'c> {
        let search_pattern = format!("%{}%", escape_like_pattern(search_query));

        let internal_recipe_stream = sqlx::query_as::<_, super::InternalRecipeWithDetailsModel>(
            "SELECT \
                    recipes.id, recipes.title, recipes.description, recipes.slug, \
                    recipes.preparation_time, recipes.preparation_time_unit, \
                    recipes.servings, recipes.servings_unit, \
                    recipes.preparation_steps, recipes.preparation_steps_is_html, \
                    recipes.is_published, \
                    authors.id AS author_id, \
                    authors.username AS author_username, \
                    authors.display_name AS author_display_name, \
                    categories.id AS category_id, \
                    categories.name AS category_name, \
                    recipes.created_at, recipes.last_modified_at \
                FROM recipes \
                INNER JOIN users AS authors ON authors.id = recipes.author_id \
                LEFT JOIN categories ON categories.id = recipes.category_id \
                WHERE recipes.is_published = TRUE \
                    AND (recipes.title LIKE ? ESCAPE '\\' \
                         OR recipes.description LIKE ? ESCAPE '\\') \
                ORDER BY recipes.id DESC",
        )
        .bind(search_pattern.clone())
        .bind(search_pattern)
        .fetch(database_connection);

        RecipeWithDetailsStream::new(internal_recipe_stream)
    }

    pub async fn any_exist(database_connection: &mut SqliteConnection) -> QueryResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (\
                SELECT 1 \
                    FROM recipes\
            )",
        )
        .fetch_one(database_connection)
        .await?;

        Ok(exists)
    }

    pub async fn exists_by_slug(
        database_connection: &mut SqliteConnection,
        slug: &str,
    ) -> QueryResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (\
                SELECT 1 \
                    FROM recipes \
                    WHERE slug = ?\
            )",
        )
        .bind(slug)
        .fetch_one(database_connection)
        .await?;

        Ok(exists)
    }
}



#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like_pattern("100% pure"), "100\\% pure");
        assert_eq!(escape_like_pattern("under_score"), "under\\_score");
        assert_eq!(escape_like_pattern("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn plain_text_is_left_untouched() {
        assert_eq!(escape_like_pattern("potica"), "potica");
    }
}
