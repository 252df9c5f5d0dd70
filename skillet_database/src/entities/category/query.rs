use futures_core::stream::BoxStream;
use skillet_core::ids::CategoryId;
use sqlx::SqliteConnection;

use super::CategoryModel;
use crate::{IntoExternalModel, QueryError, QueryResult};

type RawCategoryStream<'c> = BoxStream<'c, Result<super::InternalCategoryModel, sqlx::Error>>;

create_async_stream_wrapper!(
    pub struct CategoryStream<'c>;
    transforms stream RawCategoryStream<'c> => stream of QueryResult<super::CategoryModel>:
        |value|
            value.map(
                |some| some
                    .map(super::InternalCategoryModel::into_external_model)
                    .map_err(|error| QueryError::SqlxError { error })
            )
);


pub struct CategoryQuery;

impl CategoryQuery {
    pub async fn get_all(database_connection: &mut SqliteConnection) -> CategoryStream<'_> {
        let internal_category_stream = sqlx::query_as::<_, super::InternalCategoryModel>(
            "SELECT id, name, created_at, last_modified_at \
                FROM categories \
                ORDER BY id ASC",
        )
        .fetch(database_connection);

        CategoryStream::new(internal_category_stream)
    }

    pub async fn get_by_id(
        database_connection: &mut SqliteConnection,
        category_id: CategoryId,
    ) -> QueryResult<Option<CategoryModel>> {
        let internal_category = sqlx::query_as::<_, super::InternalCategoryModel>(
            "SELECT id, name, created_at, last_modified_at \
                FROM categories \
                WHERE id = ?",
        )
        .bind(category_id.into_i64())
        .fetch_optional(database_connection)
        .await?;

        Ok(internal_category.map(|category| category.into_external_model()))
    }

    pub async fn exists_by_id(
        database_connection: &mut SqliteConnection,
        category_id: CategoryId,
    ) -> QueryResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (\
                SELECT 1 \
                    FROM categories \
                    WHERE id = ?\
            )",
        )
        .bind(category_id.into_i64())
        .fetch_one(database_connection)
        .await?;

        Ok(exists)
    }
}
