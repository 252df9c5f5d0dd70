use skillet_core::ids::UserId;
use sqlx::SqliteConnection;

use super::UserModel;
use crate::{IntoExternalModel, QueryResult};


pub struct UserQuery;

impl UserQuery {
    pub async fn get_by_id(
        database_connection: &mut SqliteConnection,
        user_id: UserId,
    ) -> QueryResult<Option<UserModel>> {
        let internal_user = sqlx::query_as::<_, super::InternalUserModel>(
            "SELECT id, username, display_name, joined_at \
                FROM users \
                WHERE id = ?",
        )
        .bind(user_id.into_i64())
        .fetch_optional(database_connection)
        .await?;

        Ok(internal_user.map(|user| user.into_external_model()))
    }

    pub async fn exists_by_username(
        database_connection: &mut SqliteConnection,
        username: &str,
    ) -> QueryResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (\
                SELECT 1 \
                    FROM users \
                    WHERE username = ?\
            )",
        )
        .bind(username)
        .fetch_one(database_connection)
        .await?;

        Ok(exists)
    }
}
