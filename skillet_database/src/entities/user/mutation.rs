use chrono::Utc;
use skillet_core::validation::{
    validate_field_character_length,
    ModelValidationError,
    USER_DISPLAY_NAME_MAXIMUM_LENGTH,
    USER_USERNAME_MAXIMUM_LENGTH,
};
use sqlx::SqliteConnection;

use super::UserModel;
use crate::{IntoExternalModel, QueryResult};



#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NewUser {
    pub username: String,
    pub display_name: String,
}

impl NewUser {
    /// Checks the field invariants, producing a value
    /// that [`UserMutation::create`] accepts.
    pub fn validated(self) -> Result<ValidatedNewUser, ModelValidationError> {
        if self.username.is_empty() {
            return Err(ModelValidationError::FieldEmpty {
                field_name: "username",
            });
        }

        validate_field_character_length(
            "username",
            USER_USERNAME_MAXIMUM_LENGTH,
            &self.username,
        )?;

        validate_field_character_length(
            "display_name",
            USER_DISPLAY_NAME_MAXIMUM_LENGTH,
            &self.display_name,
        )?;

        Ok(ValidatedNewUser { inner: self })
    }
}


/// A [`NewUser`] whose field invariants have been checked,
/// obtained through [`NewUser::validated`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ValidatedNewUser {
    inner: NewUser,
}




pub struct UserMutation;

impl UserMutation {
    pub async fn create(
        database_connection: &mut SqliteConnection,
        new_user: ValidatedNewUser,
    ) -> QueryResult<UserModel> {
        let new_user = new_user.inner;
        let new_user_joined_at = Utc::now();

        let newly_created_user = sqlx::query_as::<_, super::InternalUserModel>(
            "INSERT INTO users (username, display_name, joined_at) \
                VALUES (?, ?, ?) \
                RETURNING id, username, display_name, joined_at",
        )
        .bind(new_user.username)
        .bind(new_user.display_name)
        .bind(new_user_joined_at)
        .fetch_one(database_connection)
        .await?;

        Ok(newly_created_user.into_external_model())
    }
}
