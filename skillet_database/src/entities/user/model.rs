use std::fmt;

use chrono::{DateTime, Utc};
use skillet_core::ids::UserId;

use crate::IntoExternalModel;



pub struct UserModel {
    pub id: UserId,

    pub username: String,

    pub display_name: String,

    pub joined_at: DateTime<Utc>,
}

impl fmt::Display for UserModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)
    }
}


#[derive(sqlx::FromRow)]
pub(crate) struct InternalUserModel {
    pub(crate) id: i64,

    pub(crate) username: String,

    pub(crate) display_name: String,

    pub(crate) joined_at: DateTime<Utc>,
}

impl IntoExternalModel for InternalUserModel {
    type ExternalModel = UserModel;

    fn into_external_model(self) -> Self::ExternalModel {
        let user_id = UserId::new(self.id);

        Self::ExternalModel {
            id: user_id,
            username: self.username,
            display_name: self.display_name,
            joined_at: self.joined_at,
        }
    }
}
