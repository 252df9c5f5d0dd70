use skillet_database::entities::user::{NewUser, UserModel, UserMutation};

use crate::TestApplication;


/// A sample recipe author intended for testing the backend.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SampleUser {
    Ana,
    Bojan,
}

impl SampleUser {
    pub fn username(&self) -> &'static str {
        match self {
            SampleUser::Ana => "ana",
            SampleUser::Bojan => "bojan",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SampleUser::Ana => "Ana Kovačič",
            SampleUser::Bojan => "Bojan Oblak",
        }
    }

    pub fn into_new_user_model(self) -> NewUser {
        NewUser {
            username: self.username().to_string(),
            display_name: self.display_name().to_string(),
        }
    }

    /// Inserts this sample user into the application's database,
    /// returning the freshly created model.
    pub async fn create(&self, application: &TestApplication) -> UserModel {
        let new_user = self
            .into_new_user_model()
            .validated()
            .expect("sample user failed validation");

        let mut database_connection = application.acquire_database_connection().await;

        UserMutation::create(&mut database_connection, new_user)
            .await
            .expect("failed to insert sample user")
    }
}
