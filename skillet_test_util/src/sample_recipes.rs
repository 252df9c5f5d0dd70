use skillet_core::ids::{CategoryId, UserId};
use skillet_database::entities::recipe::{NewRecipe, RecipeModel, RecipeMutation};

use crate::TestApplication;


/// A recipe scaffold for tests: [`Default`] fills in unremarkable
/// (published) values, individual tests override the fields they
/// actually assert on.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SampleRecipe {
    pub title: String,
    pub description: String,
    pub slug: String,
    pub preparation_time: i32,
    pub preparation_time_unit: String,
    pub servings: i32,
    pub servings_unit: String,
    pub preparation_steps: String,
    pub is_published: bool,
    pub category_id: Option<CategoryId>,
}

impl Default for SampleRecipe {
    fn default() -> Self {
        Self {
            title: "Test Title".to_string(),
            description: "Test Description".to_string(),
            slug: "test-title".to_string(),
            preparation_time: 30,
            preparation_time_unit: "minutes".to_string(),
            servings: 4,
            servings_unit: "servings".to_string(),
            preparation_steps: "Test Preparation Steps".to_string(),
            is_published: true,
            category_id: None,
        }
    }
}

impl SampleRecipe {
    /// A published sample recipe with the given title
    /// and a slug derived from it.
    pub fn titled<T>(title: T) -> Self
    where
        T: Into<String>,
    {
        let title = title.into();
        let slug = slug_from_title(&title);

        Self {
            title,
            slug,
            ..Self::default()
        }
    }

    /// Inserts this sample recipe into the application's database,
    /// returning the freshly created model.
    pub async fn create(&self, application: &TestApplication, author_id: UserId) -> RecipeModel {
        let new_recipe = NewRecipe {
            title: self.title.clone(),
            description: self.description.clone(),
            slug: self.slug.clone(),
            preparation_time: self.preparation_time,
            preparation_time_unit: self.preparation_time_unit.clone(),
            servings: self.servings,
            servings_unit: self.servings_unit.clone(),
            preparation_steps: self.preparation_steps.clone(),
            preparation_steps_is_html: false,
            is_published: self.is_published,
            author_id,
            category_id: self.category_id,
        }
        .validated()
        .expect("sample recipe failed validation");

        let mut database_connection = application.acquire_database_connection().await;

        RecipeMutation::create(&mut database_connection, new_recipe)
            .await
            .expect("failed to insert sample recipe")
    }
}


fn slug_from_title(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .map(|character| {
            if character.is_ascii_alphanumeric() {
                character
            } else {
                '-'
            }
        })
        .collect()
}
