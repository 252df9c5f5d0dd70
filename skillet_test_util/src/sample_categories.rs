use skillet_database::entities::category::{CategoryModel, CategoryMutation, NewCategory};

use crate::TestApplication;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SampleCategory {
    Desserts,
    MainDishes,
}


impl SampleCategory {
    pub fn name(&self) -> &'static str {
        match self {
            SampleCategory::Desserts => "Desserts",
            SampleCategory::MainDishes => "Main dishes",
        }
    }
}


pub async fn create_sample_category(
    application: &TestApplication,
    category: SampleCategory,
) -> CategoryModel {
    let new_category = NewCategory {
        name: category.name().to_string(),
    }
    .validated()
    .expect("sample category failed validation");

    let mut database_connection = application.acquire_database_connection().await;

    CategoryMutation::create(&mut database_connection, new_category)
        .await
        .expect("failed to insert sample category")
}
