use std::str::FromStr;

use futures_util::TryStreamExt;
use skillet_core::ids::CategoryId;
use skillet_database::entities::{
    category::{CategoryMutation, CategoryQuery, NewCategory},
    recipe::{NewRecipe, RecipeMutation, RecipeQuery},
    user::{NewUser, UserMutation},
};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqliteConnection,
    SqlitePool,
};


async fn prepare_database() -> SqlitePool {
    let connection_options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("invalid connection string")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(connection_options)
        .await
        .expect("failed to open an in-memory SQLite database");

    skillet_database::MIGRATOR
        .run(&pool)
        .await
        .expect("failed to apply migrations");

    pool
}

async fn create_category(connection: &mut SqliteConnection, name: &str) -> CategoryId {
    let new_category = NewCategory {
        name: name.to_string(),
    }
    .validated()
    .expect("sample category failed validation");

    CategoryMutation::create(connection, new_category)
        .await
        .expect("failed to create category")
        .id
}


#[tokio::test]
async fn categories_are_listed_in_creation_order() {
    let pool = prepare_database().await;
    let mut connection = pool.acquire().await.expect("failed to acquire connection");

    let desserts_id = create_category(&mut connection, "Sladice").await;
    let soups_id = create_category(&mut connection, "Juhe").await;

    let categories = CategoryQuery::get_all(&mut connection)
        .await
        .try_collect::<Vec<_>>()
        .await
        .expect("failed to collect categories");

    let listed_ids = categories
        .iter()
        .map(|category| category.id)
        .collect::<Vec<_>>();

    assert_eq!(listed_ids, vec![desserts_id, soups_id]);
}


#[tokio::test]
async fn category_lookup_and_existence_agree() {
    let pool = prepare_database().await;
    let mut connection = pool.acquire().await.expect("failed to acquire connection");

    let category_id = create_category(&mut connection, "Sladice").await;

    let fetched_category = CategoryQuery::get_by_id(&mut connection, category_id)
        .await
        .expect("category lookup failed")
        .expect("category should exist");
    assert_eq!(fetched_category.name, "Sladice");

    assert!(CategoryQuery::exists_by_id(&mut connection, category_id)
        .await
        .expect("category existence check failed"));

    assert!(
        !CategoryQuery::exists_by_id(&mut connection, CategoryId::new(981))
            .await
            .expect("category existence check failed")
    );
}


#[tokio::test]
async fn deleting_a_category_detaches_its_recipes() {
    let pool = prepare_database().await;
    let mut connection = pool.acquire().await.expect("failed to acquire connection");

    let author_id = {
        let new_user = NewUser {
            username: "ana".to_string(),
            display_name: "Ana".to_string(),
        }
        .validated()
        .expect("sample user failed validation");

        UserMutation::create(&mut connection, new_user)
            .await
            .expect("failed to create user")
            .id
    };

    let category_id = create_category(&mut connection, "Sladice").await;

    let new_recipe = NewRecipe {
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
        author_id,
        category_id: Some(category_id),
    }
    .validated()
    .expect("sample recipe failed validation");

    let recipe = RecipeMutation::create(&mut connection, new_recipe)
        .await
        .expect("failed to create recipe");

    let deleted = CategoryMutation::delete(&mut connection, category_id)
        .await
        .expect("failed to delete category");
    assert!(deleted);

    let fetched_recipe = RecipeQuery::get_published_by_id(&mut connection, recipe.id)
        .await
        .expect("recipe lookup failed")
        .expect("recipe should still exist");

    assert!(fetched_recipe.category.is_none());
}


#[tokio::test]
async fn deleting_a_nonexistent_category_reports_no_removal() {
    let pool = prepare_database().await;
    let mut connection = pool.acquire().await.expect("failed to acquire connection");

    let deleted = CategoryMutation::delete(&mut connection, CategoryId::new(981))
        .await
        .expect("failed to run category deletion");

    assert!(!deleted);
}
