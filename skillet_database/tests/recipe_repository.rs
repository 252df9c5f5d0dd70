use std::str::FromStr;

use futures_util::TryStreamExt;
use skillet_core::ids::{CategoryId, UserId};
use skillet_database::entities::{
    category::{CategoryMutation, NewCategory},
    recipe::{NewRecipe, RecipeMutation, RecipeQuery, RecipeWithDetailsModel},
    user::{NewUser, UserMutation, UserQuery},
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

async fn create_author(connection: &mut SqliteConnection, username: &str) -> UserId {
    let new_user = NewUser {
        username: username.to_string(),
        display_name: username.to_string(),
    }
    .validated()
    .expect("sample user failed validation");

    UserMutation::create(connection, new_user)
        .await
        .expect("failed to create user")
        .id
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

struct RecipeFixture {
    title: &'static str,
    description: &'static str,
    slug: &'static str,
    is_published: bool,
    category_id: Option<CategoryId>,
}

impl RecipeFixture {
    fn new(title: &'static str, slug: &'static str) -> Self {
        Self {
            title,
            description: "Recipe Description",
            slug,
            is_published: true,
            category_id: None,
        }
    }

    fn with_description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    fn unpublished(mut self) -> Self {
        self.is_published = false;
        self
    }

    fn in_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    async fn create(
        self,
        connection: &mut SqliteConnection,
        author_id: UserId,
    ) -> skillet_database::entities::recipe::RecipeModel {
        let new_recipe = NewRecipe {
            title: self.title.to_string(),
            description: self.description.to_string(),
            slug: self.slug.to_string(),
            preparation_time: 10,
            preparation_time_unit: "Minutes".to_string(),
            servings: 5,
            servings_unit: "Portions".to_string(),
            preparation_steps: "Recipe Preparation Steps".to_string(),
            preparation_steps_is_html: false,
            is_published: self.is_published,
            author_id,
            category_id: self.category_id,
        }
        .validated()
        .expect("sample recipe failed validation");

        RecipeMutation::create(connection, new_recipe)
            .await
            .expect("failed to create recipe")
    }
}


async fn collect_all_published(connection: &mut SqliteConnection) -> Vec<RecipeWithDetailsModel> {
    RecipeQuery::get_all_published(connection)
        .await
        .try_collect::<Vec<_>>()
        .await
        .expect("failed to collect published recipes")
}



#[tokio::test]
async fn unpublished_recipes_are_excluded_from_the_published_listing() {
    let pool = prepare_database().await;
    let mut connection = pool.acquire().await.expect("failed to acquire connection");

    let author_id = create_author(&mut connection, "ana").await;

    RecipeFixture::new("Published", "published")
        .create(&mut connection, author_id)
        .await;
    RecipeFixture::new("Hidden", "hidden")
        .unpublished()
        .create(&mut connection, author_id)
        .await;

    let published_recipes = collect_all_published(&mut connection).await;

    assert_eq!(published_recipes.len(), 1);
    assert_eq!(published_recipes[0].title, "Published");
}


#[tokio::test]
async fn published_listing_is_ordered_newest_first() {
    let pool = prepare_database().await;
    let mut connection = pool.acquire().await.expect("failed to acquire connection");

    let author_id = create_author(&mut connection, "ana").await;

    let first = RecipeFixture::new("First", "first")
        .create(&mut connection, author_id)
        .await;
    let second = RecipeFixture::new("Second", "second")
        .create(&mut connection, author_id)
        .await;
    let third = RecipeFixture::new("Third", "third")
        .create(&mut connection, author_id)
        .await;

    let published_recipes = collect_all_published(&mut connection).await;

    let listed_ids = published_recipes
        .iter()
        .map(|recipe| recipe.id)
        .collect::<Vec<_>>();

    assert_eq!(listed_ids, vec![third.id, second.id, first.id]);
}


#[tokio::test]
async fn category_listing_returns_only_published_recipes_from_that_category() {
    let pool = prepare_database().await;
    let mut connection = pool.acquire().await.expect("failed to acquire connection");

    let author_id = create_author(&mut connection, "ana").await;
    let category_id = create_category(&mut connection, "Sladice").await;
    let other_category_id = create_category(&mut connection, "Juhe").await;

    let published_in_category = RecipeFixture::new("A", "recipe-a")
        .in_category(category_id)
        .create(&mut connection, author_id)
        .await;
    RecipeFixture::new("B", "recipe-b")
        .in_category(category_id)
        .unpublished()
        .create(&mut connection, author_id)
        .await;
    RecipeFixture::new("C", "recipe-c")
        .in_category(other_category_id)
        .create(&mut connection, author_id)
        .await;

    let recipes_in_category = RecipeQuery::get_published_by_category(&mut connection, category_id)
        .await
        .try_collect::<Vec<_>>()
        .await
        .expect("failed to collect recipes in category");

    assert_eq!(recipes_in_category.len(), 1);
    assert_eq!(recipes_in_category[0].id, published_in_category.id);

    let category = recipes_in_category[0]
        .category
        .as_ref()
        .expect("recipe should carry its category");
    assert_eq!(category.name, "Sladice");
}


#[tokio::test]
async fn category_without_published_recipes_yields_an_empty_stream() {
    let pool = prepare_database().await;
    let mut connection = pool.acquire().await.expect("failed to acquire connection");

    let author_id = create_author(&mut connection, "ana").await;
    let category_id = create_category(&mut connection, "Sladice").await;

    RecipeFixture::new("Hidden", "hidden")
        .in_category(category_id)
        .unpublished()
        .create(&mut connection, author_id)
        .await;

    let recipes_in_category = RecipeQuery::get_published_by_category(&mut connection, category_id)
        .await
        .try_collect::<Vec<_>>()
        .await
        .expect("failed to collect recipes in category");

    assert!(recipes_in_category.is_empty());
}


#[tokio::test]
async fn published_lookup_treats_unpublished_recipes_as_absent() {
    let pool = prepare_database().await;
    let mut connection = pool.acquire().await.expect("failed to acquire connection");

    let author_id = create_author(&mut connection, "ana").await;

    let hidden = RecipeFixture::new("Hidden", "hidden")
        .unpublished()
        .create(&mut connection, author_id)
        .await;

    let published_lookup = RecipeQuery::get_published_by_id(&mut connection, hidden.id)
        .await
        .expect("published recipe lookup failed");
    assert!(published_lookup.is_none());

    let unrestricted_lookup = RecipeQuery::get_by_id(&mut connection, hidden.id)
        .await
        .expect("recipe lookup failed");
    assert!(unrestricted_lookup.is_some());
}


#[tokio::test]
async fn detailed_recipe_lookup_includes_author_information() {
    let pool = prepare_database().await;
    let mut connection = pool.acquire().await.expect("failed to acquire connection");

    let author_id = create_author(&mut connection, "ana").await;

    let recipe = RecipeFixture::new("Palačinke", "palacinke")
        .create(&mut connection, author_id)
        .await;

    let fetched_recipe = RecipeQuery::get_published_by_id(&mut connection, recipe.id)
        .await
        .expect("recipe lookup failed")
        .expect("recipe should exist");

    assert_eq!(fetched_recipe.author.id, author_id);
    assert_eq!(fetched_recipe.author.username, "ana");
    assert!(fetched_recipe.category.is_none());
}


#[tokio::test]
async fn search_matches_title_and_description_case_insensitively() {
    let pool = prepare_database().await;
    let mut connection = pool.acquire().await.expect("failed to acquire connection");

    let author_id = create_author(&mut connection, "ana").await;

    let by_title = RecipeFixture::new("Chocolate Cake", "chocolate-cake")
        .create(&mut connection, author_id)
        .await;
    let by_description = RecipeFixture::new("Mystery Dish", "mystery-dish")
        .with_description("rich chocolate flavour")
        .create(&mut connection, author_id)
        .await;
    RecipeFixture::new("Plain Soup", "plain-soup")
        .create(&mut connection, author_id)
        .await;
    RecipeFixture::new("Hidden Chocolate", "hidden-chocolate")
        .unpublished()
        .create(&mut connection, author_id)
        .await;

    let search_results = RecipeQuery::search_published(&mut connection, "CHOCOLATE")
        .await
        .try_collect::<Vec<_>>()
        .await
        .expect("failed to collect search results");

    let result_ids = search_results
        .iter()
        .map(|recipe| recipe.id)
        .collect::<Vec<_>>();

    assert_eq!(result_ids, vec![by_description.id, by_title.id]);
}


#[tokio::test]
async fn search_treats_like_wildcards_literally() {
    let pool = prepare_database().await;
    let mut connection = pool.acquire().await.expect("failed to acquire connection");

    let author_id = create_author(&mut connection, "ana").await;

    let with_percent = RecipeFixture::new("100% Rye Bread", "rye-bread")
        .create(&mut connection, author_id)
        .await;
    RecipeFixture::new("1000 Layer Cake", "layer-cake")
        .create(&mut connection, author_id)
        .await;

    let search_results = RecipeQuery::search_published(&mut connection, "100%")
        .await
        .try_collect::<Vec<_>>()
        .await
        .expect("failed to collect search results");

    assert_eq!(search_results.len(), 1);
    assert_eq!(search_results[0].id, with_percent.id);
}


#[tokio::test]
async fn publishing_a_recipe_makes_it_visible() {
    let pool = prepare_database().await;
    let mut connection = pool.acquire().await.expect("failed to acquire connection");

    let author_id = create_author(&mut connection, "ana").await;

    let draft = RecipeFixture::new("Draft", "draft")
        .unpublished()
        .create(&mut connection, author_id)
        .await;

    assert!(collect_all_published(&mut connection).await.is_empty());

    let updated = RecipeMutation::set_published(&mut connection, draft.id, true)
        .await
        .expect("failed to publish recipe");
    assert!(updated);

    let published_recipes = collect_all_published(&mut connection).await;
    assert_eq!(published_recipes.len(), 1);
    assert_eq!(published_recipes[0].id, draft.id);
}


#[tokio::test]
async fn publishing_a_nonexistent_recipe_reports_no_update() {
    let pool = prepare_database().await;
    let mut connection = pool.acquire().await.expect("failed to acquire connection");

    let updated =
        RecipeMutation::set_published(&mut connection, skillet_core::ids::RecipeId::new(981), true)
            .await
            .expect("failed to run publish update");

    assert!(!updated);
}


#[tokio::test]
async fn slug_existence_check_reflects_created_recipes() {
    let pool = prepare_database().await;
    let mut connection = pool.acquire().await.expect("failed to acquire connection");

    let author_id = create_author(&mut connection, "ana").await;

    RecipeFixture::new("Potica", "potica")
        .create(&mut connection, author_id)
        .await;

    assert!(RecipeQuery::exists_by_slug(&mut connection, "potica")
        .await
        .expect("slug existence check failed"));

    assert!(!RecipeQuery::exists_by_slug(&mut connection, "gibanica")
        .await
        .expect("slug existence check failed"));
}


#[tokio::test]
async fn deleted_recipes_disappear_from_lookups() {
    let pool = prepare_database().await;
    let mut connection = pool.acquire().await.expect("failed to acquire connection");

    let author_id = create_author(&mut connection, "ana").await;

    let recipe = RecipeFixture::new("Ephemeral", "ephemeral")
        .create(&mut connection, author_id)
        .await;

    let deleted = RecipeMutation::delete(&mut connection, recipe.id)
        .await
        .expect("failed to delete recipe");
    assert!(deleted);

    let lookup = RecipeQuery::get_by_id(&mut connection, recipe.id)
        .await
        .expect("recipe lookup failed");
    assert!(lookup.is_none());
}


#[tokio::test]
async fn authors_are_visible_through_the_user_query() {
    let pool = prepare_database().await;
    let mut connection = pool.acquire().await.expect("failed to acquire connection");

    let author_id = create_author(&mut connection, "ana").await;

    let fetched_user = UserQuery::get_by_id(&mut connection, author_id)
        .await
        .expect("user lookup failed")
        .expect("user should exist");
    assert_eq!(fetched_user.username, "ana");

    assert!(UserQuery::exists_by_username(&mut connection, "ana")
        .await
        .expect("username existence check failed"));

    assert!(!UserQuery::exists_by_username(&mut connection, "berta")
        .await
        .expect("username existence check failed"));
}
