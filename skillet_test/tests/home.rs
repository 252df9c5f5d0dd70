use skillet_core::api_models::RecipeListResponse;
use skillet_core::ids::RecipeId;
use skillet_test_util::prelude::*;

#[tokio::test]
async fn home_page_lists_published_recipes_newest_first() {
    let application = prepare_test_application().await;

    let author = SampleUser::Ana.create(&application).await;

    let first_recipe = SampleRecipe::titled("Potica")
        .create(&application, author.id)
        .await;
    let second_recipe = SampleRecipe::titled("Jota")
        .create(&application, author.id)
        .await;
    let third_recipe = SampleRecipe::titled("Zganci")
        .create(&application, author.id)
        .await;


    let response = application.request(Method::GET, "/").send().await;

    response.assert_status_equals(StatusCode::OK);

    let home_page = response.json_body::<RecipeListResponse>();

    assert_eq!(home_page.title, "Home | Recipes");

    let listed_recipe_ids: Vec<RecipeId> = home_page
        .recipes
        .iter()
        .map(|recipe| recipe.id)
        .collect();

    assert_eq!(
        listed_recipe_ids,
        vec![third_recipe.id, second_recipe.id, first_recipe.id]
    );
}

#[tokio::test]
async fn home_page_excludes_unpublished_recipes() {
    let application = prepare_test_application().await;

    let author = SampleUser::Bojan.create(&application).await;

    let published_recipe = SampleRecipe::titled("Potica")
        .create(&application, author.id)
        .await;

    SampleRecipe {
        is_published: false,
        ..SampleRecipe::titled("Skrivni recept")
    }
    .create(&application, author.id)
    .await;


    let response = application.request(Method::GET, "/").send().await;

    response.assert_status_equals(StatusCode::OK);

    let home_page = response.json_body::<RecipeListResponse>();

    assert_eq!(home_page.recipes.len(), 1);
    assert_eq!(home_page.recipes[0].id, published_recipe.id);
}

#[tokio::test]
async fn home_page_with_no_recipes_is_an_empty_list() {
    let application = prepare_test_application().await;

    let response = application.request(Method::GET, "/").send().await;

    response.assert_status_equals(StatusCode::OK);
    response.assert_json_body_matches(RecipeListResponse {
        title: "Home | Recipes".to_string(),
        recipes: Vec::new(),
    });
}
