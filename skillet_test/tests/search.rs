use skillet_core::api_models::{
    ErrorReason,
    RecipeSearchResponse,
    ResponseWithErrorReason,
};
use skillet_core::ids::RecipeId;
use skillet_test_util::prelude::*;

#[tokio::test]
async fn search_matches_titles_case_insensitively() {
    let application = prepare_test_application().await;

    let author = SampleUser::Ana.create(&application).await;

    let matching_recipe = SampleRecipe::titled("Orehova potica")
        .create(&application, author.id)
        .await;

    SampleRecipe::titled("Jota")
        .create(&application, author.id)
        .await;


    let response = application
        .request(Method::GET, "/recipes/search?q=POTICA")
        .send()
        .await;

    response.assert_status_equals(StatusCode::OK);

    let search_page = response.json_body::<RecipeSearchResponse>();

    assert_eq!(search_page.title, "Search | Recipes");
    assert_eq!(search_page.query, "POTICA");

    assert_eq!(search_page.recipes.len(), 1);
    assert_eq!(search_page.recipes[0].id, matching_recipe.id);
}

#[tokio::test]
async fn search_matches_descriptions_too() {
    let application = prepare_test_application().await;

    let author = SampleUser::Ana.create(&application).await;

    let matching_recipe = SampleRecipe {
        description: "Sladica z orehi in medom.".to_string(),
        ..SampleRecipe::titled("Gibanica")
    }
    .create(&application, author.id)
    .await;

    SampleRecipe::titled("Jota")
        .create(&application, author.id)
        .await;


    let response = application
        .request(Method::GET, "/recipes/search?q=orehi")
        .send()
        .await;

    response.assert_status_equals(StatusCode::OK);

    let search_page = response.json_body::<RecipeSearchResponse>();

    assert_eq!(search_page.recipes.len(), 1);
    assert_eq!(search_page.recipes[0].id, matching_recipe.id);
}

#[tokio::test]
async fn search_excludes_unpublished_recipes() {
    let application = prepare_test_application().await;

    let author = SampleUser::Bojan.create(&application).await;

    SampleRecipe {
        is_published: false,
        ..SampleRecipe::titled("Orehova potica")
    }
    .create(&application, author.id)
    .await;


    let response = application
        .request(Method::GET, "/recipes/search?q=potica")
        .send()
        .await;

    response.assert_status_equals(StatusCode::OK);

    let search_page = response.json_body::<RecipeSearchResponse>();

    assert!(search_page.recipes.is_empty());
}

#[tokio::test]
async fn search_results_are_newest_first() {
    let application = prepare_test_application().await;

    let author = SampleUser::Ana.create(&application).await;

    let first_recipe = SampleRecipe::titled("Potica z orehi")
        .create(&application, author.id)
        .await;
    let second_recipe = SampleRecipe::titled("Potica s pehtranom")
        .create(&application, author.id)
        .await;


    let response = application
        .request(Method::GET, "/recipes/search?q=potica")
        .send()
        .await;

    response.assert_status_equals(StatusCode::OK);

    let search_page = response.json_body::<RecipeSearchResponse>();

    let listed_recipe_ids: Vec<RecipeId> = search_page
        .recipes
        .iter()
        .map(|recipe| recipe.id)
        .collect();

    assert_eq!(
        listed_recipe_ids,
        vec![second_recipe.id, first_recipe.id]
    );
}

#[tokio::test]
async fn like_wildcards_in_the_query_are_matched_literally() {
    let application = prepare_test_application().await;

    let author = SampleUser::Ana.create(&application).await;

    let literal_match = SampleRecipe {
        description: "Testo s 100% ajdove moke.".to_string(),
        ..SampleRecipe::titled("Ajdov kruh")
    }
    .create(&application, author.id)
    .await;

    // Would match "100%" if the percent sign acted as a LIKE wildcard.
    SampleRecipe {
        description: "Jed s 1000 kalorijami.".to_string(),
        ..SampleRecipe::titled("Obilna jed")
    }
    .create(&application, author.id)
    .await;


    let response = application
        .request(Method::GET, "/recipes/search?q=100%25")
        .send()
        .await;

    response.assert_status_equals(StatusCode::OK);

    let search_page = response.json_body::<RecipeSearchResponse>();

    assert_eq!(search_page.recipes.len(), 1);
    assert_eq!(search_page.recipes[0].id, literal_match.id);
}

#[tokio::test]
async fn search_with_no_matches_is_an_empty_list() {
    let application = prepare_test_application().await;

    let author = SampleUser::Ana.create(&application).await;

    SampleRecipe::titled("Potica")
        .create(&application, author.id)
        .await;


    let response = application
        .request(Method::GET, "/recipes/search?q=neobstaja")
        .send()
        .await;

    response.assert_status_equals(StatusCode::OK);
    response.assert_json_body_matches(RecipeSearchResponse {
        title: "Search | Recipes".to_string(),
        query: "neobstaja".to_string(),
        recipes: Vec::new(),
    });
}

#[tokio::test]
async fn search_without_a_query_is_not_found() {
    let application = prepare_test_application().await;

    let response = application
        .request(Method::GET, "/recipes/search")
        .send()
        .await;

    response.assert_status_equals(StatusCode::NOT_FOUND);
    response.assert_json_body_matches(ResponseWithErrorReason::new(
        ErrorReason::missing_search_query(),
    ));
}

#[tokio::test]
async fn search_with_an_empty_query_is_not_found() {
    let application = prepare_test_application().await;

    let response = application
        .request(Method::GET, "/recipes/search?q=")
        .send()
        .await;

    response.assert_status_equals(StatusCode::NOT_FOUND);
    response.assert_json_body_matches(ResponseWithErrorReason::new(
        ErrorReason::missing_search_query(),
    ));
}

#[tokio::test]
async fn search_with_a_whitespace_only_query_is_not_found() {
    let application = prepare_test_application().await;

    let response = application
        .request(Method::GET, "/recipes/search?q=%20%20")
        .send()
        .await;

    response.assert_status_equals(StatusCode::NOT_FOUND);
    response.assert_json_body_matches(ResponseWithErrorReason::new(
        ErrorReason::missing_search_query(),
    ));
}
