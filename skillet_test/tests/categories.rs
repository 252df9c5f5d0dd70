use skillet_core::api_models::{ErrorReason, RecipeListResponse, ResponseWithErrorReason};
use skillet_core::ids::RecipeId;
use skillet_test_util::prelude::*;

#[tokio::test]
async fn category_page_lists_only_its_published_recipes_newest_first() {
    let application = prepare_test_application().await;

    let author = SampleUser::Ana.create(&application).await;

    let desserts = create_sample_category(&application, SampleCategory::Desserts).await;
    let main_dishes = create_sample_category(&application, SampleCategory::MainDishes).await;

    let first_dessert = SampleRecipe {
        category_id: Some(desserts.id),
        ..SampleRecipe::titled("Potica")
    }
    .create(&application, author.id)
    .await;

    // Recipes in other categories (or in none), as well as unpublished
    // ones in this category, must not leak into the listing.
    SampleRecipe {
        category_id: Some(main_dishes.id),
        ..SampleRecipe::titled("Jota")
    }
    .create(&application, author.id)
    .await;

    SampleRecipe::titled("Zganci")
        .create(&application, author.id)
        .await;

    SampleRecipe {
        is_published: false,
        category_id: Some(desserts.id),
        ..SampleRecipe::titled("Osnutek")
    }
    .create(&application, author.id)
    .await;

    let second_dessert = SampleRecipe {
        category_id: Some(desserts.id),
        ..SampleRecipe::titled("Gibanica")
    }
    .create(&application, author.id)
    .await;


    let response = application
        .request(Method::GET, format!("/recipes/category/{}", desserts.id))
        .send()
        .await;

    response.assert_status_equals(StatusCode::OK);

    let category_page = response.json_body::<RecipeListResponse>();

    assert_eq!(category_page.title, "Desserts - Category | Recipes");

    let listed_recipe_ids: Vec<RecipeId> = category_page
        .recipes
        .iter()
        .map(|recipe| recipe.id)
        .collect();

    assert_eq!(
        listed_recipe_ids,
        vec![second_dessert.id, first_dessert.id]
    );
}

#[tokio::test]
async fn category_with_no_recipes_is_not_found() {
    let application = prepare_test_application().await;

    let desserts = create_sample_category(&application, SampleCategory::Desserts).await;


    let response = application
        .request(Method::GET, format!("/recipes/category/{}", desserts.id))
        .send()
        .await;

    response.assert_status_equals(StatusCode::NOT_FOUND);
    response.assert_json_body_matches(ResponseWithErrorReason::new(
        ErrorReason::category_has_no_published_recipes(),
    ));
}

#[tokio::test]
async fn category_with_only_unpublished_recipes_is_not_found() {
    let application = prepare_test_application().await;

    let author = SampleUser::Bojan.create(&application).await;
    let desserts = create_sample_category(&application, SampleCategory::Desserts).await;

    SampleRecipe {
        is_published: false,
        category_id: Some(desserts.id),
        ..SampleRecipe::titled("Osnutek")
    }
    .create(&application, author.id)
    .await;


    let response = application
        .request(Method::GET, format!("/recipes/category/{}", desserts.id))
        .send()
        .await;

    response.assert_status_equals(StatusCode::NOT_FOUND);
    response.assert_json_body_matches(ResponseWithErrorReason::new(
        ErrorReason::category_has_no_published_recipes(),
    ));
}

#[tokio::test]
async fn missing_category_is_not_found() {
    let application = prepare_test_application().await;

    let response = application
        .request(Method::GET, "/recipes/category/999")
        .send()
        .await;

    response.assert_status_equals(StatusCode::NOT_FOUND);
    response.assert_json_body_matches(ResponseWithErrorReason::new(
        ErrorReason::category_has_no_published_recipes(),
    ));
}

#[tokio::test]
async fn non_numeric_category_id_is_a_bad_request() {
    let application = prepare_test_application().await;

    let response = application
        .request(Method::GET, "/recipes/category/sladice")
        .send()
        .await;

    response.assert_status_equals(StatusCode::BAD_REQUEST);
    response.assert_json_body_matches(ResponseWithErrorReason::new(
        ErrorReason::invalid_id_format(),
    ));
}
