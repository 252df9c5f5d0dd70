use skillet_core::api_models::PingResponse;
use skillet_test_util::prelude::*;

#[tokio::test]
async fn server_can_be_pinged() {
    let application = prepare_test_application().await;

    let response = application.request(Method::GET, "/health/ping").send().await;

    response.assert_status_equals(StatusCode::OK);
    response.assert_json_body_matches(PingResponse { ok: true });
}

#[tokio::test]
async fn trailing_slashes_are_normalized_away() {
    let application = prepare_test_application().await;

    let response = application
        .request(Method::GET, "/health/ping/")
        .send()
        .await;

    response.assert_status_equals(StatusCode::OK);
    response.assert_json_body_matches(PingResponse { ok: true });
}

#[tokio::test]
async fn openapi_document_is_served() {
    let application = prepare_test_application().await;

    let response = application
        .request(Method::GET, "/api-docs/openapi.json")
        .send()
        .await;

    response.assert_status_equals(StatusCode::OK);

    let document = response.json_body::<serde_json::Value>();

    assert_eq!(document["info"]["title"], "Skillet API");
    assert!(document["paths"].is_object());
}
