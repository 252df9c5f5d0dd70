use actix_web::{get, web, Scope};
use skillet_core::api_models::PingResponse;

use crate::api::errors::EndpointResult;
use crate::api::macros::ContextlessResponder;
use crate::api::openapi;
use crate::impl_json_response_builder;


impl_json_response_builder!(PingResponse);


/// Ping the server.
#[utoipa::path(
    get,
    path = "/health/ping",
    tag = "health",
    responses(
        (
            status = 200,
            description = "Server is alive and well.",
            body = inline(PingResponse),
            example = json!({ "ok": true })
        ),
        openapi::response::InternalServerError,
    )
)]
#[get("/ping")]
pub async fn ping() -> EndpointResult {
    Ok(PingResponse { ok: true }.into_response())
}


pub fn health_router() -> Scope {
    web::scope("/health").service(ping)
}
