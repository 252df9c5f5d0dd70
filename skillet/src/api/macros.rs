use std::time::SystemTime;

use actix_http::header::HeaderValue;
use actix_web::body::MessageBody;
use actix_web::HttpResponse;
use chrono::{DateTime, Utc};

/// Simple responder trait (similar to [`actix_web::Responder`]).
///
/// The main difference is that our `into_response` method does not require
/// a reference to [`HttpRequest`][actix_web::HttpRequest],
/// i.e. the response must be built without a request when using this trait.
/// This can make the call signature more sensible in certain cases.
///
/// See documentation for [`impl_json_response_builder`][crate::impl_json_response_builder]
/// for reasoning.
pub trait ContextlessResponder {
    type Body: MessageBody + 'static;

    /// Serializes `self` as JSON and returns a `HTTP 200 OK` response
    /// with a JSON-encoded body.
    fn into_response(self) -> HttpResponse<Self::Body>;
}

/// Formats a timestamp as an HTTP date, suitable for
/// the `Last-Modified` header.
///
/// HTTP dates have second precision, so anything smaller
/// is truncated away.
pub fn construct_last_modified_header_value(last_modified_at: &DateTime<Utc>) -> HeaderValue {
    let http_formatted_date = httpdate::fmt_http_date(SystemTime::from(*last_modified_at));

    // PANIC SAFETY: `httpdate` always produces a visible ASCII string.
    HeaderValue::from_str(&http_formatted_date).unwrap()
}

/// Macro that implements [`ContextlessResponder`] for the given struct,
/// with `into_response` doing basically the same as [`actix_web::Responder::respond_to`],
/// but without having to provide a reference
/// to [`HttpRequest`][actix_web::HttpRequest], making code cleaner.
///
/// The provided struct must already implement [`Serialize`][serde::Serialize].
/// Note that the struct itself may live in another crate of this workspace,
/// which is also why we don't implement [`actix_web::Responder`] here
/// (both the trait and the struct would be foreign).
///
///
/// # Example
/// ```
/// use actix_web::get;
/// use serde::Serialize;
/// use skillet::impl_json_response_builder;
/// use skillet::api::errors::EndpointResult;
/// use skillet::api::macros::ContextlessResponder;
///
/// #[derive(Serialize)]
/// struct SomeResponse {
///     value: i32,
/// }
///
/// impl_json_response_builder!(SomeResponse);
///
///
/// #[get("/some/path")]
/// async fn example_handler() -> EndpointResult {
///     // ...
///
///     Ok(SomeResponse { value: 42 }.into_response())
///     //                           ^^^^^^^^^^^^^^^^
///     // By calling the implementor macro we gained the ability to call
///     // the `into_response` method, allowing us to ergonomically build
///     // an HTTP response with a JSON-encoded body.
/// }
/// ```
#[macro_export]
macro_rules! impl_json_response_builder {
    ($struct:ty) => {
        impl $crate::api::macros::ContextlessResponder for $struct {
            type Body = actix_web::body::BoxBody;

            fn into_response(self) -> actix_web::HttpResponse<Self::Body> {
                actix_web::HttpResponse::Ok().json(&self)
            }
        }
    };
}


#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn last_modified_header_is_http_formatted() {
        let timestamp = Utc.with_ymd_and_hms(2024, 2, 29, 12, 30, 5).unwrap();

        let header_value = construct_last_modified_header_value(&timestamp);

        assert_eq!(
            header_value.to_str().unwrap(),
            "Thu, 29 Feb 2024 12:30:05 GMT"
        );
    }
}
