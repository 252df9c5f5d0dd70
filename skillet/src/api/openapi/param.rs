/// A `utoipa` endpoint parameter for when an endpoint supports specifying
/// the [`If-Modified-Since` header](https://developer.mozilla.org/en-US/docs/Web/HTTP/Headers/If-Modified-Since).
///
/// For a real-life example, see the [`get_recipe_by_id`][crate::api::endpoints::recipes::get_recipe_by_id]
/// endpoint function.
///
/// # Example
/// This example uses the `If-Modified-Since` extractor, see
/// [`OptionalIfModifiedSince`][crate::api::OptionalIfModifiedSince]
/// for more info.
///
/// ```no_run
/// use actix_web::get;
/// use skillet::api::OptionalIfModifiedSince;
/// use skillet::api::openapi;
/// use skillet::api::errors::{EndpointResponseBuilder, EndpointResult};
///
/// #[utoipa::path(
///     get,
///     path = "/hello-world",
///     params(
///         openapi::param::IfModifiedSince,
///     ),
///     responses(
///         openapi::response::Unmodified,
///         openapi::response::InternalServerError,
///     )
/// )]
/// #[get("/hello-world")]
/// pub async fn some_endpoint_function(
///     if_modified_since: OptionalIfModifiedSince,
/// ) -> EndpointResult {
///     # let last_modification_time = chrono::Utc::now();
///     // ...
///
///     if if_modified_since.enabled_and_has_not_changed_since(&last_modification_time) {
///         return EndpointResponseBuilder::not_modified()
///             .with_last_modified_at(&last_modification_time)
///             .build();
///     }
///
///     // ... and so on
///     # todo!();
/// }
/// ```
pub struct IfModifiedSince;

impl utoipa::IntoParams for IfModifiedSince {
    fn into_params(
        _parameter_in_provider: impl Fn() -> Option<utoipa::openapi::path::ParameterIn>,
    ) -> Vec<utoipa::openapi::path::Parameter> {
        let description =
            "If specified, this header makes the server return `304 Not Modified` without \
              content (instead of `200 OK` with the usual response) if the requested data \
              hasn't changed since the specified timestamp.\n\n See \
              [this article on MDN](https://developer.mozilla.org/en-US/docs/Web/HTTP/Headers/If-Modified-Since) \
              for more information about this conditional header.";

        let example = "Wed, 21 Oct 2015 07:28:00 GMT";

        vec![utoipa::openapi::path::ParameterBuilder::new()
            .name("If-Modified-Since")
            .parameter_in(utoipa::openapi::path::ParameterIn::Header)
            .description(Some(description))
            .required(utoipa::openapi::Required::False)
            .example(Some(serde_json::Value::String(
                example.to_string(),
            )))
            .schema(Some(
                utoipa::openapi::ObjectBuilder::new()
                    .schema_type(utoipa::openapi::SchemaType::String)
                    .read_only(Some(true)),
            ))
            .build()]
    }
}
