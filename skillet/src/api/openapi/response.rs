//! [`utoipa`] (OpenAPI) response annotations for Skillet endpoints.
//!
//! # Usage
//! The types in this module are meant for different use-cases (described individually).
//! However, they all implement [`utoipa::IntoResponses`] / [`utoipa::ToResponse`],
//! allowing us to insert them into our [`utoipa::path`] endpoint annotations.
//!
//! **It is fully up to your endpoint implementation to ensure
//! what you annotate it with actually happens. Adding an [`utoipa`] annotation from this module
//! only means that it will append/modify the OpenAPI documentation.**
//!
//! <br>
//!
//! ## [`utoipa::IntoResponses`]-implementing types
//! Types that implement [`utoipa::IntoResponses`] can be used
//! inside the `responses` section (example based on the [`InternalServerError`] annotation):
//! ```no_run
//! use skillet::api::errors::EndpointResult;
//! use skillet::api::openapi::response::InternalServerError;
//!
//! #[utoipa::path(
//!     get,
//!     path = "/",
//!     responses(
//!         // This will generate the appropriate HTTP `500 Internal Server Error`
//!         // documentation on the endpoint's OpenAPI schema.
//!         InternalServerError
//!     )
//! )]
//! #[actix_web::get("/")]
//! pub async fn foo_bar() -> EndpointResult {
//!     todo!();
//! }
//! ```
//!
//!
//! ## [`utoipa::ToResponse`]-implementing types
//! Types that implement [`utoipa::ToResponse`] can be used
//! inside an individual response in the `responses` section
//! (example based on the [`AsErrorReason`] annotation):
//! ```no_run
//! use skillet::declare_openapi_error_reason_response;
//! use skillet::api::errors::EndpointResult;
//! use skillet::api::openapi::response::AsErrorReason;
//! use skillet_core::api_models::ErrorReason;
//!
//! declare_openapi_error_reason_response!(
//!     pub struct MyCustomErrorReason {
//!         description => "Custom error reason.",
//!         reason => ErrorReason::recipe_not_found()
//!     }
//! );
//!
//! #[utoipa::path(
//!     get,
//!     path = "/",
//!     responses(
//!         // This will generate the appropriate response that includes a strongly-typed reason
//!         // on the endpoint's OpenAPI schema.
//!         (
//!             status = 404,
//!             response = inline(AsErrorReason<MyCustomErrorReason>)
//!         )
//!     )
//! )]
//! #[actix_web::get("/")]
//! pub async fn foo_bar() -> EndpointResult {
//!     todo!();
//! }
//! ```

use std::{collections::BTreeMap, marker::PhantomData};

use actix_http::StatusCode;
use skillet_core::api_models::{ErrorReason, ErrorReasonName, ResponseWithErrorReason};
use utoipa::{
    openapi::{
        example::ExampleBuilder,
        ContentBuilder,
        RefOr,
        ResponseBuilder,
        ResponsesBuilder,
    },
    ToSchema,
};



/// Indicates that an endpoint may return a `304 Not Modified` HTTP response
/// if the underlying resource did not change.
///
///
/// # Usage
/// This is an endpoint OpenAPI schema documentation type that implements [`utoipa::IntoResponses`].
/// See [module-level documentation] on how to apply this set of responses to an endpoint's
/// OpenAPI documentation.
///
/// **As with all types in this module, it is fully up to your endpoint implementation to ensure
/// what you annotate it with actually happens. Adding this annotation only means
/// that it will append/modify the OpenAPI documentation.**
///
/// # Generated documentation
/// This type appends the following responses to the documentation:
/// - `304 Not Modified` with an empty body; implementation details are
///   up to the endpoint on which this is defined.
///
///
/// [module-level documentation]: self
pub struct Unmodified;

impl utoipa::IntoResponses for Unmodified {
    fn responses() -> BTreeMap<String, utoipa::openapi::RefOr<utoipa::openapi::response::Response>> {
        let unmodified_data_response = ResponseBuilder::new()
            .description(
                "Resource hasn't been modified since the timestamp specified in the `If-Modified-Since` header. \
                As such, this status code can only be returned if that header is provided in the request."
            )
            .build();

        ResponsesBuilder::new()
            .response("304", unmodified_data_response)
            .build()
            .into()
    }
}


/// Indicates that an endpoint may return a `500 Internal Server Error` HTTP response
/// indicating that something went wrong internally (e.g. database connection issues,
/// JSON serialization error, ...).
///
/// This should be present on basically all routes,
/// as even most extractors can cause this to happen.
///
/// # Usage
/// This is an endpoint OpenAPI schema documentation type that implements [`utoipa::IntoResponses`].
/// See [module-level documentation] on how to apply this set of responses to an endpoint's
/// OpenAPI documentation.
///
/// **As with all types in this module, it is fully up to your endpoint implementation to ensure
/// what you annotate it with actually happens. Adding this annotation only means
/// that it will append/modify the OpenAPI documentation.**
///
/// # Generated documentation
/// This type appends the following responses to the documentation:
/// - `500 Internal Server Error` without any further details.
///
///
/// [module-level documentation]: self
pub struct InternalServerError;

impl utoipa::IntoResponses for InternalServerError {
    fn responses() -> BTreeMap<String, utoipa::openapi::RefOr<utoipa::openapi::response::Response>> {
        let internal_error_response = ResponseBuilder::new()
            .description("Internal server error.")
            .build();

        ResponsesBuilder::new()
            .response("500", internal_error_response)
            .build()
            .into()
    }
}



/// Indicates that an endpoint parses a URL parameter as an integer ID and,
/// as such, can fail on non-integer input, returning `400 Bad Request`
/// with details about the reason.
///
///
/// # Usage
/// This is an endpoint OpenAPI schema documentation type that implements [`utoipa::IntoResponses`].
/// See [module-level documentation] on how to apply this set of responses to an endpoint's
/// OpenAPI documentation.
///
/// **As with all types in this module, it is fully up to your endpoint implementation to ensure
/// what you annotate it with actually happens. Adding this annotation only means
/// that it will append/modify the OpenAPI documentation.**
///
///
/// # Example
/// ```no_run
/// use actix_web::web;
/// use skillet_core::ids::RecipeId;
/// use skillet::api::openapi::response::IdUrlParameterError;
/// use skillet::api::errors::EndpointResult;
/// use skillet::api::endpoints::parse_id;
///
/// #[utoipa::path(
///     get,
///     path = "/recipes/{recipe_id}",
///     responses(
///         IdUrlParameterError
///     )
/// )]
/// #[actix_web::get("/{recipe_id}")]
/// async fn fetch_something(
///     parameters: web::Path<(String,)>,
/// ) -> EndpointResult {
///     // This function can fail to parse the string as an integer ID,
///     // and will return `EndpointError::InvalidIdFormat` when that happens.
///     let recipe_id = parse_id::<RecipeId>(parameters.into_inner().0)?;
///
///     println!("{:?}", recipe_id);
///
///     // ...
///     # todo!();
/// }
/// ```
///
///
/// [module-level documentation]: self
pub struct IdUrlParameterError;

impl utoipa::IntoResponses for IdUrlParameterError {
    fn responses() -> BTreeMap<String, utoipa::openapi::RefOr<utoipa::openapi::response::Response>> {
        let invalid_id_400_response = ResponseBuilder::new()
            .description(
                "One of the expected URL parameters was an integer ID, but it was in an invalid format."
            )
            .content(
                mime::APPLICATION_JSON.to_string(),
                ContentBuilder::new()
                    .examples_from_iter([(
                        "Invalid ID",
                        ExampleBuilder::new()
                            .description("The provided value is not a valid integer ID.")
                            .value(Some(
                                serde_json::to_value(
                                    ResponseWithErrorReason::new(
                                        ErrorReason::invalid_id_format()
                                    )
                                ).expect("failed to serialize invalid ID error response")
                            ))
                            .build()
                    )])
                    .schema(ResponseWithErrorReason::schema().1)
                    .build()
            )
            .build();


        ResponsesBuilder::new()
            .response(
                StatusCode::BAD_REQUEST.as_str(),
                invalid_id_400_response,
            )
            .build()
            .into()
    }
}



/// A hidden trait related to the [`declare_openapi_error_reason_response!`] macro.
/// Avoid implementing directly.
///
/// [`declare_openapi_error_reason_response!`]: crate::declare_openapi_error_reason_response
pub trait ErrorReasonNewtype {
    /// A concrete description of the reason for this error to occur.
    fn description() -> &'static str;

    /// Returns a correct variant (but otherwise a mock) [`ErrorReason`].
    /// Note that the inner state of the variant is ignored when generating
    /// generic reason descriptions (see [`ErrorReasonName`]).
    fn stateless_error_reason() -> ErrorReason;
}


/// A macro for declaring rich custom endpoint responses that include
/// a JSON-serialized [`ResponseWithErrorReason`] in their body, describing
/// the precise reason for the error.
///
/// For more details, see [`AsErrorReason`].
///
/// [`ResponseWithErrorReason`]: skillet_core::api_models::ResponseWithErrorReason
/// [`AsErrorReason`]: crate::api::openapi::response::AsErrorReason
#[macro_export]
macro_rules! declare_openapi_error_reason_response {
    (
        $struct_visibility:vis struct $struct_name:ident {
            description => $description:expr,
            reason => $error_reason:expr
        }
    ) => {
        $struct_visibility struct $struct_name;

        impl $crate::api::openapi::response::ErrorReasonNewtype for $struct_name {
            fn description() -> &'static str {
                $description
            }

            fn stateless_error_reason() -> skillet_core::api_models::ErrorReason {
                $error_reason.into()
            }
        }
    };
}


/// Indicates that an endpoint returns a JSON-serialized error reason.
///
/// Alongside this response type, users will need to declare an error reason
/// newtype using [`declare_openapi_error_reason_response!`].
///
/// # Usage
/// This is an endpoint OpenAPI schema documentation type that implements [`utoipa::ToResponse`].
/// See [module-level documentation] on how to apply this response to an endpoint's
/// OpenAPI documentation.
///
/// **As with all types in this module, it is fully up to your endpoint implementation to ensure
/// what you annotate it with actually happens. Adding this annotation only means
/// that it will append/modify the OpenAPI documentation.**
///
///
/// # Example
/// ```no_run
/// use actix_web::web;
/// use skillet::declare_openapi_error_reason_response;
/// use skillet::api::errors::{EndpointResponseBuilder, EndpointResult};
/// use skillet::api::openapi::response::AsErrorReason;
/// use skillet_core::api_models::ErrorReason;
///
/// declare_openapi_error_reason_response!(
///     pub struct RequestedRecipeNotFound {
///         description => "The requested recipe does not exist.",
///         reason => ErrorReason::recipe_not_found()
///     }
/// );
///
/// #[utoipa::path(
///     get,
///     path = "/recipes/{recipe_id}",
///     responses(
///         // ...
///         (
///             status = 404,
///             // This is where the magic happens. We specify an inlined
///             // `RequestedRecipeNotFound` type that we just declared, wrapped
///             // inside an `AsErrorReason`, which gives it its correct schema and description.
///             response = inline(AsErrorReason<RequestedRecipeNotFound>)
///         ),
///         // ...
///     )
/// )]
/// #[actix_web::get("/{recipe_id}")]
/// async fn get_recipe(
///     parameters: web::Path<(String,)>,
/// ) -> EndpointResult {
///     // ...
///     # let recipe_exists = false;
///
///     if !recipe_exists {
///         return EndpointResponseBuilder::not_found()
///             .with_error_reason(ErrorReason::recipe_not_found())
///             .build();
///     }
///
///     // ...
///     # todo!();
/// }
/// ```
///
/// [`declare_openapi_error_reason_response!`]: crate::declare_openapi_error_reason_response
pub struct AsErrorReason<R>
where
    R: ErrorReasonNewtype,
{
    _marker: PhantomData<R>,
}

impl<'a, R> utoipa::ToResponse<'a> for AsErrorReason<R>
where
    R: ErrorReasonNewtype,
{
    fn response() -> (
        &'a str,
        RefOr<utoipa::openapi::response::Response>,
    ) {
        let response = ResponseBuilder::new()
            .description(R::description())
            .content(
                mime::APPLICATION_JSON.to_string(),
                ContentBuilder::new()
                    .examples_from_iter([(
                        format!(
                            "Reason: {}",
                            R::stateless_error_reason().reason_description()
                        ),
                        ExampleBuilder::new()
                            .value(Some(
                                serde_json::to_value(ResponseWithErrorReason::new(
                                    R::stateless_error_reason(),
                                ))
                                .expect("failed to serialize AsErrorReason example"),
                            ))
                            .build(),
                    )])
                    .schema(ResponseWithErrorReason::schema().1)
                    .build(),
            )
            .build();

        ("Reason", RefOr::T(response))
    }
}
