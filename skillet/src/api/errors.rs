//! Provides ways of handling errors in API endpoint functions
//! and ways to have those errors automatically turned into correct
//! HTTP error responses when returned as `Err(error)` from those functions.

use std::borrow::{Borrow, Cow};
use std::fmt::{Display, Formatter};
use std::num::ParseIntError;

use actix_http::header::{HeaderName, HeaderValue};
use actix_web::body::{BoxBody, MessageBody};
use actix_web::http::{header, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use skillet_core::api_models::{ErrorReason, ResponseWithErrorReason};
use skillet_database::QueryError;
use thiserror::Error;
use tracing::error;

use super::macros::construct_last_modified_header_value;


/// General-purpose error type for endpoint handler functions.
///
/// Use this type alongside an [`EndpointResult`] return type in actix endpoint
/// handlers to allow you to easily
/// [`?`](https://doc.rust-lang.org/book/ch09-02-recoverable-errors-with-result.html#a-shortcut-for-propagating-errors-the--operator)-return
/// errors and automatically convert them into correct HTTP 4xx and 5xx responses.
/// For details on how the conversion works, consult the
/// [Actix documentation on errors](https://actix.rs/docs/errors) and the
/// `impl `[`ResponseError`]` for `[`EndpointError`] block.
///
/// Internal variants carry server-side context for the log;
/// none of it leaks into the produced HTTP response.
#[derive(Debug, Error)]
pub enum EndpointError {
    /*
     * Client errors.
     *
     * Reasons are exposed as a HTTP status code plus a JSON body.
     */
    /// A path parameter that should have been an integer ID
    /// could not be parsed as one. Produces a `400 Bad Request`.
    InvalidIdFormat {
        #[source]
        error: ParseIntError,
    },

    /*
     * Server errors.
     *
     * Reasons are not shown externally.
     */
    /// Internal error with a string reason.
    /// Triggers a `500 Internal Server Error` (**reason doesn't leak through the API**).
    InternalErrorWithReason {
        reason: Cow<'static, str>,
    },

    /// Internal error, constructed from a boxed [`Error`][std::error::Error].
    /// Triggers a `500 Internal Server Error` (**error doesn't leak through the API**).
    InternalGenericError {
        #[from]
        #[source]
        error: Box<dyn std::error::Error>,
    },

    /// Internal error, constructed from a [`sqlx::Error`].
    /// Triggers a `500 Internal Server Error` (**error doesn't leak through the API**).
    InternalDatabaseError {
        #[from]
        #[source]
        error: sqlx::Error,
    },

    /// The database returned data that violates an invariant the server
    /// relies on. Triggers a `500 Internal Server Error`
    /// (**problem description doesn't leak through the API**).
    InvalidDatabaseState {
        problem: Cow<'static, str>,
    },
}

impl EndpointError {
    pub const fn invalid_id_format(error: ParseIntError) -> Self {
        Self::InvalidIdFormat { error }
    }

    pub fn internal_error<E>(error: E) -> Self
    where
        E: std::error::Error + 'static,
    {
        Self::InternalGenericError {
            error: Box::new(error),
        }
    }

    #[allow(unused)]
    pub fn internal_database_error(error: sqlx::Error) -> Self {
        Self::InternalDatabaseError { error }
    }

    /// Initialize a new internal API error using an internal reason string.
    /// When constructing an HTTP response using this error variant, the **reason
    /// is not leaked through the API.**
    #[inline]
    pub fn internal_error_with_reason<S>(reason: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::InternalErrorWithReason {
            reason: reason.into(),
        }
    }

    #[inline]
    pub fn invalid_database_state<S>(problem: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::InvalidDatabaseState {
            problem: problem.into(),
        }
    }
}

impl Display for EndpointError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIdFormat { error } => {
                write!(f, "Invalid ID format: {}.", error)
            }
            Self::InternalErrorWithReason { reason } => {
                write!(f, "Internal server error (with reason): {reason}.")
            }
            Self::InternalGenericError { error } => {
                write!(f, "Internal server error (generic): {error:?}")
            }
            Self::InternalDatabaseError { error } => {
                write!(f, "Internal server error (database error): {error}.")
            }
            Self::InvalidDatabaseState { problem } => {
                write!(f, "Inconsistent internal database state: {}", problem)
            }
        }
    }
}

impl ResponseError for EndpointError {
    /// In reality, because we implemented `error_response` below,
    /// this function will never be called (status codes from `error_response` will be used).
    /// (see [`ResponseError::status_code`]).
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidIdFormat { .. } => StatusCode::BAD_REQUEST,
            Self::InternalErrorWithReason { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InternalGenericError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InternalDatabaseError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidDatabaseState { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let fallibly_built_response = match self {
            Self::InvalidIdFormat { .. } => EndpointResponseBuilder::bad_request()
                .with_error_reason(ErrorReason::invalid_id_format())
                .build(),
            Self::InternalErrorWithReason { reason } => {
                error!(%reason, "Internal server error (with reason).");
                EndpointResponseBuilder::internal_server_error().build()
            }
            Self::InternalGenericError { error } => {
                error!(?error, "Internal server error (generic).");
                EndpointResponseBuilder::internal_server_error().build()
            }
            Self::InternalDatabaseError { error } => {
                error!(%error, "Internal server error (database error).");
                EndpointResponseBuilder::internal_server_error().build()
            }
            Self::InvalidDatabaseState { problem } => {
                error!(%problem, "Internal server error (inconsistent database state).");
                EndpointResponseBuilder::internal_server_error().build()
            }
        };

        fallibly_built_response.unwrap_or_else(|_| HttpResponse::InternalServerError().finish())
    }
}


impl From<QueryError> for EndpointError {
    fn from(value: QueryError) -> Self {
        match value {
            QueryError::SqlxError { error } => Self::InternalDatabaseError { error },
            QueryError::DatabaseInconsistencyError { problem } => {
                Self::InvalidDatabaseState { problem }
            }
        }
    }
}




/// A builder for the most common endpoint responses:
/// a status code, optionally a JSON body, optionally extra headers.
pub struct EndpointResponseBuilder {
    status_code: StatusCode,

    body: Option<Result<Vec<u8>, serde_json::Error>>,

    additional_headers: Vec<(HeaderName, HeaderValue)>,
}

impl EndpointResponseBuilder {
    pub fn new(status_code: StatusCode) -> Self {
        Self {
            status_code,
            body: None,
            additional_headers: Vec::with_capacity(1),
        }
    }

    #[inline]
    pub fn ok() -> Self {
        Self::new(StatusCode::OK)
    }

    #[inline]
    pub fn bad_request() -> Self {
        Self::new(StatusCode::BAD_REQUEST)
    }

    #[inline]
    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND)
    }

    #[inline]
    pub fn not_modified() -> Self {
        Self::new(StatusCode::NOT_MODIFIED)
    }

    #[inline]
    pub fn internal_server_error() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn with_json_body<D, S>(mut self, data: D) -> Self
    where
        S: Serialize,
        D: Borrow<S>,
    {
        let body = serde_json::to_vec(data.borrow());

        self.additional_headers.push((
            header::CONTENT_TYPE,
            HeaderValue::from_static(mime::APPLICATION_JSON.as_ref()),
        ));

        Self {
            status_code: self.status_code,
            body: Some(body),
            additional_headers: self.additional_headers,
        }
    }

    pub fn with_error_reason<R>(self, reason: R) -> Self
    where
        R: Into<ErrorReason>,
    {
        self.with_json_body(ResponseWithErrorReason::new(reason.into()))
    }

    pub fn with_last_modified_at(mut self, last_modified_at: &DateTime<Utc>) -> Self {
        self.additional_headers.push((
            header::LAST_MODIFIED,
            construct_last_modified_header_value(last_modified_at),
        ));

        Self {
            status_code: self.status_code,
            body: self.body,
            additional_headers: self.additional_headers,
        }
    }

    pub fn build(self) -> Result<HttpResponse<BoxBody>, EndpointError> {
        let optional_body = match self.body {
            Some(body_or_error) => match body_or_error {
                Ok(body) => Some(body),
                Err(serialization_error) => {
                    return Err(EndpointError::internal_error(serialization_error))
                }
            },
            None => None,
        };


        let mut response_builder = HttpResponse::build(self.status_code);

        for (header_name, header_value) in self.additional_headers {
            response_builder.insert_header((header_name, header_value));
        }


        match optional_body {
            Some(body) => response_builder
                .message_body(body.boxed())
                // This will, however, never produce an error (`type Error = Infallible`),
                // see <https://docs.rs/actix-web/4.9.0/actix_web/body/trait.MessageBody.html#impl-MessageBody-for-Vec%3Cu8%3E>.
                .map_err(EndpointError::internal_error),
            None => response_builder
                .message_body(().boxed())
                // This will, however, never produce an error (`type Error = Infallible`),
                // see <https://docs.rs/actix-web/4.9.0/actix_web/body/trait.MessageBody.html#impl-MessageBody-for-()>.
                .map_err(EndpointError::internal_error),
        }
    }
}




/// Short for [`Result`]`<`[`HttpResponse`]`, `[`EndpointError`]`>`,
/// the return type of nearly all endpoint handlers in this crate.
///
/// The generic parameter (`Body`) specifies which body type is used inside [`HttpResponse`]
/// and defaults to [`BoxBody`], which is what [`EndpointResponseBuilder`] produces
/// and will likely be the most common body type.
pub type EndpointResult<Body = BoxBody> = Result<HttpResponse<Body>, EndpointError>;
