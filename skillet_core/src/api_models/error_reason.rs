use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;



/// An [`ErrorReason`]-related trait providing a quick static description for a given error reason.
pub trait ErrorReasonName {
    fn reason_description(&self) -> &'static str;
}


/// Strongly typed reasons for error responses across all endpoints.
///
/// Serialized adjacently tagged, e.g. `{"type": "recipe-not-found"}` or
/// `{"type": "other", "data": {"reason": "..."}}`.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, ToSchema)]
#[serde(tag = "type", content = "data")]
#[non_exhaustive]
pub enum ErrorReason {
    /// Indicates that no published recipe exists under the requested ID.
    ///
    /// Unpublished recipes are deliberately indistinguishable from
    /// nonexistent ones here.
    #[serde(rename = "recipe-not-found")]
    RecipeNotFound,

    /// Indicates that the requested category contains no published recipes.
    ///
    /// This also covers category IDs that don't exist at all; the two cases
    /// are not told apart in responses.
    #[serde(rename = "category-has-no-published-recipes")]
    CategoryHasNoPublishedRecipes,

    /// Indicates that the search endpoint was called without a `q` query
    /// parameter, or with an empty (or whitespace-only) one.
    #[serde(rename = "missing-search-query")]
    MissingSearchQuery,

    /// Indicates that some provided ID parameter (in string format)
    /// was not a valid integer ID.
    #[serde(rename = "invalid-id-format")]
    InvalidIdFormat,

    #[serde(rename = "other")]
    Other { reason: Cow<'static, str> },
}

impl ErrorReason {
    pub const fn recipe_not_found() -> Self {
        Self::RecipeNotFound
    }

    pub const fn category_has_no_published_recipes() -> Self {
        Self::CategoryHasNoPublishedRecipes
    }

    pub const fn missing_search_query() -> Self {
        Self::MissingSearchQuery
    }

    pub const fn invalid_id_format() -> Self {
        Self::InvalidIdFormat
    }
}

impl ErrorReasonName for ErrorReason {
    fn reason_description(&self) -> &'static str {
        match self {
            Self::RecipeNotFound => "recipe not found",
            Self::CategoryHasNoPublishedRecipes => "category has no published recipes",
            Self::MissingSearchQuery => "missing search query",
            Self::InvalidIdFormat => "invalid ID format",
            Self::Other { .. } => "other reason",
        }
    }
}




/// A JSON-serializable model containing a single field named `reason` ([`ErrorReason`]).
///
/// This type is used when responding with strongly-typed error reasons,
/// **do not use directly in endpoint code**, use e.g. `EndpointResponseBuilder`
/// with its `with_error_reason` builder method instead.
#[derive(Serialize, PartialEq, Eq, Clone, Debug, ToSchema)]
#[cfg_attr(
    feature = "serde_impls_for_client_on_models",
    derive(serde::Deserialize)
)]
pub struct ResponseWithErrorReason {
    pub reason: ErrorReason,
}

impl ResponseWithErrorReason {
    #[inline]
    pub fn new(reason: ErrorReason) -> Self {
        Self { reason }
    }
}
