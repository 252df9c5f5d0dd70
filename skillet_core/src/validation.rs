//! Model field invariants, checked when constructing values that are
//! about to be persisted (instead of relying on database constraints
//! alone to reject them).
//!
//! Lengths are counted in characters, not bytes.

use thiserror::Error;


pub const CATEGORY_NAME_MAXIMUM_LENGTH: usize = 60;

pub const RECIPE_TITLE_MAXIMUM_LENGTH: usize = 64;

pub const RECIPE_DESCRIPTION_MAXIMUM_LENGTH: usize = 164;

pub const RECIPE_SLUG_MAXIMUM_LENGTH: usize = 50;

pub const RECIPE_PREPARATION_TIME_UNIT_MAXIMUM_LENGTH: usize = 64;

pub const RECIPE_SERVINGS_UNIT_MAXIMUM_LENGTH: usize = 64;

pub const USER_USERNAME_MAXIMUM_LENGTH: usize = 150;

pub const USER_DISPLAY_NAME_MAXIMUM_LENGTH: usize = 150;



#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelValidationError {
    #[error(
        "field \"{}\" is {} characters long, which is over the maximum of {}",
        .field_name,
        .actual_length,
        .maximum_length
    )]
    FieldTooLong {
        field_name: &'static str,
        maximum_length: usize,
        actual_length: usize,
    },

    #[error("field \"{}\" must not be empty", .field_name)]
    FieldEmpty { field_name: &'static str },

    #[error("\"{}\" is not a valid slug", .slug)]
    InvalidSlug { slug: String },
}



/// Checks that `value` is at most `maximum_length` *characters* long.
pub fn validate_field_character_length(
    field_name: &'static str,
    maximum_length: usize,
    value: &str,
) -> Result<(), ModelValidationError> {
    let actual_length = value.chars().count();

    if actual_length > maximum_length {
        return Err(ModelValidationError::FieldTooLong {
            field_name,
            maximum_length,
            actual_length,
        });
    }

    Ok(())
}


/// Checks that `value` is non-empty and can be used as a URL-safe slug,
/// i.e. consists only of ASCII alphanumerics, hyphens, and underscores.
pub fn validate_slug(value: &str) -> Result<(), ModelValidationError> {
    if value.is_empty() {
        return Err(ModelValidationError::FieldEmpty { field_name: "slug" });
    }

    validate_field_character_length("slug", RECIPE_SLUG_MAXIMUM_LENGTH, value)?;

    let is_valid_slug = value
        .chars()
        .all(|character| character.is_ascii_alphanumeric() || character == '-' || character == '_');

    if !is_valid_slug {
        return Err(ModelValidationError::InvalidSlug {
            slug: value.to_string(),
        });
    }

    Ok(())
}
