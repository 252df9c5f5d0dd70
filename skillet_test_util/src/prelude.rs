pub use actix_http::{header, Method, StatusCode};
pub use skillet::api::macros::construct_last_modified_header_value;

pub use super::application::{prepare_test_application, TestApplication};
pub use super::sample_categories::*;
pub use super::sample_recipes::*;
pub use super::sample_users::*;
