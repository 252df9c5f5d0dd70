mod application;
pub mod prelude;
mod response;
pub mod sample_categories;
pub mod sample_recipes;
pub mod sample_users;
pub use application::*;
pub use response::*;
