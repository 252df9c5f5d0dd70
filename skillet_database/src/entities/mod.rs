pub mod category;
pub mod recipe;
pub mod user;
