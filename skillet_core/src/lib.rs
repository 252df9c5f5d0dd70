//! Core types shared between the server, database, seeder, and test crates:
//! identifier newtypes, API (request and response) models, and model
//! field validation.

pub mod api_models;
pub mod ids;
pub mod validation;
