mod error_reason;
mod health;
mod recipes;

pub use error_reason::*;
pub use health::*;
pub use recipes::*;
