pub mod error;
pub mod models;
pub mod validation;
pub mod voter;
pub mod tally;

pub use error::{ErrorCode, ErrorResponse};
pub use models::*;
pub use validation::*;
pub use voter::*;
pub use tally::percentage;

#[cfg(test)]
mod tests;
