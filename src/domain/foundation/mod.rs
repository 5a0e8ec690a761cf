//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects, numeric coercion helpers, and error types
//! that form the vocabulary of the SpendSense domain.

mod errors;
mod numeric;
mod score;
mod timestamp;

pub use errors::ValidationError;
pub use numeric::{finite_or_zero, percent_of, sanitize_amount};
pub use score::Score;
pub use timestamp::Timestamp;

pub(crate) use numeric::round4;
