//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, numeric helpers, errors)
//! - `profile` - The user's financial situation and preferences
//! - `decision` - The multi-criteria purchase decision engine and formatter

pub mod decision;
pub mod foundation;
pub mod profile;
