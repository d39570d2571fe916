//! nutriscreen-core
//!
//! Pure domain types for nutritional screening and food recommendation.
//! No I/O and no engine logic — this is the shared vocabulary of the
//! nutriscreen system.

pub mod error;
pub mod models;
