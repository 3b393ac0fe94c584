//! Utility modules
//!
//! Contains error types and logging setup shared across the application.

pub mod errors;
pub mod logging;

pub use errors::{EcoChefError, Result};
