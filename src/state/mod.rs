//! State management module
//!
//! This module holds per-user survey sessions and the in-memory store that
//! tracks them for the lifetime of the process.

pub mod session;
pub mod store;

pub use session::{Session, SurveyState};
pub use store::SessionStore;
