//! Survey module
//!
//! Drives users through the fixed question sequence and terminates with the
//! diet profile.

pub mod engine;

pub use engine::SurveyEngine;
