//! EcoChef Telegram Bot
//!
//! A webhook-driven Telegram bot that walks users through a fixed diet survey
//! and answers with a nutrition profile. This library provides the survey
//! state machine, menu command routing, update dispatching and the messaging
//! gateway abstraction over the Telegram Bot API.

pub mod config;
pub mod content;
pub mod dispatch;
pub mod gateway;
pub mod menu;
pub mod server;
pub mod state;
pub mod survey;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{EcoChefError, Result};

// Re-export main components for easy access
pub use dispatch::{InboundEvent, UpdateDispatcher};
pub use gateway::{ChoiceButton, MessagingGateway, SendOptions};
pub use menu::{MenuCommand, RandomSource, ThreadRngSource};
pub use state::{Session, SessionStore, SurveyState};
pub use survey::SurveyEngine;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
