//! Messaging gateway abstraction
//!
//! The bot core talks to an abstract gateway so the survey engine, menu
//! router and dispatcher can be exercised in tests without a network. The
//! production implementation speaks the Telegram Bot API.

pub mod telegram;

use async_trait::async_trait;

use crate::utils::errors::Result;

pub use telegram::{TelegramGateway, WebhookUpdate};

/// Options for plain-text sends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SendOptions {
    /// Attach the standing main-menu reply keyboard to this message
    pub persistent_menu: bool,
}

impl SendOptions {
    /// Options that attach the main menu
    pub fn with_menu() -> Self {
        Self {
            persistent_menu: true,
        }
    }
}

/// One inline choice; the label is shown on the button and the value is what
/// comes back when the user clicks it. For survey questions both are the
/// option string itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceButton {
    pub label: String,
    pub value: String,
}

impl ChoiceButton {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Outbound side of the messaging transport
#[async_trait]
pub trait MessagingGateway: Send + Sync {
    /// Send a plain text message, optionally with the main-menu keyboard
    async fn send_text(&self, user_id: i64, text: &str, options: SendOptions) -> Result<()>;

    /// Send a message with inline choice buttons, one per row, in order
    async fn send_buttons(&self, user_id: i64, text: &str, rows: &[ChoiceButton]) -> Result<()>;

    /// Acknowledge a button click so the client stops showing a spinner
    async fn acknowledge_click(&self, click_id: &str) -> Result<()>;
}
