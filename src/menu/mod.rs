//! Menu command routing
//!
//! Classifies free-form text in menu mode into one of a fixed set of
//! commands and executes the matching action. Matching is trim + lowercase
//! substring/equality only; there is no further tokenization.

use std::sync::Arc;

use rand::Rng;
use tracing::debug;

use crate::content;
use crate::gateway::{MessagingGateway, SendOptions};
use crate::survey::SurveyEngine;
use crate::utils::errors::Result;

/// The commands a menu-mode message can resolve to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    /// `/start`: greeting plus the main menu
    Start,
    /// Message contains a greeting word
    Greeting,
    /// The "start diet selection" menu label
    BeginSurvey,
    /// The "useful tips" menu label
    Tips,
    /// The "about" menu label
    About,
    /// The "contacts" menu label
    Contacts,
    /// Message contains "how are you"
    HowAreYou,
    /// Anything else
    Unknown,
}

/// Classify a message into exactly one command, first match wins.
///
/// The `Unknown` fallback makes classification total.
pub fn classify(text: &str) -> MenuCommand {
    let text = text.trim().to_lowercase();

    if text == "/start" {
        MenuCommand::Start
    } else if content::GREETING_WORDS.iter().any(|word| text.contains(word)) {
        MenuCommand::Greeting
    } else if text == content::MENU_START_SURVEY.to_lowercase() {
        MenuCommand::BeginSurvey
    } else if text == content::MENU_TIPS.to_lowercase() {
        MenuCommand::Tips
    } else if text == content::MENU_ABOUT.to_lowercase() {
        MenuCommand::About
    } else if text == content::MENU_CONTACTS.to_lowercase() {
        MenuCommand::Contacts
    } else if text.contains(content::HOW_ARE_YOU) {
        MenuCommand::HowAreYou
    } else {
        MenuCommand::Unknown
    }
}

/// Source of randomness for joke selection, injectable so tests can pin it
pub trait RandomSource: Send + Sync {
    /// Pick an index in `0..upper`
    fn pick(&self, upper: usize) -> usize;
}

/// Thread-local RNG backed source used in production
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn pick(&self, upper: usize) -> usize {
        rand::thread_rng().gen_range(0..upper)
    }
}

/// Executes classified menu commands
pub struct MenuRouter {
    gateway: Arc<dyn MessagingGateway>,
    random: Arc<dyn RandomSource>,
}

impl MenuRouter {
    pub fn new(gateway: Arc<dyn MessagingGateway>, random: Arc<dyn RandomSource>) -> Self {
        Self { gateway, random }
    }

    /// Classify `text` and run the resulting command
    pub async fn dispatch(&self, user_id: i64, text: &str, engine: &SurveyEngine) -> Result<()> {
        let command = classify(text);
        debug!(user_id = user_id, command = ?command, "Menu command");

        match command {
            MenuCommand::Start => {
                self.gateway
                    .send_text(user_id, content::GREETING, SendOptions::with_menu())
                    .await
            }
            MenuCommand::Greeting => {
                self.gateway
                    .send_text(user_id, content::GREETING_REPLY, SendOptions::default())
                    .await
            }
            MenuCommand::BeginSurvey => engine.start(user_id).await,
            MenuCommand::Tips => {
                self.gateway
                    .send_text(user_id, content::TIPS, SendOptions::default())
                    .await
            }
            MenuCommand::About => {
                self.gateway
                    .send_text(user_id, content::ABOUT, SendOptions::default())
                    .await
            }
            MenuCommand::Contacts => {
                self.gateway
                    .send_text(user_id, content::CONTACTS, SendOptions::default())
                    .await
            }
            MenuCommand::HowAreYou => {
                let joke = content::JOKES[self.random.pick(content::JOKES.len())];
                self.gateway
                    .send_text(user_id, joke, SendOptions::default())
                    .await
            }
            MenuCommand::Unknown => {
                self.gateway
                    .send_text(user_id, content::NOT_UNDERSTOOD, SendOptions::default())
                    .await
            }
        }
    }
}
