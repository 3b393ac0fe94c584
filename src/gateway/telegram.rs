//! Telegram Bot API gateway
//!
//! Outbound sends go straight to the Bot API over HTTPS with JSON bodies;
//! inbound webhook payloads are normalized into [`InboundEvent`]s. The API
//! base URL is configurable so tests can point the gateway at a mock server.

use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::{ChoiceButton, MessagingGateway, SendOptions};
use crate::content;
use crate::dispatch::InboundEvent;
use crate::utils::errors::{EcoChefError, Result};

/// Gateway over the Telegram Bot API
#[derive(Debug, Clone)]
pub struct TelegramGateway {
    client: reqwest::Client,
    api_base: String,
}

impl TelegramGateway {
    /// Create a gateway against the production Bot API
    pub fn new(token: &str) -> Self {
        Self::with_api_base("https://api.telegram.org", token)
    }

    /// Create a gateway against a custom API base (used in tests)
    pub fn with_api_base(api_base: &str, token: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: format!("{}/bot{}", api_base.trim_end_matches('/'), token),
        }
    }

    fn api_url(&self, method: &str) -> String {
        format!("{}/{}", self.api_base, method)
    }

    async fn call(&self, method: &str, body: serde_json::Value) -> Result<()> {
        let resp = self
            .client
            .post(self.api_url(method))
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let description = resp.text().await.unwrap_or_default();
            return Err(EcoChefError::Gateway {
                method: method.to_string(),
                description: format!("{}: {}", status, description),
            });
        }

        debug!(method = method, "Telegram API call succeeded");
        Ok(())
    }

    /// The standing 2x2 main-menu reply keyboard
    fn main_menu_markup() -> serde_json::Value {
        let keyboard: Vec<Vec<serde_json::Value>> = content::main_menu_rows()
            .iter()
            .map(|row| row.iter().map(|label| json!({ "text": label })).collect())
            .collect();

        json!({
            "keyboard": keyboard,
            "resize_keyboard": true,
            "one_time_keyboard": false,
        })
    }
}

#[async_trait::async_trait]
impl MessagingGateway for TelegramGateway {
    async fn send_text(&self, user_id: i64, text: &str, options: SendOptions) -> Result<()> {
        let mut body = json!({
            "chat_id": user_id,
            "text": text,
        });

        if options.persistent_menu {
            body["reply_markup"] = Self::main_menu_markup();
        }

        self.call("sendMessage", body).await
    }

    async fn send_buttons(&self, user_id: i64, text: &str, rows: &[ChoiceButton]) -> Result<()> {
        let keyboard: Vec<Vec<serde_json::Value>> = rows
            .iter()
            .map(|button| {
                vec![json!({
                    "text": button.label,
                    "callback_data": button.value,
                })]
            })
            .collect();

        let body = json!({
            "chat_id": user_id,
            "text": text,
            "reply_markup": { "inline_keyboard": keyboard },
        });

        self.call("sendMessage", body).await
    }

    async fn acknowledge_click(&self, click_id: &str) -> Result<()> {
        self.call(
            "answerCallbackQuery",
            json!({ "callback_query_id": click_id }),
        )
        .await
    }
}

/// One update delivered to the webhook.
///
/// Only the `message` and `callback_query` shapes are understood; every
/// other update kind normalizes to [`InboundEvent::Unsupported`] and is
/// silently dropped.
#[derive(Debug, Deserialize)]
pub struct WebhookUpdate {
    #[serde(default)]
    pub message: Option<IncomingMessage>,
    #[serde(default)]
    pub callback_query: Option<IncomingCallbackQuery>,
}

#[derive(Debug, Deserialize)]
pub struct IncomingMessage {
    pub chat: IncomingChat,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct IncomingChat {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct IncomingCallbackQuery {
    pub id: String,
    pub from: IncomingUser,
    #[serde(default)]
    pub message: Option<IncomingMessage>,
    #[serde(default)]
    pub data: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct IncomingUser {
    pub id: i64,
}

impl WebhookUpdate {
    /// Parse a raw webhook body
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Normalize into an internal event.
    ///
    /// Sessions are keyed by the chat the survey runs in, so a button click
    /// resolves to the chat of the message carrying the keyboard, falling
    /// back to the clicking user's id.
    pub fn into_event(self) -> InboundEvent {
        if let Some(query) = self.callback_query {
            let user_id = query
                .message
                .map(|message| message.chat.id)
                .unwrap_or(query.from.id);

            return match query.data {
                Some(chosen_value) => InboundEvent::ButtonClick {
                    user_id,
                    chosen_value,
                    click_id: query.id,
                },
                None => InboundEvent::Unsupported,
            };
        }

        if let Some(message) = self.message {
            if let Some(text) = message.text {
                return InboundEvent::TextMessage {
                    user_id: message.chat.id,
                    text,
                };
            }
        }

        InboundEvent::Unsupported
    }
}
