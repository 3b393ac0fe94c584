//! Test helpers
//!
//! A recording gateway standing in for the Telegram transport, plus a fixed
//! random source so joke selection is deterministic in tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use ecochef::content;
use ecochef::{
    ChoiceButton, EcoChefError, MessagingGateway, RandomSource, Result, SendOptions, SessionStore,
    SurveyEngine, UpdateDispatcher,
};

/// One outbound gateway call, as recorded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outbound {
    Text {
        user_id: i64,
        text: String,
        persistent_menu: bool,
    },
    Buttons {
        user_id: i64,
        text: String,
        rows: Vec<(String, String)>,
    },
    Ack {
        click_id: String,
    },
}

/// Simulated transport failure
fn gateway_down(method: &str) -> EcoChefError {
    EcoChefError::Gateway {
        method: method.to_string(),
        description: "503 Service Unavailable".to_string(),
    }
}

/// Gateway mock that records every call instead of talking to Telegram
#[derive(Debug, Default)]
pub struct RecordingGateway {
    sent: Mutex<Vec<Outbound>>,
    fail_acks: bool,
}

impl RecordingGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A gateway whose click acknowledgments fail while sends still succeed
    pub fn with_failing_acks() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::default(),
            fail_acks: true,
        })
    }

    /// Everything sent so far, acknowledgments included
    pub fn outbound(&self) -> Vec<Outbound> {
        self.sent.lock().unwrap().clone()
    }

    /// Sent messages only, acknowledgments filtered out
    pub fn messages(&self) -> Vec<Outbound> {
        self.outbound()
            .into_iter()
            .filter(|entry| !matches!(entry, Outbound::Ack { .. }))
            .collect()
    }

    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
    }
}

#[async_trait]
impl MessagingGateway for RecordingGateway {
    async fn send_text(&self, user_id: i64, text: &str, options: SendOptions) -> Result<()> {
        self.sent.lock().unwrap().push(Outbound::Text {
            user_id,
            text: text.to_string(),
            persistent_menu: options.persistent_menu,
        });
        Ok(())
    }

    async fn send_buttons(&self, user_id: i64, text: &str, rows: &[ChoiceButton]) -> Result<()> {
        self.sent.lock().unwrap().push(Outbound::Buttons {
            user_id,
            text: text.to_string(),
            rows: rows
                .iter()
                .map(|button| (button.label.clone(), button.value.clone()))
                .collect(),
        });
        Ok(())
    }

    async fn acknowledge_click(&self, click_id: &str) -> Result<()> {
        if self.fail_acks {
            return Err(gateway_down("answerCallbackQuery"));
        }
        self.sent.lock().unwrap().push(Outbound::Ack {
            click_id: click_id.to_string(),
        });
        Ok(())
    }
}

/// Gateway mock whose every call fails with a transport error
#[derive(Debug, Default)]
pub struct FailingGateway;

#[async_trait]
impl MessagingGateway for FailingGateway {
    async fn send_text(&self, _user_id: i64, _text: &str, _options: SendOptions) -> Result<()> {
        Err(gateway_down("sendMessage"))
    }

    async fn send_buttons(&self, _user_id: i64, _text: &str, _rows: &[ChoiceButton]) -> Result<()> {
        Err(gateway_down("sendMessage"))
    }

    async fn acknowledge_click(&self, _click_id: &str) -> Result<()> {
        Err(gateway_down("answerCallbackQuery"))
    }
}

/// Random source that always picks the same index
pub struct FixedRandom(pub usize);

impl RandomSource for FixedRandom {
    fn pick(&self, upper: usize) -> usize {
        self.0 % upper
    }
}

/// Dispatcher wired to a recording gateway and a pinned random source
pub fn build_dispatcher(gateway: &Arc<RecordingGateway>) -> UpdateDispatcher {
    UpdateDispatcher::new(
        Arc::clone(gateway) as Arc<dyn MessagingGateway>,
        Arc::new(FixedRandom(0)),
    )
}

/// Dispatcher whose gateway fails every call
pub fn build_failing_dispatcher() -> UpdateDispatcher {
    UpdateDispatcher::new(
        Arc::new(FailingGateway) as Arc<dyn MessagingGateway>,
        Arc::new(FixedRandom(0)),
    )
}

/// Survey engine over the standard question list and an explicit store
pub fn build_engine(store: &Arc<SessionStore>, gateway: &Arc<RecordingGateway>) -> SurveyEngine {
    SurveyEngine::new(
        content::survey_questions(),
        content::default_profile(),
        Arc::clone(store),
        Arc::clone(gateway) as Arc<dyn MessagingGateway>,
    )
}
