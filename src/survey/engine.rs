//! Survey state machine
//!
//! Walks a user through the question list in fixed order. Answers are
//! acknowledged but deliberately discarded: the profile returned at the end
//! is a constant and does not depend on them.

use std::sync::Arc;

use tracing::{debug, info};

use crate::content::{self, Profile, Question};
use crate::gateway::{ChoiceButton, MessagingGateway, SendOptions};
use crate::state::{SessionStore, SurveyState};
use crate::utils::errors::Result;

/// Drives the survey for all users
pub struct SurveyEngine {
    questions: Vec<Question>,
    profile: Profile,
    store: Arc<SessionStore>,
    gateway: Arc<dyn MessagingGateway>,
}

impl SurveyEngine {
    pub fn new(
        questions: Vec<Question>,
        profile: Profile,
        store: Arc<SessionStore>,
        gateway: Arc<dyn MessagingGateway>,
    ) -> Self {
        Self {
            questions,
            profile,
            store,
            gateway,
        }
    }

    /// Begin the survey at question 0, regardless of prior session state
    pub async fn start(&self, user_id: i64) -> Result<()> {
        info!(user_id = user_id, "Starting survey");
        self.store.begin(user_id);
        self.present(user_id, 0).await
    }

    /// Render the question at `index`, or complete when past the last one.
    ///
    /// Choice questions become an inline keyboard with one button per row,
    /// label and callback value both set to the option string. Free-text
    /// questions get a reply-with-a-message instruction line.
    pub async fn present(&self, user_id: i64, index: usize) -> Result<()> {
        let Some(question) = self.questions.get(index) else {
            return self.complete(user_id).await;
        };

        debug!(user_id = user_id, index = index, "Presenting question");

        if question.expects_choice() {
            let rows: Vec<ChoiceButton> = question
                .options
                .iter()
                .map(|option| ChoiceButton::new(option, option))
                .collect();
            self.gateway
                .send_buttons(user_id, &question.text, &rows)
                .await
        } else {
            let prompt = format!("{}\n{}", question.text, content::FREE_TEXT_HINT);
            self.gateway
                .send_text(user_id, &prompt, SendOptions::default())
                .await
        }
    }

    /// Handle a button click. Outside the survey this is a no-op: a stray
    /// click after completion neither mutates state nor emits a message.
    pub async fn on_choice(&self, user_id: i64, chosen_value: &str) -> Result<()> {
        debug!(user_id = user_id, chosen_value = chosen_value, "Button answer");
        // The chosen value is discarded; only the transition matters.
        match self.store.advance(user_id, self.questions.len()) {
            Some(SurveyState::AwaitingAnswer(next)) => self.present(user_id, next).await,
            Some(SurveyState::Completed) => self.complete(user_id).await,
            Some(SurveyState::NotStarted) | None => {
                debug!(user_id = user_id, "Ignoring click outside survey");
                Ok(())
            }
        }
    }

    /// Handle a free-text reply while mid-survey.
    ///
    /// Text for a button question gets exactly one corrective prompt and does
    /// not advance; text for a free-text question advances, the content
    /// discarded like choice values.
    pub async fn on_free_text(&self, user_id: i64, text: &str) -> Result<()> {
        let Some(session) = self.store.snapshot(user_id) else {
            return Ok(());
        };
        let SurveyState::AwaitingAnswer(index) = session.state else {
            return Ok(());
        };

        if let Some(question) = self.questions.get(index) {
            if question.expects_choice() {
                debug!(user_id = user_id, index = index, "Text where buttons expected");
                return self
                    .gateway
                    .send_text(user_id, content::USE_BUTTONS, SendOptions::default())
                    .await;
            }
        }

        debug!(user_id = user_id, index = index, answer_len = text.len(), "Free-text answer");
        match self.store.advance(user_id, self.questions.len()) {
            Some(SurveyState::AwaitingAnswer(next)) => self.present(user_id, next).await,
            Some(SurveyState::Completed) => self.complete(user_id).await,
            Some(SurveyState::NotStarted) | None => Ok(()),
        }
    }

    /// Emit the profile, reset the session and bring the main menu back.
    /// Completion is transient; the session always loops back to menu mode.
    async fn complete(&self, user_id: i64) -> Result<()> {
        info!(user_id = user_id, "Survey completed");

        let message = content::profile_message(&self.profile);
        self.gateway
            .send_text(user_id, &message, SendOptions::default())
            .await?;

        self.store.reset(user_id);

        self.gateway
            .send_text(user_id, content::MENU_AGAIN, SendOptions::with_menu())
            .await
    }
}
