//! Update dispatching
//!
//! Takes normalized inbound events and routes them to the menu router or the
//! survey engine depending on the user's session state. All collaborators
//! are injected, so the whole pipeline runs against a mock gateway in tests.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::content;
use crate::gateway::MessagingGateway;
use crate::menu::{MenuRouter, RandomSource};
use crate::state::SessionStore;
use crate::survey::SurveyEngine;
use crate::utils::errors::Result;

/// A normalized inbound event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// An inline button was clicked
    ButtonClick {
        user_id: i64,
        chosen_value: String,
        click_id: String,
    },
    /// A text message arrived
    TextMessage { user_id: i64, text: String },
    /// Any other update shape; silently ignored
    Unsupported,
}

/// Routes inbound events through the bot
pub struct UpdateDispatcher {
    store: Arc<SessionStore>,
    engine: SurveyEngine,
    router: MenuRouter,
    gateway: Arc<dyn MessagingGateway>,
}

impl UpdateDispatcher {
    /// Wire up a dispatcher with the standard survey content
    pub fn new(gateway: Arc<dyn MessagingGateway>, random: Arc<dyn RandomSource>) -> Self {
        let store = Arc::new(SessionStore::new());
        let engine = SurveyEngine::new(
            content::survey_questions(),
            content::default_profile(),
            Arc::clone(&store),
            Arc::clone(&gateway),
        );
        let router = MenuRouter::new(Arc::clone(&gateway), random);

        Self {
            store,
            engine,
            router,
            gateway,
        }
    }

    /// The session store backing this dispatcher
    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    /// Process one inbound event
    pub async fn dispatch(&self, event: InboundEvent) -> Result<()> {
        match event {
            InboundEvent::ButtonClick {
                user_id,
                chosen_value,
                click_id,
            } => {
                // Acknowledge in the background; the click acknowledgment is
                // a UI nicety, not part of correctness. Failures (expired
                // click tokens, network faults) are logged and swallowed.
                let gateway = Arc::clone(&self.gateway);
                tokio::spawn(async move {
                    if let Err(e) = gateway.acknowledge_click(&click_id).await {
                        warn!(error = %e, click_id = %click_id, "Failed to acknowledge click");
                    }
                });

                self.engine.on_choice(user_id, &chosen_value).await
            }
            InboundEvent::TextMessage { user_id, text } => {
                let text = text.trim();
                let session = self.store.get_or_create(user_id);

                if session.is_in_survey() {
                    self.engine.on_free_text(user_id, text).await
                } else {
                    self.router.dispatch(user_id, text, &self.engine).await
                }
            }
            InboundEvent::Unsupported => {
                debug!("Ignoring unsupported update");
                Ok(())
            }
        }
    }
}
