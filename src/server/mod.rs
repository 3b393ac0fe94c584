//! Webhook HTTP boundary
//!
//! One GET route for liveness and one POST route that accepts a single
//! Telegram update per request. The POST handler always answers 200: parse
//! failures and processing errors are logged and swallowed so the Telegram
//! delivery system never enters a retry storm.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::routing::get;
use axum::Router;
use tracing::{debug, error, warn};

use crate::dispatch::UpdateDispatcher;
use crate::gateway::WebhookUpdate;

/// Shared state for the webhook routes
///
/// `dispatcher` is `None` when no bot token is configured; the webhook then
/// answers with a fixed diagnostic instead of processing events.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Option<Arc<UpdateDispatcher>>,
}

/// Response for GET requests (opening the webhook URL in a browser)
const RUNNING: &str = "EcoChef bot is running (webhook mode)";

/// Response for POST requests when the bot token is missing
const TOKEN_MISSING: &str = "ERROR: bot token is not configured";

/// Build the webhook router
pub fn webhook_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(health).post(receive_update))
        .with_state(state)
}

async fn health() -> &'static str {
    RUNNING
}

async fn receive_update(State(state): State<AppState>, body: Bytes) -> &'static str {
    let Some(dispatcher) = state.dispatcher.as_ref() else {
        warn!("Rejecting update: bot token is not configured");
        return TOKEN_MISSING;
    };

    let update = match WebhookUpdate::from_slice(&body) {
        Ok(update) => update,
        Err(e) => {
            warn!(error = %e, "Discarding unparseable update");
            return "OK";
        }
    };

    debug!(body_len = body.len(), "Update received");

    if let Err(e) = dispatcher.dispatch(update.into_event()).await {
        // Swallowed on purpose: a non-200 here would only make Telegram
        // redeliver the same update.
        error!(error = %e, recoverable = e.is_recoverable(), "Update processing failed");
    }

    "OK"
}
