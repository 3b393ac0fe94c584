//! In-memory session store
//!
//! Process-wide mapping from chat id to session. A single mutex serializes
//! all state transitions, so concurrent events for the same user (a rapid
//! double-tap on a button) cannot double-advance the survey. The map is
//! unbounded and never evicted; that is a documented accepted limitation.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;
use tracing::debug;

use super::session::{Session, SurveyState};

/// Thread-safe store of per-user survey sessions
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<i64, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the user's session, creating a default one on first contact
    pub fn get_or_create(&self, user_id: i64) -> Session {
        let mut sessions = self.sessions.lock().expect("session store poisoned");
        sessions
            .entry(user_id)
            .or_insert_with(|| {
                debug!(user_id = user_id, "Creating session");
                Session::new(user_id)
            })
            .clone()
    }

    /// Snapshot of the user's session, if one exists
    pub fn snapshot(&self, user_id: i64) -> Option<Session> {
        let sessions = self.sessions.lock().expect("session store poisoned");
        sessions.get(&user_id).cloned()
    }

    /// Put the user at question 0, regardless of prior state
    pub fn begin(&self, user_id: i64) {
        let mut sessions = self.sessions.lock().expect("session store poisoned");
        let session = sessions
            .entry(user_id)
            .or_insert_with(|| Session::new(user_id));
        session.state = SurveyState::AwaitingAnswer(0);
        session.updated_at = Utc::now();
    }

    /// Advance past the current question.
    ///
    /// Only a session in `AwaitingAnswer` moves; anything else (including a
    /// stray click after completion) is left untouched and `None` is
    /// returned. Reaching `question_count` yields `Completed`.
    pub fn advance(&self, user_id: i64, question_count: usize) -> Option<SurveyState> {
        let mut sessions = self.sessions.lock().expect("session store poisoned");
        let session = sessions.get_mut(&user_id)?;

        let SurveyState::AwaitingAnswer(index) = session.state else {
            return None;
        };

        let next = index + 1;
        session.state = if next >= question_count {
            SurveyState::Completed
        } else {
            SurveyState::AwaitingAnswer(next)
        };
        session.updated_at = Utc::now();
        Some(session.state)
    }

    /// Reset the user back to menu mode
    pub fn reset(&self, user_id: i64) {
        let mut sessions = self.sessions.lock().expect("session store poisoned");
        let session = sessions
            .entry(user_id)
            .or_insert_with(|| Session::new(user_id));
        session.state = SurveyState::NotStarted;
        session.updated_at = Utc::now();
    }

    /// Number of live sessions
    pub fn len(&self) -> usize {
        self.sessions.lock().expect("session store poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
