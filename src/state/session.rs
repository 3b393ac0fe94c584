//! Per-user survey session state
//!
//! The survey position is an explicit tagged state rather than a pair of
//! flags, so "not in survey but index != 0" is unrepresentable.

use chrono::{DateTime, Utc};

/// Where a user currently stands in the survey
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurveyState {
    /// Menu mode; no survey in progress
    NotStarted,
    /// Waiting for the answer to the question at this index
    AwaitingAnswer(usize),
    /// All questions answered. Transient: the engine emits the profile and
    /// immediately resets the session to `NotStarted`.
    Completed,
}

/// A user's ephemeral session
///
/// Created lazily on first contact, mutated in place, never evicted. Lost on
/// process restart, which is acceptable for this volatile state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: i64,
    pub state: SurveyState,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Create a fresh session in menu mode
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            state: SurveyState::NotStarted,
            updated_at: Utc::now(),
        }
    }

    /// Whether the user is mid-survey
    pub fn is_in_survey(&self) -> bool {
        matches!(self.state, SurveyState::AwaitingAnswer(_))
    }

    /// Index of the next unanswered question; 0 outside the survey
    pub fn question_index(&self) -> usize {
        match self.state {
            SurveyState::AwaitingAnswer(index) => index,
            SurveyState::NotStarted | SurveyState::Completed => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let session = Session::new(123);
        assert_eq!(session.user_id, 123);
        assert_eq!(session.state, SurveyState::NotStarted);
        assert!(!session.is_in_survey());
        assert_eq!(session.question_index(), 0);
    }

    #[test]
    fn test_awaiting_answer() {
        let mut session = Session::new(123);
        session.state = SurveyState::AwaitingAnswer(3);
        assert!(session.is_in_survey());
        assert_eq!(session.question_index(), 3);
    }
}
