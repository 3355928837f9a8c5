use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SessionStatus {
    Active,
    Complete,
    Abandoned,
}

impl Default for SessionStatus {
    fn default() -> Self {
        SessionStatus::Active
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ReplyStatus {
    None,
    Correct,
    Wrong,
}

impl Default for ReplyStatus {
    fn default() -> Self {
        ReplyStatus::None
    }
}

/// What a call to [`SessionState::advance`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceResult {
    /// Moved to the next question.
    Advanced,
    /// The last question was vacated; the session is now Complete.
    Completed,
    /// The session was not Active; nothing changed.
    Rejected,
}

/// The single source of truth for one quiz run. Mutated exclusively through
/// the methods below; every invalid operation is a guarded no-op.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub status: SessionStatus,
    pub quiz_id: String,
    pub session_id: String,
    pub current_question: usize,
    pub selected_alternative: Option<usize>,
    pub score: u32,
    pub reply_status: ReplyStatus,
    pub started_at: DateTime<Utc>,
}

impl SessionState {
    pub fn new(quiz_id: String, session_id: String, started_at: DateTime<Utc>) -> Self {
        Self {
            status: SessionStatus::Active,
            quiz_id,
            session_id,
            current_question: 0,
            selected_alternative: None,
            score: 0,
            reply_status: ReplyStatus::None,
            started_at,
        }
    }

    /// Whether the current question still accepts Select/Confirm. Once a
    /// reply is recorded the question is locked until the advance lands.
    pub fn accepts_input(&self) -> bool {
        self.status == SessionStatus::Active && self.reply_status == ReplyStatus::None
    }

    /// Picks an alternative for the current question. Re-selecting
    /// overwrites; anything outside the question's range is rejected.
    pub fn select(&mut self, alternative: usize, alternatives_len: usize) -> bool {
        if !self.accepts_input() || alternative >= alternatives_len {
            return false;
        }
        self.selected_alternative = Some(alternative);
        true
    }

    /// Scores the pending selection against the question's correct index.
    /// Clears the selection immediately so a rapid second tap cannot
    /// double-submit. Returns the recorded reply, or None when there was
    /// nothing to score.
    pub fn record_reply(&mut self, correct_index: usize) -> Option<ReplyStatus> {
        if !self.accepts_input() {
            return None;
        }
        let selected = self.selected_alternative.take()?;

        if selected == correct_index {
            self.reply_status = ReplyStatus::Correct;
            self.score += 1;
        } else {
            self.reply_status = ReplyStatus::Wrong;
        }
        Some(self.reply_status)
    }

    /// Moves the question pointer forward, or completes the session when
    /// the last question is being vacated.
    pub fn advance(&mut self, total_questions: usize) -> AdvanceResult {
        if self.status != SessionStatus::Active {
            return AdvanceResult::Rejected;
        }

        self.selected_alternative = None;
        if self.current_question + 1 < total_questions {
            self.current_question += 1;
            self.reply_status = ReplyStatus::None;
            AdvanceResult::Advanced
        } else {
            self.status = SessionStatus::Complete;
            AdvanceResult::Completed
        }
    }

    /// Abandons the run without writing history. Returns false once the
    /// session already left Active.
    pub fn abandon(&mut self) -> bool {
        if self.status != SessionStatus::Active {
            return false;
        }
        self.status = SessionStatus::Abandoned;
        true
    }
}
