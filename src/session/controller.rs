use std::{collections::HashMap, sync::Arc};

use anyhow::{anyhow, Result};
use chrono::Utc;
use log::{debug, error, info};
use serde::Serialize;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    bank::QuizBank,
    db::Database,
    effects::{Destination, EffectPorts, PromptOption, PromptStyle, ReplyOutcome},
    gesture::{DragIntent, DragTracker},
    guard::{BackDispatcher, BackSubscription},
    models::{HistoryRecord, Level, QuizDefinition},
};

use super::state::{AdvanceResult, ReplyStatus, SessionState, SessionStatus};

/// Read-side view of a running session for the render layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub state: SessionState,
    pub quiz_title: String,
    pub level: Level,
    pub total_questions: usize,
}

enum ConfirmAction {
    Ignore,
    PromptSkip,
    Reply(ReplyOutcome),
}

/// Drives one quiz run: the sole writer of [`SessionState`], and the only
/// thing that talks to the history store, the cue/prompt/navigation ports
/// and the feedback timeline.
#[derive(Clone)]
pub struct SessionController {
    quiz: Arc<QuizDefinition>,
    state: Arc<Mutex<SessionState>>,
    db: Database,
    ports: EffectPorts,
}

impl SessionController {
    pub fn start(quiz: QuizDefinition, db: Database, ports: EffectPorts) -> Result<Self> {
        if quiz.questions.is_empty() {
            return Err(anyhow!("quiz '{}' has no questions", quiz.id));
        }

        let session_id = Uuid::new_v4().to_string();
        info!("Session {} started for quiz '{}'", session_id, quiz.id);

        let state = SessionState::new(quiz.id.clone(), session_id, Utc::now());
        Ok(Self {
            quiz: Arc::new(quiz),
            state: Arc::new(Mutex::new(state)),
            db,
            ports,
        })
    }

    /// Resolves the quiz by id and enters the session. A missing id is
    /// fatal here; no session is ever constructed around absent question
    /// data.
    pub fn load(bank: &QuizBank, quiz_id: &str, db: Database, ports: EffectPorts) -> Result<Self> {
        let quiz = bank
            .find_quiz_by_id(quiz_id)
            .ok_or_else(|| anyhow!("quiz '{quiz_id}' not found in question bank"))?;
        Self::start(quiz.clone(), db, ports)
    }

    pub fn quiz(&self) -> &QuizDefinition {
        &self.quiz
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.lock().await;
        SessionSnapshot {
            state: state.clone(),
            quiz_title: self.quiz.title.clone(),
            level: self.quiz.level,
            total_questions: self.quiz.total_questions(),
        }
    }

    /// Picks an alternative for the current question. Ignored once a reply
    /// is pending or the session has left Active.
    pub async fn select(&self, alternative: usize) {
        let mut state = self.state.lock().await;
        let alternatives_len = self.quiz.questions[state.current_question].alternatives.len();
        if !state.select(alternative, alternatives_len) {
            debug!(
                "Ignoring select({alternative}) for session {} (status {:?}, reply {:?})",
                state.session_id, state.status, state.reply_status
            );
        }
    }

    /// Submits the pending selection. With nothing selected this only
    /// raises the skip prompt; a correct answer scores and advances
    /// immediately; a wrong answer scores nothing and waits for the shake
    /// timeline before advancing.
    pub async fn confirm(&self) {
        let action = {
            let mut state = self.state.lock().await;
            if !state.accepts_input() {
                ConfirmAction::Ignore
            } else if state.selected_alternative.is_none() {
                ConfirmAction::PromptSkip
            } else {
                let correct = self.quiz.questions[state.current_question].correct;
                match state.record_reply(correct) {
                    Some(ReplyStatus::Correct) => ConfirmAction::Reply(ReplyOutcome::Correct),
                    Some(ReplyStatus::Wrong) => ConfirmAction::Reply(ReplyOutcome::Wrong),
                    _ => ConfirmAction::Ignore,
                }
            }
        };

        match action {
            ConfirmAction::Ignore => {}
            ConfirmAction::PromptSkip => self.prompt_skip(),
            ConfirmAction::Reply(ReplyOutcome::Correct) => {
                self.ports.cues.play(ReplyOutcome::Correct);
                self.ports.timeline.flash_overlay(ReplyStatus::Correct);
                self.advance().await;
            }
            ConfirmAction::Reply(ReplyOutcome::Wrong) => {
                self.ports.cues.play(ReplyOutcome::Wrong);
                self.ports.timeline.flash_overlay(ReplyStatus::Wrong);

                let controller = self.clone();
                self.ports.timeline.play_shake(Box::new(move || {
                    tokio::spawn(async move {
                        controller.resolve_shake().await;
                    });
                }));
            }
        }
    }

    /// Advances without scoring. This is the skip path shared by the drag
    /// gesture and the skip prompt; a pending wrong-answer advance blocks
    /// it.
    pub async fn skip(&self) {
        let result = {
            let mut state = self.state.lock().await;
            if !state.accepts_input() {
                AdvanceResult::Rejected
            } else {
                state.advance(self.quiz.total_questions())
            }
        };
        self.after_advance(result).await;
    }

    /// Completion handoff for the shake timeline. Only a session still
    /// Active with a wrong reply pending advances; a Stop issued while the
    /// shake ran makes this a no-op.
    pub async fn resolve_shake(&self) {
        let result = {
            let mut state = self.state.lock().await;
            if state.status != SessionStatus::Active || state.reply_status != ReplyStatus::Wrong {
                AdvanceResult::Rejected
            } else {
                state.advance(self.quiz.total_questions())
            }
        };
        self.after_advance(result).await;
    }

    /// Maps a released drag onto the skip path.
    pub async fn settle_drag(&self, tracker: &mut DragTracker) {
        if tracker.release() == DragIntent::Skip {
            self.skip().await;
        }
    }

    /// Raises the stop confirmation. Affirming abandons the session and
    /// navigates home without writing history; declining changes nothing.
    pub fn request_stop(&self) {
        let controller = self.clone();
        self.ports.prompt.ask(
            "Stop",
            "Do you want to stop now?",
            vec![
                PromptOption::new("No", PromptStyle::Cancel, || {}),
                PromptOption::new("Yes", PromptStyle::Destructive, move || {
                    tokio::spawn(async move {
                        controller.abandon().await;
                    });
                }),
            ],
        );
    }

    /// Back presses always land in the stop confirmation instead of the
    /// default navigation, for as long as the subscription lives.
    pub fn guard_back(&self, dispatcher: &BackDispatcher) -> BackSubscription {
        let controller = self.clone();
        dispatcher.subscribe(move || {
            controller.request_stop();
            true
        })
    }

    fn prompt_skip(&self) {
        let controller = self.clone();
        self.ports.prompt.ask(
            "Skip",
            "Do you really want to skip this question?",
            vec![
                PromptOption::new("Yes", PromptStyle::Default, move || {
                    tokio::spawn(async move {
                        controller.skip().await;
                    });
                }),
                PromptOption::new("No", PromptStyle::Cancel, || {}),
            ],
        );
    }

    async fn advance(&self) {
        let result = {
            let mut state = self.state.lock().await;
            state.advance(self.quiz.total_questions())
        };
        self.after_advance(result).await;
    }

    async fn after_advance(&self, result: AdvanceResult) {
        if result == AdvanceResult::Completed {
            self.finish().await;
        }
    }

    /// Terminal transition: append the history record and hand off to the
    /// finish screen. Runs exactly once per session, from the single
    /// advance that flipped the state to Complete. A failed append is
    /// logged and swallowed; the score was already earned.
    async fn finish(&self) {
        let (score, session_id) = {
            let state = self.state.lock().await;
            (state.score, state.session_id.clone())
        };
        let total = self.quiz.total_questions();

        let record = HistoryRecord::from_session(&self.quiz, score, Utc::now());
        if let Err(err) = self.db.insert_history(&record).await {
            error!("Failed to append history for session {session_id}: {err:#}");
        }

        info!("Session {session_id} finished with {score}/{total}");

        let mut params = HashMap::new();
        params.insert("points".to_string(), score.to_string());
        params.insert("total".to_string(), total.to_string());
        self.ports.navigator.go_to(Destination::Finish, params);
    }

    async fn abandon(&self) {
        let abandoned = {
            let mut state = self.state.lock().await;
            let abandoned = state.abandon();
            if abandoned {
                info!("Session {} abandoned", state.session_id);
            }
            abandoned
        };

        if abandoned {
            self.ports.navigator.go_to(Destination::Home, HashMap::new());
        }
    }
}
