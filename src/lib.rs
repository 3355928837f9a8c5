pub mod bank;
pub mod db;
pub mod effects;
pub mod gesture;
pub mod guard;
pub mod header;
pub mod models;
pub mod session;
pub mod theme;
pub mod timeline;

pub use bank::QuizBank;
pub use db::Database;
pub use effects::{
    ConfirmPrompt, Destination, EffectPorts, LogCues, Navigator, OutcomeCues, PromptOption,
    PromptStyle, ReplyOutcome,
};
pub use gesture::{DragIntent, DragTracker};
pub use guard::{BackDispatcher, BackSubscription};
pub use models::{HistoryRecord, Level, Question, QuizDefinition};
pub use session::{ReplyStatus, SessionController, SessionSnapshot, SessionState, SessionStatus};
pub use theme::Theme;
pub use timeline::{FeedbackTimeline, TokioFeedbackTimeline};

/// Initializes logging from the `RUST_LOG` environment, defaulting to info.
pub fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
