pub mod history;
pub mod quiz;

pub use history::HistoryRecord;
pub use quiz::{level_from_str, Level, Question, QuizDefinition};
