use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::quiz::{Level, QuizDefinition};

/// One finished session, as it lands in the history store. Created once at
/// completion and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub id: String,
    pub title: String,
    pub level: Level,
    pub points: u32,
    pub questions: u32,
    pub created_at: DateTime<Utc>,
}

impl HistoryRecord {
    /// The id is time-derived (epoch millis), matching what the history
    /// screen expects as a stable sort key.
    pub fn from_session(quiz: &QuizDefinition, points: u32, finished_at: DateTime<Utc>) -> Self {
        Self {
            id: finished_at.timestamp_millis().to_string(),
            title: quiz.title.clone(),
            level: quiz.level,
            points,
            questions: quiz.questions.len() as u32,
            created_at: finished_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::quiz::Question;

    #[test]
    fn record_captures_score_and_question_count() {
        let quiz = QuizDefinition {
            id: "react-native".into(),
            title: "React Native".into(),
            level: Level::Medium,
            questions: vec![
                Question {
                    title: "q1".into(),
                    alternatives: vec!["a".into(), "b".into()],
                    correct: 0,
                },
                Question {
                    title: "q2".into(),
                    alternatives: vec!["a".into(), "b".into()],
                    correct: 1,
                },
            ],
        };

        let finished_at = Utc::now();
        let record = HistoryRecord::from_session(&quiz, 1, finished_at);

        assert_eq!(record.id, finished_at.timestamp_millis().to_string());
        assert_eq!(record.points, 1);
        assert_eq!(record.questions, 2);
        assert_eq!(record.level, Level::Medium);
    }
}
