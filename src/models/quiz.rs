use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Level {
    Easy,
    Medium,
    Hard,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Easy => "EASY",
            Level::Medium => "MEDIUM",
            Level::Hard => "HARD",
        }
    }
}

pub fn level_from_str(value: &str) -> Result<Level> {
    match value {
        "EASY" => Ok(Level::Easy),
        "MEDIUM" => Ok(Level::Medium),
        "HARD" => Ok(Level::Hard),
        _ => Err(anyhow!("unknown level '{value}'")),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub title: String,
    pub alternatives: Vec<String>,
    /// Index into `alternatives` of the right answer.
    pub correct: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizDefinition {
    pub id: String,
    pub title: String,
    pub level: Level,
    pub questions: Vec<Question>,
}

impl QuizDefinition {
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_round_trips_through_storage_form() {
        for level in [Level::Easy, Level::Medium, Level::Hard] {
            assert_eq!(level_from_str(level.as_str()).unwrap(), level);
        }
    }

    #[test]
    fn unknown_level_is_rejected() {
        assert!(level_from_str("IMPOSSIBLE").is_err());
    }
}
