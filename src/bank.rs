use std::{fs, path::Path};

use anyhow::{Context, Result};
use log::info;

use crate::models::QuizDefinition;

/// The question bank: an ordered, read-only collection of quiz definitions.
/// The session core only ever looks quizzes up by id; the catalog screen
/// iterates the whole set.
pub struct QuizBank {
    quizzes: Vec<QuizDefinition>,
}

impl QuizBank {
    pub fn from_json(raw: &str) -> Result<Self> {
        let quizzes: Vec<QuizDefinition> =
            serde_json::from_str(raw).context("failed to parse quiz bank JSON")?;
        Ok(Self { quizzes })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read quiz bank from {}", path.display()))?;
        let bank = Self::from_json(&raw)?;
        info!("Loaded {} quizzes from {}", bank.len(), path.display());
        Ok(bank)
    }

    pub fn find_quiz_by_id(&self, id: &str) -> Option<&QuizDefinition> {
        self.quizzes.iter().find(|quiz| quiz.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuizDefinition> {
        self.quizzes.iter()
    }

    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Level;

    const BANK_JSON: &str = r#"[
        {
            "id": "react",
            "title": "React basics",
            "level": "EASY",
            "questions": [
                {
                    "title": "What is JSX?",
                    "alternatives": ["A syntax extension", "A database", "A linter"],
                    "correct": 0
                }
            ]
        },
        {
            "id": "react-native",
            "title": "React Native",
            "level": "HARD",
            "questions": [
                {
                    "title": "What bridges native views?",
                    "alternatives": ["Fabric", "Redux"],
                    "correct": 0
                },
                {
                    "title": "Which runs on device?",
                    "alternatives": ["Hermes", "Webpack"],
                    "correct": 0
                }
            ]
        }
    ]"#;

    #[test]
    fn parses_bank_and_finds_by_id() {
        let bank = QuizBank::from_json(BANK_JSON).unwrap();
        assert_eq!(bank.len(), 2);

        let quiz = bank.find_quiz_by_id("react-native").unwrap();
        assert_eq!(quiz.level, Level::Hard);
        assert_eq!(quiz.total_questions(), 2);
    }

    #[test]
    fn missing_id_yields_none() {
        let bank = QuizBank::from_json(BANK_JSON).unwrap();
        assert!(bank.find_quiz_by_id("flutter").is_none());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(QuizBank::from_json("{not json").is_err());
    }
}
