use serde::{Deserialize, Serialize};

use crate::models::Level;
use crate::session::ReplyStatus;

/// Render-layer palette, passed explicitly to whoever draws (overlay,
/// level badges, sticky header). Keyed by enums rather than looked up
/// through a global theme map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub overlay_correct: String,
    pub overlay_wrong: String,
    pub overlay_neutral: String,
    pub level_easy: String,
    pub level_medium: String,
    pub level_hard: String,
    pub surface: String,
    pub text_primary: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            overlay_correct: "#00B37E".into(),
            overlay_wrong: "#F75A68".into(),
            overlay_neutral: "transparent".into(),
            level_easy: "#00B37E".into(),
            level_medium: "#FBA94C".into(),
            level_hard: "#F75A68".into(),
            surface: "#29292E".into(),
            text_primary: "#E1E1E6".into(),
        }
    }
}

impl Theme {
    pub fn overlay_color(&self, status: ReplyStatus) -> &str {
        match status {
            ReplyStatus::None => &self.overlay_neutral,
            ReplyStatus::Correct => &self.overlay_correct,
            ReplyStatus::Wrong => &self.overlay_wrong,
        }
    }

    pub fn level_color(&self, level: Level) -> &str {
        match level {
            Level::Easy => &self.level_easy,
            Level::Medium => &self.level_medium,
            Level::Hard => &self.level_hard,
        }
    }
}
