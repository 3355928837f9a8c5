use std::{collections::HashMap, sync::Arc};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::timeline::FeedbackTimeline;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ReplyOutcome {
    Correct,
    Wrong,
}

/// Audio + haptic cue playback. Fire-and-forget: scoring never waits on
/// (or learns about) playback failures.
pub trait OutcomeCues: Send + Sync {
    fn play(&self, outcome: ReplyOutcome);
}

/// Stand-in for the platform playback engines; the session core only
/// needs the call to exist.
pub struct LogCues;

impl OutcomeCues for LogCues {
    fn play(&self, outcome: ReplyOutcome) {
        debug!("Playing {:?} cue", outcome);
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PromptStyle {
    Default,
    Cancel,
    Destructive,
}

/// One choice offered by a confirmation prompt. `on_choose` runs when the
/// user picks it; declining options usually carry a no-op.
pub struct PromptOption {
    pub label: String,
    pub style: PromptStyle,
    pub on_choose: Box<dyn FnOnce() + Send>,
}

impl PromptOption {
    pub fn new(
        label: impl Into<String>,
        style: PromptStyle,
        on_choose: impl FnOnce() + Send + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            style,
            on_choose: Box::new(on_choose),
        }
    }
}

/// Modal yes/no style prompt. Fire-and-forget from the controller's side;
/// the chosen option's callback re-enters the controller.
pub trait ConfirmPrompt: Send + Sync {
    fn ask(&self, title: &str, message: &str, options: Vec<PromptOption>);
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Destination {
    Finish,
    Home,
}

/// Opaque "go to screen X with params" handoff.
pub trait Navigator: Send + Sync {
    fn go_to(&self, destination: Destination, params: HashMap<String, String>);
}

/// The controller's outward-facing collaborators, bundled so call sites
/// stay small. All Arc'd; the controller clones freely.
#[derive(Clone)]
pub struct EffectPorts {
    pub cues: Arc<dyn OutcomeCues>,
    pub prompt: Arc<dyn ConfirmPrompt>,
    pub navigator: Arc<dyn Navigator>,
    pub timeline: Arc<dyn FeedbackTimeline>,
}
