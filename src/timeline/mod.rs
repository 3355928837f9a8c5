pub mod envelope;
pub mod sequencer;

pub use sequencer::{CompletionHandoff, FeedbackTimeline, TokioFeedbackTimeline};
