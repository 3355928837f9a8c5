use std::{
    sync::{Arc, Mutex},
    time::Instant,
};

use log::debug;
use tokio::{task::JoinHandle, time};

use super::envelope::{
    overlay_opacity, shake_progress, shake_translation, SHAKE_RISE_MS, SHAKE_SETTLE_MS,
};
use crate::session::ReplyStatus;

/// Callback invoked when a shake run finishes. This is the only channel by
/// which a wrong answer reaches the next question.
pub type CompletionHandoff = Box<dyn FnOnce() + Send + 'static>;

/// Narrow contract between the session controller and whatever drives the
/// wall-clock animations. Tests install a fake that never completes on its
/// own; production uses [`TokioFeedbackTimeline`].
pub trait FeedbackTimeline: Send + Sync {
    /// Starts (or restarts) the wrong-answer shake. The handoff fires once
    /// the run completes; a re-trigger abandons the previous run without
    /// firing its handoff.
    fn play_shake(&self, on_complete: CompletionHandoff);

    /// Starts (or restarts) the full-screen tint flash for an outcome.
    /// The newest trigger always wins.
    fn flash_overlay(&self, status: ReplyStatus);
}

#[derive(Default)]
struct TimelineClock {
    shake_started: Option<Instant>,
    overlay: Option<(ReplyStatus, Instant)>,
}

/// Wall-clock timeline driver: each shake is a spawned task sleeping out
/// the fixed duration, aborted when re-armed. The overlay keeps no task at
/// all; its opacity is sampled from the trigger instant.
pub struct TokioFeedbackTimeline {
    clock: Arc<Mutex<TimelineClock>>,
    shake_task: Mutex<Option<JoinHandle<()>>>,
}

impl TokioFeedbackTimeline {
    pub fn new() -> Self {
        Self {
            clock: Arc::new(Mutex::new(TimelineClock::default())),
            shake_task: Mutex::new(None),
        }
    }

    /// Current horizontal shake displacement for the render layer.
    pub fn shake_sample(&self) -> f32 {
        let clock = self.clock.lock().unwrap();
        match clock.shake_started {
            Some(started) => {
                shake_translation(shake_progress(started.elapsed().as_millis() as u64))
            }
            None => 0.0,
        }
    }

    /// Current overlay outcome and opacity for the render layer.
    pub fn overlay_sample(&self) -> (ReplyStatus, f32) {
        let clock = self.clock.lock().unwrap();
        match clock.overlay {
            Some((status, started)) => {
                (status, overlay_opacity(started.elapsed().as_millis() as u64))
            }
            None => (ReplyStatus::None, 0.0),
        }
    }
}

impl Default for TokioFeedbackTimeline {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackTimeline for TokioFeedbackTimeline {
    fn play_shake(&self, on_complete: CompletionHandoff) {
        let mut task_guard = self.shake_task.lock().unwrap();
        if let Some(handle) = task_guard.take() {
            debug!("Superseding in-flight shake run");
            handle.abort();
        }

        self.clock.lock().unwrap().shake_started = Some(Instant::now());

        let clock = self.clock.clone();
        let handle = tokio::spawn(async move {
            time::sleep(time::Duration::from_millis(SHAKE_RISE_MS + SHAKE_SETTLE_MS)).await;
            clock.lock().unwrap().shake_started = None;
            on_complete();
        });

        *task_guard = Some(handle);
    }

    fn flash_overlay(&self, status: ReplyStatus) {
        self.clock.lock().unwrap().overlay = Some((status, Instant::now()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn shake_handoff_fires_after_the_run() {
        let timeline = TokioFeedbackTimeline::new();
        let fired = Arc::new(AtomicU32::new(0));

        let fired_clone = fired.clone();
        timeline.play_shake(Box::new(move || {
            fired_clone.fetch_add(1, Ordering::SeqCst);
        }));

        assert!(timeline.shake_sample().abs() < f32::EPSILON, "starts at rest");
        time::sleep(Duration::from_millis(SHAKE_RISE_MS + SHAKE_SETTLE_MS + 100)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert_eq!(timeline.shake_sample(), 0.0);
    }

    #[tokio::test]
    async fn retrigger_supersedes_the_previous_shake() {
        let timeline = TokioFeedbackTimeline::new();
        let fired = Arc::new(AtomicU32::new(0));

        let first = fired.clone();
        timeline.play_shake(Box::new(move || {
            first.fetch_add(10, Ordering::SeqCst);
        }));
        let second = fired.clone();
        timeline.play_shake(Box::new(move || {
            second.fetch_add(1, Ordering::SeqCst);
        }));

        time::sleep(Duration::from_millis(SHAKE_RISE_MS + SHAKE_SETTLE_MS + 150)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1, "only the newest handoff fires");
    }

    #[tokio::test]
    async fn overlay_tracks_the_newest_trigger() {
        let timeline = TokioFeedbackTimeline::new();
        assert_eq!(timeline.overlay_sample(), (ReplyStatus::None, 0.0));

        timeline.flash_overlay(ReplyStatus::Correct);
        let (status, _) = timeline.overlay_sample();
        assert_eq!(status, ReplyStatus::Correct);

        timeline.flash_overlay(ReplyStatus::Wrong);
        let (status, _) = timeline.overlay_sample();
        assert_eq!(status, ReplyStatus::Wrong);
    }
}
