use std::time::Duration;

/// Leftward displacement past which a released drag becomes a skip.
pub const SKIP_THRESHOLD: f32 = -200.0;

/// Rightward motion beyond this is ignored so near-vertical scrolls and
/// small right nudges never move the card.
pub const RIGHTWARD_DEADZONE: f32 = 15.0;

/// A drag only arms after being held this long, disambiguating it from a
/// plain tap or scroll.
pub const ACTIVATION_HOLD: Duration = Duration::from_millis(200);

/// Divisor mapping the card's horizontal offset to its tilt, in degrees.
pub const CARD_INCLINATION: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragIntent {
    None,
    Skip,
}

/// Pure reducer for one horizontal drag: samples in, intent out. Owns
/// nothing but the live offset, which the render layer reads every frame.
#[derive(Debug, Default)]
pub struct DragTracker {
    armed: bool,
    offset: f32,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the tracker once the press has been held long enough.
    /// Returns whether the drag is live.
    pub fn begin(&mut self, held: Duration) -> bool {
        self.armed = held >= ACTIVATION_HOLD;
        self.offset = 0.0;
        self.armed
    }

    /// Feeds one translation sample. Rightward motion past the deadzone is
    /// dropped entirely; everything else becomes the live offset.
    pub fn update(&mut self, translation_x: f32) {
        if !self.armed {
            return;
        }
        if translation_x > RIGHTWARD_DEADZONE {
            return;
        }
        self.offset = translation_x;
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Card tilt derived from the live offset, degrees.
    pub fn rotation(&self) -> f32 {
        self.offset / CARD_INCLINATION
    }

    /// Ends the drag. The offset always snaps back to zero; the intent is
    /// Skip only when the accumulated leftward displacement crossed the
    /// threshold.
    pub fn release(&mut self) -> DragIntent {
        let intent = if self.armed && self.offset < SKIP_THRESHOLD {
            DragIntent::Skip
        } else {
            DragIntent::None
        };
        self.armed = false;
        self.offset = 0.0;
        intent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_press_never_arms() {
        let mut tracker = DragTracker::new();
        assert!(!tracker.begin(Duration::from_millis(50)));
        tracker.update(-300.0);
        assert_eq!(tracker.offset(), 0.0);
        assert_eq!(tracker.release(), DragIntent::None);
    }

    #[test]
    fn rightward_motion_past_deadzone_is_ignored() {
        let mut tracker = DragTracker::new();
        tracker.begin(Duration::from_millis(250));
        tracker.update(-40.0);
        tracker.update(60.0);
        assert_eq!(tracker.offset(), -40.0);
    }

    #[test]
    fn small_motion_inside_deadzone_still_updates() {
        let mut tracker = DragTracker::new();
        tracker.begin(Duration::from_millis(250));
        tracker.update(10.0);
        assert_eq!(tracker.offset(), 10.0);
    }

    #[test]
    fn release_past_threshold_is_a_skip_and_resets_offset() {
        let mut tracker = DragTracker::new();
        tracker.begin(Duration::from_millis(300));
        tracker.update(-250.0);
        assert_eq!(tracker.release(), DragIntent::Skip);
        assert_eq!(tracker.offset(), 0.0);
    }

    #[test]
    fn release_above_threshold_is_not_a_skip() {
        let mut tracker = DragTracker::new();
        tracker.begin(Duration::from_millis(300));
        tracker.update(-150.0);
        assert_eq!(tracker.release(), DragIntent::None);
        assert_eq!(tracker.offset(), 0.0);
    }

    #[test]
    fn rotation_follows_offset() {
        let mut tracker = DragTracker::new();
        tracker.begin(Duration::from_millis(300));
        tracker.update(-100.0);
        assert_eq!(tracker.rotation(), -10.0);
    }
}
