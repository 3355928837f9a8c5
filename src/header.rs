//! Scroll-coupled header: every value here is a pure function of the
//! latest vertical scroll offset, recomputed per sample.

use crate::timeline::envelope::{interpolate, Extrapolation};

const HEADER_FADE_WINDOW: [f32; 2] = [40.0, 80.0];
const FIXED_BAR_WINDOW: [f32; 2] = [60.0, 100.0];

/// Pose of the sticky progress bar that slides in once the inline header
/// has scrolled away.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedBarPose {
    pub opacity: f32,
    pub translate_y: f32,
}

/// Inline header opacity; fades 1 -> 0 across the 40..80 window and keeps
/// extrapolating linearly outside it (the render layer clamps what it
/// draws).
pub fn header_opacity(scroll_y: f32) -> f32 {
    interpolate(
        scroll_y,
        HEADER_FADE_WINDOW,
        [1.0, 0.0],
        Extrapolation::Extend,
    )
}

pub fn fixed_bar_pose(scroll_y: f32) -> FixedBarPose {
    FixedBarPose {
        opacity: interpolate(scroll_y, FIXED_BAR_WINDOW, [0.0, 1.0], Extrapolation::Clamp),
        translate_y: interpolate(
            scroll_y,
            FIXED_BAR_WINDOW,
            [-50.0, 0.0],
            Extrapolation::Clamp,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_opaque_at_top_and_gone_past_the_window() {
        assert_eq!(header_opacity(40.0), 1.0);
        assert_eq!(header_opacity(60.0), 0.5);
        assert_eq!(header_opacity(80.0), 0.0);
    }

    #[test]
    fn header_extrapolates_outside_the_window() {
        assert!(header_opacity(0.0) > 1.0);
        assert!(header_opacity(120.0) < 0.0);
    }

    #[test]
    fn fixed_bar_is_hidden_before_its_window() {
        let pose = fixed_bar_pose(0.0);
        assert_eq!(pose.opacity, 0.0);
        assert_eq!(pose.translate_y, -50.0);
    }

    #[test]
    fn fixed_bar_slides_in_across_its_window() {
        let pose = fixed_bar_pose(80.0);
        assert_eq!(pose.opacity, 0.5);
        assert_eq!(pose.translate_y, -25.0);
    }

    #[test]
    fn fixed_bar_clamps_past_its_window() {
        let pose = fixed_bar_pose(500.0);
        assert_eq!(pose.opacity, 1.0);
        assert_eq!(pose.translate_y, 0.0);
    }
}
