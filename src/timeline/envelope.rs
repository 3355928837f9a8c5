//! Pure evaluators for the time-based feedback effects. The sequencer
//! decides *when* these run; everything here is a function of progress or
//! elapsed time so the render layer can sample it every frame.

/// Shake progress rises 0 -> 3 over this many milliseconds...
pub const SHAKE_RISE_MS: u64 = 200;
/// ...then settles 3 -> 0 over this many.
pub const SHAKE_SETTLE_MS: u64 = 300;

pub const OVERLAY_RISE_MS: u64 = 500;
pub const OVERLAY_FALL_MS: u64 = 500;

/// Peak value of the shake progress ramp.
pub const SHAKE_PEAK: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extrapolation {
    Clamp,
    Extend,
}

/// Linear remap of `x` from the `input` range onto `output`.
pub fn interpolate(x: f32, input: [f32; 2], output: [f32; 2], extrapolation: Extrapolation) -> f32 {
    let [x0, x1] = input;
    let [y0, y1] = output;
    debug_assert!(x1 != x0, "degenerate interpolation window");

    let t = (x - x0) / (x1 - x0);
    let t = match extrapolation {
        Extrapolation::Clamp => t.clamp(0.0, 1.0),
        Extrapolation::Extend => t,
    };
    y0 + t * (y1 - y0)
}

/// Shake progress (0..=3) at `elapsed_ms` since the shake was triggered.
pub fn shake_progress(elapsed_ms: u64) -> f32 {
    if elapsed_ms <= SHAKE_RISE_MS {
        interpolate(
            elapsed_ms as f32,
            [0.0, SHAKE_RISE_MS as f32],
            [0.0, SHAKE_PEAK],
            Extrapolation::Clamp,
        )
    } else if elapsed_ms <= SHAKE_RISE_MS + SHAKE_SETTLE_MS {
        interpolate(
            (elapsed_ms - SHAKE_RISE_MS) as f32,
            [0.0, SHAKE_SETTLE_MS as f32],
            [SHAKE_PEAK, 0.0],
            Extrapolation::Clamp,
        )
    } else {
        0.0
    }
}

/// Horizontal card displacement for a shake progress value: three full
/// left/right oscillations keyframed over [0, 0.5, 1, .., 3].
pub fn shake_translation(progress: f32) -> f32 {
    const STOPS: [f32; 7] = [0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0];
    const VALUES: [f32; 7] = [0.0, -15.0, 0.0, 15.0, 0.0, -15.0, 0.0];

    let progress = progress.clamp(STOPS[0], STOPS[6]);
    for window in 0..STOPS.len() - 1 {
        let (lo, hi) = (STOPS[window], STOPS[window + 1]);
        if progress <= hi {
            return interpolate(
                progress,
                [lo, hi],
                [VALUES[window], VALUES[window + 1]],
                Extrapolation::Clamp,
            );
        }
    }
    0.0
}

/// Overlay tint opacity at `elapsed_ms` since the flash was triggered:
/// ramps 0 -> 1, falls back to 0, then stays dark.
pub fn overlay_opacity(elapsed_ms: u64) -> f32 {
    if elapsed_ms <= OVERLAY_RISE_MS {
        interpolate(
            elapsed_ms as f32,
            [0.0, OVERLAY_RISE_MS as f32],
            [0.0, 1.0],
            Extrapolation::Clamp,
        )
    } else if elapsed_ms <= OVERLAY_RISE_MS + OVERLAY_FALL_MS {
        interpolate(
            (elapsed_ms - OVERLAY_RISE_MS) as f32,
            [0.0, OVERLAY_FALL_MS as f32],
            [1.0, 0.0],
            Extrapolation::Clamp,
        )
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolate_maps_endpoints_and_midpoint() {
        assert_eq!(
            interpolate(60.0, [40.0, 80.0], [1.0, 0.0], Extrapolation::Clamp),
            0.5
        );
        assert_eq!(
            interpolate(40.0, [40.0, 80.0], [1.0, 0.0], Extrapolation::Clamp),
            1.0
        );
        assert_eq!(
            interpolate(80.0, [40.0, 80.0], [1.0, 0.0], Extrapolation::Clamp),
            0.0
        );
    }

    #[test]
    fn clamp_and_extend_differ_outside_the_window() {
        assert_eq!(
            interpolate(200.0, [0.0, 100.0], [0.0, 1.0], Extrapolation::Clamp),
            1.0
        );
        assert_eq!(
            interpolate(200.0, [0.0, 100.0], [0.0, 1.0], Extrapolation::Extend),
            2.0
        );
    }

    #[test]
    fn shake_progress_rises_peaks_and_settles() {
        assert_eq!(shake_progress(0), 0.0);
        assert_eq!(shake_progress(SHAKE_RISE_MS), SHAKE_PEAK);
        assert_eq!(shake_progress(SHAKE_RISE_MS + SHAKE_SETTLE_MS), 0.0);
        assert_eq!(shake_progress(10_000), 0.0);
    }

    #[test]
    fn shake_translation_hits_the_keyframes() {
        assert_eq!(shake_translation(0.0), 0.0);
        assert_eq!(shake_translation(0.5), -15.0);
        assert_eq!(shake_translation(1.0), 0.0);
        assert_eq!(shake_translation(1.5), 15.0);
        assert_eq!(shake_translation(2.5), -15.0);
        assert_eq!(shake_translation(3.0), 0.0);
    }

    #[test]
    fn shake_translation_interpolates_between_keyframes() {
        assert_eq!(shake_translation(0.25), -7.5);
    }

    #[test]
    fn overlay_opacity_flashes_up_then_down() {
        assert_eq!(overlay_opacity(0), 0.0);
        assert_eq!(overlay_opacity(OVERLAY_RISE_MS / 2), 0.5);
        assert_eq!(overlay_opacity(OVERLAY_RISE_MS), 1.0);
        assert_eq!(overlay_opacity(OVERLAY_RISE_MS + OVERLAY_FALL_MS / 2), 0.5);
        assert_eq!(overlay_opacity(OVERLAY_RISE_MS + OVERLAY_FALL_MS), 0.0);
        assert_eq!(overlay_opacity(60_000), 0.0);
    }
}
