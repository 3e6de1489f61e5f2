//! Tick timing helpers.
//!
//! Ticks are driven by the host's frame clock and arrive at whatever rate it
//! runs. Horizontal speeds are tuned in pixels per nominal 60 Hz frame, so
//! each tick scales movement by the wall-clock time actually elapsed —
//! frame-rate variation changes smoothness, never distance covered.

/// Nominal frame duration the speed constants are tuned against (60 Hz).
pub const NOMINAL_FRAME_MS: f64 = 1000.0 / 60.0;

/// Cap on one tick's elapsed time, in nominal frames. A tab resumed after
/// minutes in the background gets one capped step instead of a teleport.
pub const MAX_TICK_FRAMES: f64 = 10.0;

/// Convert an elapsed wall-clock interval to nominal frame counts,
/// clamped to [0, MAX_TICK_FRAMES].
pub fn frames(dt_ms: f64) -> f32 {
    (dt_ms.clamp(0.0, NOMINAL_FRAME_MS * MAX_TICK_FRAMES) / NOMINAL_FRAME_MS) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_nominal_frame_is_one_step() {
        assert!((frames(NOMINAL_FRAME_MS) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn long_gaps_are_capped() {
        assert_eq!(frames(60_000.0), MAX_TICK_FRAMES as f32);
    }

    #[test]
    fn negative_intervals_are_ignored() {
        assert_eq!(frames(-5.0), 0.0);
    }
}
