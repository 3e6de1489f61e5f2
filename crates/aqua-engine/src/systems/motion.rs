//! Per-kind motion model — pure math, no engine state.
//!
//! Both functions are deterministic in their inputs: the same
//! `(kind, size, phase, t)` always yields the same offset, which keeps
//! rendering frame rate decoupled from motion and makes the model testable
//! in isolation. All randomness lives in the spawner, frozen into `phase`,
//! `speed` and `size` at spawn time.

use crate::components::kind::SpriteKind;

// ── Fish: gentle bob, amplitude grows a little with size ─────────────
const FISH_AMP_BASE: f32 = 8.0;
const FISH_AMP_PER_PX: f32 = 6.0 / 150.0;
const FISH_OMEGA: f32 = 1.0 / 0.6; // rad/s

// ── Jellyfish: slow deep swells plus a sideways meander ──────────────
const JELLY_AMP_BASE: f32 = 20.0;
const JELLY_AMP_PER_PX: f32 = 12.0 / 120.0;
const JELLY_OMEGA: f32 = 1.0 / 0.9;
/// Meander amplitude in px per nominal frame, layered onto base travel.
const JELLY_DRIFT_AMP: f32 = 0.6;
const JELLY_DRIFT_OMEGA: f32 = 1.0 / 1.2;

// ── Crab: tight high-frequency skitter pinned near the floor ─────────
const CRAB_AMP_BASE: f32 = 3.0;
const CRAB_AMP_PER_PX: f32 = 2.0 / 90.0;
const CRAB_OMEGA: f32 = 6.5;

/// Vertical oscillation offset around `base_y` at `t` seconds since birth.
pub fn vertical_offset(kind: SpriteKind, size: f32, phase: f32, t: f32) -> f32 {
    match kind {
        SpriteKind::Fish => {
            (FISH_AMP_BASE + size * FISH_AMP_PER_PX) * (FISH_OMEGA * t + phase).sin()
        }
        SpriteKind::Jellyfish => {
            (JELLY_AMP_BASE + size * JELLY_AMP_PER_PX) * (JELLY_OMEGA * t + phase).sin()
        }
        SpriteKind::Crab => {
            (CRAB_AMP_BASE + size * CRAB_AMP_PER_PX) * (CRAB_OMEGA * t + phase).sin()
        }
    }
}

/// Kind-specific horizontal perturbation in px per nominal frame, added on
/// top of `speed · direction`. Only jellyfish meander; the doubled phase
/// decorrelates the meander from the vertical swell.
pub fn horizontal_drift(kind: SpriteKind, phase: f32, t: f32) -> f32 {
    match kind {
        SpriteKind::Jellyfish => JELLY_DRIFT_AMP * (JELLY_DRIFT_OMEGA * t + 2.0 * phase).sin(),
        SpriteKind::Fish | SpriteKind::Crab => 0.0,
    }
}

/// Worst-case vertical amplitude for a sprite of this kind and size —
/// the envelope `vertical_offset` never leaves.
pub fn max_amplitude(kind: SpriteKind, size: f32) -> f32 {
    match kind {
        SpriteKind::Fish => FISH_AMP_BASE + size * FISH_AMP_PER_PX,
        SpriteKind::Jellyfish => JELLY_AMP_BASE + size * JELLY_AMP_PER_PX,
        SpriteKind::Crab => CRAB_AMP_BASE + size * CRAB_AMP_PER_PX,
    }
}
