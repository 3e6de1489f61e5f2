use glam::Vec2;

use crate::api::types::SpriteId;
use crate::components::image::ImageHandle;
use crate::components::kind::SpriteKind;
use crate::core::rng::Rng;

/// Horizontal travel direction. `speed` is always a non-negative magnitude;
/// the direction supplies the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn random(rng: &mut Rng) -> Self {
        if rng.chance(0.5) {
            Direction::Right
        } else {
            Direction::Left
        }
    }
}

/// Fat sprite struct — one struct carries the full animation state.
/// Mirrors the flat-entity storage style: no components, no indirection,
/// tuned for tens of sprites rather than thousands.
#[derive(Debug, Clone)]
pub struct Sprite {
    /// Unique identifier, host-assigned, immutable.
    pub id: SpriteId,
    /// Animal category; fixes the motion profile and spawn zone.
    pub kind: SpriteKind,
    /// Display name, immutable after creation.
    pub name: String,
    /// Host-owned pixel data, if it has resolved.
    pub image: Option<ImageHandle>,
    /// Current position. `pos.y` is recomputed from `base_y` every tick and
    /// is never accumulated, so vertical motion cannot drift.
    pub pos: Vec2,
    /// Vertical anchor the oscillation swings around.
    pub base_y: f32,
    pub direction: Direction,
    /// Horizontal speed magnitude in pixels per nominal 60 Hz frame.
    pub speed: f32,
    /// Footprint in pixels; also widens the off-screen respawn margin.
    pub size: f32,
    /// Per-sprite phase offset in radians so same-kind sprites do not
    /// oscillate in lockstep.
    pub phase: f32,
    /// Creation timestamp in milliseconds; drives both the oscillation
    /// argument and age-based eviction.
    pub birth_ms: f64,
    /// Blink duty-cycle output; cosmetic only.
    pub visible: bool,
}

impl Sprite {
    pub fn age_ms(&self, now_ms: f64) -> f64 {
        now_ms - self.birth_ms
    }

    /// Elapsed seconds since birth, the `t` fed to the motion model.
    pub fn elapsed_secs(&self, now_ms: f64) -> f32 {
        ((now_ms - self.birth_ms) / 1000.0) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_sign_and_flip() {
        assert_eq!(Direction::Right.sign(), 1.0);
        assert_eq!(Direction::Left.sign(), -1.0);
        assert_eq!(Direction::Left.flipped(), Direction::Right);
        assert_eq!(Direction::Right.flipped().flipped(), Direction::Right);
    }

    #[test]
    fn age_and_elapsed_agree() {
        let sprite = Sprite {
            id: SpriteId::new("x"),
            kind: SpriteKind::Fish,
            name: "Finn".into(),
            image: None,
            pos: Vec2::ZERO,
            base_y: 0.0,
            direction: Direction::Right,
            speed: 1.0,
            size: 80.0,
            phase: 0.0,
            birth_ms: 10_000.0,
            visible: true,
        };
        assert_eq!(sprite.age_ms(12_500.0), 2_500.0);
        assert!((sprite.elapsed_secs(12_500.0) - 2.5).abs() < 1e-6);
    }
}
