use serde::{Deserialize, Serialize};

use crate::core::rng::Rng;

/// The closed set of animal categories. The kind governs a sprite's motion
/// profile, spawn zone, speed/size ranges and default-name pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpriteKind {
    Fish,
    Jellyfish,
    Crab,
}

impl SpriteKind {
    pub const ALL: [SpriteKind; 3] = [SpriteKind::Fish, SpriteKind::Jellyfish, SpriteKind::Crab];

    /// Horizontal speed range in pixels per nominal 60 Hz frame.
    /// Crabs scuttle slowly, fish dart.
    pub fn speed_range(self) -> (f32, f32) {
        match self {
            SpriteKind::Fish => (0.8, 2.0),
            SpriteKind::Jellyfish => (0.5, 1.3),
            SpriteKind::Crab => (0.3, 1.0),
        }
    }

    /// Rendered footprint range in pixels.
    pub fn size_range(self) -> (f32, f32) {
        match self {
            SpriteKind::Fish => (60.0, 120.0),
            SpriteKind::Jellyfish => (70.0, 120.0),
            SpriteKind::Crab => (50.0, 90.0),
        }
    }

    /// Pool of fallback display names used when the host supplies none.
    pub fn name_pool(self) -> &'static [&'static str] {
        match self {
            SpriteKind::Fish => &["Nemo", "Dory", "Marlin", "Bubbles", "Finn"],
            SpriteKind::Jellyfish => &["Jelly", "Luna", "Coral", "Pearl", "Neptune"],
            SpriteKind::Crab => &["Sebastian", "Pincer", "Sandy", "Scuttle", "Crusty"],
        }
    }

    /// Placeholder glyph drawn by the renderer while a sprite has no image.
    pub fn glyph(self) -> &'static str {
        match self {
            SpriteKind::Fish => "🐟",
            SpriteKind::Jellyfish => "🪼",
            SpriteKind::Crab => "🦀",
        }
    }

    /// Pick a random name from the kind's pool.
    pub fn random_name(self, rng: &mut Rng) -> String {
        rng.pick(self.name_pool()).to_string()
    }
}
