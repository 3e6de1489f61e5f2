use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque unique identifier for a sprite.
/// Assigned by the host at creation and stable for the sprite's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpriteId(String);

impl SpriteId {
    pub fn new(id: impl Into<String>) -> Self {
        SpriteId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SpriteId {
    fn from(s: &str) -> Self {
        SpriteId(s.to_owned())
    }
}

impl From<String> for SpriteId {
    fn from(s: String) -> Self {
        SpriteId(s)
    }
}

impl fmt::Display for SpriteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Viewport dimensions in pixels, shared coordinate space with the renderer.
/// Dimensions are clamped to a 1×1 minimum so spawn-zone and boundary math
/// never divide by zero or produce NaN on a degenerate host window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }
}

fn sanitize(dim: f32) -> f32 {
    if dim.is_finite() {
        dim.max(1.0)
    } else {
        1.0
    }
}
