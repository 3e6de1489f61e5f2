use crate::api::types::SpriteId;
use crate::components::image::ImageHandle;
use crate::components::kind::SpriteKind;
use crate::components::sprite::Direction;

/// Read-only renderable state for one sprite, produced by
/// [`Tank::snapshot`](crate::core::tank::Tank::snapshot).
///
/// Owns its data — no references into the tank escape, so the renderer can
/// hold a frame's views for as long as it likes.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteView {
    pub id: SpriteId,
    pub kind: SpriteKind,
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub direction: Direction,
    pub size: f32,
    /// `None` while the image is still resolving (or failed to resolve);
    /// the renderer draws the kind's placeholder glyph in that case.
    pub image: Option<ImageHandle>,
    pub visible: bool,
}
