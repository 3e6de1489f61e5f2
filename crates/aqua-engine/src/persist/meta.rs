//! Session-persistence metadata.
//!
//! Only identity survives a session: id, name, kind, creation time. Image
//! bytes and motion parameters are deliberately never persisted — images
//! live in host memory only, and motion is re-randomized on every spawn.
//! The host stores the JSON blob wherever it likes (e.g. local storage)
//! and feeds recovered entries back in as desired-state input at startup.

use serde::{Deserialize, Serialize};

use crate::api::types::SpriteId;
use crate::components::kind::SpriteKind;
use crate::components::sprite::Sprite;
use crate::systems::reconcile::DesiredSprite;

/// The persisted slice of one sprite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteMeta {
    pub id: SpriteId,
    pub name: String,
    pub kind: SpriteKind,
    /// Creation timestamp in milliseconds, same clock as tick timestamps.
    pub created_at: f64,
}

impl SpriteMeta {
    pub fn from_sprite(sprite: &Sprite) -> Self {
        Self {
            id: sprite.id.clone(),
            name: sprite.name.clone(),
            kind: sprite.kind,
            created_at: sprite.birth_ms,
        }
    }
}

/// Capture metadata for every live sprite, for the host to store.
pub fn collect_meta<'a>(sprites: impl Iterator<Item = &'a Sprite>) -> Vec<SpriteMeta> {
    sprites.map(SpriteMeta::from_sprite).collect()
}

/// Parse a stored metadata blob.
pub fn from_json(json: &str) -> Result<Vec<SpriteMeta>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Serialize metadata for storage.
pub fn to_json(metas: &[SpriteMeta]) -> Result<String, serde_json::Error> {
    serde_json::to_string(metas)
}

/// Turn recovered metadata into desired-state input for reconciliation.
///
/// Entries already past the lifetime threshold are silently dropped —
/// there is no point hydrating a sprite the next eviction pass would
/// remove. Survivors keep their original birth time so countdowns resume,
/// and come back imageless (the renderer shows the kind glyph until the
/// host re-acquires pixels, which for this aquarium it never does).
pub fn desired_from_meta(
    metas: &[SpriteMeta],
    now_ms: f64,
    lifetime_ms: f64,
) -> Vec<DesiredSprite> {
    metas
        .iter()
        .filter(|m| now_ms - m.created_at < lifetime_ms)
        .map(|m| {
            DesiredSprite::new(m.id.clone(), m.kind, m.name.clone()).with_birth_ms(m.created_at)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(id: &str, kind: SpriteKind, created_at: f64) -> SpriteMeta {
        SpriteMeta {
            id: SpriteId::new(id),
            name: "Bubbles".into(),
            kind,
            created_at,
        }
    }

    #[test]
    fn json_round_trip() {
        let metas = vec![
            meta("a", SpriteKind::Fish, 1000.0),
            meta("b", SpriteKind::Crab, 2000.0),
        ];
        let json = to_json(&metas).unwrap();
        let back = from_json(&json).unwrap();
        assert_eq!(back, metas);
    }

    #[test]
    fn parses_the_stored_wire_format() {
        let json = r#"[
            { "id": "x1", "name": "Luna", "kind": "jellyfish", "created_at": 5000.0 }
        ]"#;
        let metas = from_json(json).unwrap();
        assert_eq!(metas.len(), 1);
        assert_eq!(metas[0].kind, SpriteKind::Jellyfish);
        assert_eq!(metas[0].id, SpriteId::new("x1"));
    }

    #[test]
    fn expired_entries_are_dropped_on_hydration() {
        let lifetime = 300_000.0;
        let now = 1_000_000.0;
        let metas = vec![
            meta("fresh", SpriteKind::Fish, now - lifetime + 1.0),
            meta("stale", SpriteKind::Crab, now - lifetime - 1.0),
        ];
        let desired = desired_from_meta(&metas, now, lifetime);
        assert_eq!(desired.len(), 1);
        assert_eq!(desired[0].id, SpriteId::new("fresh"));
        assert_eq!(desired[0].birth_ms, Some(now - lifetime + 1.0));
        assert_eq!(desired[0].image, None);
    }

    #[test]
    fn malformed_json_is_an_error_not_a_panic() {
        assert!(from_json("not json at all").is_err());
        assert!(from_json(r#"[{"id": "a"}]"#).is_err());
    }
}
