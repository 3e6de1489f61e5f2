use log::{debug, warn};

use crate::api::config::TankConfig;
use crate::api::error::TankError;
use crate::api::snapshot::SpriteView;
use crate::api::types::{SpriteId, Viewport};
use crate::components::image::ImageHandle;
use crate::components::kind::SpriteKind;
use crate::components::sprite::Sprite;
use crate::core::rng::Rng;
use crate::core::time::{frames, NOMINAL_FRAME_MS};
use crate::systems::{motion, spawn};

/// The sprite lifecycle manager. Owns the authoritative working set of live
/// sprites as a flat Vec and advances it one tick at a time.
///
/// Ticks are driven externally by the host's frame clock; the tank keeps no
/// timer of its own. All mutation happens through `tick`, `evict_expired`
/// and the add/remove paths — external readers only ever see the owned
/// [`SpriteView`] values returned by `snapshot`.
pub struct Tank {
    sprites: Vec<Sprite>,
    viewport: Viewport,
    config: TankConfig,
    rng: Rng,
    last_tick_ms: Option<f64>,
}

impl Tank {
    pub fn new(viewport: Viewport, config: TankConfig, seed: u64) -> Self {
        Self {
            sprites: Vec::with_capacity(32),
            viewport,
            config,
            rng: Rng::new(seed),
            last_tick_ms: None,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Track a host window resize. Live sprites keep their anchors; the new
    /// bounds apply from the next boundary check onward.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn config(&self) -> &TankConfig {
        &self.config
    }

    // -- Working-set surface --

    /// Insert a fully-initialized sprite. Fails loudly on a duplicate id:
    /// the reconciler's diff never produces one, so a collision is a caller
    /// bug, not a condition to paper over.
    pub fn add(&mut self, sprite: Sprite) -> Result<(), TankError> {
        if self.contains(&sprite.id) {
            return Err(TankError::DuplicateId(sprite.id));
        }
        self.sprites.push(sprite);
        Ok(())
    }

    /// Build a randomized sprite for the given identity and insert it.
    /// This is the host-facing "add an animal" path; position, direction,
    /// speed, size and phase are all rolled here per the spawn-zone rules.
    pub fn spawn(
        &mut self,
        id: SpriteId,
        kind: SpriteKind,
        name: &str,
        image: Option<ImageHandle>,
        birth_ms: f64,
    ) -> Result<(), TankError> {
        if self.contains(&id) {
            return Err(TankError::DuplicateId(id));
        }
        let sprite = spawn::spawn_sprite(
            id,
            kind,
            name,
            image,
            birth_ms,
            self.viewport,
            &self.config,
            &mut self.rng,
        );
        self.sprites.push(sprite);
        Ok(())
    }

    /// Remove by id, releasing the sprite's image handle. Returns whether a
    /// sprite was removed; an absent id is a silent no-op since explicit
    /// removal races benignly against eviction.
    pub fn remove(&mut self, id: &SpriteId) -> bool {
        if let Some(idx) = self.sprites.iter().position(|s| &s.id == id) {
            self.sprites.swap_remove(idx);
            true
        } else {
            debug!("remove of absent sprite `{id}` ignored");
            false
        }
    }

    pub fn contains(&self, id: &SpriteId) -> bool {
        self.sprites.iter().any(|s| &s.id == id)
    }

    pub fn get(&self, id: &SpriteId) -> Option<&Sprite> {
        self.sprites.iter().find(|s| &s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sprite> {
        self.sprites.iter()
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Attach a late-resolving image to a live sprite.
    ///
    /// Image loading is asynchronous on the host side and may complete after
    /// the sprite was removed or evicted; in that case the handle is dropped
    /// and `false` comes back, so a stale load never mutates anything.
    pub fn attach_image(&mut self, id: &SpriteId, handle: ImageHandle) -> bool {
        match self.sprites.iter_mut().find(|s| &s.id == id) {
            Some(sprite) => {
                sprite.image = Some(handle);
                true
            }
            None => {
                debug!("image for `{id}` resolved after removal, dropped");
                false
            }
        }
    }

    // -- Per-frame advance --

    /// Advance every live sprite to `now_ms`.
    ///
    /// Horizontal travel scales with the wall-clock time elapsed since the
    /// previous tick, so variable frame intervals change smoothness but not
    /// distance covered. Vertical position is recomputed from `base_y` and
    /// the motion model each tick — never accumulated. Sprites past the
    /// off-screen margin are respawned from the edge they exited, heading
    /// back in with re-rolled motion parameters.
    pub fn tick(&mut self, now_ms: f64) {
        let dt_ms = match self.last_tick_ms {
            Some(prev) => now_ms - prev,
            // First tick has no baseline; advance one nominal frame.
            None => NOMINAL_FRAME_MS,
        };
        self.last_tick_ms = Some(now_ms);
        let steps = frames(dt_ms);

        let viewport = self.viewport;
        let config = &self.config;
        for sprite in self.sprites.iter_mut() {
            let t = sprite.elapsed_secs(now_ms);
            let dx = (sprite.speed * sprite.direction.sign()
                + motion::horizontal_drift(sprite.kind, sprite.phase, t))
                * steps;
            sprite.pos.x += dx;
            sprite.pos.y =
                sprite.base_y + motion::vertical_offset(sprite.kind, sprite.size, sprite.phase, t);

            if !sprite.pos.x.is_finite() || !sprite.pos.y.is_finite() {
                // One corrupt sprite must never halt the loop; reset it and
                // keep going.
                warn!("sprite `{}` went non-finite, respawning", sprite.id);
                spawn::respawn(sprite, viewport, config, &mut self.rng);
            } else {
                let margin = sprite.size + config.respawn_buffer;
                if sprite.pos.x < -margin || sprite.pos.x > viewport.width + margin {
                    spawn::respawn(sprite, viewport, config, &mut self.rng);
                }
            }

            let cycle = sprite.age_ms(now_ms).rem_euclid(config.blink_period_ms);
            sprite.visible = cycle < config.blink_period_ms - config.blink_off_ms;
        }
    }

    /// Remove every sprite older than the configured lifetime, releasing
    /// image handles. Returns the evicted ids so the host can free any
    /// resources it holds for them.
    pub fn evict_expired(&mut self, now_ms: f64) -> Vec<SpriteId> {
        let lifetime = self.config.lifetime_ms;
        let mut evicted = Vec::new();
        self.sprites.retain(|s| {
            if s.age_ms(now_ms) >= lifetime {
                evicted.push(s.id.clone());
                false
            } else {
                true
            }
        });
        for id in &evicted {
            debug!("evicted expired sprite `{id}`");
        }
        evicted
    }

    // -- Read-only views --

    /// Renderable state for every live sprite, read by the host once per
    /// frame after `tick`/`evict_expired`/reconciliation have all run.
    pub fn snapshot(&self) -> Vec<SpriteView> {
        self.sprites
            .iter()
            .map(|s| SpriteView {
                id: s.id.clone(),
                kind: s.kind,
                name: s.name.clone(),
                x: s.pos.x,
                y: s.pos.y,
                direction: s.direction,
                size: s.size,
                image: s.image,
                visible: s.visible,
            })
            .collect()
    }

    /// Milliseconds until age-based eviction, clamped at zero. `None` if
    /// the id is not live. Drives gallery countdowns.
    pub fn time_remaining(&self, id: &SpriteId, now_ms: f64) -> Option<f64> {
        self.get(id)
            .map(|s| (self.config.lifetime_ms - s.age_ms(now_ms)).max(0.0))
    }
}
