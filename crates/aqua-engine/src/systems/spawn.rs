//! Spawn-zone rule and sprite spawner, shared by creation and respawn.

use glam::Vec2;
use log::debug;

use crate::api::config::TankConfig;
use crate::api::types::{SpriteId, Viewport};
use crate::components::image::ImageHandle;
use crate::components::kind::SpriteKind;
use crate::components::sprite::{Direction, Sprite};
use crate::core::rng::Rng;

/// Pick a vertical anchor for a freshly spawned or respawned sprite.
///
/// Crabs are pinned to a thin band just above the sea floor; jellyfish take
/// the upper part of the viewport below the surface margin; fish get the
/// whole mid band. Spans are clamped at zero so a degenerate viewport
/// collapses to the top margin instead of producing negative coordinates.
pub fn spawn_y(kind: SpriteKind, viewport: Viewport, cfg: &TankConfig, rng: &mut Rng) -> f32 {
    let h = viewport.height;
    match kind {
        SpriteKind::Crab => {
            let floor = (h - cfg.ground_height).max(0.0);
            (floor - rng.range(0.0, cfg.crab_band)).max(0.0)
        }
        SpriteKind::Jellyfish => {
            let span = (h * cfg.jelly_zone - cfg.top_margin).max(0.0);
            cfg.top_margin + rng.range(0.0, span)
        }
        SpriteKind::Fish => {
            let span = (h - cfg.top_margin - cfg.ground_height - cfg.fish_floor_gap).max(0.0);
            cfg.top_margin + rng.range(0.0, span)
        }
    }
}

/// Horizontal position just outside the entry edge for a sprite about to
/// swim in. The entry edge is the one behind the travel direction.
fn entry_x(direction: Direction, size: f32, viewport: Viewport, cfg: &TankConfig) -> f32 {
    match direction {
        Direction::Right => -(size + cfg.edge_pad),
        Direction::Left => viewport.width + size + cfg.edge_pad,
    }
}

/// Build a fully randomized sprite entering from a random edge.
///
/// An empty or whitespace `name` falls back to the kind's name pool,
/// matching the naming-form behavior where the field may be left blank.
pub fn spawn_sprite(
    id: SpriteId,
    kind: SpriteKind,
    name: &str,
    image: Option<ImageHandle>,
    birth_ms: f64,
    viewport: Viewport,
    cfg: &TankConfig,
    rng: &mut Rng,
) -> Sprite {
    let name = resolve_name(kind, name, rng);
    let direction = Direction::random(rng);
    let (speed_lo, speed_hi) = kind.speed_range();
    let (size_lo, size_hi) = kind.size_range();
    let size = rng.range(size_lo, size_hi);
    let base_y = spawn_y(kind, viewport, cfg, rng);
    let x = entry_x(direction, size, viewport, cfg);
    debug!("spawn {kind:?} `{name}` at x={x:.0} base_y={base_y:.0}");
    Sprite {
        id,
        kind,
        name,
        image,
        pos: Vec2::new(x, base_y),
        base_y,
        direction,
        speed: rng.range(speed_lo, speed_hi),
        size,
        phase: rng.angle(),
        birth_ms,
        visible: true,
    }
}

/// Re-enter a sprite that crossed the viewport boundary.
///
/// The travel direction flips and the sprite is placed just outside the
/// edge it is now heading away from — the edge opposite its exit, never a
/// random one. Motion parameters are re-rolled; identity, image and birth
/// time are untouched so the lifetime countdown keeps running.
pub fn respawn(sprite: &mut Sprite, viewport: Viewport, cfg: &TankConfig, rng: &mut Rng) {
    sprite.direction = sprite.direction.flipped();
    let (speed_lo, speed_hi) = sprite.kind.speed_range();
    let (size_lo, size_hi) = sprite.kind.size_range();
    sprite.speed = rng.range(speed_lo, speed_hi);
    sprite.size = rng.range(size_lo, size_hi);
    sprite.phase = rng.angle();
    sprite.base_y = spawn_y(sprite.kind, viewport, cfg, rng);
    sprite.pos = Vec2::new(
        entry_x(sprite.direction, sprite.size, viewport, cfg),
        sprite.base_y,
    );
    debug!(
        "respawn `{}` heading {:?} from x={:.0}",
        sprite.id, sprite.direction, sprite.pos.x
    );
}

fn resolve_name(kind: SpriteKind, requested: &str, rng: &mut Rng) -> String {
    let trimmed = requested.trim();
    if trimmed.is_empty() {
        kind.random_name(rng)
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> TankConfig {
        TankConfig::default()
    }

    #[test]
    fn crab_sits_just_above_the_floor() {
        let mut rng = Rng::new(3);
        let viewport = Viewport::new(1000.0, 800.0);
        let cfg = cfg();
        for _ in 0..50 {
            let y = spawn_y(SpriteKind::Crab, viewport, &cfg, &mut rng);
            let floor = 800.0 - cfg.ground_height;
            assert!(y <= floor && y >= floor - cfg.crab_band, "y = {y}");
        }
    }

    #[test]
    fn jellyfish_stay_in_the_upper_zone() {
        let mut rng = Rng::new(4);
        let viewport = Viewport::new(1000.0, 800.0);
        let cfg = cfg();
        for _ in 0..50 {
            let y = spawn_y(SpriteKind::Jellyfish, viewport, &cfg, &mut rng);
            assert!(y >= cfg.top_margin, "y = {y}");
            assert!(y <= 800.0 * cfg.jelly_zone, "y = {y}");
        }
    }

    #[test]
    fn fish_avoid_surface_and_ground() {
        let mut rng = Rng::new(5);
        let viewport = Viewport::new(1000.0, 800.0);
        let cfg = cfg();
        for _ in 0..50 {
            let y = spawn_y(SpriteKind::Fish, viewport, &cfg, &mut rng);
            assert!(y >= cfg.top_margin, "y = {y}");
            assert!(y <= 800.0 - cfg.ground_height - cfg.fish_floor_gap, "y = {y}");
        }
    }

    #[test]
    fn degenerate_viewport_yields_finite_positions() {
        let mut rng = Rng::new(6);
        let viewport = Viewport::new(0.0, 0.0); // clamps to 1×1
        let cfg = cfg();
        for kind in SpriteKind::ALL {
            let y = spawn_y(kind, viewport, &cfg, &mut rng);
            assert!(y.is_finite(), "{kind:?}: y = {y}");
        }
    }

    #[test]
    fn crab_floor_never_goes_negative_on_shallow_viewports() {
        let mut rng = Rng::new(8);
        // Shallower than the ground band itself.
        let viewport = Viewport::new(40.0, 40.0);
        let cfg = cfg();
        for _ in 0..50 {
            let y = spawn_y(SpriteKind::Crab, viewport, &cfg, &mut rng);
            assert!((0.0..=40.0).contains(&y), "y = {y}");
        }
    }

    #[test]
    fn spawn_places_sprite_outside_entry_edge() {
        let mut rng = Rng::new(11);
        let viewport = Viewport::new(1000.0, 800.0);
        let cfg = cfg();
        for i in 0..20 {
            let s = spawn_sprite(
                SpriteId::new(format!("s{i}")),
                SpriteKind::Fish,
                "",
                None,
                0.0,
                viewport,
                &cfg,
                &mut rng,
            );
            match s.direction {
                Direction::Right => assert!(s.pos.x < 0.0),
                Direction::Left => assert!(s.pos.x > viewport.width),
            }
            assert_eq!(s.pos.y, s.base_y);
            assert!(s.speed > 0.0);
            assert!((0.0..std::f32::consts::TAU).contains(&s.phase));
        }
    }

    #[test]
    fn blank_names_fall_back_to_the_pool() {
        let mut rng = Rng::new(12);
        let viewport = Viewport::new(1000.0, 800.0);
        let s = spawn_sprite(
            SpriteId::new("a"),
            SpriteKind::Crab,
            "   ",
            None,
            0.0,
            viewport,
            &cfg(),
            &mut rng,
        );
        assert!(SpriteKind::Crab.name_pool().contains(&s.name.as_str()));
    }

    #[test]
    fn given_names_are_kept_verbatim() {
        let mut rng = Rng::new(13);
        let viewport = Viewport::new(1000.0, 800.0);
        let s = spawn_sprite(
            SpriteId::new("a"),
            SpriteKind::Crab,
            "  Pincer ",
            None,
            0.0,
            viewport,
            &cfg(),
            &mut rng,
        );
        assert_eq!(s.name, "Pincer");
    }

    #[test]
    fn respawn_flips_direction_and_crosses_over() {
        let mut rng = Rng::new(14);
        let viewport = Viewport::new(1000.0, 800.0);
        let cfg = cfg();
        let mut s = spawn_sprite(
            SpriteId::new("a"),
            SpriteKind::Fish,
            "Finn",
            None,
            0.0,
            viewport,
            &cfg,
            &mut rng,
        );
        // Force a right-edge exit.
        s.direction = Direction::Right;
        s.pos.x = viewport.width + s.size + cfg.respawn_buffer + 1.0;
        respawn(&mut s, viewport, &cfg, &mut rng);
        assert_eq!(s.direction, Direction::Left);
        assert!(s.pos.x > viewport.width, "x = {}", s.pos.x);
        // Identity and lifetime are preserved.
        assert_eq!(s.name, "Finn");
        assert_eq!(s.birth_ms, 0.0);
    }
}
