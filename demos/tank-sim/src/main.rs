//! Headless aquarium run: hydrate a tank from persisted metadata, add a few
//! animals, and drive the frame loop for a simulated minute, printing what a
//! renderer would consume.

use aqua_engine::persist::meta;
use aqua_engine::{reconcile, DesiredSprite, ImageHandle, SpriteId, SpriteKind, Tank, TankConfig, Viewport, NOMINAL_FRAME_MS};
use log::info;

const SEED: u64 = 42;
const SIM_SECONDS: u64 = 60;
const REPORT_EVERY_FRAMES: u64 = 120;

/// Metadata blob as a previous session would have stored it. The stale
/// entry is past the five-minute lifetime and must not come back.
const SAVED_META: &str = r#"[
    { "id": "prev-1", "name": "Dory",   "kind": "fish", "created_at": -120000.0 },
    { "id": "prev-2", "name": "Crusty", "kind": "crab", "created_at": -400000.0 }
]"#;

fn main() {
    env_logger::init();

    let config = TankConfig::default();
    let lifetime_ms = config.lifetime_ms;
    let mut tank = Tank::new(Viewport::new(1280.0, 720.0), config, SEED);

    // Session restore: recovered entries become desired-state input.
    let saved = meta::from_json(SAVED_META).expect("bundled metadata is valid");
    let mut desired = meta::desired_from_meta(&saved, 0.0, lifetime_ms);
    info!("restored {} of {} saved animals", desired.len(), saved.len());

    // The user adds one of each kind; the jellyfish arrives with pixels.
    desired.push(DesiredSprite::new("cam-1", SpriteKind::Fish, "Finn"));
    desired.push(DesiredSprite::new("up-1", SpriteKind::Jellyfish, "Luna").with_image(ImageHandle(1)));
    desired.push(DesiredSprite::new("cam-2", SpriteKind::Crab, ""));

    let mut now_ms = 0.0;
    for frame in 0..SIM_SECONDS * 60 {
        reconcile(&mut tank, &desired, now_ms);
        tank.tick(now_ms);
        for id in tank.evict_expired(now_ms) {
            desired.retain(|d| d.id != id);
        }

        // Finn's camera image finishes decoding a second in.
        if frame == 60 {
            let attached = tank.attach_image(&SpriteId::new("cam-1"), ImageHandle(2));
            info!("cam-1 image resolved, attached: {attached}");
        }

        // The user deletes the restored fish from the gallery mid-run.
        if frame == 1800 {
            desired.retain(|d| d.id != SpriteId::new("prev-1"));
        }

        if frame % REPORT_EVERY_FRAMES == 0 {
            for view in tank.snapshot() {
                let remaining = tank
                    .time_remaining(&view.id, now_ms)
                    .map(|ms| format!("{:.0}s", ms / 1000.0))
                    .unwrap_or_default();
                info!(
                    "t={:5.1}s {:9} `{}` at ({:6.1}, {:6.1}) size {:3.0} {} {} — {} left",
                    now_ms / 1000.0,
                    format!("{:?}", view.kind),
                    view.name,
                    view.x,
                    view.y,
                    view.size,
                    if view.image.is_some() { "📷" } else { view.kind.glyph() },
                    if view.visible { "" } else { "(dimmed)" },
                    remaining,
                );
            }
        }

        now_ms += NOMINAL_FRAME_MS;
    }

    // What the host would write back for the next session.
    let metas = meta::collect_meta(tank.iter());
    let blob = meta::to_json(&metas).expect("metadata serializes");
    info!("session metadata to store: {blob}");
}
