//! Desired-state reconciliation.
//!
//! The host owns the list of animals the user wants in the aquarium; the
//! tank owns the live animated working set. Each frame the host hands the
//! desired list over and this system converges the tank onto it: spawn what
//! is missing, remove what is no longer wanted. Time-based eviction is the
//! tank's own business and composes independently.

use std::collections::HashSet;

use log::warn;

use crate::api::types::SpriteId;
use crate::components::image::ImageHandle;
use crate::components::kind::SpriteKind;
use crate::core::tank::Tank;

/// One entry of the host's desired list: identity plus acquisition output.
/// Motion state is never part of it — that is rolled by the spawner.
#[derive(Debug, Clone, PartialEq)]
pub struct DesiredSprite {
    pub id: SpriteId,
    pub kind: SpriteKind,
    /// Display name; blank falls back to the kind's name pool.
    pub name: String,
    /// `None` while the host is still loading the image (or it failed);
    /// the sprite swims with a placeholder until `attach_image` lands.
    pub image: Option<ImageHandle>,
    /// Birth-time override in milliseconds, used when re-hydrating sprites
    /// from persisted metadata so their lifetime countdown resumes instead
    /// of restarting. `None` means "born now".
    pub birth_ms: Option<f64>,
}

impl DesiredSprite {
    pub fn new(id: impl Into<SpriteId>, kind: SpriteKind, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            name: name.into(),
            image: None,
            birth_ms: None,
        }
    }

    pub fn with_image(mut self, image: ImageHandle) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_birth_ms(mut self, birth_ms: f64) -> Self {
        self.birth_ms = Some(birth_ms);
        self
    }
}

/// What one reconciliation pass changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReconcileReport {
    pub added: Vec<SpriteId>,
    pub removed: Vec<SpriteId>,
}

impl ReconcileReport {
    pub fn is_noop(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Converge the tank's working set onto `desired`.
///
/// Idempotent: running it twice with the same list makes the second pass a
/// no-op. Order within one pass carries no meaning — sprites are
/// independent. A duplicated id inside `desired` spawns once; later
/// occurrences are skipped.
pub fn reconcile(tank: &mut Tank, desired: &[DesiredSprite], now_ms: f64) -> ReconcileReport {
    let mut report = ReconcileReport::default();

    let desired_ids: HashSet<&SpriteId> = desired.iter().map(|d| &d.id).collect();
    let stale: Vec<SpriteId> = tank
        .iter()
        .map(|s| s.id.clone())
        .filter(|id| !desired_ids.contains(id))
        .collect();
    for id in stale {
        tank.remove(&id);
        report.removed.push(id);
    }

    for d in desired {
        if tank.contains(&d.id) {
            continue;
        }
        let birth_ms = d.birth_ms.unwrap_or(now_ms);
        match tank.spawn(d.id.clone(), d.kind, &d.name, d.image, birth_ms) {
            Ok(()) => report.added.push(d.id.clone()),
            // Unreachable given the contains-check, but never let one bad
            // entry abort the pass.
            Err(err) => warn!("reconcile skipped `{}`: {err}", d.id),
        }
    }

    report
}
