//! Headless virtual-aquarium sprite engine.
//!
//! Three pieces: a pure per-kind motion model ([`systems::motion`]), the
//! [`Tank`] owning the live working set and advancing it tick by tick, and
//! a desired-state [`reconcile`] pass converging the tank onto whatever
//! list of animals the host currently wants. Rendering, image acquisition
//! and storage are the host's job; the engine hands out [`SpriteView`]
//! snapshots and opaque [`ImageHandle`]s and touches no pixels.

pub mod api;
pub mod components;
pub mod core;
pub mod persist;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::TankConfig;
pub use api::error::TankError;
pub use api::snapshot::SpriteView;
pub use api::types::{SpriteId, Viewport};
pub use components::image::ImageHandle;
pub use components::kind::SpriteKind;
pub use components::sprite::{Direction, Sprite};
pub use crate::core::rng::Rng;
pub use crate::core::tank::Tank;
pub use crate::core::time::NOMINAL_FRAME_MS;
pub use persist::meta::SpriteMeta;
pub use systems::reconcile::{reconcile, DesiredSprite, ReconcileReport};
