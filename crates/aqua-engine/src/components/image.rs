/// Opaque token referencing pixel data owned by the host.
///
/// The engine never touches image bytes — it only carries the handle from
/// the acquisition path through to [`SpriteView`](crate::api::snapshot::SpriteView)
/// and drops it on removal or eviction. Image loading is asynchronous on the
/// host side, so sprites routinely exist with no handle attached yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(pub u64);
