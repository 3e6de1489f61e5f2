use thiserror::Error;

use crate::api::types::SpriteId;

/// Errors surfaced by the tank's fallible operations.
///
/// Benign races — removing an id that was already evicted, or an image
/// resolving after its sprite is gone — are deliberately not errors; those
/// paths return `bool` and log at debug level instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TankError {
    /// `add`/`spawn` was called with an id already present in the working
    /// set. This indicates a caller bug: the reconciler's diff never
    /// produces duplicate adds.
    #[error("sprite id `{0}` already exists in the tank")]
    DuplicateId(SpriteId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_id_names_the_offender() {
        let err = TankError::DuplicateId(SpriteId::new("a"));
        assert_eq!(err.to_string(), "sprite id `a` already exists in the tank");
    }
}
