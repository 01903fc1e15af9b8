//! Typed failure modes for world generation.
//! Config errors recur identically on every retry; everything else is a
//! transient outcome of one unlucky attempt and is worth retrying.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidateError {
    #[error("no key found in the world")]
    MissingKey,
    #[error("no treasure room found in the world")]
    MissingTreasure,
    #[error("no path from the start room to the key with locks respected")]
    KeyUnreachable,
    #[error("no path from the start room to the treasure even ignoring locks")]
    GraphDisconnected,
    #[error("a path to the treasure exists without needing the key")]
    TreasureReachableWithoutKey,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("name pool holds {available} unique names but {needed} are required")]
    InsufficientNamePool { needed: usize, available: usize },
    #[error("room description pool is empty")]
    EmptyDescriptionPool,
    #[error("no unoccupied grid cell found after {attempts} placement attempts")]
    PlacementExhausted { attempts: u32 },
    #[error("longest path spans {found} rooms, need at least {required}")]
    PathTooShort { found: usize, required: usize },
    #[error("no empty non-start room for item {item:?} after {attempts} attempts")]
    NoRoomAvailable { item: String, attempts: u32 },
    #[error(transparent)]
    Validation(#[from] ValidateError),
    #[error("gave up after {attempts} generation attempts: {last}")]
    AttemptsExhausted { attempts: u32, last: Box<GenerateError> },
}

impl GenerateError {
    /// Config errors are deterministic: retrying with fresh randomness will
    /// fail the same way, so the orchestrator surfaces them immediately.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            GenerateError::InsufficientNamePool { .. } | GenerateError::EmptyDescriptionPool
        )
    }
}
