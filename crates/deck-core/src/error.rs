//! Error types for the deck core

use thiserror::Error;

/// Errors raised while assembling the deck.
///
/// Navigation itself never fails: out-of-range moves are clamped. These
/// variants only guard construction of the registry and controller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeckError {
    /// A deck needs at least one slide
    #[error("slide registry must contain at least one slide")]
    EmptyRegistry,

    /// Lookup past the end of the registry
    #[error("slide index {index} out of range (deck has {len} slides)")]
    IndexOutOfRange { index: usize, len: usize },
}
