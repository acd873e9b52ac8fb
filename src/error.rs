//! Error types for playlist manipulation

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaylistError {
    #[error("move {from} -> {to} is out of bounds for a playlist of {len} items")]
    MoveOutOfBounds { from: usize, to: usize, len: usize },

    #[error("position {position} is out of bounds for a playlist of {len} items")]
    PositionOutOfBounds { position: usize, len: usize },
}
