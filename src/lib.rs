//! Playlist Sorter - stable in-place playlist reordering
//!
//! This library sorts media playlists by name (natural order), modification
//! time or size, expressing the result as single-entry moves that a media
//! player's playlist API can apply.

pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod sort;
pub mod source;

pub use config::SortConfig;
pub use error::PlaylistError;
pub use pipeline::SortPipeline;
pub use sort::{reorder, OrderingKey, ReorderPlan};
