//! Playlist data model
//!
//! A snapshot of a host playlist, independent of where it was loaded from
//! and of how the host applies reorderings.

mod item;
mod playlist;

pub use item::{has_scheme, is_remote, local_path, PlaylistItem};
pub use playlist::{Move, Playlist};
