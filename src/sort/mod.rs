//! Playlist ordering
//!
//! Computes a stable target order for a playlist snapshot and realizes it
//! as single-entry moves, the only reordering primitive a host playlist
//! exposes.

mod engine;
mod key;
mod natural;

pub use engine::{realize, reorder, sorted_order, ReorderPlan};
pub use key::OrderingKey;
pub use natural::{natural_cmp, natural_cmp_keyed, natural_key};
