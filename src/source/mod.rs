//! Playlist snapshot sources
//!
//! Loads playlists from M3U files, directories or explicit path lists and
//! fills in the per-item metadata used for ordering.

mod directory;
mod m3u;
mod metadata;

pub use directory::{from_paths, scan_directory};
pub use m3u::{load_m3u, parse_m3u, write_m3u, M3uEntry};
pub use metadata::{FsMetadata, ItemMetadata, MetadataSource, NoMetadata};

use crate::model::{has_scheme, Playlist};
use anyhow::Result;
use std::path::Path;

/// Whether `path` names an M3U playlist file
pub fn is_m3u(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("m3u") || ext.eq_ignore_ascii_case("m3u8"))
}

/// Load a snapshot from command-line style inputs
///
/// A single directory is scanned, a single M3U file is parsed, and anything
/// else is taken as a list of paths or URLs.
pub fn load_snapshot<M: MetadataSource>(
    inputs: &[String],
    recursive: bool,
    metadata: &M,
) -> Result<Playlist> {
    if let [single] = inputs {
        let path = Path::new(single);
        if !has_scheme(single) {
            if path.is_dir() {
                log::info!("Scanning directory {:?}", path);
                return scan_directory(path, recursive, metadata);
            }
            if is_m3u(path) {
                log::info!("Loading playlist {:?}", path);
                return load_m3u(path, metadata);
            }
        }
    }

    Ok(from_paths(inputs, metadata))
}
