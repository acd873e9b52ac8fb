//! Directory and path-list sources

use super::MetadataSource;
use crate::model::{Playlist, PlaylistItem};
use anyhow::{Context, Result};
use std::path::Path;
use walkdir::WalkDir;

/// Build a playlist from the regular files in `dir`
///
/// Only the top level is read unless `recursive` is set. Entries are taken
/// in file-name order within each directory.
pub fn scan_directory<M: MetadataSource>(
    dir: &Path,
    recursive: bool,
    metadata: &M,
) -> Result<Playlist> {
    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut playlist = Playlist::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(max_depth)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("Failed to read directory: {:?}", dir))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path().to_string_lossy().into_owned();
        log::debug!("Found {}", path);
        playlist.push(metadata.enrich(PlaylistItem::new(path)));
    }

    log::info!("Found {} files in {:?}", playlist.len(), dir);
    Ok(playlist)
}

/// Build a playlist from explicit paths or URLs, in the given order
pub fn from_paths<M: MetadataSource, S: AsRef<str>>(paths: &[S], metadata: &M) -> Playlist {
    let items = paths
        .iter()
        .map(|path| metadata.enrich(PlaylistItem::new(path.as_ref())))
        .collect();
    Playlist::from_items(items)
}
