//! M3U playlist reader and writer

use super::MetadataSource;
use crate::model::{has_scheme, Playlist, PlaylistItem};
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

/// One entry of an M3U playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct M3uEntry {
    /// Path or URL, relative paths resolved against the playlist directory
    pub path: String,

    /// Title from the preceding #EXTINF line
    pub title: Option<String>,
}

/// Parse M3U text
///
/// # Arguments
/// * `text` - Playlist contents (plain or extended M3U)
/// * `base_dir` - Directory relative entries are resolved against
pub fn parse_m3u(text: &str, base_dir: Option<&Path>) -> Vec<M3uEntry> {
    let mut entries = Vec::new();
    let mut pending_title: Option<String> = None;

    for line in text.trim_start_matches('\u{feff}').lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(info) = line.strip_prefix("#EXTINF:") {
            pending_title = info
                .split_once(',')
                .map(|(_, title)| title.trim())
                .filter(|title| !title.is_empty())
                .map(str::to_string);
            continue;
        }
        if line.starts_with('#') {
            continue;
        }

        let path = match base_dir {
            Some(base) if !has_scheme(line) && Path::new(line).is_relative() => {
                base.join(line).to_string_lossy().into_owned()
            }
            _ => line.to_string(),
        };

        entries.push(M3uEntry {
            path,
            title: pending_title.take(),
        });
    }

    entries
}

/// Load an M3U file into a playlist snapshot
pub fn load_m3u<M: MetadataSource>(path: &Path, metadata: &M) -> Result<Playlist> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read playlist: {:?}", path))?;

    let mut playlist = Playlist::new();
    for entry in parse_m3u(&text, path.parent()) {
        let mut item = PlaylistItem::new(entry.path);
        if let Some(title) = entry.title {
            item = item.with_title(title);
        }
        playlist.push(metadata.enrich(item));
    }

    log::info!("Parsed {} entries from {:?}", playlist.len(), path);
    Ok(playlist)
}

/// Write a playlist as extended M3U
///
/// Entries whose display name differs from the one derived from their path
/// get an #EXTINF line carrying it.
pub fn write_m3u<W: Write>(playlist: &Playlist, mut writer: W) -> Result<()> {
    writeln!(writer, "#EXTM3U")?;
    for item in playlist.items() {
        if !item.has_derived_name() {
            writeln!(writer, "#EXTINF:-1,{}", item.display_name)?;
        }
        writeln!(writer, "{}", item.path)?;
    }
    writer.flush().context("Failed to write playlist")?;
    Ok(())
}
