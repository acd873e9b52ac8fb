//! Per-item metadata lookups

use crate::model::{local_path, PlaylistItem};
use chrono::{DateTime, Utc};
use std::fs;

/// Ordering metadata for one playlist entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemMetadata {
    pub modified_time: Option<DateTime<Utc>>,
    pub size_bytes: Option<u64>,
}

/// Metadata provider - allows swapping the filesystem for fixed data
pub trait MetadataSource {
    /// Look up metadata for a path or URL; missing data is `None`, never an error
    fn lookup(&self, path: &str) -> ItemMetadata;

    /// Fill in the metadata of `item`
    fn enrich(&self, mut item: PlaylistItem) -> PlaylistItem {
        let metadata = self.lookup(&item.path);
        item.modified_time = metadata.modified_time;
        item.size_bytes = metadata.size_bytes;
        item
    }
}

/// Reads modification time and size from the local filesystem
pub struct FsMetadata;

impl MetadataSource for FsMetadata {
    fn lookup(&self, path: &str) -> ItemMetadata {
        let Some(local) = local_path(path) else {
            log::debug!("No metadata for remote item: {}", path);
            return ItemMetadata::default();
        };

        match fs::metadata(&local) {
            Ok(meta) => ItemMetadata {
                modified_time: meta.modified().ok().map(DateTime::<Utc>::from),
                size_bytes: meta.is_file().then(|| meta.len()),
            },
            Err(e) => {
                log::debug!("Could not read metadata for {:?}: {}", local, e);
                ItemMetadata::default()
            }
        }
    }
}

/// Provides no metadata; name ordering still works
pub struct NoMetadata;

impl MetadataSource for NoMetadata {
    fn lookup(&self, _path: &str) -> ItemMetadata {
        ItemMetadata::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_fs_metadata_for_local_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("clip.mp4");
        fs::write(&file, b"0123456789").unwrap();

        let meta = FsMetadata.lookup(&file.to_string_lossy());
        assert_eq!(meta.size_bytes, Some(10));
        assert!(meta.modified_time.is_some());
    }

    #[test]
    fn test_fs_metadata_for_file_uri() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("with space.mp3");
        fs::write(&file, b"abc").unwrap();

        let uri = format!(
            "file://{}",
            file.to_string_lossy().replace(' ', "%20")
        );
        assert_eq!(FsMetadata.lookup(&uri).size_bytes, Some(3));
    }

    #[test]
    fn test_fs_metadata_for_uppercase_file_uri() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("x.mp3");
        fs::write(&file, b"abc").unwrap();

        let uri = format!("FILE://{}", file.to_string_lossy());
        let meta = FsMetadata.lookup(&uri);
        assert_eq!(meta.size_bytes, Some(3));
        assert!(meta.modified_time.is_some());
    }

    #[test]
    fn test_fs_metadata_missing_file_and_url() {
        assert_eq!(
            FsMetadata.lookup("/definitely/not/here.mkv"),
            ItemMetadata::default()
        );
        assert_eq!(
            FsMetadata.lookup("https://example.com/video"),
            ItemMetadata::default()
        );
    }

    #[test]
    fn test_enrich_fills_item() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.flac");
        fs::write(&file, vec![0u8; 42]).unwrap();

        let item = FsMetadata.enrich(PlaylistItem::new(file.to_string_lossy()));
        assert_eq!(item.size_bytes, Some(42));
        assert_eq!(item.display_name, "a.flac");
    }
}
