use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single playlist entry with the metadata used for ordering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistItem {
    /// Local file path or URL
    pub path: String,

    /// Name used for name-based ordering
    pub display_name: String,

    /// Last modification time (local files only)
    pub modified_time: Option<DateTime<Utc>>,

    /// File size in bytes (local files only)
    pub size_bytes: Option<u64>,
}

impl PlaylistItem {
    /// Create an item whose display name is derived from its path
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let display_name = derive_display_name(&path);
        Self {
            path,
            display_name,
            modified_time: None,
            size_bytes: None,
        }
    }

    /// Override the display name (e.g. from an #EXTINF title)
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.display_name = title.into();
        self
    }

    pub fn with_modified_time(mut self, modified: DateTime<Utc>) -> Self {
        self.modified_time = Some(modified);
        self
    }

    pub fn with_size(mut self, size_bytes: u64) -> Self {
        self.size_bytes = Some(size_bytes);
        self
    }

    /// Whether this item is addressed by a non-file URL
    pub fn is_remote(&self) -> bool {
        is_remote(&self.path)
    }

    /// Whether the display name is the one derived from the path
    pub fn has_derived_name(&self) -> bool {
        self.display_name == derive_display_name(&self.path)
    }

    /// Modification time, with missing values treated as the Unix epoch
    pub fn modified_or_epoch(&self) -> DateTime<Utc> {
        self.modified_time.unwrap_or_default()
    }

    /// Size, with missing values treated as zero
    pub fn size_or_zero(&self) -> u64 {
        self.size_bytes.unwrap_or(0)
    }
}

/// Extract the URI scheme of `path`, if it has one
fn uri_scheme(path: &str) -> Option<&str> {
    let (scheme, _) = path.split_once("://")?;
    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some(scheme)
}

/// Whether `path` carries a URI scheme (`file://` included)
pub fn has_scheme(path: &str) -> bool {
    uri_scheme(path).is_some()
}

/// Whether `path` is a URL other than `file://`
pub fn is_remote(path: &str) -> bool {
    uri_scheme(path).is_some_and(|scheme| !scheme.eq_ignore_ascii_case("file"))
}

/// Resolve `path` to a local filesystem path
///
/// `file://` URIs are URL-decoded; remote URLs have no local path.
pub fn local_path(path: &str) -> Option<PathBuf> {
    match uri_scheme(path) {
        Some(scheme) if scheme.eq_ignore_ascii_case("file") => {
            let rest = &path[scheme.len() + "://".len()..];
            let decoded = urlencoding::decode(rest).ok()?;
            Some(PathBuf::from(decoded.into_owned()))
        }
        Some(_) => None,
        None => Some(PathBuf::from(path)),
    }
}

fn derive_display_name(path: &str) -> String {
    let trimmed = path.trim_end_matches(['/', '\\']);

    let name = match local_path(trimmed) {
        Some(local) => local
            .file_name()
            .map(|name| name.to_string_lossy().into_owned()),
        None => trimmed
            .rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty() && !segment.ends_with(':'))
            .map(str::to_string),
    };

    name.unwrap_or_else(|| path.to_string())
}
