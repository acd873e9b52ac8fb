use super::natural::natural_cmp;
use crate::model::PlaylistItem;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Ordering applied to a playlist
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderingKey {
    #[default]
    NameAsc,
    NameDesc,
    DateAsc,
    DateDesc,
    SizeAsc,
    SizeDesc,
}

impl OrderingKey {
    /// All keys, in definition order
    pub const ALL: [OrderingKey; 6] = [
        OrderingKey::NameAsc,
        OrderingKey::NameDesc,
        OrderingKey::DateAsc,
        OrderingKey::DateDesc,
        OrderingKey::SizeAsc,
        OrderingKey::SizeDesc,
    ];

    /// Canonical hyphenated name
    pub fn name(&self) -> &'static str {
        match self {
            OrderingKey::NameAsc => "name-asc",
            OrderingKey::NameDesc => "name-desc",
            OrderingKey::DateAsc => "date-asc",
            OrderingKey::DateDesc => "date-desc",
            OrderingKey::SizeAsc => "size-asc",
            OrderingKey::SizeDesc => "size-desc",
        }
    }

    /// Parse a key name, falling back to the default for anything unknown
    pub fn parse(input: &str) -> Self {
        let normalized = input.trim().to_ascii_lowercase().replace('_', "-");

        if let Some(key) = Self::ALL.iter().find(|k| k.name() == normalized) {
            return *key;
        }

        if !normalized.is_empty() {
            log::warn!(
                "Unknown ordering key {:?}, falling back to {}",
                input,
                Self::default()
            );
        }
        Self::default()
    }

    pub fn is_descending(&self) -> bool {
        matches!(
            self,
            OrderingKey::NameDesc | OrderingKey::DateDesc | OrderingKey::SizeDesc
        )
    }

    /// Compare two items under this key
    pub fn compare(&self, a: &PlaylistItem, b: &PlaylistItem) -> Ordering {
        let ascending = match self {
            OrderingKey::NameAsc | OrderingKey::NameDesc => {
                natural_cmp(&a.display_name, &b.display_name)
            }
            OrderingKey::DateAsc | OrderingKey::DateDesc => {
                a.modified_or_epoch().cmp(&b.modified_or_epoch())
            }
            OrderingKey::SizeAsc | OrderingKey::SizeDesc => a.size_or_zero().cmp(&b.size_or_zero()),
        };

        self.orient(ascending)
    }

    /// Apply this key's direction to an ascending comparison
    pub fn orient(&self, ascending: Ordering) -> Ordering {
        if self.is_descending() {
            ascending.reverse()
        } else {
            ascending
        }
    }

    pub fn is_by_name(&self) -> bool {
        matches!(self, OrderingKey::NameAsc | OrderingKey::NameDesc)
    }
}

impl fmt::Display for OrderingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for OrderingKey {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}
