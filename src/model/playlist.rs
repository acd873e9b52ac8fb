use super::PlaylistItem;
use crate::error::PlaylistError;
use crate::sort::ReorderPlan;
use serde::{Deserialize, Serialize};

/// Relocation of a single playlist entry
///
/// Follows the host player's "insert before" semantics: the entry at `from`
/// takes the place of the entry currently at `to`, and `to == len` moves it
/// to the end. When `from < to` the entry therefore ends up at `to - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: usize,
    pub to: usize,
}

impl Move {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// Whether applying this move leaves the sequence unchanged
    pub fn is_noop(&self) -> bool {
        self.to == self.from || self.to == self.from + 1
    }

    /// Final index of the moved entry
    pub fn destination(&self) -> usize {
        if self.to > self.from {
            self.to - 1
        } else {
            self.to
        }
    }

    /// Index that the entry at `index` has after this move
    pub fn track(&self, index: usize) -> usize {
        let dest = self.destination();
        if index == self.from {
            dest
        } else if self.from < index && index <= dest {
            index - 1
        } else if dest <= index && index < self.from {
            index + 1
        } else {
            index
        }
    }

    /// Apply to an arbitrary sequence; indices must be in bounds
    pub(crate) fn apply_to<T>(&self, items: &mut Vec<T>) {
        if self.is_noop() {
            return;
        }
        let item = items.remove(self.from);
        items.insert(self.destination(), item);
    }
}

/// Ordered playlist snapshot with a current position
///
/// The current position is `Some` exactly when the playlist is non-empty.
/// Only serialized; snapshots are built through the constructors so the
/// position always stays in bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Playlist {
    items: Vec<PlaylistItem>,
    current_position: Option<usize>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a playlist positioned on its first item
    pub fn from_items(items: Vec<PlaylistItem>) -> Self {
        let current_position = if items.is_empty() { None } else { Some(0) };
        Self {
            items,
            current_position,
        }
    }

    /// Append an item, selecting it if the playlist was empty
    pub fn push(&mut self, item: PlaylistItem) {
        self.items.push(item);
        if self.current_position.is_none() {
            self.current_position = Some(0);
        }
    }

    pub fn items(&self) -> &[PlaylistItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current_position(&self) -> Option<usize> {
        self.current_position
    }

    /// Currently selected item
    pub fn current(&self) -> Option<&PlaylistItem> {
        self.current_position.and_then(|pos| self.items.get(pos))
    }

    pub fn set_current_position(&mut self, position: usize) -> Result<(), PlaylistError> {
        if position >= self.items.len() {
            return Err(PlaylistError::PositionOutOfBounds {
                position,
                len: self.items.len(),
            });
        }
        self.current_position = Some(position);
        Ok(())
    }

    /// Apply one move; the current position follows the selected item
    pub fn apply_move(&mut self, mv: Move) -> Result<(), PlaylistError> {
        let len = self.items.len();
        if mv.from >= len || mv.to > len {
            return Err(PlaylistError::MoveOutOfBounds {
                from: mv.from,
                to: mv.to,
                len,
            });
        }

        mv.apply_to(&mut self.items);
        self.current_position = self.current_position.map(|pos| mv.track(pos));
        Ok(())
    }

    /// Apply moves in order, stopping at the first invalid one
    pub fn apply_moves(&mut self, moves: &[Move]) -> Result<(), PlaylistError> {
        for mv in moves {
            self.apply_move(*mv)?;
        }
        Ok(())
    }

    /// Apply a reorder plan, resetting to the first item when requested
    pub fn apply_plan(&mut self, plan: &ReorderPlan) -> Result<(), PlaylistError> {
        self.apply_moves(&plan.moves)?;
        if plan.reset_position && !self.items.is_empty() {
            self.current_position = Some(0);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playlist(names: &[&str]) -> Playlist {
        Playlist::from_items(names.iter().map(|n| PlaylistItem::new(*n)).collect())
    }

    fn names(playlist: &Playlist) -> Vec<&str> {
        playlist
            .items()
            .iter()
            .map(|i| i.display_name.as_str())
            .collect()
    }

    #[test]
    fn test_empty_playlist_has_no_position() {
        let pl = Playlist::new();
        assert!(pl.is_empty());
        assert_eq!(pl.current_position(), None);
        assert!(pl.current().is_none());
    }

    #[test]
    fn test_push_selects_first_item() {
        let mut pl = Playlist::new();
        pl.push(PlaylistItem::new("a"));
        pl.push(PlaylistItem::new("b"));
        assert_eq!(pl.len(), 2);
        assert_eq!(pl.current_position(), Some(0));
    }

    #[test]
    fn test_move_forward_inserts_before_target() {
        let mut pl = playlist(&["a", "b", "c", "d"]);
        pl.apply_move(Move::new(0, 3)).unwrap();
        assert_eq!(names(&pl), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_move_to_end() {
        let mut pl = playlist(&["a", "b", "c"]);
        pl.apply_move(Move::new(0, 3)).unwrap();
        assert_eq!(names(&pl), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_move_backward() {
        let mut pl = playlist(&["a", "b", "c", "d"]);
        pl.apply_move(Move::new(3, 1)).unwrap();
        assert_eq!(names(&pl), vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn test_noop_moves() {
        let mut pl = playlist(&["a", "b", "c"]);
        assert!(Move::new(1, 1).is_noop());
        assert!(Move::new(1, 2).is_noop());
        pl.apply_moves(&[Move::new(1, 1), Move::new(1, 2)]).unwrap();
        assert_eq!(names(&pl), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_move_out_of_bounds() {
        let mut pl = playlist(&["a", "b"]);
        assert_eq!(
            pl.apply_move(Move::new(2, 0)),
            Err(PlaylistError::MoveOutOfBounds { from: 2, to: 0, len: 2 })
        );
        assert_eq!(
            pl.apply_move(Move::new(0, 3)),
            Err(PlaylistError::MoveOutOfBounds { from: 0, to: 3, len: 2 })
        );
        assert_eq!(names(&pl), vec!["a", "b"]);
    }

    #[test]
    fn test_current_position_follows_selected_item() {
        let mut pl = playlist(&["a", "b", "c", "d"]);
        pl.set_current_position(2).unwrap();

        pl.apply_move(Move::new(0, 4)).unwrap();
        assert_eq!(pl.current().unwrap().display_name, "c");

        pl.apply_move(Move::new(1, 0)).unwrap();
        assert_eq!(pl.current().unwrap().display_name, "c");
        assert_eq!(pl.current_position(), Some(0));
    }

    #[test]
    fn test_track_matches_applied_move() {
        let moves = [Move::new(0, 3), Move::new(3, 0), Move::new(1, 4), Move::new(2, 2)];
        for mv in moves {
            let mut indices: Vec<usize> = (0..4).collect();
            mv.apply_to(&mut indices);
            for original in 0..4 {
                assert_eq!(indices[mv.track(original)], original, "{:?}", mv);
            }
        }
    }

    #[test]
    fn test_set_current_position_out_of_bounds() {
        let mut pl = playlist(&["a"]);
        assert_eq!(
            pl.set_current_position(1),
            Err(PlaylistError::PositionOutOfBounds { position: 1, len: 1 })
        );
    }

    #[test]
    fn test_serialized_position_stays_in_bounds() {
        let mut pl = playlist(&["a", "b"]);
        pl.set_current_position(1).unwrap();

        let json = serde_json::to_value(&pl).unwrap();
        assert_eq!(json["current_position"], 1);
        assert_eq!(json["items"].as_array().unwrap().len(), 2);

        let empty = serde_json::to_value(Playlist::new()).unwrap();
        assert!(empty["current_position"].is_null());
    }

    #[test]
    fn test_apply_plan_resets_position() {
        let mut pl = playlist(&["a", "b", "c"]);
        pl.set_current_position(2).unwrap();

        let plan = ReorderPlan {
            moves: vec![Move::new(2, 0)],
            reset_position: true,
        };
        pl.apply_plan(&plan).unwrap();

        assert_eq!(names(&pl), vec!["c", "a", "b"]);
        assert_eq!(pl.current_position(), Some(0));
    }

    #[test]
    fn test_apply_plan_keeps_position_without_reset() {
        let mut pl = playlist(&["a", "b", "c"]);
        pl.set_current_position(1).unwrap();

        let plan = ReorderPlan {
            moves: vec![Move::new(2, 0)],
            reset_position: false,
        };
        pl.apply_plan(&plan).unwrap();

        assert_eq!(pl.current().unwrap().display_name, "b");
        assert_eq!(pl.current_position(), Some(2));
    }
}
