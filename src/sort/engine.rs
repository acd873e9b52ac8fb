//! Reordering engine

use super::natural::{natural_cmp_keyed, natural_key};
use super::OrderingKey;
use crate::model::{Move, PlaylistItem};
use serde::{Deserialize, Serialize};

/// Moves realizing a reordering, plus the position-reset request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderPlan {
    /// Moves to apply in order
    pub moves: Vec<Move>,

    /// Whether the owner should select the first item afterwards
    pub reset_position: bool,
}

impl ReorderPlan {
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// Target order of `items` under `key`
///
/// Entry `i` of the result is the original index of the item that belongs
/// at position `i`. The sort is stable, so equal keys keep their relative
/// order. Natural-order keys are computed once per item.
pub fn sorted_order(items: &[PlaylistItem], key: OrderingKey) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len()).collect();

    if key.is_by_name() {
        let names: Vec<String> = items
            .iter()
            .map(|item| natural_key(&item.display_name))
            .collect();
        order.sort_by(|&a, &b| {
            key.orient(natural_cmp_keyed(
                &names[a],
                &items[a].display_name,
                &names[b],
                &items[b].display_name,
            ))
        });
    } else {
        order.sort_by(|&a, &b| key.compare(&items[a], &items[b]));
    }

    order
}

/// Realize a target permutation as a sequence of moves
///
/// Each misplaced position `i` is fixed by swapping its occupant with the
/// target entry at `j > i`: moving `i` in front of `j + 1` drops it at `j`
/// and shifts the target to `j - 1`, which is then moved in front of `i`.
/// Entries between the two stay where they are. No-op moves are not
/// emitted.
pub fn realize(target: &[usize]) -> Vec<Move> {
    let mut current: Vec<usize> = (0..target.len()).collect();
    let mut moves = Vec::new();

    for i in 0..target.len() {
        while current[i] != target[i] {
            let Some(j) = current[i + 1..]
                .iter()
                .position(|&idx| idx == target[i])
                .map(|offset| i + 1 + offset)
            else {
                log::warn!("Target order is not a permutation at position {}", i);
                return moves;
            };

            for mv in [Move::new(i, j + 1), Move::new(j - 1, i)] {
                if mv.is_noop() {
                    continue;
                }
                mv.apply_to(&mut current);
                moves.push(mv);
            }
        }
    }

    moves
}

/// Compute the moves that sort `items` by `key`
///
/// Playlists with fewer than two items produce no moves. The engine never
/// touches the current position itself; `reset_position` is only carried on
/// the plan for the owner of the playlist to honour.
pub fn reorder(items: &[PlaylistItem], key: OrderingKey, reset_position: bool) -> ReorderPlan {
    let mut plan = ReorderPlan {
        moves: Vec::new(),
        reset_position,
    };

    if items.len() < 2 {
        log::debug!("Nothing to sort ({} items)", items.len());
        return plan;
    }

    let target = sorted_order(items, key);
    plan.moves = realize(&target);

    log::debug!(
        "Sorted {} items by {}: {} moves",
        items.len(),
        key,
        plan.moves.len()
    );
    plan
}
