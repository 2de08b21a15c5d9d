//! Ordered record of the cards picked this round.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Board;
use crate::cards::VariantId;
use crate::core::SELECTIONS_PER_ROUND;

/// Positions picked this round, in pick order.
///
/// Append-only within a round, no position appears twice.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<usize>", into = "Vec<usize>")]
pub struct Selection {
    positions: SmallVec<[usize; SELECTIONS_PER_ROUND]>,
}

impl Selection {
    /// Build a selection from positions in pick order.
    ///
    /// Later duplicates are dropped, and so is anything past the
    /// round's three picks.
    #[must_use]
    pub fn from_positions(positions: &[usize]) -> Self {
        let mut selection = Self::default();
        for &position in positions {
            if selection.len() == SELECTIONS_PER_ROUND {
                break;
            }
            if !selection.contains(position) {
                selection.positions.push(position);
            }
        }
        selection
    }

    /// Picked positions in order.
    #[must_use]
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Number of picks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True before the first pick.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Check if a position was picked.
    #[must_use]
    pub fn contains(&self, position: usize) -> bool {
        self.positions.contains(&position)
    }

    /// Most recent pick.
    #[must_use]
    pub fn last(&self) -> Option<usize> {
        self.positions.last().copied()
    }

    /// Variants of the picked cards, in pick order.
    ///
    /// Positions missing from `board` are skipped.
    #[must_use]
    pub fn variants(&self, board: &Board) -> Vec<VariantId> {
        self.positions
            .iter()
            .filter_map(|&p| board.get(p))
            .map(|c| c.variant_id.clone())
            .collect()
    }
}

impl From<Vec<usize>> for Selection {
    fn from(positions: Vec<usize>) -> Self {
        Self::from_positions(&positions)
    }
}

impl From<Selection> for Vec<usize> {
    fn from(selection: Selection) -> Self {
        selection.positions.into_vec()
    }
}

/// Outcome of a pick attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectOutcome {
    /// Appended to the selection.
    Accepted,
    /// Position already picked this round.
    AlreadySelected,
    /// The round already has all its picks.
    RoundFull,
    /// No card at that position.
    UnknownPosition,
}

impl SelectOutcome {
    /// True for `Accepted`.
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, SelectOutcome::Accepted)
    }
}

/// Records picks and marks picked cards on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionTracker {
    selection: Selection,
    capacity: usize,
}

impl Default for SelectionTracker {
    fn default() -> Self {
        Self::new(SELECTIONS_PER_ROUND)
    }
}

impl SelectionTracker {
    /// Create a tracker that holds up to `capacity` picks.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            selection: Selection::default(),
            capacity,
        }
    }

    /// Try to pick the card at `position`.
    ///
    /// Rejections leave both the selection and the board untouched.
    pub fn select(&mut self, board: &mut Board, position: usize) -> SelectOutcome {
        if self.selection.contains(position) {
            return SelectOutcome::AlreadySelected;
        }
        if self.is_full() {
            return SelectOutcome::RoundFull;
        }
        let Some(card) = board.get_mut(position) else {
            return SelectOutcome::UnknownPosition;
        };

        card.selected = true;
        self.selection.positions.push(position);
        SelectOutcome::Accepted
    }

    /// Clear the selection and unmark every card on the board.
    pub fn reset(&mut self, board: &mut Board) {
        self.selection.positions.clear();
        for position in 0..board.len() {
            if let Some(card) = board.get_mut(position) {
                card.selected = false;
            }
        }
    }

    /// Current selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Number of picks so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selection.len()
    }

    /// True before the first pick.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    /// True once every pick for the round is made.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.selection.len() >= self.capacity
    }

    /// Picks per round.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn board() -> Board {
        let ids = ["p1", "p2", "p3", "p1", "p2", "p3", "p1", "p2", "p3"];
        Board::from_cards(
            ids.iter()
                .enumerate()
                .map(|(pos, id)| Card::new(VariantId::new(*id), pos)),
        )
    }

    #[test]
    fn test_accepts_and_marks() {
        let mut board = board();
        let mut tracker = SelectionTracker::default();

        assert_eq!(tracker.select(&mut board, 4), SelectOutcome::Accepted);
        assert!(board.get(4).unwrap().selected);
        assert_eq!(tracker.selection().positions(), &[4]);
        assert_eq!(tracker.selection().last(), Some(4));
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut board = board();
        let mut tracker = SelectionTracker::default();

        tracker.select(&mut board, 2);
        assert_eq!(tracker.select(&mut board, 2), SelectOutcome::AlreadySelected);
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_round_full() {
        let mut board = board();
        let mut tracker = SelectionTracker::default();

        for pos in [0, 1, 2] {
            assert!(tracker.select(&mut board, pos).is_accepted());
        }
        assert!(tracker.is_full());
        assert_eq!(tracker.select(&mut board, 5), SelectOutcome::RoundFull);
        assert!(!board.get(5).unwrap().selected);
        // Duplicate check wins over the capacity check.
        assert_eq!(tracker.select(&mut board, 0), SelectOutcome::AlreadySelected);
    }

    #[test]
    fn test_unknown_position() {
        let mut board = board();
        let mut tracker = SelectionTracker::default();
        assert_eq!(tracker.select(&mut board, 9), SelectOutcome::UnknownPosition);
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_reset_unmarks() {
        let mut board = board();
        let mut tracker = SelectionTracker::default();
        tracker.select(&mut board, 0);
        tracker.select(&mut board, 8);

        tracker.reset(&mut board);
        assert!(tracker.is_empty());
        assert!(board.iter().all(|c| !c.selected));
    }

    #[test]
    fn test_variants_in_pick_order() {
        let mut board = board();
        let mut tracker = SelectionTracker::default();
        tracker.select(&mut board, 2);
        tracker.select(&mut board, 0);
        assert_eq!(
            tracker.selection().variants(&board),
            vec![VariantId::new("p3"), VariantId::new("p1")]
        );
    }

    #[test]
    fn test_from_positions_dedups() {
        let selection = Selection::from_positions(&[3, 3, 5]);
        assert_eq!(selection.positions(), &[3, 5]);
    }

    #[test]
    fn test_from_positions_caps_at_three() {
        let selection = Selection::from_positions(&[1, 5, 1, 7, 2, 4]);
        assert_eq!(selection.positions(), &[1, 5, 7]);
    }

    #[test]
    fn test_json_keeps_pick_rules() {
        let selection: Selection = serde_json::from_str("[4, 4, 1, 7, 2]").unwrap();
        assert_eq!(selection.positions(), &[4, 1, 7]);

        let json = serde_json::to_string(&selection).unwrap();
        assert_eq!(json, "[4,1,7]");
    }
}
