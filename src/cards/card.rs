//! Card instances - runtime card state on a board.
//!
//! `Card` represents one board position for one round. It tracks the
//! face-up, picked, and matched flags that the shell renders.

use serde::{Deserialize, Serialize};

use super::variant::VariantId;
use crate::core::BOARD_COLUMNS;

/// A card on the board.
///
/// Created by the board generator, mutated only by the session in
/// response to player actions, discarded on reset.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Variant shown on the card face.
    pub variant_id: VariantId,

    /// Board position, `0..9`.
    pub position: usize,

    /// Grid row, `position / 3`.
    pub row: usize,

    /// Grid column, `position % 3`.
    pub col: usize,

    /// Face up.
    pub revealed: bool,

    /// Picked by the player this round.
    pub selected: bool,

    /// Correctly matched against a caller target.
    pub matched: bool,
}

impl Card {
    /// Create a face-down card at `position`.
    #[must_use]
    pub fn new(variant_id: VariantId, position: usize) -> Self {
        Self {
            variant_id,
            position,
            row: position / BOARD_COLUMNS,
            col: position % BOARD_COLUMNS,
            revealed: false,
            selected: false,
            matched: false,
        }
    }

    /// Picked or matched cards take no further actions.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.selected || self.matched
    }

    /// Turn the card face down and clear round flags.
    pub fn clear_flags(&mut self) {
        self.revealed = false;
        self.selected = false;
        self.matched = false;
    }
}
