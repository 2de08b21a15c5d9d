//! Board generation with a per-variant cap.
//!
//! Each position is filled in index order by drawing a variant uniformly
//! from the catalogue. A draw that would push its variant past the cap is
//! redrawn, up to `placement_attempts` draws per position. When the budget
//! runs out the last draw is accepted anyway, so a catalogue whose
//! `variants * cap < cards` still produces a full board.

use tracing::{debug, warn};

use super::Board;
use crate::cards::{Card, Catalogue};
use crate::core::{RandomSource, SessionConfig, BOARD_SIZE, MAX_PER_VARIANT, PLACEMENT_ATTEMPTS};

/// Builds fresh boards from a catalogue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardGenerator {
    cards_per_board: usize,
    max_per_variant: usize,
    placement_attempts: u32,
}

impl Default for BoardGenerator {
    fn default() -> Self {
        Self {
            cards_per_board: BOARD_SIZE,
            max_per_variant: MAX_PER_VARIANT,
            placement_attempts: PLACEMENT_ATTEMPTS,
        }
    }
}

impl BoardGenerator {
    /// Create a generator with explicit limits.
    #[must_use]
    pub fn new(cards_per_board: usize, max_per_variant: usize, placement_attempts: u32) -> Self {
        Self {
            cards_per_board,
            max_per_variant,
            placement_attempts: placement_attempts.max(1),
        }
    }

    /// Create a generator from session configuration.
    #[must_use]
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(
            config.cards_per_board,
            config.max_per_variant,
            config.placement_attempts,
        )
    }

    /// Cap on copies of one variant.
    #[must_use]
    pub fn max_per_variant(&self) -> usize {
        self.max_per_variant
    }

    /// Generate a new board.
    ///
    /// Never fails: the retry budget bounds the work per position.
    pub fn generate<R: RandomSource>(&self, catalogue: &Catalogue, rng: &mut R) -> Board {
        let mut counts = vec![0usize; catalogue.len()];
        let mut cards = Vec::with_capacity(self.cards_per_board);

        for position in 0..self.cards_per_board {
            let mut index = rng.next_index(catalogue.len());
            let mut attempts = 1;
            while counts[index] >= self.max_per_variant && attempts < self.placement_attempts {
                index = rng.next_index(catalogue.len());
                attempts += 1;
            }

            if counts[index] >= self.max_per_variant {
                warn!(
                    position,
                    attempts,
                    cap = self.max_per_variant,
                    "placement budget exhausted, accepting over-cap draw"
                );
            }
            counts[index] += 1;

            // `index` came from `next_index(len)`, so the lookup cannot miss.
            if let Some(variant) = catalogue.get_index(index) {
                cards.push(Card::new(variant.id.clone(), position));
            }
        }

        debug!(cards = cards.len(), "generated board");
        Board::from_cards(cards)
    }
}
