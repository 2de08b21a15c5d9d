//! The 3x3 board and its generator.
//!
//! A `Board` is an ordered collection of cards, one per position. Cards
//! live in an `im::Vector` so handing a snapshot to the renderer is O(1).

mod generator;

pub use generator::BoardGenerator;

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, VariantId};

/// The cards for one round, indexed by position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cards: Vector<Card>,
}

impl Board {
    /// Build a board from cards already in position order.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True before a board has been generated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at a position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    /// Mutable card at a position.
    pub fn get_mut(&mut self, position: usize) -> Option<&mut Card> {
        self.cards.get_mut(position)
    }

    /// Iterate cards in position order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Cards not yet picked this round.
    pub fn unselected(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|c| !c.is_resolved())
    }

    /// Copies of each variant on the board.
    #[must_use]
    pub fn variant_counts(&self) -> FxHashMap<VariantId, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.variant_id.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Turn every card face down and clear round flags.
    pub fn clear_flags(&mut self) {
        for card in self.cards.iter_mut() {
            card.clear_flags();
        }
    }
}
