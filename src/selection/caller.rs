//! Caller targets for timed-caller mode.
//!
//! Targets are drawn lazily, one at a time, from cards nobody has picked
//! yet. The queue keeps every target drawn this round so the shell can show
//! the call history.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Board;
use crate::cards::VariantId;
use crate::core::{RandomSource, SELECTIONS_PER_ROUND};

/// One called target.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallerEntry {
    /// Variant the player must find.
    pub variant_id: VariantId,
    /// Board position the target was drawn from.
    pub source_position: usize,
}

/// Ordered targets for one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerQueue {
    entries: Vector<CallerEntry>,
    current_index: usize,
    max_targets: usize,
}

impl Default for CallerQueue {
    fn default() -> Self {
        Self::new(SELECTIONS_PER_ROUND)
    }
}

impl CallerQueue {
    /// Create an empty queue that calls at most `max_targets` targets.
    #[must_use]
    pub fn new(max_targets: usize) -> Self {
        Self {
            entries: Vector::new(),
            current_index: 0,
            max_targets,
        }
    }

    /// Draw the next target from the unpicked cards on `board`.
    ///
    /// Returns `None` when every target has been called or no unpicked
    /// card is left.
    pub fn draw_next<R: RandomSource>(&mut self, board: &Board, rng: &mut R) -> Option<&CallerEntry> {
        if self.entries.len() >= self.max_targets {
            return None;
        }

        let available: Vec<_> = board.unselected().collect();
        let card = rng.choose(&available)?;
        let entry = CallerEntry {
            variant_id: card.variant_id.clone(),
            source_position: card.position,
        };
        debug!(variant = %entry.variant_id, position = entry.source_position, "called target");

        self.entries.push_back(entry);
        self.entries.back()
    }

    /// Target the player is currently matching.
    #[must_use]
    pub fn current(&self) -> Option<&CallerEntry> {
        self.entries.get(self.current_index)
    }

    /// Index of the current target (the number of targets matched so far).
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Move past the current target after a correct match.
    pub fn advance(&mut self) {
        self.current_index += 1;
    }

    /// True once every target has been matched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current_index >= self.max_targets
    }

    /// Every target drawn this round, in draw order.
    #[must_use]
    pub fn history(&self) -> &Vector<CallerEntry> {
        &self.entries
    }

    /// Targets per round.
    #[must_use]
    pub fn max_targets(&self) -> usize {
        self.max_targets
    }

    /// Forget every target.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.current_index = 0;
    }
}
