//! Sequence rules: three picks, one winning order.
//!
//! - Picks equal to the winning order, in order: win
//! - Two picks share a variant and the third differs: loss
//! - Anything else: loss
//!
//! There is no "keep going" once the third pick is in.

use rustc_hash::FxHashSet;

use super::engine::{MatchRules, RoundContext, Verdict};
use super::result::{ReasonCode, RoundResult};
use crate::cards::{Catalogue, VariantId};
use crate::core::{RuleMode, SessionConfig, SELECTIONS_PER_ROUND};
use crate::error::CatalogueError;

/// Sequence-mode rules.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceRules {
    target: Vec<VariantId>,
}

impl SequenceRules {
    /// Rules with an explicit winning order.
    ///
    /// Every entry must name a catalogue variant.
    pub fn new(target: Vec<VariantId>, catalogue: &Catalogue) -> Result<Self, CatalogueError> {
        if target.len() != SELECTIONS_PER_ROUND {
            return Err(CatalogueError::SequenceLength {
                expected: SELECTIONS_PER_ROUND,
                actual: target.len(),
            });
        }
        if let Some(unknown) = target.iter().find(|id| !catalogue.contains(id)) {
            return Err(CatalogueError::UnknownVariant(unknown.clone()));
        }
        Ok(Self { target })
    }

    /// Rules whose winning order is the catalogue order.
    pub fn from_catalogue(catalogue: &Catalogue) -> Result<Self, CatalogueError> {
        let target: Vec<_> = catalogue.ids().into_iter().take(SELECTIONS_PER_ROUND).collect();
        Self::new(target, catalogue)
    }

    /// The winning order.
    #[must_use]
    pub fn target(&self) -> &[VariantId] {
        &self.target
    }

    /// Score three picked variants.
    #[must_use]
    pub fn score(&self, picked: &[VariantId]) -> RoundResult {
        if picked == self.target.as_slice() {
            return RoundResult::win(ReasonCode::PerfectSequence);
        }

        let distinct: FxHashSet<_> = picked.iter().collect();
        match distinct.len() {
            2 => RoundResult::loss(ReasonCode::TwoSameOneDifferent),
            1 => RoundResult::loss(ReasonCode::AllSame),
            _ => RoundResult::loss(ReasonCode::AllUnique),
        }
    }
}

impl MatchRules for SequenceRules {
    fn mode(&self) -> RuleMode {
        RuleMode::Sequence
    }

    fn evaluate(&self, ctx: &RoundContext<'_>) -> Verdict {
        if ctx.selection.len() < self.target.len() {
            return Verdict::Pending;
        }
        Verdict::Decided(self.score(&ctx.selection.variants(ctx.board)))
    }

    fn reveal_delay(&self, config: &SessionConfig) -> u32 {
        config.reveal_delay_ticks
    }
}
