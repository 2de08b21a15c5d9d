//! Timed-caller rules: match each called target before its countdown ends.
//!
//! Pick `i` must show the variant of caller target `i`. A wrong pick or an
//! expired countdown loses at once. After every target is matched the
//! matched cards must also be pairwise distinct and share one board row.
//! Cards cannot be flipped ahead of a pick, so every match is from memory
//! of the shuffled board rather than from a face-up grid.

use rustc_hash::FxHashSet;

use super::engine::{MatchRules, RoundContext, Verdict};
use super::result::{ReasonCode, RoundResult};
use crate::core::{RuleMode, SessionConfig};

/// Timed-caller-mode rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimedCallerRules {
    targets: usize,
}

impl Default for TimedCallerRules {
    fn default() -> Self {
        Self::new(crate::core::SELECTIONS_PER_ROUND)
    }
}

impl TimedCallerRules {
    /// Rules requiring `targets` consecutive matches.
    #[must_use]
    pub fn new(targets: usize) -> Self {
        Self { targets }
    }

    fn picks_match_calls(ctx: &RoundContext<'_>) -> bool {
        let history = ctx.callers.history();
        ctx.selection.positions().iter().enumerate().all(|(i, &pos)| {
            match (ctx.board.get(pos), history.get(i)) {
                (Some(card), Some(call)) => card.variant_id == call.variant_id,
                _ => false,
            }
        })
    }

    fn final_check(ctx: &RoundContext<'_>) -> RoundResult {
        let cards: Vec<_> = ctx
            .selection
            .positions()
            .iter()
            .filter_map(|&p| ctx.board.get(p))
            .collect();

        let distinct: FxHashSet<_> = cards.iter().map(|c| &c.variant_id).collect();
        if distinct.len() != cards.len() {
            return RoundResult::loss(ReasonCode::VariantsNotDistinct);
        }

        let rows: FxHashSet<_> = cards.iter().map(|c| c.row).collect();
        if rows.len() != 1 {
            return RoundResult::loss(ReasonCode::NotSameRow);
        }

        RoundResult::win(ReasonCode::AllTargetsMatched)
    }
}

impl MatchRules for TimedCallerRules {
    fn mode(&self) -> RuleMode {
        RuleMode::TimedCaller
    }

    fn evaluate(&self, ctx: &RoundContext<'_>) -> Verdict {
        if ctx.timed_out {
            return Verdict::Decided(RoundResult::loss(ReasonCode::TimeRanOut));
        }
        if !Self::picks_match_calls(ctx) {
            return Verdict::Decided(RoundResult::loss(ReasonCode::WrongCard));
        }
        if ctx.selection.len() < self.targets {
            return match ctx.callers.current() {
                Some(_) => Verdict::Pending,
                None => Verdict::Decided(RoundResult::loss(ReasonCode::NoCardsAvailable)),
            };
        }
        Verdict::Decided(Self::final_check(ctx))
    }

    fn reveal_delay(&self, _config: &SessionConfig) -> u32 {
        0
    }

    // Targets must be found face down.
    fn allows_reveal(&self) -> bool {
        false
    }
}
