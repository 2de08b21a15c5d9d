//! Match rules trait and strategy selection.
//!
//! Rules define:
//! - Whether a round is decided yet
//! - The result once it is
//! - How long the result stays hidden before the shell sees it

use crate::board::Board;
use crate::cards::Catalogue;
use crate::core::{RuleMode, SessionConfig};
use crate::error::CatalogueError;
use crate::selection::{CallerQueue, Selection};

use super::result::RoundResult;
use super::sequence::SequenceRules;
use super::timed_caller::TimedCallerRules;

/// Everything the rules may look at.
#[derive(Clone, Copy, Debug)]
pub struct RoundContext<'a> {
    /// Current board.
    pub board: &'a Board,
    /// Picks so far, in order.
    pub selection: &'a Selection,
    /// Caller targets (empty in sequence mode).
    pub callers: &'a CallerQueue,
    /// The caller countdown expired before the current target was matched.
    pub timed_out: bool,
}

/// Rules decision for the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The round continues.
    Pending,
    /// The round is over.
    Decided(RoundResult),
}

impl Verdict {
    /// The result if decided.
    #[must_use]
    pub fn result(self) -> Option<RoundResult> {
        match self {
            Verdict::Pending => None,
            Verdict::Decided(result) => Some(result),
        }
    }
}

/// Match rules trait.
///
/// ## Implementation Notes
///
/// - `evaluate` must be a pure function of the context
/// - `evaluate` returns `Pending` until the round is decided
/// - `reveal_delay` is a presentation concern; the result is computed first
/// - `allows_reveal` false means cards stay face down until picked
pub trait MatchRules: std::fmt::Debug {
    /// Which mode these rules implement.
    fn mode(&self) -> RuleMode;

    /// Decide the round, or report that it continues.
    fn evaluate(&self, ctx: &RoundContext<'_>) -> Verdict;

    /// Ticks between computing a result and revealing it.
    fn reveal_delay(&self, config: &SessionConfig) -> u32;

    /// Whether rounds run against the caller countdown.
    fn uses_timer(&self) -> bool {
        self.mode() == RuleMode::TimedCaller
    }

    /// Whether a card may be flipped without picking it.
    fn allows_reveal(&self) -> bool {
        true
    }
}

/// Build the rules for a configuration, checking the catalogue suits them.
pub fn rules_for(
    config: &SessionConfig,
    catalogue: &Catalogue,
) -> Result<Box<dyn MatchRules>, CatalogueError> {
    catalogue.check_mode(config.rule_mode)?;

    match config.rule_mode {
        RuleMode::Sequence => {
            let rules = match &config.winning_sequence {
                Some(sequence) => SequenceRules::new(sequence.clone(), catalogue)?,
                None => SequenceRules::from_catalogue(catalogue)?,
            };
            Ok(Box::new(rules))
        }
        RuleMode::TimedCaller => Ok(Box::new(TimedCallerRules::new(config.selections_per_round))),
    }
}
