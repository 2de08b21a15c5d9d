//! # promo-match
//!
//! Session engine for a promotional 3x3 card-matching mini-game.
//!
//! ## Design Principles
//!
//! 1. **One Owner**: `MatchSession` is the only thing that mutates a round.
//!    The shell sends inputs and renders `SessionView` snapshots.
//!
//! 2. **Rules as Strategies**: Sequence and timed-caller play are two
//!    `MatchRules` implementations selected by `RuleMode`.
//!
//! 3. **Discrete Time**: The shell calls `tick()`; the engine never reads a
//!    clock and never blocks. Everything scheduled is cancellable and
//!    tagged with a `Generation` so it cannot outlive a reset.
//!
//! 4. **Injectable Randomness**: Board generation and caller draws go
//!    through `RandomSource`, seeded `GameRng` by default.
//!
//! ## Modules
//!
//! - `core`: RNG and configuration
//! - `cards`: Variants, catalogue, board cards
//! - `board`: The board and its generator
//! - `timer`: Countdown and deferred reveal
//! - `selection`: Pick tracking and caller targets
//! - `rules`: Match rules and round results
//! - `session`: The state machine
//! - `error`: Setup errors

pub mod board;
pub mod cards;
pub mod core;
pub mod error;
pub mod rules;
pub mod selection;
pub mod session;
pub mod timer;

// Re-export commonly used types
pub use crate::core::{FixedSource, GameRng, RandomSource, RuleMode, SessionConfig};

pub use crate::cards::{Card, CardVariant, Catalogue, VariantId};

pub use crate::board::{Board, BoardGenerator};

pub use crate::timer::{Countdown, DeferredReveal, Generation, TickOutcome};

pub use crate::selection::{CallerEntry, CallerQueue, SelectOutcome, Selection, SelectionTracker};

pub use crate::rules::{
    MatchRules, Outcome, ReasonCode, RoundContext, RoundResult, SequenceRules, TimedCallerRules,
    Verdict,
};

pub use crate::session::{ActionKind, ActionOutcome, IgnoreReason, MatchSession, Phase, SessionView};

pub use crate::error::{CatalogueError, ConfigError, SessionError};
