//! Core engine types: randomness and configuration.
//!
//! Nothing here knows about cards or rules. The session wires these
//! into board generation and caller draws.

pub mod config;
pub mod rng;

pub use config::{
    RuleMode, SessionConfig, BOARD_COLUMNS, BOARD_SIZE, MAX_PER_VARIANT, MAX_TIMED_VARIANTS,
    PLACEMENT_ATTEMPTS, SELECTIONS_PER_ROUND, SEQUENCE_VARIANTS,
};
pub use rng::{FixedSource, GameRng, RandomSource};
