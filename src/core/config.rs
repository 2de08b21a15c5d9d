//! Session configuration.
//!
//! A session is configured once at startup by providing:
//! - `RuleMode`: Which match rules decide the round
//! - `SessionConfig`: Board shape, timing, and the winning sequence
//!
//! Every field has a default, so an empty JSON object is a valid config.

use serde::{Deserialize, Serialize};

use crate::cards::VariantId;
use crate::error::ConfigError;

/// Cards on a board.
pub const BOARD_SIZE: usize = 9;

/// Columns in the board grid (rows are `BOARD_SIZE / BOARD_COLUMNS`).
pub const BOARD_COLUMNS: usize = 3;

/// Picks that make up one round.
pub const SELECTIONS_PER_ROUND: usize = 3;

/// Default cap on copies of one variant per board.
pub const MAX_PER_VARIANT: usize = 3;

/// Default redraw budget per board position.
pub const PLACEMENT_ATTEMPTS: u32 = 50;

/// Variants required by sequence mode.
pub const SEQUENCE_VARIANTS: usize = 3;

/// Variants allowed in timed-caller mode.
pub const MAX_TIMED_VARIANTS: usize = 7;

/// Which rules decide a round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleMode {
    /// Pick three cards; win only with the exact winning order.
    #[default]
    Sequence,
    /// Match called targets one at a time against a countdown.
    TimedCaller,
}

impl RuleMode {
    /// Stable name used in configs and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RuleMode::Sequence => "sequence",
            RuleMode::TimedCaller => "timed-caller",
        }
    }
}

impl std::fmt::Display for RuleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Rules deciding each round.
    pub rule_mode: RuleMode,

    /// Cards per board. Must be 9.
    pub cards_per_board: usize,

    /// Maximum copies of one variant on a board.
    pub max_per_variant: usize,

    /// Redraws allowed per position before an over-cap draw is accepted.
    pub placement_attempts: u32,

    /// Picks per round. Must be 3.
    pub selections_per_round: usize,

    /// Ticks each caller target stays open (timed-caller mode).
    pub caller_countdown_ticks: u32,

    /// Ticks between computing a result and revealing it (sequence mode).
    pub reveal_delay_ticks: u32,

    /// Wall-clock length of one tick.
    ///
    /// The engine never reads the clock; this tells the shell how often
    /// to call `tick()`.
    pub tick_millis: u64,

    /// Variant order that wins in sequence mode.
    ///
    /// `None` uses the first three catalogue variants in catalogue order.
    pub winning_sequence: Option<Vec<VariantId>>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rule_mode: RuleMode::Sequence,
            cards_per_board: BOARD_SIZE,
            max_per_variant: MAX_PER_VARIANT,
            placement_attempts: PLACEMENT_ATTEMPTS,
            selections_per_round: SELECTIONS_PER_ROUND,
            caller_countdown_ticks: 5,
            reveal_delay_ticks: 2,
            tick_millis: 1000,
            winning_sequence: None,
        }
    }
}

impl SessionConfig {
    /// Default configuration for a rule mode.
    #[must_use]
    pub fn for_mode(mode: RuleMode) -> Self {
        Self::default().with_rule_mode(mode)
    }

    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration can drive a session.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cards_per_board != BOARD_SIZE {
            return Err(ConfigError::BoardSize {
                expected: BOARD_SIZE,
                actual: self.cards_per_board,
            });
        }
        if self.max_per_variant == 0 {
            return Err(ConfigError::ZeroVariantCap);
        }
        if self.placement_attempts == 0 {
            return Err(ConfigError::ZeroPlacementAttempts);
        }
        if self.selections_per_round != SELECTIONS_PER_ROUND {
            return Err(ConfigError::SelectionCount {
                expected: SELECTIONS_PER_ROUND,
                actual: self.selections_per_round,
            });
        }
        if self.caller_countdown_ticks == 0 {
            return Err(ConfigError::ZeroCountdown);
        }
        Ok(())
    }

    /// Set the rule mode.
    #[must_use]
    pub fn with_rule_mode(mut self, mode: RuleMode) -> Self {
        self.rule_mode = mode;
        self
    }

    /// Set the per-variant cap.
    #[must_use]
    pub fn with_max_per_variant(mut self, cap: usize) -> Self {
        self.max_per_variant = cap;
        self
    }

    /// Set the caller countdown length.
    #[must_use]
    pub fn with_caller_countdown(mut self, ticks: u32) -> Self {
        self.caller_countdown_ticks = ticks;
        self
    }

    /// Set the result reveal delay.
    #[must_use]
    pub fn with_reveal_delay(mut self, ticks: u32) -> Self {
        self.reveal_delay_ticks = ticks;
        self
    }

    /// Set an explicit winning sequence.
    #[must_use]
    pub fn with_winning_sequence(mut self, sequence: Vec<VariantId>) -> Self {
        self.winning_sequence = Some(sequence);
        self
    }
}
