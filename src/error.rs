//! Error types.
//!
//! Only session setup can fail. Player actions and ticks never return
//! errors: an invalid action is ignored and a bad round is a `Loss`.

use crate::cards::VariantId;
use crate::core::RuleMode;

/// Invalid session configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The board is a fixed 3x3 grid.
    #[error("board must hold exactly {expected} cards, got {actual}")]
    BoardSize {
        /// Required board size.
        expected: usize,
        /// Configured board size.
        actual: usize,
    },
    /// A zero cap would make every draw exceed it.
    #[error("max_per_variant must be at least 1")]
    ZeroVariantCap,
    /// The placement retry budget must allow at least one draw.
    #[error("placement_attempts must be at least 1")]
    ZeroPlacementAttempts,
    /// Rounds are always three picks.
    #[error("a round takes exactly {expected} selections, got {actual}")]
    SelectionCount {
        /// Required selections per round.
        expected: usize,
        /// Configured selections per round.
        actual: usize,
    },
    /// A caller countdown of zero would expire before the player can act.
    #[error("caller countdown must be at least 1 tick")]
    ZeroCountdown,
    /// The configuration document could not be parsed.
    #[error("invalid configuration JSON: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err.to_string())
    }
}

/// Catalogue unusable for the requested rule mode.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogueError {
    /// No variants to draw from.
    #[error("catalogue has no variants")]
    Empty,
    /// Two variants share an id.
    #[error("variant {0} appears more than once in the catalogue")]
    DuplicateVariant(VariantId),
    /// The rule mode needs a specific number of variants.
    #[error("{mode} mode needs {expected} variants, catalogue has {actual}")]
    VariantCount {
        /// Mode being started.
        mode: RuleMode,
        /// Required variant count.
        expected: usize,
        /// Variants in the catalogue.
        actual: usize,
    },
    /// The rule mode allows at most this many variants.
    #[error("{mode} mode allows at most {max} variants, catalogue has {actual}")]
    TooManyVariants {
        /// Mode being started.
        mode: RuleMode,
        /// Maximum variant count.
        max: usize,
        /// Variants in the catalogue.
        actual: usize,
    },
    /// The winning sequence names a variant the catalogue lacks.
    #[error("winning sequence references unknown variant {0}")]
    UnknownVariant(VariantId),
    /// The winning sequence must name one variant per selection.
    #[error("winning sequence must have {expected} entries, got {actual}")]
    SequenceLength {
        /// Required length.
        expected: usize,
        /// Configured length.
        actual: usize,
    },
}

/// Failure to start a session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Bad configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Bad catalogue.
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),
}
