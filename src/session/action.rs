//! Player actions and their outcomes.

use serde::{Deserialize, Serialize};

/// What the player did to a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    /// Flip the card face up.
    Reveal,
    /// Pick the card (flips it first if needed).
    Select,
}

/// Why an action changed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IgnoreReason {
    /// The session is not in `Playing`.
    NotPlaying,
    /// No card at that position.
    UnknownPosition,
    /// The card is already face up.
    AlreadyRevealed,
    /// The active rules keep cards face down until picked.
    RevealNotAllowed,
    /// The card is already picked or matched.
    AlreadySelected,
    /// Every pick for the round is made.
    RoundFull,
}

/// Result of a player action.
///
/// Ignored actions are not errors; the shell may drop this value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionOutcome {
    /// The action changed the session.
    Accepted,
    /// The action was a no-op.
    Ignored(IgnoreReason),
}

impl ActionOutcome {
    /// True for `Accepted`.
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, ActionOutcome::Accepted)
    }
}
