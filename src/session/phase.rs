//! Session phases.

use serde::{Deserialize, Serialize};

use crate::rules::Outcome;

/// Where the session is in its lifecycle.
///
/// ```text
/// Idle -> Instructions -> Playing -> Resolving -> Ended
///   ^                                               |
///   +------------------- reset ---------------------+
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "phase", content = "outcome", rename_all = "kebab-case")]
pub enum Phase {
    /// Fresh board, nothing shown yet.
    #[default]
    Idle,
    /// Instructions on screen, waiting for the player to acknowledge.
    Instructions,
    /// Accepting reveals and picks.
    Playing,
    /// Result computed, waiting out the reveal delay.
    Resolving,
    /// Round over; the result is visible.
    Ended(Outcome),
}

impl Phase {
    /// Check if player actions are accepted.
    #[must_use]
    pub fn is_playing(self) -> bool {
        self == Phase::Playing
    }

    /// Check if the round has a visible result.
    #[must_use]
    pub fn is_ended(self) -> bool {
        matches!(self, Phase::Ended(_))
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::Instructions => write!(f, "instructions"),
            Phase::Playing => write!(f, "playing"),
            Phase::Resolving => write!(f, "resolving"),
            Phase::Ended(outcome) => write!(f, "ended({outcome})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        assert!(Phase::Playing.is_playing());
        assert!(!Phase::Resolving.is_playing());
        assert!(Phase::Ended(Outcome::Win).is_ended());
        assert!(!Phase::Idle.is_ended());
        assert_eq!(Phase::default(), Phase::Idle);
    }

    #[test]
    fn test_display() {
        assert_eq!(Phase::Instructions.to_string(), "instructions");
        assert_eq!(Phase::Ended(Outcome::Loss).to_string(), "ended(loss)");
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Phase::Ended(Outcome::Win)).unwrap();
        assert_eq!(json, r#"{"phase":"ended","outcome":"win"}"#);
        let json = serde_json::to_string(&Phase::Playing).unwrap();
        assert_eq!(json, r#"{"phase":"playing"}"#);
    }
}
