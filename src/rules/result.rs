//! Round results.

use serde::{Deserialize, Serialize};

/// Win or loss.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    /// The player won the round.
    Win,
    /// The player lost the round.
    Loss,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "win"),
            Outcome::Loss => write!(f, "loss"),
        }
    }
}

/// Why a round ended the way it did.
///
/// The win/lose screens key their copy and call-to-action off this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReasonCode {
    /// Sequence mode: picks matched the winning order.
    PerfectSequence,
    /// Sequence mode: two picks share a variant, the third differs.
    TwoSameOneDifferent,
    /// Sequence mode: three different variants, wrong order.
    AllUnique,
    /// Sequence mode: three picks of one variant.
    AllSame,
    /// Timed-caller mode: the countdown hit zero.
    TimeRanOut,
    /// Timed-caller mode: the pick did not match the called target.
    WrongCard,
    /// Timed-caller mode: no unpicked card left to call.
    NoCardsAvailable,
    /// Timed-caller mode: the matched cards repeat a variant.
    VariantsNotDistinct,
    /// Timed-caller mode: the matched cards span more than one row.
    NotSameRow,
    /// Timed-caller mode: all targets matched in one row.
    AllTargetsMatched,
}

impl ReasonCode {
    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            ReasonCode::PerfectSequence => "perfect-sequence",
            ReasonCode::TwoSameOneDifferent => "two-same-one-different",
            ReasonCode::AllUnique => "all-unique",
            ReasonCode::AllSame => "all-same",
            ReasonCode::TimeRanOut => "time-ran-out",
            ReasonCode::WrongCard => "wrong-card",
            ReasonCode::NoCardsAvailable => "no-cards-available",
            ReasonCode::VariantsNotDistinct => "variants-not-distinct",
            ReasonCode::NotSameRow => "not-same-row",
            ReasonCode::AllTargetsMatched => "all-targets-matched",
        }
    }

    /// Player-facing explanation.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            ReasonCode::PerfectSequence => "perfect sequence",
            ReasonCode::TwoSameOneDifferent => "two cards same, one different",
            ReasonCode::AllUnique => "all cards unique",
            ReasonCode::AllSame => "all cards the same",
            ReasonCode::TimeRanOut => "time ran out",
            ReasonCode::WrongCard => "wrong card",
            ReasonCode::NoCardsAvailable => "no cards available",
            ReasonCode::VariantsNotDistinct => "matched cards must all be different",
            ReasonCode::NotSameRow => "matched cards must share a row",
            ReasonCode::AllTargetsMatched => "all targets matched",
        }
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Final result of a round. Immutable once produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundResult {
    /// Win or loss.
    pub outcome: Outcome,
    /// Why.
    pub reason: ReasonCode,
}

impl RoundResult {
    /// A winning result.
    #[must_use]
    pub const fn win(reason: ReasonCode) -> Self {
        Self {
            outcome: Outcome::Win,
            reason,
        }
    }

    /// A losing result.
    #[must_use]
    pub const fn loss(reason: ReasonCode) -> Self {
        Self {
            outcome: Outcome::Loss,
            reason,
        }
    }

    /// Check if the round was won.
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.outcome == Outcome::Win
    }
}

impl std::fmt::Display for RoundResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.outcome, self.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let win = RoundResult::win(ReasonCode::PerfectSequence);
        assert!(win.is_win());
        assert_eq!(win.outcome, Outcome::Win);

        let loss = RoundResult::loss(ReasonCode::TimeRanOut);
        assert!(!loss.is_win());
        assert_eq!(loss.to_string(), "loss: time ran out");
    }

    #[test]
    fn test_codes_match_serde_names() {
        for reason in [
            ReasonCode::PerfectSequence,
            ReasonCode::TwoSameOneDifferent,
            ReasonCode::AllUnique,
            ReasonCode::AllSame,
            ReasonCode::TimeRanOut,
            ReasonCode::WrongCard,
            ReasonCode::NoCardsAvailable,
            ReasonCode::VariantsNotDistinct,
            ReasonCode::NotSameRow,
            ReasonCode::AllTargetsMatched,
        ] {
            let json = serde_json::to_string(&reason).unwrap();
            assert_eq!(json, format!("\"{}\"", reason.code()));
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ReasonCode::TwoSameOneDifferent.message(),
            "two cards same, one different"
        );
        assert_eq!(ReasonCode::TimeRanOut.to_string(), "time ran out");
        assert_eq!(ReasonCode::NoCardsAvailable.code(), "no-cards-available");
    }
}
