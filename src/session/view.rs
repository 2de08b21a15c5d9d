//! Render snapshot of a session.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::phase::Phase;
use crate::board::Board;
use crate::core::RuleMode;
use crate::rules::RoundResult;
use crate::selection::CallerEntry;
use crate::timer::Generation;

/// Everything the shell needs to draw one frame.
///
/// Detached from the session: later session changes do not show up here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    /// Generation the snapshot was taken in.
    pub generation: Generation,
    /// Active rules.
    pub rule_mode: RuleMode,
    /// Current phase.
    pub phase: Phase,
    /// Cards and their flags.
    pub board: Board,
    /// Picked positions in order.
    pub selection: Vec<usize>,
    /// Picks needed to finish a round.
    pub selections_required: usize,
    /// Target the player must match now (timed-caller mode).
    pub current_target: Option<CallerEntry>,
    /// Targets matched so far (timed-caller mode).
    pub caller_index: usize,
    /// Every target called this round.
    pub caller_history: Vector<CallerEntry>,
    /// Ticks left on the caller countdown.
    pub ticks_remaining: Option<u32>,
    /// A result is computed but not yet visible.
    pub awaiting_reveal: bool,
    /// Visible result.
    pub result: Option<RoundResult>,
}

impl SessionView {
    /// Picks made so far.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Progress text such as `"Flipped: 2/3"`.
    #[must_use]
    pub fn progress_label(&self) -> String {
        format!("Flipped: {}/{}", self.selected_count(), self.selections_required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Catalogue;
    use crate::core::SessionConfig;
    use crate::session::MatchSession;

    #[test]
    fn test_view_tracks_progress() {
        let mut session =
            MatchSession::seeded(SessionConfig::default(), Catalogue::default_sequence(), 9).unwrap();
        session.present_instructions();
        session.acknowledge_instructions();
        session.select_card(0);

        let view = session.view();
        assert_eq!(view.phase, Phase::Playing);
        assert_eq!(view.selection, vec![0]);
        assert_eq!(view.progress_label(), "Flipped: 1/3");
        assert!(view.board.get(0).unwrap().selected);
        assert!(view.current_target.is_none());
        assert!(!view.awaiting_reveal);
    }

    #[test]
    fn test_view_is_detached() {
        let mut session =
            MatchSession::seeded(SessionConfig::default(), Catalogue::default_sequence(), 9).unwrap();
        session.present_instructions();
        session.acknowledge_instructions();
        let view = session.view();
        session.select_card(5);
        assert!(!view.board.get(5).unwrap().selected);
        assert!(view.selection.is_empty());
    }

    #[test]
    fn test_view_serializes() {
        let session =
            MatchSession::seeded(SessionConfig::default(), Catalogue::default_sequence(), 9).unwrap();
        let json = serde_json::to_value(session.view()).unwrap();
        assert_eq!(json["phase"]["phase"], "idle");
        assert_eq!(json["rule_mode"], "sequence");
        assert_eq!(json["board"]["cards"].as_array().map(Vec::len), Some(9));
    }

    #[test]
    fn test_view_json_round_trip_after_loss() {
        let config = SessionConfig::for_mode(RuleMode::TimedCaller).with_caller_countdown(1);
        let mut session = MatchSession::seeded(config, Catalogue::default_timed(), 3).unwrap();
        session.present_instructions();
        session.acknowledge_instructions();
        session.tick();

        let view = session.view();
        assert_eq!(view.phase, Phase::Ended(crate::rules::Outcome::Loss));

        let json = serde_json::to_string(&view).unwrap();
        let back: SessionView = serde_json::from_str(&json).unwrap();
        assert_eq!(back, view);
        assert_eq!(back.caller_history.len(), 1);
    }
}
