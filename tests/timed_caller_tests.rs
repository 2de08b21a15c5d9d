//! Timed-caller scenarios.
//!
//! All sessions here use the striped board from `common`: every row reads
//! `p1 p2 p3`, so any called variant can be found in any row.

mod common;

use common::{find_in_rows, timed_session};
use promo_match::{ActionOutcome, IgnoreReason, Outcome, Phase, ReasonCode, RoundResult};

/// Match the current target using the first row in `rows` that has it.
fn match_current(session: &mut promo_match::MatchSession<promo_match::FixedSource>, rows: &[usize]) -> usize {
    let target = session
        .callers()
        .current()
        .expect("target called")
        .variant_id
        .clone();
    let pos = find_in_rows(session, &target, rows).expect("matching card");
    assert_eq!(session.select_card(pos), ActionOutcome::Accepted);
    pos
}

/// Countdown armed at 3, no action for 3 ticks: time ran out.
#[test]
fn test_countdown_expiry_loses() {
    let mut session = timed_session(3);
    assert_eq!(session.phase(), Phase::Playing);
    assert_eq!(session.ticks_remaining(), Some(3));

    assert_eq!(session.tick(), None);
    assert_eq!(session.ticks_remaining(), Some(2));
    assert_eq!(session.tick(), None);
    assert_eq!(session.ticks_remaining(), Some(1));

    let result = session.tick().expect("expired on third tick");
    assert_eq!(result, RoundResult::loss(ReasonCode::TimeRanOut));
    assert_eq!(result.reason.message(), "time ran out");
    assert_eq!(session.phase(), Phase::Ended(Outcome::Loss));
    assert_eq!(session.ticks_remaining(), None);
}

/// A correct match advances the caller index by one and rearms the timer.
#[test]
fn test_correct_match_advances_and_rearms() {
    let mut session = timed_session(3);
    session.tick();
    assert_eq!(session.ticks_remaining(), Some(2));
    assert_eq!(session.callers().current_index(), 0);

    let pos = match_current(&mut session, &[0]);

    assert_eq!(session.callers().current_index(), 1);
    assert_eq!(session.ticks_remaining(), Some(3));
    assert!(session.board().get(pos).unwrap().matched);
    assert!(session.callers().current().is_some());
    assert_eq!(session.callers().history().len(), 2);
    assert_eq!(session.phase(), Phase::Playing);
}

/// Clicking a card of the wrong variant loses at once, with no delay.
#[test]
fn test_wrong_card_loses_immediately() {
    let mut session = timed_session(5);
    let target = session.callers().current().unwrap().variant_id.clone();
    let wrong = session
        .board()
        .iter()
        .find(|c| c.variant_id != target)
        .map(|c| c.position)
        .unwrap();

    session.select_card(wrong);
    assert_eq!(session.phase(), Phase::Ended(Outcome::Loss));
    assert_eq!(session.result(), Some(RoundResult::loss(ReasonCode::WrongCard)));
    assert!(!session.board().get(wrong).unwrap().matched);
}

/// Three matches in one row with three different variants win.
#[test]
fn test_three_matches_in_a_row_win() {
    let mut session = timed_session(5);
    for _ in 0..3 {
        match_current(&mut session, &[0]);
    }
    assert_eq!(
        session.result(),
        Some(RoundResult::win(ReasonCode::AllTargetsMatched))
    );
    assert_eq!(session.callers().current_index(), 3);
    assert_eq!(session.phase(), Phase::Ended(Outcome::Win));
}

/// Three correct matches spread over rows are downgraded to a loss.
#[test]
fn test_matches_across_rows_lose() {
    let mut session = timed_session(5);
    match_current(&mut session, &[1]);
    match_current(&mut session, &[2]);
    match_current(&mut session, &[0]);
    assert_eq!(session.result(), Some(RoundResult::loss(ReasonCode::NotSameRow)));
}

/// A timed round never waits on a reveal delay.
#[test]
fn test_no_reveal_delay() {
    let mut session = timed_session(2);
    session.tick();
    session.tick();
    assert!(session.phase().is_ended());
    assert!(!session.awaiting_reveal());
}

/// Reset mid-countdown: the old countdown never fires.
#[test]
fn test_reset_disarms_countdown() {
    let mut session = timed_session(2);
    session.tick();
    session.reset_session();

    assert_eq!(session.phase(), Phase::Idle);
    assert_eq!(session.ticks_remaining(), None);
    for _ in 0..4 {
        assert_eq!(session.tick(), None);
    }
    assert!(session.result().is_none());
}

/// Matched cards and the player's own picks stay locked.
#[test]
fn test_matched_card_cannot_be_picked_again() {
    let mut session = timed_session(5);
    let pos = match_current(&mut session, &[0]);
    assert_eq!(
        session.select_card(pos),
        ActionOutcome::Ignored(IgnoreReason::AlreadySelected)
    );
    assert_eq!(
        session.reveal_card(pos),
        ActionOutcome::Ignored(IgnoreReason::AlreadySelected)
    );
}

/// Cards cannot be flipped ahead of a pick, and trying does not stop the clock.
#[test]
fn test_reveal_ignored_in_timed_mode() {
    let mut session = timed_session(3);
    for pos in 0..9 {
        assert_eq!(
            session.reveal_card(pos),
            ActionOutcome::Ignored(IgnoreReason::RevealNotAllowed)
        );
    }
    assert!(session.board().iter().all(|c| !c.revealed));
    assert!(session.selection().is_empty());
    assert_eq!(session.ticks_remaining(), Some(3));
}

/// Only picked cards are face up while targets are being called.
#[test]
fn test_board_stays_face_down_between_picks() {
    let mut session = timed_session(5);
    for pos in 0..9 {
        session.reveal_card(pos);
    }
    let first = match_current(&mut session, &[0]);
    for pos in 0..9 {
        session.reveal_card(pos);
    }

    for card in session.board().iter() {
        assert_eq!(card.revealed, card.position == first, "position {}", card.position);
    }
}

/// The view carries the target, the countdown, and the call history.
#[test]
fn test_view_exposes_caller_state() {
    let mut session = timed_session(4);
    let view = session.view();
    assert_eq!(view.ticks_remaining, Some(4));
    assert_eq!(view.caller_index, 0);
    assert_eq!(view.caller_history.len(), 1);
    assert_eq!(view.current_target.as_ref(), session.callers().current());

    match_current(&mut session, &[0]);
    let view = session.view();
    assert_eq!(view.caller_index, 1);
    assert_eq!(view.caller_history.len(), 2);
}
