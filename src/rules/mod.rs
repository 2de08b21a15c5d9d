//! Match rules: deciding a round from the picks on the board.
//!
//! Two interchangeable strategies implement [`MatchRules`]:
//! - [`SequenceRules`]: three picks, win only with the exact winning order
//! - [`TimedCallerRules`]: match three called targets against the clock
//!
//! Rules never mutate the session. They read a [`RoundContext`] and return
//! a [`Verdict`].

pub mod engine;
pub mod result;
pub mod sequence;
pub mod timed_caller;

pub use engine::{rules_for, MatchRules, RoundContext, Verdict};
pub use result::{Outcome, ReasonCode, RoundResult};
pub use sequence::SequenceRules;
pub use timed_caller::TimedCallerRules;
