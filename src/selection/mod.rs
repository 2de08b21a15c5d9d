//! Player picks and caller targets for the current round.
//!
//! - `SelectionTracker`: the ordered, capped, duplicate-free pick list
//! - `CallerQueue`: timed-caller targets, drawn one at a time

mod caller;
mod tracker;

pub use caller::{CallerEntry, CallerQueue};
pub use tracker::{SelectOutcome, Selection, SelectionTracker};
