//! Session lifecycle: the state machine and what it exposes to the shell.
//!
//! ## Key Types
//!
//! - `MatchSession`: owns the round and dispatches every input
//! - `Phase`: lifecycle position
//! - `ActionKind`/`ActionOutcome`: player input and its effect
//! - `SessionView`: detached render snapshot

mod action;
mod machine;
mod phase;
mod view;

pub use action::{ActionKind, ActionOutcome, IgnoreReason};
pub use machine::MatchSession;
pub use phase::Phase;
pub use view::SessionView;
