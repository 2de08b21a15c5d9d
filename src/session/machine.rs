//! The session state machine.
//!
//! `MatchSession` owns the board, the picks, the caller queue, and both
//! timers, and is the only thing that mutates them. All input arrives as
//! discrete calls on one thread: player actions, `tick()`, and lifecycle
//! commands. Nothing blocks; a delayed result is a scheduled reveal that
//! a later `tick()` delivers.

use tracing::{debug, info, instrument};

use super::action::{ActionKind, ActionOutcome, IgnoreReason};
use super::phase::Phase;
use super::view::SessionView;
use crate::board::{Board, BoardGenerator};
use crate::cards::Catalogue;
use crate::core::{GameRng, RandomSource, RuleMode, SessionConfig};
use crate::error::SessionError;
use crate::rules::{rules_for, MatchRules, RoundContext, RoundResult, Verdict};
use crate::selection::{CallerQueue, SelectOutcome, Selection, SelectionTracker};
use crate::timer::{Countdown, DeferredReveal, Generation, TickOutcome};

/// One live game session.
///
/// ## Example
///
/// ```
/// use promo_match::{Catalogue, MatchSession, Phase, SessionConfig};
///
/// let mut session = MatchSession::seeded(
///     SessionConfig::default(),
///     Catalogue::default_sequence(),
///     42,
/// )
/// .unwrap();
///
/// session.present_instructions();
/// session.acknowledge_instructions();
/// assert_eq!(session.phase(), Phase::Playing);
/// ```
#[derive(Debug)]
pub struct MatchSession<R: RandomSource = GameRng> {
    config: SessionConfig,
    catalogue: Catalogue,
    rules: Box<dyn MatchRules>,
    generator: BoardGenerator,
    rng: R,

    generation: Generation,
    phase: Phase,
    board: Board,
    tracker: SelectionTracker,
    callers: CallerQueue,
    countdown: Countdown,
    reveal: DeferredReveal<RoundResult>,
    result: Option<RoundResult>,
}

impl MatchSession<GameRng> {
    /// Create a session driven by a seeded ChaCha RNG.
    pub fn seeded(
        config: SessionConfig,
        catalogue: Catalogue,
        seed: u64,
    ) -> Result<Self, SessionError> {
        Self::new(config, catalogue, GameRng::new(seed))
    }
}

impl<R: RandomSource> MatchSession<R> {
    /// Create a session in `Idle` with a freshly generated board.
    pub fn new(config: SessionConfig, catalogue: Catalogue, rng: R) -> Result<Self, SessionError> {
        config.validate()?;
        let rules = rules_for(&config, &catalogue)?;

        let mut session = Self {
            generator: BoardGenerator::from_config(&config),
            tracker: SelectionTracker::new(config.selections_per_round),
            callers: CallerQueue::new(config.selections_per_round),
            config,
            catalogue,
            rules,
            rng,
            generation: Generation::default(),
            phase: Phase::Idle,
            board: Board::default(),
            countdown: Countdown::new(),
            reveal: DeferredReveal::new(),
            result: None,
        };
        session.enter_idle();
        Ok(session)
    }

    // === Inbound ===

    /// Start a new session with the given rules and catalogue.
    ///
    /// Discards whatever was live, generates a new board, and shows the
    /// instructions. On error the current session is left untouched.
    #[instrument(skip(self, catalogue), fields(variants = catalogue.len()))]
    pub fn start_session(
        &mut self,
        rule_mode: RuleMode,
        catalogue: Catalogue,
    ) -> Result<(), SessionError> {
        let config = self.config.clone().with_rule_mode(rule_mode);
        let rules = rules_for(&config, &catalogue)?;

        self.config = config;
        self.catalogue = catalogue;
        self.rules = rules;
        self.reset_session();
        self.present_instructions();
        Ok(())
    }

    /// Move from `Idle` to `Instructions`.
    pub fn present_instructions(&mut self) -> bool {
        if self.phase != Phase::Idle {
            debug!(phase = %self.phase, "instructions ignored");
            return false;
        }
        self.phase = Phase::Instructions;
        true
    }

    /// The player dismissed the instructions: start the round.
    #[instrument(skip(self), fields(generation = self.generation.0))]
    pub fn acknowledge_instructions(&mut self) -> bool {
        if self.phase != Phase::Instructions {
            debug!(phase = %self.phase, "acknowledge ignored");
            return false;
        }

        self.tracker.reset(&mut self.board);
        self.board.clear_flags();
        self.callers.clear();
        self.phase = Phase::Playing;
        info!(mode = %self.rules.mode(), "round started");

        if self.rules.uses_timer() {
            self.callers.draw_next(&self.board, &mut self.rng);
            self.settle(false);
        }
        true
    }

    /// Dispatch a player action on a card.
    pub fn player_action(&mut self, kind: ActionKind, position: usize) -> ActionOutcome {
        match kind {
            ActionKind::Reveal => self.reveal_card(position),
            ActionKind::Select => self.select_card(position),
        }
    }

    /// Flip a card face up without picking it.
    #[instrument(skip(self))]
    pub fn reveal_card(&mut self, position: usize) -> ActionOutcome {
        if let Err(reason) = self.check_action(position) {
            return Self::ignored(reason);
        }
        if !self.rules.allows_reveal() {
            return Self::ignored(IgnoreReason::RevealNotAllowed);
        }
        let Some(card) = self.board.get_mut(position) else {
            return Self::ignored(IgnoreReason::UnknownPosition);
        };
        if card.revealed {
            return Self::ignored(IgnoreReason::AlreadyRevealed);
        }
        card.revealed = true;
        ActionOutcome::Accepted
    }

    /// Pick a card, flipping it first if it is face down.
    #[instrument(skip(self))]
    pub fn select_card(&mut self, position: usize) -> ActionOutcome {
        if let Err(reason) = self.check_action(position) {
            return Self::ignored(reason);
        }
        if let Some(card) = self.board.get_mut(position) {
            card.revealed = true;
        }

        let outcome = self.tracker.select(&mut self.board, position);
        if let Some(reason) = Self::rejection(outcome) {
            return Self::ignored(reason);
        }

        if self.rules.uses_timer() {
            self.record_caller_match(position);
        }
        self.settle(false);
        ActionOutcome::Accepted
    }

    /// Advance time by one tick.
    ///
    /// Returns the result if it became visible on this tick.
    pub fn tick(&mut self) -> Option<RoundResult> {
        match self.phase {
            Phase::Playing => match self.countdown.tick(self.generation) {
                TickOutcome::Expired => {
                    info!("caller countdown expired");
                    self.settle(true);
                    self.result
                }
                TickOutcome::Running(_) | TickOutcome::Idle => None,
            },
            Phase::Resolving => {
                let result = self.reveal.tick(self.generation)?;
                self.finish(result);
                Some(result)
            }
            _ => None,
        }
    }

    /// Discard the round and return to `Idle` with a new board.
    #[instrument(skip(self), fields(from = %self.phase))]
    pub fn reset_session(&mut self) {
        self.countdown.cancel();
        self.reveal.cancel();
        self.generation = self.generation.next();
        self.enter_idle();
    }

    /// Reset and show the instructions again.
    pub fn play_again(&mut self) {
        self.reset_session();
        self.present_instructions();
    }

    /// The player dismissed the result screen.
    ///
    /// Only meaningful in `Ended`; resets the session.
    pub fn acknowledge_result(&mut self) -> bool {
        if !self.phase.is_ended() {
            return false;
        }
        self.reset_session();
        true
    }

    // === Outbound ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Picks this round.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        self.tracker.selection()
    }

    /// Caller targets this round.
    #[must_use]
    pub fn callers(&self) -> &CallerQueue {
        &self.callers
    }

    /// Ticks left on the caller countdown.
    #[must_use]
    pub fn ticks_remaining(&self) -> Option<u32> {
        self.countdown.remaining()
    }

    /// Visible result, once `Ended`.
    #[must_use]
    pub fn result(&self) -> Option<RoundResult> {
        self.result
    }

    /// True while a computed result waits out the reveal delay.
    #[must_use]
    pub fn awaiting_reveal(&self) -> bool {
        self.reveal.is_pending()
    }

    /// Current generation token.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Active rule mode.
    #[must_use]
    pub fn rule_mode(&self) -> RuleMode {
        self.rules.mode()
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Active catalogue.
    #[must_use]
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView {
            generation: self.generation,
            rule_mode: self.rules.mode(),
            phase: self.phase,
            board: self.board.clone(),
            selection: self.selection().positions().to_vec(),
            selections_required: self.tracker.capacity(),
            current_target: self.callers.current().cloned(),
            caller_index: self.callers.current_index(),
            caller_history: self.callers.history().clone(),
            ticks_remaining: self.ticks_remaining(),
            awaiting_reveal: self.awaiting_reveal(),
            result: self.result,
        }
    }

    // === Internals ===

    fn enter_idle(&mut self) {
        self.board = self.generator.generate(&self.catalogue, &mut self.rng);
        self.tracker = SelectionTracker::new(self.config.selections_per_round);
        self.callers = CallerQueue::new(self.config.selections_per_round);
        self.result = None;
        self.phase = Phase::Idle;
        debug!(generation = self.generation.0, "session idle");
    }

    fn check_action(&self, position: usize) -> Result<(), IgnoreReason> {
        if !self.phase.is_playing() {
            return Err(IgnoreReason::NotPlaying);
        }
        let card = self.board.get(position).ok_or(IgnoreReason::UnknownPosition)?;
        if card.is_resolved() {
            return Err(IgnoreReason::AlreadySelected);
        }
        if self.tracker.is_full() {
            return Err(IgnoreReason::RoundFull);
        }
        Ok(())
    }

    fn rejection(outcome: SelectOutcome) -> Option<IgnoreReason> {
        match outcome {
            SelectOutcome::Accepted => None,
            SelectOutcome::AlreadySelected => Some(IgnoreReason::AlreadySelected),
            SelectOutcome::RoundFull => Some(IgnoreReason::RoundFull),
            SelectOutcome::UnknownPosition => Some(IgnoreReason::UnknownPosition),
        }
    }

    fn ignored(reason: IgnoreReason) -> ActionOutcome {
        debug!(?reason, "action ignored");
        ActionOutcome::Ignored(reason)
    }

    /// Mark a correct timed-caller pick and call the next target.
    fn record_caller_match(&mut self, position: usize) {
        let Some(target) = self.callers.current() else {
            return;
        };
        let Some(card) = self.board.get_mut(position) else {
            return;
        };
        if card.variant_id != target.variant_id {
            return;
        }

        card.matched = true;
        self.countdown.cancel();
        self.callers.advance();
        if !self.callers.is_complete() {
            self.callers.draw_next(&self.board, &mut self.rng);
        }
    }

    /// Ask the rules for a verdict and act on it.
    fn settle(&mut self, timed_out: bool) {
        let verdict = self.rules.evaluate(&RoundContext {
            board: &self.board,
            selection: self.tracker.selection(),
            callers: &self.callers,
            timed_out,
        });

        match verdict {
            Verdict::Pending => {
                if self.rules.uses_timer() && !self.countdown.is_armed() {
                    self.countdown
                        .start(self.config.caller_countdown_ticks, self.generation);
                }
            }
            Verdict::Decided(result) => self.resolve(result),
        }
    }

    fn resolve(&mut self, result: RoundResult) {
        self.countdown.cancel();
        self.phase = Phase::Resolving;
        info!(%result, "round decided");

        let delay = self.rules.reveal_delay(&self.config);
        if let Some(result) = self.reveal.schedule(result, delay, self.generation) {
            self.finish(result);
        }
    }

    fn finish(&mut self, result: RoundResult) {
        self.result = Some(result);
        self.phase = Phase::Ended(result.outcome);
        info!(%result, "result revealed");
    }
}
