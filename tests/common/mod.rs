//! Shared helpers for integration tests.

#![allow(dead_code)]

use promo_match::{
    CardVariant, Catalogue, FixedSource, MatchSession, RuleMode, SessionConfig, VariantId,
};

/// Install a test-writer subscriber once; `RUST_LOG` controls verbosity.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Three-variant catalogue `p1 p2 p3`.
pub fn three_variants() -> Catalogue {
    Catalogue::new(vec![
        CardVariant::new("p1", "One", "p1.png"),
        CardVariant::new("p2", "Two", "p2.png"),
        CardVariant::new("p3", "Three", "p3.png"),
    ])
    .expect("valid catalogue")
}

/// Session whose board reads `p1 p2 p3` on every row.
///
/// The script `[0, 1, 2]` drives both the board and, afterwards, the
/// caller draws.
pub fn striped_session(config: SessionConfig) -> MatchSession<FixedSource> {
    init_tracing();
    MatchSession::new(config, three_variants(), FixedSource::new(vec![0, 1, 2]))
        .expect("valid session")
}

/// Striped timed-caller session already in `Playing`.
pub fn timed_session(countdown: u32) -> MatchSession<FixedSource> {
    let config = SessionConfig::for_mode(RuleMode::TimedCaller).with_caller_countdown(countdown);
    let mut session = striped_session(config);
    session.present_instructions();
    session.acknowledge_instructions();
    session
}

/// First unpicked position holding `variant`, searching `rows` in order.
pub fn find_in_rows<R: promo_match::RandomSource>(
    session: &MatchSession<R>,
    variant: &VariantId,
    rows: &[usize],
) -> Option<usize> {
    rows.iter().find_map(|&row| {
        session
            .board()
            .iter()
            .find(|c| c.row == row && !c.selected && &c.variant_id == variant)
            .map(|c| c.position)
    })
}

/// Positions of every card showing `variant`.
pub fn positions_of<R: promo_match::RandomSource>(
    session: &MatchSession<R>,
    variant: &str,
) -> Vec<usize> {
    session
        .board()
        .iter()
        .filter(|c| c.variant_id.as_str() == variant)
        .map(|c| c.position)
        .collect()
}
