//! End-to-end election scenarios driven through the public engine API with
//! a deterministic clock and a controllable transfer primitive.

use election_core::{ElectionConfig, ElectionEngine, ElectionError, ElectionEvent};
use election_host::{MemoryRoles, TransferError};
use election_nullables::{NullClock, NullTransfer};
use election_types::{FundAmount, Identity, Phase, Role};

const HOUR: u64 = 3600;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn deploy() -> ElectionEngine<MemoryRoles, NullTransfer> {
    let config = ElectionConfig::default();
    config.init_logging();
    ElectionEngine::new(
        config,
        MemoryRoles::new(),
        NullTransfer::new(),
        &Identity::new("operator"),
    )
}

fn with_sponsor(
    engine: &mut ElectionEngine<MemoryRoles, NullTransfer>,
    clock: &NullClock,
    sponsor: &str,
) {
    engine
        .grant_role(&clock.context("operator"), Role::Sponsor, &Identity::new(sponsor))
        .expect("operator can grant sponsor");
}

// ---------------------------------------------------------------------------
// 1. Full election with a tie
// ---------------------------------------------------------------------------

#[test]
fn tie_resolves_to_first_registered_candidate() {
    let clock = NullClock::new(1_700_000_000);
    let mut engine = deploy();
    let op = clock.context("operator");

    assert_eq!(engine.add_candidate(&op, "Alice").unwrap(), 1);
    assert_eq!(engine.add_candidate(&op, "Bob").unwrap(), 2);

    engine.set_phase(&op, Phase::Voting).unwrap();
    clock.advance(HOUR);

    engine.cast_vote(&clock.context("voter-a"), 1).unwrap();
    let repeat = engine.cast_vote(&clock.context("voter-a"), 1);
    assert!(matches!(repeat, Err(ElectionError::AlreadyVoted(ref who)) if who.as_str() == "voter-a"));
    engine.cast_vote(&clock.context("voter-b"), 2).unwrap();

    engine
        .set_phase(&clock.context("operator"), Phase::Completed)
        .unwrap();

    let winner = engine.designate_winner().unwrap();
    assert_eq!(winner.id, 1);
    assert_eq!(winner.name, "Alice");
    assert_eq!(winner.vote_count, 1);
    assert_eq!(engine.get_total_votes(2).unwrap(), 1);
}

// ---------------------------------------------------------------------------
// 2. Registration closed outside the Registration phase
// ---------------------------------------------------------------------------

#[test]
fn add_candidate_in_founding_is_wrong_phase() {
    let clock = NullClock::new(0);
    let mut engine = deploy();
    let op = clock.context("operator");

    engine.add_candidate(&op, "Alice").unwrap();
    engine.set_phase(&op, Phase::Founding).unwrap();

    let err = engine.add_candidate(&op, "Bob").unwrap_err();
    assert!(matches!(err, ElectionError::WrongPhase { .. }));
    assert_eq!(engine.get_candidates_count(), 1);
}

// ---------------------------------------------------------------------------
// 3. Donations accumulate and stay auditable
// ---------------------------------------------------------------------------

#[test]
fn repeated_donations_sum_and_are_recorded_individually() {
    let clock = NullClock::new(100);
    let mut engine = deploy();
    engine.add_candidate(&clock.context("operator"), "Alice").unwrap();
    with_sponsor(&mut engine, &clock, "sponsor");

    engine
        .donate(&clock.context("sponsor"), 1, FundAmount::new(2))
        .unwrap();
    clock.advance(10);
    engine
        .donate(&clock.context("sponsor"), 1, FundAmount::new(2))
        .unwrap();

    assert_eq!(engine.get_total_funds(1).unwrap(), FundAmount::new(4));

    let records = engine.donations_for(1).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].at.as_secs(), 100);
    assert_eq!(records[1].at.as_secs(), 110);
    assert!(records.iter().all(|r| r.sponsor.as_str() == "sponsor"));

    let transfers = engine.transfer().accepted();
    assert_eq!(transfers.len(), 2);
    assert!(transfers
        .iter()
        .all(|t| t.to == engine.config().treasury && t.amount == FundAmount::new(2)));
}

#[test]
fn rejected_transfer_leaves_no_trace() {
    let clock = NullClock::new(0);
    let mut engine = deploy();
    engine.add_candidate(&clock.context("operator"), "Alice").unwrap();
    with_sponsor(&mut engine, &clock, "sponsor");
    engine
        .donate(&clock.context("sponsor"), 1, FundAmount::new(5))
        .unwrap();
    let events_before = engine.events().len();

    engine
        .transfer_mut()
        .fail_next(TransferError::Rejected("account frozen".into()));
    let err = engine
        .donate(&clock.context("sponsor"), 1, FundAmount::new(7))
        .unwrap_err();

    assert!(matches!(err, ElectionError::Transfer(TransferError::Rejected(_))));
    assert_eq!(engine.get_total_funds(1).unwrap(), FundAmount::new(5));
    assert_eq!(engine.donations_for(1).unwrap().len(), 1);
    assert_eq!(engine.total_donations(), Some(FundAmount::new(5)));
    assert_eq!(engine.events().len(), events_before);
}

// ---------------------------------------------------------------------------
// 4. Role gating on phase changes
// ---------------------------------------------------------------------------

#[test]
fn non_operator_cannot_change_phase() {
    let clock = NullClock::new(0);
    let mut engine = deploy();

    let err = engine
        .set_phase(&clock.context("intruder"), Phase::Completed)
        .unwrap_err();

    assert!(matches!(
        err,
        ElectionError::Unauthorized { ref caller, role: Role::Operator } if caller.as_str() == "intruder"
    ));
    assert_eq!(engine.current_phase(), Phase::Registration);
}

#[test]
fn sponsor_role_does_not_grant_operator_powers() {
    let clock = NullClock::new(0);
    let mut engine = deploy();
    with_sponsor(&mut engine, &clock, "sponsor");

    assert!(matches!(
        engine.add_candidate(&clock.context("sponsor"), "Eve"),
        Err(ElectionError::Unauthorized { .. })
    ));
}

// ---------------------------------------------------------------------------
// 5. Opening delay
// ---------------------------------------------------------------------------

#[test]
fn vote_delay_boundary_is_inclusive() {
    let clock = NullClock::new(5_000);
    let mut engine = deploy();
    engine.add_candidate(&clock.context("operator"), "Alice").unwrap();
    engine
        .set_phase(&clock.context("operator"), Phase::Voting)
        .unwrap();

    clock.advance(HOUR - 1);
    assert!(matches!(
        engine.cast_vote(&clock.context("v"), 1),
        Err(ElectionError::TooEarly { .. })
    ));

    clock.advance(1);
    engine.cast_vote(&clock.context("v"), 1).unwrap();
}

#[test]
fn reentering_voting_restarts_the_delay() {
    let clock = NullClock::new(0);
    let mut engine = deploy();
    engine.add_candidate(&clock.context("operator"), "Alice").unwrap();
    engine
        .set_phase(&clock.context("operator"), Phase::Voting)
        .unwrap();

    clock.advance(HOUR);
    engine.cast_vote(&clock.context("early-bird"), 1).unwrap();

    engine
        .set_phase(&clock.context("operator"), Phase::Voting)
        .unwrap();
    assert_eq!(engine.vote_start_time(), clock.now());
    assert!(matches!(
        engine.cast_vote(&clock.context("latecomer"), 1),
        Err(ElectionError::TooEarly { .. })
    ));

    // The earlier vote is not erased by the reset.
    assert!(engine.has_voted(&Identity::new("early-bird")));
    assert_eq!(engine.get_total_votes(1).unwrap(), 1);
}

#[test]
fn custom_delay_from_config() {
    let clock = NullClock::new(0);
    let config = ElectionConfig::from_toml_str(
        "vote_delay_secs = 0\nlog_level = \"debug\"\nlog_format = \"json\"",
    )
    .unwrap();
    config.init_logging();
    let mut engine = ElectionEngine::new(
        config,
        MemoryRoles::new(),
        NullTransfer::new(),
        &Identity::new("operator"),
    );
    engine.add_candidate(&clock.context("operator"), "Alice").unwrap();
    engine
        .set_phase(&clock.context("operator"), Phase::Voting)
        .unwrap();

    engine.cast_vote(&clock.context("v"), 1).unwrap();
}

// ---------------------------------------------------------------------------
// 6. Permissive phase transitions
// ---------------------------------------------------------------------------

#[test]
fn operator_may_return_to_registration() {
    let clock = NullClock::new(0);
    let mut engine = deploy();
    let op = clock.context("operator");

    engine.add_candidate(&op, "Alice").unwrap();
    engine.set_phase(&op, Phase::Completed).unwrap();
    engine.set_phase(&op, Phase::Registration).unwrap();
    assert_eq!(engine.add_candidate(&op, "Bob").unwrap(), 2);
}

// ---------------------------------------------------------------------------
// 7. Event log
// ---------------------------------------------------------------------------

#[test]
fn event_log_reflects_committed_operations_in_order() {
    let clock = NullClock::new(42);
    let mut engine = deploy();
    let op = clock.context("operator");

    engine.add_candidate(&op, "Alice").unwrap();
    let _ = engine.add_candidate(&op, "");
    engine.set_phase(&op, Phase::Voting).unwrap();

    let events = engine.events();
    assert_eq!(events.len(), 2);
    assert!(matches!(&events[0], ElectionEvent::CandidateAdded { id: 1, name, .. } if name == "Alice"));
    assert!(matches!(
        &events[1],
        ElectionEvent::PhaseChanged {
            from: Phase::Registration,
            to: Phase::Voting,
            ..
        }
    ));
    assert!(events.iter().all(|e| e.at().as_secs() == 42));

    let json = serde_json::to_value(&events[1]).unwrap();
    assert_eq!(json["kind"], "phase_changed");
    assert_eq!(json["by"], "operator");
}
