use super::*;
use std::cell::Cell;

/// Drive the gate with a no-op sleep and a probe that succeeds once
/// `ready_at` probes have run (0 = never).
fn run_gate(ready_at: u32) -> (GateOutcome, u32, u32) {
    let probes = Cell::new(0u32);
    let sleeps = Cell::new(0u32);
    let outcome = futures::executor::block_on(wait_until_ready(
        || {
            probes.set(probes.get() + 1);
            ready_at != 0 && probes.get() >= ready_at
        },
        || {
            sleeps.set(sleeps.get() + 1);
            async {}
        },
    ));
    (outcome, probes.get(), sleeps.get())
}

#[test]
fn ready_immediately_probes_once_without_sleeping() {
    let (outcome, probes, sleeps) = run_gate(1);
    assert_eq!(outcome, GateOutcome::Ready);
    assert_eq!(probes, 1);
    assert_eq!(sleeps, 0);
}

#[test]
fn ready_mid_budget_stops_polling() {
    let (outcome, probes, sleeps) = run_gate(5);
    assert_eq!(outcome, GateOutcome::Ready);
    assert_eq!(probes, 5);
    assert_eq!(sleeps, 4);
}

#[test]
fn ready_on_the_last_attempt_still_counts() {
    let (outcome, probes, _) = run_gate(MAX_ATTEMPTS);
    assert_eq!(outcome, GateOutcome::Ready);
    assert_eq!(probes, MAX_ATTEMPTS);
}

#[test]
fn gives_up_after_exactly_the_budget() {
    let (outcome, probes, sleeps) = run_gate(0);
    assert_eq!(outcome, GateOutcome::GaveUp);
    assert_eq!(probes, MAX_ATTEMPTS);
    // No trailing sleep after the final failed probe.
    assert_eq!(sleeps, MAX_ATTEMPTS - 1);
}

#[test]
fn just_missed_budget_gives_up() {
    let (outcome, probes, _) = run_gate(MAX_ATTEMPTS + 1);
    assert_eq!(outcome, GateOutcome::GaveUp);
    assert_eq!(probes, MAX_ATTEMPTS);
}
