//! Engine readiness gate.
//!
//! DarkReader is loaded from a third-party script tag and may arrive late,
//! or never (blocked, offline). Nothing theme-related may run before it
//! exists, and nothing may hang forever waiting for it: the gate polls on
//! a fixed interval and gives up after a bounded number of attempts.
//! Giving up is not an error — the page simply stays undecorated.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

/// Spacing between availability probes.
pub const POLL_INTERVAL_MS: u64 = 100;

/// Probe budget before the gate gives up permanently (~2 seconds).
pub const MAX_ATTEMPTS: u32 = 20;

/// Result of the bounded wait.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    /// The engine became available; reported exactly once.
    Ready,
    /// The budget ran out. No retry resumes later.
    GaveUp,
}

/// Wait until `probe` reports the engine as available.
///
/// Generic over the probe and the sleep so the retry policy is testable
/// without a browser or a timer. `probe` runs at most [`MAX_ATTEMPTS`]
/// times; `sleep` separates consecutive probes.
pub async fn wait_until_ready<P, S, F>(mut probe: P, mut sleep: S) -> GateOutcome
where
    P: FnMut() -> bool,
    S: FnMut() -> F,
    F: Future<Output = ()>,
{
    for attempt in 1..=MAX_ATTEMPTS {
        if probe() {
            return GateOutcome::Ready;
        }
        if attempt < MAX_ATTEMPTS {
            sleep().await;
        }
    }
    GateOutcome::GaveUp
}

/// Browser driver: poll for the global `DarkReader` object.
#[cfg(feature = "csr")]
pub async fn wait_for_dark_reader() -> GateOutcome {
    wait_until_ready(crate::util::dark_reader::is_loaded, || {
        gloo_timers::future::sleep(std::time::Duration::from_millis(POLL_INTERVAL_MS))
    })
    .await
}
