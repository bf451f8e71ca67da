use log::{log_enabled, warn, Level};
use std::time::{Duration, Instant};

/// The two halves of a world tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickPhase {
    /// Per-body forces, integration and boundary response.
    Integrate,
    /// The ordered pairwise collision pass.
    Collide,
}

impl TickPhase {
    pub fn name(self) -> &'static str {
        match self {
            TickPhase::Integrate => "integrate",
            TickPhase::Collide => "collide",
        }
    }
}

/// Emits a trace line when a tick phase starts and another with its duration when
/// dropped. Costs one `Instant::now` when trace logging is off.
pub struct PhaseTrace {
    phase: TickPhase,
    tick: u64,
    start: Instant,
}

impl PhaseTrace {
    pub fn begin(phase: TickPhase, tick: u64) -> Self {
        if log_enabled!(Level::Trace) {
            log::trace!("tick {tick}: {} started", phase.name());
        }
        Self {
            phase,
            tick,
            start: Instant::now(),
        }
    }

    pub fn phase(&self) -> TickPhase {
        self.phase
    }
}

impl Drop for PhaseTrace {
    fn drop(&mut self) {
        if log_enabled!(Level::Trace) {
            log::trace!(
                "tick {}: {} took {} µs",
                self.tick,
                self.phase.name(),
                self.start.elapsed().as_micros()
            );
        }
    }
}

/// Warns when a tick took longer than its cadence. Returns whether the budget was exceeded.
pub fn warn_if_tick_budget_exceeded(duration: Duration, budget: Duration) -> bool {
    if duration > budget {
        warn!(
            "Tick exceeded budget: {:.2} ms > {:.2} ms",
            duration.as_secs_f64() * 1000.0,
            budget.as_secs_f64() * 1000.0
        );
        return true;
    }
    false
}
