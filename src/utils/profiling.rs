use std::time::{Duration, Instant};

/// Timing and counters gathered during the most recent [`World::step`](crate::World::step).
#[derive(Debug, Default, Clone, Copy)]
pub struct StepProfiler {
    pub integrate_time: Duration,
    pub collision_time: Duration,
    pub total_step_time: Duration,

    pub body_count: usize,
    pub well_count: usize,
    pub pair_checks: usize,
    pub collisions: usize,
}

impl StepProfiler {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn report(&self) {
        let total_us = self.total_step_time.as_micros() as f64;
        if total_us < 1.0 {
            return;
        }

        log::debug!(
            "step: {} bodies, {} wells, {} pairs checked, {} collisions, {:.3} ms (integrate {:.1}%, collide {:.1}%)",
            self.body_count,
            self.well_count,
            self.pair_checks,
            self.collisions,
            self.total_step_time.as_secs_f64() * 1000.0,
            (self.integrate_time.as_micros() as f64 / total_us) * 100.0,
            (self.collision_time.as_micros() as f64 / total_us) * 100.0,
        );
    }
}

/// Accumulates the lifetime of the guard into `output`.
pub struct ScopedTimer<'a> {
    start: Instant,
    output: &'a mut Duration,
}

impl<'a> ScopedTimer<'a> {
    pub fn new(output: &'a mut Duration) -> Self {
        Self {
            start: Instant::now(),
            output,
        }
    }
}

impl<'a> Drop for ScopedTimer<'a> {
    fn drop(&mut self) {
        *self.output += self.start.elapsed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoped_timer_accumulates() {
        let mut slot = Duration::ZERO;
        {
            let _t = ScopedTimer::new(&mut slot);
            std::thread::sleep(Duration::from_millis(1));
        }
        assert!(slot >= Duration::from_millis(1));
    }

    #[test]
    fn reset_clears_counters() {
        let mut p = StepProfiler {
            pair_checks: 10,
            collisions: 2,
            ..Default::default()
        };
        p.reset();
        assert_eq!(p.pair_checks, 0);
        assert_eq!(p.collisions, 0);
    }
}
