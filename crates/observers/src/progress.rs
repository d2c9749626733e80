use climstep_core::{Observer, Tick};
use tracing::info;

use crate::traits::HasTimeState;

/// An observer that reports completed model years through `tracing`.
///
/// Every `every_years`-th rollover emits one `INFO` event carrying the years
/// elapsed, the total step count, and the days elapsed.
/// Steps within a year are silent.
///
/// `ProgressLog` never returns an action, so it works with any action type.
///
/// # Example
///
/// ```
/// use climstep_core::{Calendar, StaticState};
/// use climstep_observers::ProgressLog;
/// use climstep_stepper::TimeStepper;
///
/// let mut stepper = TimeStepper::new(StaticState::default(), Calendar::default());
/// stepper
///     .integrate_years_observed(10.0, false, ProgressLog::every_years(5))
///     .unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressLog {
    every_years: u64,
    reported: u64,
}

impl ProgressLog {
    /// Creates an observer that reports every completed year.
    #[must_use]
    pub fn new() -> Self {
        Self::every_years(1)
    }

    /// Creates an observer that reports every `n`-th completed year.
    ///
    /// A value of zero is treated as one.
    #[must_use]
    pub fn every_years(n: u64) -> Self {
        Self {
            every_years: n.max(1),
            reported: 0,
        }
    }

    /// Returns the number of reports emitted so far.
    #[must_use]
    pub fn reported(&self) -> u64 {
        self.reported
    }
}

impl Default for ProgressLog {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, A> Observer<E, A> for ProgressLog
where
    E: HasTimeState,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if event.tick() != Tick::NewYear {
            return None;
        }

        let time = event.time();
        let years_elapsed = time.years_elapsed();
        if years_elapsed % self.every_years == 0 {
            info!(
                years_elapsed,
                steps = time.steps(),
                days_elapsed = time.days_elapsed(),
                "completed model year {years_elapsed}"
            );
            self.reported += 1;
        }
        None
    }
}

/// Allows `&mut ProgressLog` to be passed to integrations that take an
/// observer by value, so the report count can be read afterwards.
impl<E, A> Observer<E, A> for &mut ProgressLog
where
    E: HasTimeState,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
