use crate::{Calendar, constants::DAYS_PER_YEAR};

/// Elapsed-time counters of a running simulation.
///
/// A `TimeState` starts at zero and only moves forward through
/// [`advance`](Self::advance), which is called exactly once per completed
/// model step.
/// The only way back to zero is a fresh state, which the stepper creates
/// whenever its calendar is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimeState {
    day_of_year_index: u32,
    steps: u64,
    days_elapsed: f64,
    years_elapsed: u64,
}

/// Outcome of a single [`TimeState::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The step stayed within the current calendar year.
    SameYear,

    /// The step completed a calendar year and wrapped back to day index 0.
    NewYear,
}

impl TimeState {
    /// Creates a state with all counters at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the position of the current step within the year.
    #[must_use]
    pub fn day_of_year_index(&self) -> u32 {
        self.day_of_year_index
    }

    /// Returns the number of steps taken.
    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Returns the simulated days elapsed.
    #[must_use]
    pub fn days_elapsed(&self) -> f64 {
        self.days_elapsed
    }

    /// Returns the number of completed calendar years.
    #[must_use]
    pub fn years_elapsed(&self) -> u64 {
        self.years_elapsed
    }

    /// Returns the elapsed time in (possibly fractional) calendar years.
    #[must_use]
    pub fn years_elapsed_fractional(&self) -> f64 {
        self.days_elapsed / DAYS_PER_YEAR
    }

    /// Advances the counters by one step of `calendar`.
    ///
    /// In order:
    ///
    /// 1. `steps` increases by one.
    /// 2. `days_elapsed` increases by one timestep expressed in days.
    /// 3. If the day index is at or past the last step of the year, it wraps
    ///    to 0 and `years_elapsed` increases by one; otherwise the day index
    ///    increases by one.
    ///
    /// Only one rollover check happens per call.
    /// If the index is already beyond the last step of `calendar` (because a
    /// state built for a finer calendar is advanced with a coarser one), it
    /// wraps once and no catch-up years are counted.
    pub fn advance(&mut self, calendar: &Calendar) -> Tick {
        self.steps += 1;
        self.days_elapsed += calendar.timestep_days();

        if self.day_of_year_index >= calendar.num_steps_per_year() - 1 {
            self.day_of_year_index = 0;
            self.years_elapsed += 1;
            Tick::NewYear
        } else {
            self.day_of_year_index += 1;
            Tick::SameYear
        }
    }
}
