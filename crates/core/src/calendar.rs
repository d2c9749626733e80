//! Fixed-length model calendar.
//!
//! A [`Calendar`] divides every year into `num_steps_per_year` equal steps.
//! There are no months or leap years: a year is a constant
//! [`DAYS_PER_YEAR`] days long.

mod timestep;

use ndarray::Array1;
use thiserror::Error;
use uom::si::time::second;

use crate::constants::{DAYS_PER_YEAR, SECONDS_PER_YEAR};

pub use timestep::{Timestep, TimestepError};

/// Number of steps per year used when none is configured.
pub const DEFAULT_STEPS_PER_YEAR: u32 = 90;

/// Errors raised while building a [`Calendar`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CalendarError {
    #[error("number of steps per year must be positive, got {0}")]
    NotPositive(u32),

    #[error(transparent)]
    Timestep(#[from] TimestepError),
}

/// Temporal resolution of a simulation.
///
/// Holds the number of steps per year, the derived [`Timestep`], and the
/// day-of-year sample grid used by forcing calculations keyed on the time of
/// year.
///
/// # Day-of-year grid
///
/// [`days_of_year`](Self::days_of_year) starts at day 0 with a spacing of
/// one timestep, and its length is `ceil(DAYS_PER_YEAR / timestep_days)`.
/// The division is rarely exact in floating point, so the grid can end up
/// one element longer than `num_steps_per_year`, with its last point at or
/// just past the end of the year.
/// Consumers indexing the grid by day-of-year index must not assume the two
/// lengths agree.
#[derive(Debug, Clone, PartialEq)]
pub struct Calendar {
    num_steps_per_year: u32,
    timestep: Timestep,
    days_of_year: Array1<f64>,
}

impl Calendar {
    /// Creates a calendar with `num_steps_per_year` equal steps per year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::NotPositive`] if `num_steps_per_year` is zero.
    pub fn new(num_steps_per_year: u32) -> Result<Self, CalendarError> {
        if num_steps_per_year == 0 {
            return Err(CalendarError::NotPositive(num_steps_per_year));
        }

        let timestep =
            Timestep::new::<second>(SECONDS_PER_YEAR / f64::from(num_steps_per_year))?;

        Ok(Self {
            num_steps_per_year,
            timestep,
            days_of_year: sample_year(timestep.days()),
        })
    }

    /// Returns the number of steps in one calendar year.
    #[must_use]
    pub fn num_steps_per_year(&self) -> u32 {
        self.num_steps_per_year
    }

    /// Returns the duration of one step.
    #[must_use]
    pub fn timestep(&self) -> Timestep {
        self.timestep
    }

    /// Returns the duration of one step in simulated days.
    #[must_use]
    pub fn timestep_days(&self) -> f64 {
        self.timestep.days()
    }

    /// Returns the day offsets of each step within the year.
    #[must_use]
    pub fn days_of_year(&self) -> &Array1<f64> {
        &self.days_of_year
    }

    /// Returns the day offset for a day-of-year index, if it is on the grid.
    #[must_use]
    pub fn day_of_year(&self, index: u32) -> Option<f64> {
        let index = usize::try_from(index).ok()?;
        self.days_of_year.get(index).copied()
    }
}

impl Default for Calendar {
    /// Returns a calendar with [`DEFAULT_STEPS_PER_YEAR`] steps per year.
    fn default() -> Self {
        Self::new(DEFAULT_STEPS_PER_YEAR).expect("default steps per year is positive")
    }
}

/// Samples the year from day 0 with a spacing of `step_days`.
///
/// The grid always has `ceil(DAYS_PER_YEAR / step_days)` points; when the
/// quotient rounds up, the last point lands at or past the end of the year.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn sample_year(step_days: f64) -> Array1<f64> {
    let len = (DAYS_PER_YEAR / step_days).ceil() as usize;
    (0..len).map(|i| i as f64 * step_days).collect()
}
