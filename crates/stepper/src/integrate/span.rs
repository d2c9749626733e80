use std::fmt;

use climstep_core::{Calendar, constants::DAYS_PER_YEAR};
use thiserror::Error;

/// A requested integration length.
///
/// Both variants are converted to a whole number of steps by truncation:
///
/// - `Years(y)`: `floor(num_steps_per_year * y)` steps
/// - `Days(d)`: `floor(num_steps_per_year / DAYS_PER_YEAR * d)` steps
///
/// Any remainder shorter than one step is dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Span {
    /// A duration in calendar years. Integrations over years are averaged.
    Years(f64),

    /// A duration in simulated days.
    Days(f64),
}

/// Errors raised when a [`Span`] cannot be turned into a step count.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SpanError {
    #[error("{span} is shorter than one step of {timestep_days} days")]
    ZeroSteps { span: Span, timestep_days: f64 },

    #[error("{span} is not a finite duration")]
    NotFinite { span: Span },
}

impl Span {
    /// Returns the number of whole steps that fit in this span.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::ZeroSteps`] if the span is shorter than one step
    /// (including zero, negative, and NaN spans), or [`SpanError::NotFinite`]
    /// for an infinite span.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn steps(&self, calendar: &Calendar) -> Result<u64, SpanError> {
        let per_year = f64::from(calendar.num_steps_per_year());
        let exact = match *self {
            Self::Years(years) => per_year * years,
            Self::Days(days) => per_year / DAYS_PER_YEAR * days,
        };

        if exact.is_infinite() {
            return Err(SpanError::NotFinite { span: *self });
        }

        let steps = exact.floor();
        if steps >= 1.0 {
            Ok(steps as u64)
        } else {
            Err(SpanError::ZeroSteps {
                span: *self,
                timestep_days: calendar.timestep_days(),
            })
        }
    }

    /// Returns `true` if integrating over this span produces a time-mean.
    #[must_use]
    pub fn is_averaged(&self) -> bool {
        matches!(self, Self::Years(_))
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Years(years) => write!(f, "{years} years"),
            Self::Days(days) => write!(f, "{days} days"),
        }
    }
}
