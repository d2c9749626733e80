use std::{fmt, ops::Deref};

use thiserror::Error;
use uom::{
    Conversion,
    si::{f64::Time, time},
};

use crate::constants::SECONDS_PER_DAY;

/// A unit-safe, strictly positive duration of one discrete model step.
///
/// `Timestep` wraps a [`Time`] value while enforcing that the duration is
/// finite and strictly greater than zero.
///
/// # Construction
///
/// ```
/// use climstep_core::Timestep;
/// use uom::si::time::day;
///
/// let dt = Timestep::new::<day>(1.0).unwrap();
/// assert_eq!(dt.days(), 1.0);
/// ```
///
/// # Supported Operations
///
/// - [`TryFrom<Time>`] for fallible construction from a raw [`Time`] value.
/// - [`Deref`] for transparent access to inner `Time` methods.
/// - [`Display`](fmt::Display), which renders the step in seconds (e.g. `"60 s"`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Timestep(Time);

/// Error type returned when constructing an invalid [`Timestep`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TimestepError {
    #[error("timestep must be a finite duration greater than zero, got {0} s")]
    NotPositive(f64),
}

impl Timestep {
    /// Constructs a `Timestep` from a numeric value and unit.
    ///
    /// # Errors
    ///
    /// Returns [`TimestepError::NotPositive`] if `value` is zero, negative, or
    /// not finite.
    pub fn new<U>(value: f64) -> Result<Self, TimestepError>
    where
        U: time::Unit + Conversion<f64, T = f64>,
    {
        Self::from_time(Time::new::<U>(value))
    }

    /// Constructs a `Timestep` from an existing [`Time`] value.
    ///
    /// # Errors
    ///
    /// Returns [`TimestepError::NotPositive`] if the time is zero, negative,
    /// or not finite.
    pub fn from_time(time: Time) -> Result<Self, TimestepError> {
        let seconds = time.get::<time::second>();
        if seconds.is_finite() && seconds > 0.0 {
            Ok(Self(time))
        } else {
            Err(TimestepError::NotPositive(seconds))
        }
    }

    /// Returns the step length in seconds.
    #[must_use]
    pub fn seconds(&self) -> f64 {
        self.0.get::<time::second>()
    }

    /// Returns the step length in simulated days.
    #[must_use]
    pub fn days(&self) -> f64 {
        self.seconds() / SECONDS_PER_DAY
    }
}

impl TryFrom<Time> for Timestep {
    type Error = TimestepError;

    fn try_from(t: Time) -> Result<Self, Self::Error> {
        Self::from_time(t)
    }
}

impl Deref for Timestep {
    type Target = Time;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Timestep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} s", self.seconds())
    }
}
