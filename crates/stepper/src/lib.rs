//! Fixed-step time integration for climstep models.
//!
//! A [`TimeStepper`] owns a [`PhysicalModel`], its [`Calendar`], and its
//! [`TimeState`], and advances them together:
//!
//! - [`TimeStepper::advance_one_step`] takes exactly one timestep.
//! - [`TimeStepper::integrate_years`] steps over whole or fractional years
//!   and returns the time-mean of every state variable.
//! - [`TimeStepper::integrate_days`] steps over a span of days.
//! - [`TimeStepper::integrate`] and the `_observed` variants report each
//!   step to an [`Observer`], which may stop the integration early.
//!
//! [`PhysicalModel`]: climstep_core::PhysicalModel
//! [`Calendar`]: climstep_core::Calendar
//! [`TimeState`]: climstep_core::TimeState
//! [`Observer`]: climstep_core::Observer

pub mod integrate;
mod stepper;

#[cfg(test)]
mod test_utils;

pub use integrate::{Action, Event, IntegrateError, Solution, Span, SpanError, Status};
pub use stepper::TimeStepper;
