//! Multi-step integration over a span of years or days.
//!
//! Both entry points share one loop:
//!
//! 1. Convert the requested [`Span`] to a whole number of steps, rejecting
//!    spans shorter than one step before anything is mutated.
//! 2. For each step:
//!    - Advance the stepper one step ([`TimeStepper::advance_one_step`]).
//!    - For spans of years, add the post-step state to the running sum.
//!    - Emit an [`Event`] to the observer.
//!    - If the observer returns [`Action::StopEarly`], stop.
//! 3. For spans of years, divide the sum by the steps taken.
//!
//! # Example
//!
//! ```
//! use climstep_core::{Calendar, StateVariables, StaticState};
//! use climstep_stepper::TimeStepper;
//! use ndarray::arr1;
//!
//! let state: StateVariables = [("Ts", arr1(&[288.0]).into_dyn())].into_iter().collect();
//! let mut stepper = TimeStepper::new(StaticState::new(state.clone()), Calendar::default());
//!
//! let mean = stepper.integrate_years(1.0, false).unwrap();
//! assert_eq!(mean, state);
//! assert_eq!(stepper.time().years_elapsed(), 1);
//! ```

mod action;
mod average;
mod error;
mod event;
mod solution;
mod span;

pub use action::Action;
pub use error::IntegrateError;
pub use event::Event;
pub use solution::{Solution, Status};
pub use span::{Span, SpanError};

use climstep_core::{Observer, PhysicalModel, StateVariables};
use tracing::info;

use crate::TimeStepper;

use average::TimeAverage;

impl<M> TimeStepper<M>
where
    M: PhysicalModel,
{
    /// Steps forward `floor(num_steps_per_year * years)` steps and returns
    /// the time-mean of every state variable.
    ///
    /// The mean is taken over the state after each step and covers the
    /// variables present when the call starts.
    /// When `verbose` is set, the step count and the total elapsed time are
    /// logged at `INFO` level.
    ///
    /// # Errors
    ///
    /// - [`IntegrateError::Span`] if `years` is shorter than one step.
    /// - [`IntegrateError::Physics`] if a physical step fails; earlier steps
    ///   remain applied.
    /// - [`IntegrateError::StateMismatch`] if a variable vanishes or changes
    ///   shape mid-window.
    pub fn integrate_years(
        &mut self,
        years: f64,
        verbose: bool,
    ) -> Result<StateVariables, IntegrateError<M::Error>> {
        let solution = self.integrate(Span::Years(years), verbose, ())?;
        Ok(solution.average.unwrap_or_default())
    }

    /// Steps forward `floor(num_steps_per_year / DAYS_PER_YEAR * days)`
    /// steps without averaging.
    ///
    /// When `verbose` is set, the step count and the total elapsed time are
    /// logged at `INFO` level.
    ///
    /// # Errors
    ///
    /// - [`IntegrateError::Span`] if `days` is shorter than one step.
    /// - [`IntegrateError::Physics`] if a physical step fails; earlier steps
    ///   remain applied.
    pub fn integrate_days(
        &mut self,
        days: f64,
        verbose: bool,
    ) -> Result<(), IntegrateError<M::Error>> {
        self.integrate(Span::Days(days), verbose, ())?;
        Ok(())
    }

    /// Like [`integrate_years`](Self::integrate_years), reporting each step to
    /// `observer`.
    ///
    /// # Errors
    ///
    /// See [`integrate_years`](Self::integrate_years).
    pub fn integrate_years_observed<Obs>(
        &mut self,
        years: f64,
        verbose: bool,
        observer: Obs,
    ) -> Result<Solution, IntegrateError<M::Error>>
    where
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        self.integrate(Span::Years(years), verbose, observer)
    }

    /// Like [`integrate_days`](Self::integrate_days), reporting each step to
    /// `observer`.
    ///
    /// # Errors
    ///
    /// See [`integrate_days`](Self::integrate_days).
    pub fn integrate_days_observed<Obs>(
        &mut self,
        days: f64,
        verbose: bool,
        observer: Obs,
    ) -> Result<Solution, IntegrateError<M::Error>>
    where
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        self.integrate(Span::Days(days), verbose, observer)
    }

    /// Integrates over `span`, averaging if the span is in years.
    ///
    /// See the module documentation for the loop structure.
    ///
    /// # Errors
    ///
    /// Returns an [`IntegrateError`] if the span is too short, a physical
    /// step fails, or the state changes shape mid-window.
    pub fn integrate<Obs>(
        &mut self,
        span: Span,
        verbose: bool,
        mut observer: Obs,
    ) -> Result<Solution, IntegrateError<M::Error>>
    where
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        let total_steps = span.steps(self.calendar())?;

        if verbose {
            info!(steps = total_steps, %span, "integrating for {total_steps} steps or {span}");
        }

        let mut average = span
            .is_averaged()
            .then(|| TimeAverage::new(self.state()));

        let mut status = Status::Complete;
        let mut steps = 0;

        for step in 1..=total_steps {
            let tick = self.advance_one_step().map_err(IntegrateError::Physics)?;
            steps = step;

            if let Some(average) = average.as_mut() {
                average.accumulate(self.state())?;
            }

            let event = Event {
                step,
                total_steps,
                tick,
                calendar: self.calendar(),
                time: self.time(),
                state: self.state(),
            };

            if let Some(Action::StopEarly) = observer.observe(&event) {
                status = Status::StoppedByObserver;
                break;
            }
        }

        if verbose {
            let years = self.time().years_elapsed_fractional();
            info!(years, "total elapsed time is {years} years");
        }

        Ok(Solution {
            status,
            steps,
            average: average.map(TimeAverage::finish),
        })
    }
}
