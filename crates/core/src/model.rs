use std::convert::Infallible;

use crate::{Calendar, StateVariables, TimeState};

/// A read-only view of the simulation clock.
///
/// Passed to [`PhysicalModel`] hooks so the physics can depend on the
/// timestep, the time of year, or the elapsed time.
#[derive(Debug, Clone, Copy)]
pub struct Clock<'a> {
    pub calendar: &'a Calendar,
    pub time: &'a TimeState,
}

impl<'a> Clock<'a> {
    /// Creates a clock view from a calendar and a time state.
    #[must_use]
    pub fn new(calendar: &'a Calendar, time: &'a TimeState) -> Self {
        Self { calendar, time }
    }

    /// Returns the day offset of the current step within the year, if the
    /// day-of-year index falls on the calendar's grid.
    #[must_use]
    pub fn day_of_year(&self) -> Option<f64> {
        self.calendar.day_of_year(self.time.day_of_year_index())
    }
}

/// The physics of a time-stepped model.
///
/// A `PhysicalModel` owns its [`StateVariables`] and knows how to move them
/// forward by one timestep.
/// The stepper does all of the time bookkeeping; implementors only update
/// their state.
///
/// A model whose [`step_forward`](Self::step_forward) does nothing is valid
/// and steps time alone; see [`StaticState`].
pub trait PhysicalModel {
    /// The error returned if a physical step fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the current state variables.
    fn state(&self) -> &StateVariables;

    /// Advances the physical state by one timestep, in place.
    ///
    /// `clock` describes the time at the start of the step; the time state
    /// is advanced only after this method returns `Ok`.
    ///
    /// # Errors
    ///
    /// Returns `Err(Self::Error)` if the step cannot be computed.
    /// The stepper then leaves its time state unchanged.
    fn step_forward(&mut self, clock: Clock<'_>) -> Result<(), Self::Error>;

    /// Called once at the end of every calendar year.
    ///
    /// `clock` shows the time state after the rollover (day index 0, the new
    /// year count).
    /// The default implementation does nothing.
    fn on_new_year(&mut self, _clock: Clock<'_>) {}
}

/// A [`PhysicalModel`] whose state never changes.
///
/// Useful for pure time bookkeeping, and for averaging a fixed state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticState {
    state: StateVariables,
}

impl StaticState {
    /// Wraps a state set that will be held constant.
    #[must_use]
    pub fn new(state: StateVariables) -> Self {
        Self { state }
    }

    /// Consumes the model and returns its state.
    #[must_use]
    pub fn into_state(self) -> StateVariables {
        self.state
    }
}

impl PhysicalModel for StaticState {
    type Error = Infallible;

    fn state(&self) -> &StateVariables {
        &self.state
    }

    fn step_forward(&mut self, _clock: Clock<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}
