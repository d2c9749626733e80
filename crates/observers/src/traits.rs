//! Capability traits for generic observers.
//!
//! These traits abstract over integration event and action types, so an
//! observer can be written once and reused wherever the capabilities it needs
//! are available.
//!
//! # Event traits
//!
//! - [`HasTimeState`]: events that carry the time state after a step
//! - [`HasState`]: events that carry the model state after a step
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use climstep_core::Observer;
//! use climstep_observers::traits::{CanStopEarly, HasTimeState};
//!
//! struct StopAfterYears(u64);
//!
//! impl<E: HasTimeState, A: CanStopEarly> Observer<E, A> for StopAfterYears {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.time().years_elapsed() >= self.0).then(A::stop_early)
//!     }
//! }
//! ```

use climstep_core::{StateVariables, Tick, TimeState};
use climstep_stepper::{Action, Event};

/// An event that carries the time state after a step.
pub trait HasTimeState {
    /// Returns the time state after the step.
    fn time(&self) -> &TimeState;

    /// Returns whether the step completed a calendar year.
    fn tick(&self) -> Tick;
}

/// An event that carries the model state after a step.
pub trait HasState {
    /// Returns the model's state variables after the step.
    fn state(&self) -> &StateVariables;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the integration early.
    fn stop_early() -> Self;
}

impl HasTimeState for Event<'_> {
    fn time(&self) -> &TimeState {
        self.time
    }

    fn tick(&self) -> Tick {
        self.tick
    }
}

impl HasState for Event<'_> {
    fn state(&self) -> &StateVariables {
        self.state
    }
}

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
