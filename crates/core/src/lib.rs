//! Core types and traits for climstep, a fixed-step time integrator for
//! climate models.
//!
//! This crate defines the shared abstractions that the stepper and observers
//! build on:
//!
//! - [`Calendar`]: steps per year, the derived [`Timestep`], and the
//!   day-of-year grid
//! - [`TimeState`]: elapsed steps, days, and years, advanced one step at a time
//! - [`StateVariables`]: named N-dimensional state arrays of a model
//! - [`PhysicalModel`]: the physics of a concrete model, stepped by the engine
//! - [`Observer`]: receives integration events and optionally returns actions
//! - [`StepperConfig`]: TOML-loadable settings

mod calendar;
pub mod config;
pub mod constants;
mod model;
mod observer;
mod state;
mod time;

pub use calendar::{Calendar, CalendarError, DEFAULT_STEPS_PER_YEAR, Timestep, TimestepError};
pub use config::{ConfigError, StepperConfig};
pub use model::{Clock, PhysicalModel, StaticState};
pub use observer::Observer;
pub use state::StateVariables;
pub use time::{Tick, TimeState};
