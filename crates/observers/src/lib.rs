//! Reusable observers for climstep integrations.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any integration event exposing its time and state.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for generic observers
//!   ([`HasTimeState`], [`HasState`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`ProgressLog`]: reports completed model years through `tracing`
//! - [`History`]: records selected state variables as the model runs
//!
//! [`Observer`]: climstep_core::Observer
//! [`HasTimeState`]: traits::HasTimeState
//! [`HasState`]: traits::HasState
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod history;
mod progress;

pub use history::{Cadence, History, Sample};
pub use progress::ProgressLog;
