//! Runs a toy energy-balance model and logs its progress.
//!
//! # Usage
//!
//! ```text
//! cargo run --example progress
//! cargo run --example progress -- stepper.toml
//! RUST_LOG=climstep_stepper=trace cargo run --example progress
//! ```
//!
//! The optional argument names a TOML file with the stepper settings:
//!
//! ```toml
//! num_steps_per_year = 360
//! verbose = true
//! ```

use std::{convert::Infallible, error::Error};

use climstep_core::{Clock, Observer, PhysicalModel, StateVariables, StepperConfig};
use climstep_observers::{History, ProgressLog};
use climstep_stepper::{Action, Event, TimeStepper};
use ndarray::arr1;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// A zero-dimensional surface temperature relaxing toward radiative balance.
struct Relaxation {
    state: StateVariables,
    /// Equilibrium temperature in kelvin.
    equilibrium: f64,
    /// Relaxation time in days.
    tau_days: f64,
}

impl PhysicalModel for Relaxation {
    type Error = Infallible;

    fn state(&self) -> &StateVariables {
        &self.state
    }

    fn step_forward(&mut self, clock: Clock<'_>) -> Result<(), Self::Error> {
        let rate = clock.calendar.timestep_days() / self.tau_days;
        let equilibrium = self.equilibrium;
        if let Some(ts) = self.state.get_mut("Ts") {
            ts.mapv_inplace(|t| t + rate * (equilibrium - t));
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("climstep_stepper=info,progress=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match std::env::args().nth(1) {
        Some(path) => StepperConfig::from_toml_str(&std::fs::read_to_string(path)?)?,
        None => StepperConfig {
            verbose: true,
            ..StepperConfig::default()
        },
    };

    let model = Relaxation {
        state: [("Ts", arr1(&[250.0, 300.0]).into_dyn())]
            .into_iter()
            .collect(),
        equilibrium: 288.0,
        tau_days: 200.0,
    };

    let mut stepper = TimeStepper::from_config(model, &config)?;
    let mut history = History::yearly(["Ts"]);

    let mut progress = ProgressLog::new();
    stepper.integrate_years_observed(
        3.0,
        config.verbose,
        |event: &Event<'_>| -> Option<Action> {
            let _: Option<Action> = progress.observe(event);
            history.observe(event)
        },
    )?;
    let mean = stepper.integrate_years(1.0, config.verbose)?;
    stepper.integrate_days(90.0, config.verbose)?;

    if let Some(ts) = mean.get("Ts") {
        info!("mean Ts over year four: {ts}");
    }
    for (days, ts) in history.series("Ts") {
        info!("Ts after {days:.1} days: {ts}");
    }

    Ok(())
}
