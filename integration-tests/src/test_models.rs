pub mod ebm {
    use climstep_core::{Clock, PhysicalModel, StateVariables, StepperConfig};
    use ndarray::Array1;
    use serde::Deserialize;
    use thiserror::Error;

    /// A zero-dimensional energy-balance model, used for integration tests.
    ///
    /// Each entry of the `"Ts"` array (surface temperature, °C) evolves
    /// independently under
    ///
    /// ```text
    /// C dT/dt = (1 - albedo) Q(t) - (A + B T)
    /// ```
    ///
    /// stepped with forward Euler.
    /// `Q(t)` is the annual-mean insolation modulated by a cosine of the day
    /// of year with relative amplitude `seasonal_amplitude`.
    #[derive(Debug, Clone)]
    pub struct EnergyBalance {
        params: Params,
        state: StateVariables,
        years_completed: u64,
    }

    /// Physical parameters of the energy-balance model.
    #[derive(Debug, Clone, PartialEq, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct Params {
        /// Longwave intercept, W/m².
        #[serde(default = "default_a")]
        pub a: f64,

        /// Longwave slope, W/m²/°C.
        #[serde(default = "default_b")]
        pub b: f64,

        /// Annual-mean insolation, W/m².
        #[serde(default = "default_insolation")]
        pub insolation: f64,

        #[serde(default = "default_albedo")]
        pub albedo: f64,

        /// Column heat capacity, J/m²/°C.
        #[serde(default = "default_heat_capacity")]
        pub heat_capacity: f64,

        #[serde(default)]
        pub seasonal_amplitude: f64,

        /// Initial temperatures, one per column.
        pub initial_ts: Vec<f64>,
    }

    fn default_a() -> f64 {
        210.0
    }

    fn default_b() -> f64 {
        2.0
    }

    fn default_insolation() -> f64 {
        341.3
    }

    fn default_albedo() -> f64 {
        0.3
    }

    fn default_heat_capacity() -> f64 {
        // A 10 m mixed layer of water.
        4.0e7
    }

    impl Params {
        /// Default parameters with the given initial temperatures.
        #[must_use]
        pub fn with_initial(initial_ts: Vec<f64>) -> Self {
            Self {
                a: default_a(),
                b: default_b(),
                insolation: default_insolation(),
                albedo: default_albedo(),
                heat_capacity: default_heat_capacity(),
                seasonal_amplitude: 0.0,
                initial_ts,
            }
        }

        /// The temperature at which absorbed and emitted radiation balance.
        #[must_use]
        pub fn equilibrium(&self) -> f64 {
            ((1.0 - self.albedo) * self.insolation - self.a) / self.b
        }
    }

    /// A full run configuration, as loaded from TOML.
    ///
    /// ```toml
    /// [stepper]
    /// num_steps_per_year = 90
    ///
    /// [model]
    /// initial_ts = [0.0, 30.0]
    /// ```
    #[derive(Debug, Clone, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct RunConfig {
        #[serde(default)]
        pub stepper: StepperConfig,
        pub model: Params,
    }

    /// Raised when a temperature stops being finite.
    #[derive(Debug, Error, PartialEq)]
    #[error("temperature is not finite after {steps} steps")]
    pub struct Blowup {
        pub steps: u64,
    }

    impl EnergyBalance {
        #[must_use]
        pub fn new(params: Params) -> Self {
            let ts = Array1::from_vec(params.initial_ts.clone()).into_dyn();
            let state = [("Ts", ts)].into_iter().collect();
            Self {
                params,
                state,
                years_completed: 0,
            }
        }

        #[must_use]
        pub fn params(&self) -> &Params {
            &self.params
        }

        /// Rollovers seen through [`PhysicalModel::on_new_year`].
        #[must_use]
        pub fn years_completed(&self) -> u64 {
            self.years_completed
        }

        fn insolation(&self, day_of_year: f64) -> f64 {
            let phase = 2.0 * std::f64::consts::PI * day_of_year
                / climstep_core::constants::DAYS_PER_YEAR;
            self.params.insolation * (1.0 + self.params.seasonal_amplitude * phase.cos())
        }
    }

    impl PhysicalModel for EnergyBalance {
        type Error = Blowup;

        fn state(&self) -> &StateVariables {
            &self.state
        }

        fn step_forward(&mut self, clock: Clock<'_>) -> Result<(), Self::Error> {
            let dt = clock.calendar.timestep().seconds();
            let day = clock.day_of_year().unwrap_or(0.0);
            let absorbed = (1.0 - self.params.albedo) * self.insolation(day);
            let Params {
                a,
                b,
                heat_capacity,
                ..
            } = self.params;

            let Some(ts) = self.state.get_mut("Ts") else {
                return Ok(());
            };
            ts.mapv_inplace(|t| t + dt * (absorbed - (a + b * t)) / heat_capacity);

            if ts.iter().all(|t| t.is_finite()) {
                Ok(())
            } else {
                Err(Blowup {
                    steps: clock.time.steps() + 1,
                })
            }
        }

        fn on_new_year(&mut self, _clock: Clock<'_>) {
            self.years_completed += 1;
        }
    }
}
