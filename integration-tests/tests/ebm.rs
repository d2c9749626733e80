use approx::assert_relative_eq;
use climstep_core::StepperConfig;
use climstep_observers::History;
use climstep_stepper::{IntegrateError, TimeStepper};
use integration_tests::test_models::ebm::{Blowup, EnergyBalance, Params, RunConfig};

fn stepper(params: Params, num_steps_per_year: u32) -> TimeStepper<EnergyBalance> {
    let config = StepperConfig {
        num_steps_per_year,
        ..StepperConfig::default()
    };
    TimeStepper::from_config(EnergyBalance::new(params), &config).unwrap()
}

#[test]
fn relaxes_to_radiative_equilibrium() {
    let params = Params::with_initial(vec![0.0, 30.0]);
    let equilibrium = params.equilibrium();
    let mut stepper = stepper(params, 90);

    stepper.integrate_years(30.0, false).unwrap();

    let ts = stepper.state().get("Ts").unwrap();
    assert_eq!(ts.len(), 2);
    for &t in ts {
        assert_relative_eq!(t, equilibrium, epsilon = 1e-6);
    }
    assert_eq!(stepper.model().years_completed(), 30);
}

#[test]
fn annual_mean_of_seasonal_cycle_matches_equilibrium() {
    let params = Params {
        seasonal_amplitude: 0.1,
        ..Params::with_initial(vec![10.0])
    };
    let equilibrium = params.equilibrium();
    let mut stepper = stepper(params, 90);

    // Spin up past the initial transient.
    stepper.integrate_years(30.0, false).unwrap();

    let mut history = History::every_step(["Ts"]);
    let solution = stepper
        .integrate_years_observed(1.0, false, &mut history)
        .unwrap();
    let mean = solution.average.unwrap();

    assert_relative_eq!(mean.get("Ts").unwrap().sum(), equilibrium, epsilon = 1e-6);

    let (min, max) = history
        .series("Ts")
        .map(|(_, ts)| ts.sum())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), t| {
            (lo.min(t), hi.max(t))
        });
    assert_eq!(history.len(), 90);
    assert!(max - min > 1.0, "seasonal range {min}..{max} is too small");
}

#[test]
fn unstable_timestep_reports_blowup() {
    let params = Params {
        heat_capacity: 1.0,
        ..Params::with_initial(vec![15.0])
    };
    let mut stepper = stepper(params, 90);

    let err = stepper.integrate_years(1.0, false).unwrap_err();

    match err {
        IntegrateError::Physics(Blowup { steps }) => {
            assert!(steps <= 90);
            assert_eq!(stepper.time().steps(), steps - 1);
        }
        other => panic!("expected a physics failure, got {other}"),
    }
}

#[test]
fn run_config_loads_from_toml() {
    let config: RunConfig = toml::from_str(
        r"
        [stepper]
        num_steps_per_year = 360

        [model]
        albedo = 0.32
        initial_ts = [0.0, 5.0, 10.0]
        ",
    )
    .unwrap();

    assert_eq!(config.stepper.num_steps_per_year, 360);
    assert!(!config.stepper.verbose);
    assert_relative_eq!(config.model.albedo, 0.32);
    assert_relative_eq!(config.model.b, 2.0);

    let mut stepper =
        TimeStepper::from_config(EnergyBalance::new(config.model), &config.stepper).unwrap();
    stepper.integrate_years(1.0, config.stepper.verbose).unwrap();

    assert_eq!(stepper.time().steps(), 360);
    assert_eq!(stepper.model().years_completed(), 1);
}

#[test]
fn missing_stepper_table_uses_defaults() {
    let config: RunConfig = toml::from_str(
        r"
        [model]
        initial_ts = [1.0]
        ",
    )
    .unwrap();

    assert_eq!(config.stepper, StepperConfig::default());
}

#[test]
fn unknown_model_keys_are_rejected() {
    let result: Result<RunConfig, _> = toml::from_str(
        r"
        [model]
        initial_ts = [1.0]
        emissivity = 0.6
        ",
    );

    assert!(result.is_err());
}
