use climstep_core::{
    Calendar, CalendarError, Clock, PhysicalModel, StateVariables, StepperConfig, Tick, TimeState,
};
use tracing::{debug, trace};

/// Drives a [`PhysicalModel`] forward in fixed timesteps.
///
/// A `TimeStepper` owns the model together with its [`Calendar`] and
/// [`TimeState`].
/// Every step first lets the model update its physical state and then
/// advances the time counters, so the counters always describe the last step
/// that completed successfully.
///
/// All mutating operations take `&mut self`.
/// Sharing one stepper between threads requires external locking.
#[derive(Debug, Clone)]
pub struct TimeStepper<M> {
    model: M,
    calendar: Calendar,
    time: TimeState,
}

impl<M> TimeStepper<M>
where
    M: PhysicalModel,
{
    /// Creates a stepper at time zero.
    pub fn new(model: M, calendar: Calendar) -> Self {
        Self {
            model,
            calendar,
            time: TimeState::new(),
        }
    }

    /// Creates a stepper from a [`StepperConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the configuration describes an invalid
    /// calendar.
    pub fn from_config(model: M, config: &StepperConfig) -> Result<Self, CalendarError> {
        Ok(Self::new(model, config.calendar()?))
    }

    /// Replaces the calendar and resets the time state to zero.
    ///
    /// This is destructive: elapsed steps, days, and years are discarded even
    /// if `num_steps_per_year` is unchanged.
    /// The model's physical state is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::NotPositive`] if `num_steps_per_year` is zero,
    /// in which case neither the calendar nor the time state changes.
    pub fn reconfigure(&mut self, num_steps_per_year: u32) -> Result<(), CalendarError> {
        let calendar = Calendar::new(num_steps_per_year)?;
        debug!(
            num_steps_per_year,
            timestep = %calendar.timestep(),
            discarded_steps = self.time.steps(),
            "reconfigured calendar"
        );
        self.calendar = calendar;
        self.time = TimeState::new();
        Ok(())
    }

    /// Advances the simulation by exactly one timestep.
    ///
    /// Calls [`PhysicalModel::step_forward`] and, if it succeeds, advances
    /// the time state.
    /// When the step completes a calendar year, [`PhysicalModel::on_new_year`]
    /// is called afterwards.
    ///
    /// # Errors
    ///
    /// Returns the model's error unchanged if the physical step fails.
    /// The time state is not advanced in that case.
    pub fn advance_one_step(&mut self) -> Result<Tick, M::Error> {
        self.model.step_forward(Clock::new(&self.calendar, &self.time))?;

        let tick = self.time.advance(&self.calendar);
        if tick == Tick::NewYear {
            trace!(
                years_elapsed = self.time.years_elapsed(),
                steps = self.time.steps(),
                "completed calendar year"
            );
            self.model.on_new_year(Clock::new(&self.calendar, &self.time));
        }

        Ok(tick)
    }

    /// Returns the current calendar.
    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Returns the current time state.
    pub fn time(&self) -> &TimeState {
        &self.time
    }

    /// Returns a clock view of the current calendar and time.
    pub fn clock(&self) -> Clock<'_> {
        Clock::new(&self.calendar, &self.time)
    }

    /// Returns the model's current state variables.
    pub fn state(&self) -> &StateVariables {
        self.model.state()
    }

    /// Returns a reference to the model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Returns a mutable reference to the model.
    ///
    /// Useful for adjusting physical parameters or state between
    /// integrations; the time state cannot be changed this way.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Consumes the stepper and returns the model.
    pub fn into_model(self) -> M {
        self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use climstep_core::{
        StaticState,
        constants::{SECONDS_PER_DAY, SECONDS_PER_YEAR},
    };

    use crate::test_utils::{FailAt, StepIndex};

    fn bookkeeping(num_steps_per_year: u32) -> TimeStepper<StaticState> {
        TimeStepper::new(
            StaticState::default(),
            Calendar::new(num_steps_per_year).unwrap(),
        )
    }

    #[test]
    fn four_steps_make_one_year() {
        let mut stepper = bookkeeping(90);
        stepper.reconfigure(4).unwrap();

        for _ in 0..4 {
            stepper.advance_one_step().unwrap();
        }

        let time = stepper.time();
        assert_eq!(time.steps(), 4);
        assert_eq!(time.day_of_year_index(), 0);
        assert_eq!(time.years_elapsed(), 1);
    }

    #[test]
    fn reconfigure_resets_progress_even_when_unchanged() {
        let mut stepper = bookkeeping(4);
        for _ in 0..6 {
            stepper.advance_one_step().unwrap();
        }
        assert_eq!(stepper.time().steps(), 6);

        stepper.reconfigure(4).unwrap();

        assert_eq!(stepper.time(), &TimeState::new());
        assert_eq!(stepper.calendar().num_steps_per_year(), 4);
    }

    #[test]
    fn invalid_reconfigure_changes_nothing() {
        let mut stepper = bookkeeping(12);
        for _ in 0..5 {
            stepper.advance_one_step().unwrap();
        }
        let before = *stepper.time();

        assert_eq!(stepper.reconfigure(0), Err(CalendarError::NotPositive(0)));
        assert_eq!(stepper.time(), &before);
        assert_eq!(stepper.calendar().num_steps_per_year(), 12);
    }

    #[test]
    fn failed_physics_leaves_time_unchanged() {
        let mut stepper = TimeStepper::new(FailAt::step(3), Calendar::new(4).unwrap());

        stepper.advance_one_step().unwrap();
        stepper.advance_one_step().unwrap();
        let before = *stepper.time();

        let err = stepper.advance_one_step().unwrap_err();
        assert_eq!(err.step, 3);
        assert_eq!(stepper.time(), &before);
        assert_eq!(stepper.time().steps(), 2);
    }

    #[test]
    fn physics_sees_time_before_the_advance() {
        let mut stepper = TimeStepper::new(StepIndex::new(), Calendar::new(4).unwrap());

        stepper.advance_one_step().unwrap();
        stepper.advance_one_step().unwrap();

        assert_eq!(stepper.model().seen_steps, vec![0, 1]);
        assert_eq!(stepper.state().get("i").unwrap().sum(), 2.0);
    }

    #[test]
    fn new_year_hook_fires_once_per_rollover() {
        let mut stepper = TimeStepper::new(StepIndex::new(), Calendar::new(3).unwrap());

        let ticks: Vec<_> = (0..7)
            .map(|_| stepper.advance_one_step().unwrap())
            .collect();

        assert_eq!(ticks.iter().filter(|&&t| t == Tick::NewYear).count(), 2);
        assert_eq!(stepper.model().new_years, vec![1, 2]);
    }

    #[test]
    fn into_model_returns_the_model() {
        let mut stepper = TimeStepper::new(StepIndex::new(), Calendar::default());
        stepper.advance_one_step().unwrap();
        stepper.model_mut().seen_steps.clear();

        let model = stepper.into_model();
        assert!(model.seen_steps.is_empty());
        assert_eq!(model.state().get("i").unwrap().sum(), 1.0);
    }

    proptest! {
        #[test]
        fn reconfigure_zeroes_all_counters(n in 1u32..10_000, warmup in 0usize..50) {
            let mut stepper = bookkeeping(7);
            for _ in 0..warmup {
                stepper.advance_one_step().unwrap();
            }

            stepper.reconfigure(n).unwrap();

            let time = stepper.time();
            prop_assert_eq!(stepper.calendar().num_steps_per_year(), n);
            prop_assert_eq!(time.steps(), 0);
            prop_assert_eq!(time.days_elapsed(), 0.0);
            prop_assert_eq!(time.years_elapsed(), 0);
            prop_assert_eq!(time.day_of_year_index(), 0);
        }

        #[test]
        fn one_year_of_steps_wraps_the_calendar(n in 1u32..500) {
            let mut stepper = bookkeeping(90);
            stepper.reconfigure(n).unwrap();

            for _ in 0..n {
                stepper.advance_one_step().unwrap();
            }

            let time = stepper.time();
            prop_assert_eq!(time.day_of_year_index(), 0);
            prop_assert_eq!(time.years_elapsed(), 1);
            prop_assert_eq!(time.steps(), u64::from(n));
        }
    }

    #[test]
    fn days_elapsed_tracks_step_count() {
        let mut stepper = bookkeeping(90);
        for k in 1..=200u32 {
            stepper.advance_one_step().unwrap();
            let expected = f64::from(k) * (SECONDS_PER_YEAR / 90.0) / SECONDS_PER_DAY;
            assert_relative_eq!(stepper.time().days_elapsed(), expected, max_relative = 1e-12);
        }
    }
}
