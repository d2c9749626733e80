use climstep_core::{Observer, StateVariables, Tick};
use ndarray::ArrayD;

use crate::traits::{HasState, HasTimeState};

/// When a [`History`] takes a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    /// After every step.
    EveryStep,

    /// After each step that completes a calendar year.
    EveryYear,
}

/// A snapshot of selected state variables after one step.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Total steps taken by the stepper when the sample was taken.
    pub steps: u64,

    /// Simulated days elapsed when the sample was taken.
    pub days_elapsed: f64,

    /// Copies of the recorded variables present in the state.
    pub values: StateVariables,
}

/// An observer that records selected state variables as the model runs.
///
/// Only the named variables are copied.
/// A name missing from the state at sample time is skipped for that sample.
///
/// # Example
///
/// ```
/// use climstep_core::{Calendar, StateVariables, StaticState};
/// use climstep_observers::History;
/// use climstep_stepper::TimeStepper;
/// use ndarray::arr1;
///
/// let state: StateVariables = [("Ts", arr1(&[288.0]).into_dyn())].into_iter().collect();
/// let mut stepper = TimeStepper::new(StaticState::new(state), Calendar::new(12).unwrap());
///
/// let mut history = History::yearly(["Ts"]);
/// stepper.integrate_years_observed(3.0, false, &mut history).unwrap();
///
/// assert_eq!(history.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    names: Vec<String>,
    cadence: Cadence,
    samples: Vec<Sample>,
}

impl History {
    /// Creates a history that samples `names` with the given cadence.
    pub fn new<I, S>(names: I, cadence: Cadence) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            cadence,
            samples: Vec::new(),
        }
    }

    /// Creates a history that samples `names` after every step.
    pub fn every_step<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names, Cadence::EveryStep)
    }

    /// Creates a history that samples `names` at each year rollover.
    pub fn yearly<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names, Cadence::EveryYear)
    }

    /// Records a sample unconditionally.
    pub fn record(&mut self, steps: u64, days_elapsed: f64, state: &StateVariables) {
        let values = self
            .names
            .iter()
            .filter_map(|name| state.get(name).map(|value| (name.as_str(), value.clone())))
            .collect();

        self.samples.push(Sample {
            steps,
            days_elapsed,
            values,
        });
    }

    /// Returns the recorded samples in order.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Returns the number of recorded samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns `(days_elapsed, value)` pairs for one variable.
    ///
    /// Samples that did not contain `name` are skipped.
    pub fn series<'a>(&'a self, name: &'a str) -> impl Iterator<Item = (f64, &'a ArrayD<f64>)> {
        self.samples
            .iter()
            .filter_map(move |sample| Some((sample.days_elapsed, sample.values.get(name)?)))
    }

    /// Discards all samples, keeping the selection and cadence.
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

impl<E, A> Observer<E, A> for History
where
    E: HasTimeState + HasState,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let due = match self.cadence {
            Cadence::EveryStep => true,
            Cadence::EveryYear => event.tick() == Tick::NewYear,
        };

        if due {
            let time = event.time();
            self.record(time.steps(), time.days_elapsed(), event.state());
        }
        None
    }
}

/// Allows `&mut History` to be passed to integrations that take an observer
/// by value, so the samples can be read afterwards.
impl<E, A> Observer<E, A> for &mut History
where
    E: HasTimeState + HasState,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
