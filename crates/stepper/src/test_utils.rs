use std::convert::Infallible;

use climstep_core::{Clock, PhysicalModel, StateVariables};
use ndarray::{arr1, arr2};
use thiserror::Error;

/// A test model whose state records the 1-based index of the last step.
///
/// - `"i"`: `[step]`, the number of completed physical steps
/// - `"c"`: a 2×2 array held constant at 5.0
#[derive(Debug)]
pub(crate) struct StepIndex {
    state: StateVariables,
    pub(crate) seen_steps: Vec<u64>,
    pub(crate) new_years: Vec<u64>,
}

impl StepIndex {
    pub(crate) fn new() -> Self {
        let state = [
            ("i", arr1(&[0.0]).into_dyn()),
            ("c", arr2(&[[5.0, 5.0], [5.0, 5.0]]).into_dyn()),
        ]
        .into_iter()
        .collect();

        Self {
            state,
            seen_steps: Vec::new(),
            new_years: Vec::new(),
        }
    }
}

impl PhysicalModel for StepIndex {
    type Error = Infallible;

    fn state(&self) -> &StateVariables {
        &self.state
    }

    fn step_forward(&mut self, clock: Clock<'_>) -> Result<(), Self::Error> {
        self.seen_steps.push(clock.time.steps());
        if let Some(i) = self.state.get_mut("i") {
            i.mapv_inplace(|v| v + 1.0);
        }
        Ok(())
    }

    fn on_new_year(&mut self, clock: Clock<'_>) {
        self.new_years.push(clock.time.years_elapsed());
    }
}

#[derive(Debug, Error)]
#[error("physics diverged at step {step}")]
pub(crate) struct Diverged {
    pub(crate) step: u64,
}

/// A test model that fails on a chosen 1-based step.
#[derive(Debug)]
pub(crate) struct FailAt {
    fail_at: u64,
    attempts: u64,
    state: StateVariables,
}

impl FailAt {
    pub(crate) fn step(fail_at: u64) -> Self {
        Self {
            fail_at,
            attempts: 0,
            state: [("x", arr1(&[1.0, 2.0]).into_dyn())].into_iter().collect(),
        }
    }
}

impl PhysicalModel for FailAt {
    type Error = Diverged;

    fn state(&self) -> &StateVariables {
        &self.state
    }

    fn step_forward(&mut self, _clock: Clock<'_>) -> Result<(), Self::Error> {
        self.attempts += 1;
        if self.attempts == self.fail_at {
            Err(Diverged {
                step: self.attempts,
            })
        } else {
            Ok(())
        }
    }
}

/// A test model that drops a variable after its first step.
#[derive(Debug)]
pub(crate) struct Shrinking {
    state: StateVariables,
}

impl Shrinking {
    pub(crate) fn new() -> Self {
        Self {
            state: [
                ("kept", arr1(&[1.0]).into_dyn()),
                ("dropped", arr1(&[2.0]).into_dyn()),
            ]
            .into_iter()
            .collect(),
        }
    }
}

impl PhysicalModel for Shrinking {
    type Error = Infallible;

    fn state(&self) -> &StateVariables {
        &self.state
    }

    fn step_forward(&mut self, clock: Clock<'_>) -> Result<(), Self::Error> {
        if clock.time.steps() >= 1 {
            self.state = [("kept", arr1(&[1.0]).into_dyn())].into_iter().collect();
        }
        Ok(())
    }
}
