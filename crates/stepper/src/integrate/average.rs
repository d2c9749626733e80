use climstep_core::StateVariables;

use super::IntegrateError;

/// Running sum of state variables over an integration window.
///
/// The accumulator is created from the state at the start of the window and
/// tracks exactly those variables.
/// Variables a model adds mid-window are ignored; a tracked variable that
/// disappears or changes shape is an error.
#[derive(Debug, Clone)]
pub(crate) struct TimeAverage {
    sum: StateVariables,
    samples: u64,
}

impl TimeAverage {
    /// Starts an empty window shaped like `state`.
    pub(crate) fn new(state: &StateVariables) -> Self {
        Self {
            sum: state.zeros_like(),
            samples: 0,
        }
    }

    /// Adds one sample of `state` to the running sum.
    ///
    /// The sum is unchanged if any tracked variable is missing or misshapen.
    pub(crate) fn accumulate<E>(&mut self, state: &StateVariables) -> Result<(), IntegrateError<E>> {
        for (name, sum) in &self.sum {
            match state.get(name) {
                Some(value) if value.shape() == sum.shape() => {}
                _ => return Err(IntegrateError::StateMismatch { name: name.clone() }),
            }
        }

        for (name, value) in state {
            if self.sum.contains(name) {
                self.sum.add_to(name, value);
            }
        }
        self.samples += 1;

        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn samples(&self) -> u64 {
        self.samples
    }

    /// Divides the sum by the number of samples, producing the time-mean.
    ///
    /// An empty window yields zeros.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn finish(self) -> StateVariables {
        let mut mean = self.sum;
        if self.samples > 0 {
            mean.div_scalar(self.samples as f64);
        }
        mean
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use ndarray::{arr1, arr2};

    fn state(x: f64, y: f64) -> StateVariables {
        [
            ("x", arr1(&[x, 2.0 * x]).into_dyn()),
            ("y", arr2(&[[y], [y]]).into_dyn()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn mean_of_samples() {
        let mut average = TimeAverage::new(&state(0.0, 0.0));
        for i in 1..=4 {
            let i = f64::from(i);
            average.accumulate::<Infallible>(&state(i, 10.0)).unwrap();
        }
        assert_eq!(average.samples(), 4);

        let mean = average.finish();
        assert_eq!(mean.get("x"), Some(&arr1(&[2.5, 5.0]).into_dyn()));
        assert!(mean.get("y").unwrap().iter().all(|&v| v == 10.0));
    }

    #[test]
    fn empty_window_is_zero() {
        let mean = TimeAverage::new(&state(3.0, 4.0)).finish();
        assert_eq!(mean, state(0.0, 0.0));
    }

    #[test]
    fn new_variables_are_ignored() {
        let mut average = TimeAverage::new(&state(0.0, 0.0));

        let mut grown = state(1.0, 1.0);
        grown.insert("z", arr1(&[9.0]).into_dyn());
        average.accumulate::<Infallible>(&grown).unwrap();

        let mean = average.finish();
        assert!(!mean.contains("z"));
        assert_eq!(mean, state(1.0, 1.0));
    }

    #[test]
    fn misshapen_variable_is_an_error() {
        let mut average = TimeAverage::new(&state(0.0, 0.0));

        let mut changed = state(1.0, 1.0);
        changed.insert("y", arr1(&[1.0]).into_dyn());

        let err = average.accumulate::<Infallible>(&changed).unwrap_err();
        assert!(matches!(err, IntegrateError::StateMismatch { ref name } if name == "y"));
        assert_eq!(average.samples(), 0);
    }
}
