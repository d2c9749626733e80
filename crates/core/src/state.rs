use std::collections::{BTreeMap, btree_map};

use ndarray::ArrayD;

/// Named state arrays of a physical model.
///
/// Each entry maps a variable name (e.g. `"Ts"` for surface temperature) to
/// an N-dimensional array of values.
/// Iteration is ordered by name.
///
/// The set only supports what time-averaging needs: iteration, a zeroed copy
/// with matching shapes, elementwise addition, and division by a scalar.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StateVariables {
    vars: BTreeMap<String, ArrayD<f64>>,
}

impl StateVariables {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a variable, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: ArrayD<f64>) -> Option<ArrayD<f64>> {
        self.vars.insert(name.into(), value)
    }

    /// Returns the array stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ArrayD<f64>> {
        self.vars.get(name)
    }

    /// Returns a mutable reference to the array stored under `name`.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut ArrayD<f64>> {
        self.vars.get_mut(name)
    }

    /// Returns `true` if a variable named `name` exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns `true` if the set holds no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Returns the variable names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    /// Iterates over `(name, array)` pairs in name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, ArrayD<f64>> {
        self.vars.iter()
    }

    /// Returns a set with the same names and shapes, filled with zeros.
    #[must_use]
    pub fn zeros_like(&self) -> Self {
        self.vars
            .iter()
            .map(|(name, value)| (name.clone(), ArrayD::zeros(value.raw_dim())))
            .collect()
    }

    /// Adds `value` elementwise into the variable `name`.
    ///
    /// Returns `false`, leaving the set unchanged, if there is no such
    /// variable or the shapes differ.
    pub fn add_to(&mut self, name: &str, value: &ArrayD<f64>) -> bool {
        match self.vars.get_mut(name) {
            Some(target) if target.shape() == value.shape() => {
                *target += value;
                true
            }
            _ => false,
        }
    }

    /// Divides every element of every variable by `divisor`.
    pub fn div_scalar(&mut self, divisor: f64) {
        for value in self.vars.values_mut() {
            *value /= divisor;
        }
    }
}

impl<S: Into<String>> FromIterator<(S, ArrayD<f64>)> for StateVariables {
    fn from_iter<T: IntoIterator<Item = (S, ArrayD<f64>)>>(iter: T) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a StateVariables {
    type Item = (&'a String, &'a ArrayD<f64>);
    type IntoIter = btree_map::Iter<'a, String, ArrayD<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.iter()
    }
}

impl IntoIterator for StateVariables {
    type Item = (String, ArrayD<f64>);
    type IntoIter = btree_map::IntoIter<String, ArrayD<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.into_iter()
    }
}
