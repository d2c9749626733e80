use climstep_core::StateVariables;

/// Indicates how an integration terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of an integration.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the integration terminated.
    pub status: Status,

    /// Number of steps completed.
    pub steps: u64,

    /// Time-mean of every state variable over the completed steps.
    ///
    /// Only averaging integrations (over a span of years) produce a mean.
    pub average: Option<StateVariables>,
}
