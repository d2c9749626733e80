use climstep_core::{Calendar, StateVariables, Tick, TimeState};

/// Event emitted by an integration after each completed step.
///
/// Events borrow the stepper, so observers see the calendar, the time state,
/// and the model state exactly as they are after the step.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The 1-based number of the step within this integration.
    pub step: u64,

    /// The total number of steps this integration will take if not stopped.
    pub total_steps: u64,

    /// Whether the step completed a calendar year.
    pub tick: Tick,

    /// The calendar in use.
    pub calendar: &'a Calendar,

    /// The time state after the step.
    pub time: &'a TimeState,

    /// The model state after the step.
    pub state: &'a StateVariables,
}

impl Event<'_> {
    /// Returns `true` if this is the last step of the integration.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.step == self.total_steps
    }
}
