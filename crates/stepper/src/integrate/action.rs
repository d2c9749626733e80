/// Control actions an observer can return during an integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current step and return the result so far.
    StopEarly,
}
