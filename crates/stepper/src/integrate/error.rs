use thiserror::Error;

use super::SpanError;

/// Errors that can occur during an integration.
///
/// `E` is the error type of the model being integrated.
#[derive(Debug, Error)]
pub enum IntegrateError<E> {
    /// The physical step failed; the integration stopped at that step.
    #[error(transparent)]
    Physics(E),

    /// The requested span does not cover a single step.
    #[error(transparent)]
    Span(#[from] SpanError),

    /// A tracked state variable vanished or changed shape mid-window.
    #[error("state variable `{name}` disappeared or changed shape during time-averaging")]
    StateMismatch { name: String },
}
