/// Receives events from a running integration and optionally returns an
/// action.
///
/// Each integrator defines its own event and action types.
/// Returning `None` lets the integration continue unchanged.
///
/// Observers are implemented for:
///
/// - `()`, which ignores every event,
/// - any closure `FnMut(&E) -> Option<A>`.
///
/// # Example
///
/// ```
/// use climstep_core::Observer;
///
/// struct CountEvents(usize);
///
/// impl<E> Observer<E, ()> for CountEvents {
///     fn observe(&mut self, _event: &E) -> Option<()> {
///         self.0 += 1;
///         None
///     }
/// }
///
/// let mut counter = CountEvents(0);
/// let action: Option<()> = counter.observe(&"step");
/// assert!(action.is_none());
/// assert_eq!(counter.0, 1);
/// ```
pub trait Observer<E, A> {
    /// Observes an event, optionally returning an action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}
