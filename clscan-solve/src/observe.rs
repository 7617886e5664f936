/// Receives solver events as the search progresses.
///
/// Observers let callers watch a search without the solver owning any
/// output sink or process-wide state: progress printing, logging, and test
/// instrumentation are all observers installed by the caller.
///
/// Closures automatically implement `Observer`, and a built-in impl for
/// `()` provides a no-op observer.
pub trait Observer<E> {
    /// Observes one solver event.
    fn observe(&mut self, event: &E);
}

/// Blanket implementation for observer closures.
impl<E, F> Observer<E> for F
where
    F: FnMut(&E),
{
    fn observe(&mut self, event: &E) {
        self(event);
    }
}

/// A no-op observer.
impl<E> Observer<E> for () {
    fn observe(&mut self, _event: &E) {}
}
