//! The action-consuming callback.

/// Receives actions from the dispatch bridge, synchronously and in order.
///
/// Every `FnMut(A)` closure is a sink:
///
/// ```
/// use progress_state::{Action, Progress, Sink};
///
/// let mut seen = Vec::new();
/// let mut sink = |a: Action<u8, ()>| seen.push(a.kind);
/// sink.dispatch(Action::new("op", Progress::pending()));
/// assert_eq!(seen, ["op"]);
/// ```
pub trait Sink<A> {
    /// Delivers one action.
    fn dispatch(&mut self, action: A);
}

impl<A, F> Sink<A> for F
where
    F: FnMut(A),
{
    #[inline]
    fn dispatch(&mut self, action: A) {
        self(action);
    }
}
