//! The engines report what happened as plain event values. Whoever drives a
//! session decides what to do with them: print a line, show a toast, speak.
//! Sinks never feed back into session state.

/// Consumer of engine feedback events.
pub trait EventSink<E> {
    /// Receive one event.
    fn emit(&mut self, event: E);
}

impl<E> EventSink<E> for Vec<E> {
    fn emit(&mut self, event: E) {
        self.push(event);
    }
}

/// A sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl<E> EventSink<E> for Discard {
    fn emit(&mut self, _event: E) {}
}

impl<E, S: EventSink<E> + ?Sized> EventSink<E> for &mut S {
    fn emit(&mut self, event: E) {
        (**self).emit(event);
    }
}
