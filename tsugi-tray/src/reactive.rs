//! Minimal observable store.
//!
//! The host runtime's reactive state cells reduce, for a single-threaded
//! surface, to a value plus a subscriber list with synchronous
//! notify-on-set semantics. The surface keeps its rendered tree in a
//! [`Cell`]; the host's render hook subscribes.

/// A value whose subscribers are notified synchronously on every set.
pub struct Cell<T> {
    value: T,
    subscribers: Vec<Box<dyn Fn(&T) + Send>>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Cell<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<T> Cell<T> {
    pub fn new(value: T) -> Self {
        Cell {
            value,
            subscribers: Vec::new(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value, notifying every subscriber in registration
    /// order before returning.
    pub fn set(&mut self, value: T) {
        self.value = value;
        for subscriber in &self.subscribers {
            subscriber(&self.value);
        }
    }

    /// Register a subscriber. It is not called until the next set.
    pub fn subscribe(&mut self, subscriber: impl Fn(&T) + Send + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }
}
