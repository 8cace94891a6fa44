//! Authoritative dial value and its change observer.
//!
//! DESIGN
//! ======
//! `AngleState` has exactly one writer: the gesture tracker's accepted-update
//! path, which goes through the crate-private [`AngleState::apply`]. Anything
//! else reads. Programmatic resets exist for hosts that need to re-seed the
//! value and do not notify. Values are trusted as given; clamping happens
//! before they get here.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::fmt;

use tracing::trace;

/// Receives every accepted value change, synchronously and in order.
pub trait ValueObserver {
    fn on_value_change(&mut self, angle: f64);
}

impl<F> ValueObserver for F
where
    F: FnMut(f64),
{
    fn on_value_change(&mut self, angle: f64) {
        self(angle);
    }
}

/// Current angle plus a single observer slot.
pub struct AngleState {
    value: f64,
    observer: Option<Box<dyn ValueObserver>>,
}

impl AngleState {
    /// Start at `initial`. Keeping it inside the configured range is the
    /// caller's job.
    #[must_use]
    pub fn new(initial: f64) -> Self {
        Self { value: initial, observer: None }
    }

    /// The current angle in degrees.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Install the observer, replacing any previous one.
    pub fn set_observer<O>(&mut self, observer: O)
    where
        O: ValueObserver + 'static,
    {
        self.observer = Some(Box::new(observer));
    }

    /// Remove the observer, if any.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    #[must_use]
    pub fn has_observer(&self) -> bool {
        self.observer.is_some()
    }

    /// Overwrite the value without notifying.
    pub fn reset(&mut self, value: f64) {
        trace!(from = self.value, to = value, "angle reset");
        self.value = value;
    }

    /// Store an accepted value and notify the observer. Repeated values are
    /// still delivered.
    pub(crate) fn apply(&mut self, value: f64) {
        self.value = value;
        if let Some(observer) = self.observer.as_mut() {
            observer.on_value_change(value);
        }
    }
}

impl Default for AngleState {
    fn default() -> Self {
        Self::new(crate::consts::DEFAULT_VALUE)
    }
}

impl fmt::Debug for AngleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AngleState")
            .field("value", &self.value)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}
