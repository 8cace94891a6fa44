#![allow(clippy::float_cmp)]

use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn recording_state(initial: f64) -> (AngleState, Rc<RefCell<Vec<f64>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut state = AngleState::new(initial);
    state.set_observer(move |angle: f64| sink.borrow_mut().push(angle));
    (state, seen)
}

struct Counter {
    calls: Rc<RefCell<usize>>,
}

impl ValueObserver for Counter {
    fn on_value_change(&mut self, _angle: f64) {
        *self.calls.borrow_mut() += 1;
    }
}

#[test]
fn new_holds_initial_value() {
    assert_eq!(AngleState::new(42.0).value(), 42.0);
}

#[test]
fn default_starts_at_zero_without_observer() {
    let state = AngleState::default();
    assert_eq!(state.value(), 0.0);
    assert!(!state.has_observer());
}

#[test]
fn apply_updates_value_and_notifies() {
    let (mut state, seen) = recording_state(0.0);
    state.apply(5.0);
    assert_eq!(state.value(), 5.0);
    assert_eq!(*seen.borrow(), vec![5.0]);
}

#[test]
fn apply_same_value_notifies_every_time() {
    let (mut state, seen) = recording_state(0.0);
    state.apply(30.0);
    state.apply(30.0);
    assert_eq!(*seen.borrow(), vec![30.0, 30.0]);
}

#[test]
fn apply_without_observer_still_updates() {
    let mut state = AngleState::new(0.0);
    state.apply(12.0);
    assert_eq!(state.value(), 12.0);
}

#[test]
fn reset_does_not_notify() {
    let (mut state, seen) = recording_state(10.0);
    state.reset(200.0);
    assert_eq!(state.value(), 200.0);
    assert!(seen.borrow().is_empty());
}

#[test]
fn set_observer_replaces_previous() {
    let (mut state, first) = recording_state(0.0);
    let calls = Rc::new(RefCell::new(0));
    state.set_observer(Counter { calls: Rc::clone(&calls) });
    state.apply(1.0);
    assert!(first.borrow().is_empty());
    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn clear_observer_stops_notifications() {
    let (mut state, seen) = recording_state(0.0);
    state.clear_observer();
    assert!(!state.has_observer());
    state.apply(7.0);
    assert!(seen.borrow().is_empty());
    assert_eq!(state.value(), 7.0);
}

#[test]
fn debug_hides_observer_internals() {
    let (state, _seen) = recording_state(3.0);
    let s = format!("{state:?}");
    assert!(s.contains("AngleState"));
    assert!(s.contains("observer: true"));
}
