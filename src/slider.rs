//! The assembled control: config in, gesture responder and layout out.

#[cfg(test)]
#[path = "slider_test.rs"]
mod slider_test;

use tracing::debug;

use crate::config::SliderConfig;
use crate::geometry::{Geometry, Point, Viewport};
use crate::layout::{DialLayout, DialStyle};
use crate::state::{AngleState, ValueObserver};
use crate::tracker::{GesturePhase, GestureResponder, GestureTracker, MoveOutcome};

/// One dial instance. Wraps a [`GestureTracker`] and the styling needed to
/// produce a [`DialLayout`].
#[derive(Debug)]
pub struct CircleSlider {
    tracker: GestureTracker,
    style: DialStyle,
}

impl CircleSlider {
    /// Build a slider from `config`. `viewport` supplies the center when the
    /// config has none. The config is used as given; call
    /// [`SliderConfig::validate`] first if it comes from outside.
    #[must_use]
    pub fn new(config: &SliderConfig, viewport: Viewport) -> Self {
        let geometry = config.geometry(viewport);
        debug!(
            dial_radius = geometry.dial_radius,
            button_radius = geometry.button_radius,
            center_x = geometry.center.x,
            center_y = geometry.center.y,
            min = config.min,
            max = config.max,
            value = config.value,
            "circle slider created"
        );
        let tracker = GestureTracker::new(geometry, config.range(), AngleState::new(config.value));
        Self { tracker, style: DialStyle::from(config) }
    }

    /// Builder-style observer registration.
    #[must_use]
    pub fn with_observer<O>(mut self, observer: O) -> Self
    where
        O: ValueObserver + 'static,
    {
        self.set_observer(observer);
        self
    }

    pub fn set_observer<O>(&mut self, observer: O)
    where
        O: ValueObserver + 'static,
    {
        self.tracker.state_mut().set_observer(observer);
    }

    pub fn clear_observer(&mut self) {
        self.tracker.state_mut().clear_observer();
    }

    /// Programmatically move the thumb. The observer is not notified.
    pub fn reset(&mut self, value: f64) {
        self.tracker.state_mut().reset(value);
    }

    // --- Queries ---

    #[must_use]
    pub fn value(&self) -> f64 {
        self.tracker.value()
    }

    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.tracker.phase()
    }

    #[must_use]
    pub fn geometry(&self) -> &Geometry {
        self.tracker.geometry()
    }

    #[must_use]
    pub fn tracker(&self) -> &GestureTracker {
        &self.tracker
    }

    /// Layout for the current value.
    #[must_use]
    pub fn layout(&self) -> DialLayout {
        DialLayout::compute(self.tracker.geometry(), self.tracker.value(), self.style.clone())
    }

    /// Thumb center in host coordinates, for host-side hit testing.
    #[must_use]
    pub fn thumb_center(&self) -> Point {
        let local = self.tracker.mapper().polar_to_cartesian(self.tracker.value());
        self.tracker.geometry().to_host(local)
    }
}

impl GestureResponder for CircleSlider {
    fn wants_gesture(&self, sample: Point) -> bool {
        self.tracker.wants_gesture(sample)
    }

    fn on_start(&mut self, sample: Point) -> bool {
        self.tracker.on_start(sample)
    }

    fn on_move(&mut self, sample: Point) -> MoveOutcome {
        self.tracker.on_move(sample)
    }

    fn on_end(&mut self, sample: Point) {
        self.tracker.on_end(sample);
    }

    fn on_terminate(&mut self) {
        self.tracker.on_terminate();
    }
}
