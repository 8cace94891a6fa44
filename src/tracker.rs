//! Gesture state machine for dragging the thumb around the dial.
//!
//! This module turns a stream of host pointer samples into value updates.
//! Each move sample is mapped into dial-local space, converted to an angle,
//! and either applied (clamped to the configured range) or declined when it
//! lands in the dead zone near the 0°/360° seam. Declining is how the control
//! tells an enclosing scroll view that it may take the gesture over; the
//! tracker never assumes the host actually does so.

#[cfg(test)]
#[path = "tracker_test.rs"]
mod tracker_test;

use tracing::{debug, trace};

use crate::config::AngleRange;
use crate::consts::DEAD_ZONE_THRESHOLD_DEG;
use crate::geometry::{Geometry, Point};
use crate::mapper::CoordinateMapper;
use crate::state::AngleState;

/// Where the tracker is in the gesture lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No active touch.
    #[default]
    Idle,
    /// A touch is owned by this control and its samples are being applied.
    Dragging,
    /// The last sample landed in the dead zone and was declined. The touch is
    /// still ours until the host says otherwise.
    NearSeam,
}

impl GesturePhase {
    /// Whether a gesture is in progress.
    #[must_use]
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Result of feeding one move sample to the tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// The sample was applied. `raw` is the mapped angle, `value` the clamped
    /// angle that was stored and sent to the observer.
    Accepted { raw: f64, value: f64 },
    /// The sample mapped into the dead zone and was not applied. The host may
    /// hand the gesture to an enclosing responder.
    Declined { raw: f64 },
    /// No gesture is active; the sample was dropped unmapped.
    Ignored,
}

impl MoveOutcome {
    /// The stored value, if the sample was accepted.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Accepted { value, .. } => Some(*value),
            Self::Declined { .. } | Self::Ignored => None,
        }
    }

    /// Whether the control is offering to give up the gesture.
    #[must_use]
    pub fn releases_gesture(&self) -> bool {
        matches!(self, Self::Declined { .. })
    }
}

/// Capability a control exposes to the host's gesture-responder system.
///
/// Claim and release decisions are return values; nothing here mutates
/// handler tables.
pub trait GestureResponder {
    /// Host query: should this control keep (or take) the gesture at `sample`?
    fn wants_gesture(&self, sample: Point) -> bool;

    /// A touch began. Returns whether the control claims it.
    fn on_start(&mut self, sample: Point) -> bool;

    /// The pointer moved to `sample`.
    fn on_move(&mut self, sample: Point) -> MoveOutcome;

    /// The touch was released.
    fn on_end(&mut self, sample: Point);

    /// The host handed the gesture to another responder. No further samples
    /// arrive for it and the current value is kept as is.
    fn on_terminate(&mut self);
}

/// Drives an [`AngleState`] from pointer samples.
#[derive(Debug)]
pub struct GestureTracker {
    geometry: Geometry,
    mapper: CoordinateMapper,
    range: AngleRange,
    phase: GesturePhase,
    state: AngleState,
}

impl GestureTracker {
    #[must_use]
    pub fn new(geometry: Geometry, range: AngleRange, state: AngleState) -> Self {
        Self { geometry, mapper: CoordinateMapper::from_geometry(&geometry), range, phase: GesturePhase::Idle, state }
    }

    // --- Queries ---

    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// The current angle.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.state.value()
    }

    #[must_use]
    pub fn state(&self) -> &AngleState {
        &self.state
    }

    /// Mutable access for observer registration and programmatic resets.
    pub fn state_mut(&mut self) -> &mut AngleState {
        &mut self.state
    }

    #[must_use]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    #[must_use]
    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    #[must_use]
    pub fn range(&self) -> AngleRange {
        self.range
    }

    // --- Decisions ---

    /// Map a host-space sample to its raw (unclamped) dial angle.
    #[must_use]
    pub fn angle_at(&self, sample: Point) -> f64 {
        self.mapper.point_to_polar(self.geometry.to_local(sample))
    }

    /// Whether `angle` lies in the dead zone near the seam.
    #[must_use]
    pub fn is_dead_zone(angle: f64) -> bool {
        angle > DEAD_ZONE_THRESHOLD_DEG
    }

    fn set_phase(&mut self, next: GesturePhase) {
        if self.phase != next {
            debug!(from = ?self.phase, to = ?next, "gesture phase");
            self.phase = next;
        }
    }
}

impl GestureResponder for GestureTracker {
    fn wants_gesture(&self, sample: Point) -> bool {
        !Self::is_dead_zone(self.angle_at(sample))
    }

    fn on_start(&mut self, sample: Point) -> bool {
        trace!(x = sample.x, y = sample.y, "gesture start");
        self.set_phase(GesturePhase::Dragging);
        true
    }

    fn on_move(&mut self, sample: Point) -> MoveOutcome {
        if !self.phase.is_active() {
            trace!(x = sample.x, y = sample.y, "move without active gesture ignored");
            return MoveOutcome::Ignored;
        }

        let raw = self.angle_at(sample);
        if Self::is_dead_zone(raw) {
            debug!(raw, "sample in dead zone; declining");
            self.set_phase(GesturePhase::NearSeam);
            return MoveOutcome::Declined { raw };
        }

        let value = self.range.clamp(raw);
        self.set_phase(GesturePhase::Dragging);
        self.state.apply(value);
        trace!(raw, value, "sample accepted");
        MoveOutcome::Accepted { raw, value }
    }

    fn on_end(&mut self, sample: Point) {
        trace!(x = sample.x, y = sample.y, value = self.state.value(), "gesture end");
        self.set_phase(GesturePhase::Idle);
    }

    fn on_terminate(&mut self) {
        debug!(value = self.state.value(), "gesture terminated by host");
        self.set_phase(GesturePhase::Idle);
    }
}
