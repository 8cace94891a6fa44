//! Geometry and gesture engine for a circular dial control.
//!
//! A user drags a thumb around a ring; this crate turns each raw pointer
//! sample into an angle, decides whether to apply it, clamps it to the
//! configured range, and notifies a single observer. Drawing is left to the
//! host: [`layout::DialLayout`] describes what to draw, not how.
//!
//! All processing is synchronous and single-threaded. Each move sample is
//! mapped, clamped and delivered before the next one is looked at.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`mapper`] | Polar ⇄ cartesian conversion ([`mapper::CoordinateMapper`]) |
//! | [`tracker`] | Gesture state machine and responder capability |
//! | [`state`] | Authoritative angle and its observer slot |
//! | [`slider`] | [`slider::CircleSlider`], the assembled control |
//! | [`config`] | Control props, defaults and opt-in validation |
//! | [`layout`] | Render model for the track, arc and thumb |
//! | [`geometry`] | Points, viewport and per-instance dial geometry |
//! | [`consts`] | Dead-zone threshold and defaults |

pub mod config;
pub mod consts;
pub mod geometry;
pub mod layout;
pub mod mapper;
pub mod slider;
pub mod state;
pub mod tracker;

pub use config::{AngleRange, ConfigError, SliderConfig};
pub use geometry::{Geometry, Point, Viewport};
pub use mapper::CoordinateMapper;
pub use slider::CircleSlider;
pub use state::{AngleState, ValueObserver};
pub use tracker::{GesturePhase, GestureResponder, GestureTracker, MoveOutcome};
