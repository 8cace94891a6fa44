//! Shared numeric constants and configuration defaults.

// ── Gesture policy ──────────────────────────────────────────────

/// Mapped angles strictly above this value sit in the dead zone near the
/// 0°/360° seam. Samples landing there are declined, never applied.
pub const DEAD_ZONE_THRESHOLD_DEG: f64 = 350.0;

// ── Geometry defaults ───────────────────────────────────────────

/// Default thumb radius in surface pixels.
pub const DEFAULT_BUTTON_RADIUS: f64 = 15.0;

/// Default distance from the dial center to the ring.
pub const DEFAULT_DIAL_RADIUS: f64 = 130.0;

/// Default stroke width of the value arc.
pub const DEFAULT_DIAL_WIDTH: f64 = 5.0;

// ── Value defaults ──────────────────────────────────────────────

pub const DEFAULT_VALUE: f64 = 0.0;
pub const DEFAULT_MIN: f64 = 0.0;
pub const DEFAULT_MAX: f64 = 359.0;

// ── Styling defaults (layout only) ──────────────────────────────

pub const DEFAULT_METER_COLOR: &str = "#0cd";
pub const DEFAULT_TEXT_COLOR: &str = "#fff";
pub const DEFAULT_FILL_COLOR: &str = "none";
pub const DEFAULT_STROKE_COLOR: &str = "#fff";
pub const DEFAULT_STROKE_WIDTH: f64 = 0.5;
pub const DEFAULT_TEXT_SIZE: f64 = 10.0;

/// Side length of the square icon drawn on top of the thumb.
pub const THUMB_ICON_SIZE: f64 = 20.0;

/// Fill of the thumb's inner disc, drawn over the meter-colored disc.
pub const THUMB_FACE_COLOR: &str = "#FFF";
