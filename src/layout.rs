//! Render model for the dial.
//!
//! Nothing here draws. [`DialLayout`] is the set of positions and styles a
//! vector renderer needs for one frame: the track circle, the value arc from
//! 0° to the current angle, the thumb disc and the icon centred on it. All
//! coordinates are dial-local (top-left of the `size × size` box is `(0, 0)`).

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::config::SliderConfig;
use crate::consts::{THUMB_FACE_COLOR, THUMB_ICON_SIZE};
use crate::geometry::{Geometry, Point};
use crate::mapper::CoordinateMapper;

/// Colors and stroke widths, copied from the config.
#[derive(Debug, Clone, PartialEq)]
pub struct DialStyle {
    pub meter_color: String,
    pub text_color: String,
    pub fill_color: String,
    pub stroke_color: String,
    pub stroke_width: f64,
    pub dial_width: f64,
    pub text_size: f64,
}

impl From<&SliderConfig> for DialStyle {
    fn from(config: &SliderConfig) -> Self {
        Self {
            meter_color: config.meter_color.clone(),
            text_color: config.text_color.clone(),
            fill_color: config.fill_color.clone(),
            stroke_color: config.stroke_color.clone(),
            stroke_width: config.stroke_width,
            dial_width: config.dial_width,
            text_size: config.text_size,
        }
    }
}

/// Axis-aligned square, by top-left corner and side length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    pub origin: Point,
    pub side: f64,
}

/// Everything a renderer needs to draw the dial at one angle.
#[derive(Debug, Clone, PartialEq)]
pub struct DialLayout {
    /// Side of the square drawing surface.
    pub size: f64,
    /// Center of the track circle.
    pub center: Point,
    pub dial_radius: f64,
    pub button_radius: f64,
    /// Angle the layout was computed for.
    pub angle: f64,
    /// Start of the value arc (the 0° point).
    pub arc_start: Point,
    /// End of the value arc and center of the thumb.
    pub arc_end: Point,
    /// Whether the arc spans more than half the circle.
    pub large_arc: bool,
    /// Bounding square of the thumb disc.
    pub thumb: Square,
    /// Bounding square of the icon drawn on the thumb.
    pub icon: Square,
    /// Fill of the thumb's inner disc.
    pub thumb_face_color: &'static str,
    pub style: DialStyle,
}

impl DialLayout {
    #[must_use]
    pub fn compute(geometry: &Geometry, angle: f64, style: DialStyle) -> Self {
        let mapper = CoordinateMapper::from_geometry(geometry);
        let hc = geometry.half_combined();
        let dial_radius = geometry.dial_radius;
        let button_radius = geometry.button_radius;
        let arc_start = mapper.polar_to_cartesian(0.0);
        let arc_end = mapper.polar_to_cartesian(angle);
        let thumb_origin = Point::new(arc_end.x - button_radius, arc_end.y - button_radius);
        let icon_inset = button_radius - THUMB_ICON_SIZE / 2.0;

        Self {
            size: hc * 2.0,
            center: Point::new(hc, hc),
            dial_radius,
            button_radius,
            angle,
            arc_start,
            arc_end,
            large_arc: angle > 180.0,
            thumb: Square { origin: thumb_origin, side: button_radius * 2.0 },
            icon: Square {
                origin: Point::new(thumb_origin.x + icon_inset, thumb_origin.y + icon_inset),
                side: THUMB_ICON_SIZE,
            },
            thumb_face_color: THUMB_FACE_COLOR,
            style,
        }
    }

    /// SVG path data for the value arc, swept clockwise from 0°.
    #[must_use]
    pub fn arc_path(&self) -> String {
        format!(
            "M{} {} A {} {} 0 {} 1 {} {}",
            self.arc_start.x,
            self.arc_start.y,
            self.dial_radius,
            self.dial_radius,
            u8::from(self.large_arc),
            self.arc_end.x,
            self.arc_end.y,
        )
    }
}
