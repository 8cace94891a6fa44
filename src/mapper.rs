//! Polar/cartesian conversion for the dial.
//!
//! Angles are in degrees with 0° pointing straight up and values growing
//! clockwise. Cartesian points are dial-local: the origin is the top-left of
//! the dial's bounding box and the dial center sits at `(hC, hC)` where
//! `hC = dial_radius + button_radius`, so a thumb centred on the ring never
//! overflows the box.

#[cfg(test)]
#[path = "mapper_test.rs"]
mod mapper_test;

use crate::geometry::{Geometry, Point};

/// Stateless converter between dial angles and dial-local points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    dial_radius: f64,
    button_radius: f64,
}

impl CoordinateMapper {
    #[must_use]
    pub fn new(dial_radius: f64, button_radius: f64) -> Self {
        Self { dial_radius, button_radius }
    }

    #[must_use]
    pub fn from_geometry(geometry: &Geometry) -> Self {
        Self::new(geometry.dial_radius, geometry.button_radius)
    }

    /// `dial_radius + button_radius`.
    #[must_use]
    pub fn half_combined(&self) -> f64 {
        self.dial_radius + self.button_radius
    }

    /// Place `angle_deg` on the ring.
    #[must_use]
    pub fn polar_to_cartesian(&self, angle_deg: f64) -> Point {
        let hc = self.half_combined();
        let a = (angle_deg - 90.0).to_radians();
        Point::new(hc + self.dial_radius * a.cos(), hc + self.dial_radius * a.sin())
    }

    /// Map a dial-local point to a whole-degree angle.
    ///
    /// Points exactly on the vertical or horizontal axis through the center
    /// are resolved by fixed rules so the slope division never sees a zero
    /// denominator: on the vertical axis the result is `0` below center and
    /// `180` otherwise; on the horizontal axis `90` right of center and `270`
    /// otherwise. Everywhere else the slope angle is rounded half-up and
    /// shifted into the half-plane the point lies in, giving `[0, 360]`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn cartesian_to_polar(&self, x: f64, y: f64) -> f64 {
        let hc = self.half_combined();

        if x == hc {
            return if y > hc { 0.0 } else { 180.0 };
        }
        if y == hc {
            return if x > hc { 90.0 } else { 270.0 };
        }

        let slope_deg = ((y - hc) / (x - hc)).atan().to_degrees();
        let offset = if x > hc { 90.0 } else { 270.0 };
        round_half_up(slope_deg) + offset
    }

    /// [`Self::cartesian_to_polar`] for a [`Point`].
    #[must_use]
    pub fn point_to_polar(&self, local: Point) -> f64 {
        self.cartesian_to_polar(local.x, local.y)
    }
}

/// Round to the nearest integer with ties going toward +∞.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
