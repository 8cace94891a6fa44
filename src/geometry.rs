#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// A point in the host surface's coordinate space (or in dial-local space
/// once the dial origin has been subtracted).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Host display dimensions. Only used to derive a default dial center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The display midpoint, used when no explicit center is configured.
    #[must_use]
    pub fn midpoint(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Fixed geometry of one dial instance.
///
/// Both radii are expected to be positive; this is a caller contract and is
/// not checked here (see [`crate::config::SliderConfig::validate`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Distance from the dial center to the ring.
    pub dial_radius: f64,
    /// Radius of the draggable thumb.
    pub button_radius: f64,
    /// Dial center in host surface coordinates.
    pub center: Point,
}

impl Geometry {
    #[must_use]
    pub fn new(dial_radius: f64, button_radius: f64, center: Point) -> Self {
        Self { dial_radius, button_radius, center }
    }

    /// `dial_radius + button_radius`: the dial center in dial-local space, and
    /// half the side of the bounding box that keeps the thumb inside it.
    #[must_use]
    pub fn half_combined(&self) -> f64 {
        self.dial_radius + self.button_radius
    }

    /// Side length of the square drawing surface.
    #[must_use]
    pub fn size(&self) -> f64 {
        self.half_combined() * 2.0
    }

    /// Top-left corner of the dial's bounding box in host coordinates.
    #[must_use]
    pub fn origin(&self) -> Point {
        let hc = self.half_combined();
        Point::new(self.center.x - hc, self.center.y - hc)
    }

    /// Translate a host-space point into dial-local coordinates.
    #[must_use]
    pub fn to_local(&self, host: Point) -> Point {
        let origin = self.origin();
        Point::new(host.x - origin.x, host.y - origin.y)
    }

    /// Translate a dial-local point back into host coordinates.
    #[must_use]
    pub fn to_host(&self, local: Point) -> Point {
        let origin = self.origin();
        Point::new(local.x + origin.x, local.y + origin.y)
    }
}
