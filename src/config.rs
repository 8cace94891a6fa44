//! Slider configuration: the control's props, their defaults, and an opt-in
//! validator.
//!
//! SYSTEM CONTEXT
//! ==============
//! The engine never validates its inputs. Bad ranges or radii are a caller
//! contract violation with unspecified results. Hosts that load configuration
//! from untrusted sources call [`SliderConfig::validate`] first.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_BUTTON_RADIUS, DEFAULT_DIAL_RADIUS, DEFAULT_DIAL_WIDTH, DEFAULT_FILL_COLOR, DEFAULT_MAX,
    DEFAULT_METER_COLOR, DEFAULT_MIN, DEFAULT_STROKE_COLOR, DEFAULT_STROKE_WIDTH, DEFAULT_TEXT_COLOR,
    DEFAULT_TEXT_SIZE, DEFAULT_VALUE,
};
use crate::geometry::{Geometry, Point, Viewport};

/// Error returned by [`SliderConfig::validate`] and [`SliderConfig::from_json_str`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON could not be parsed into a config.
    #[error("invalid slider config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// A numeric field is NaN or infinite.
    #[error("`{field}` must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },
    /// A radius is zero or negative.
    #[error("`{field}` must be positive, got {value}")]
    NonPositiveRadius { field: &'static str, value: f64 },
    /// `min`/`max` fall outside `[0, 360]` or are not strictly ordered.
    #[error("range must satisfy 0 <= min < max <= 360, got min={min} max={max}")]
    InvalidRange { min: f64, max: f64 },
    /// The initial value is outside `[min, max]`.
    #[error("initial value {value} is outside [{min}, {max}]")]
    ValueOutOfRange { value: f64, min: f64, max: f64 },
}

/// Closed interval of selectable angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleRange {
    pub min: f64,
    pub max: f64,
}

impl AngleRange {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Pin `angle` to the range. Boundary hits resolve to the bound itself.
    #[must_use]
    pub fn clamp(&self, angle: f64) -> f64 {
        if angle <= self.min {
            self.min
        } else if angle >= self.max {
            self.max
        } else {
            angle
        }
    }

    #[must_use]
    pub fn contains(&self, angle: f64) -> bool {
        angle >= self.min && angle <= self.max
    }
}

impl Default for AngleRange {
    fn default() -> Self {
        Self::new(DEFAULT_MIN, DEFAULT_MAX)
    }
}

/// Every prop the control accepts. Field names on the wire are camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SliderConfig {
    /// Thumb radius.
    #[serde(alias = "buttonRadius")]
    pub btn_radius: f64,
    /// Distance from the center to the ring.
    pub dial_radius: f64,
    /// Stroke width of the value arc. Layout only.
    pub dial_width: f64,
    pub meter_color: String,
    pub text_color: String,
    pub fill_color: String,
    pub stroke_color: String,
    pub stroke_width: f64,
    pub text_size: f64,
    /// Initial angle.
    pub value: f64,
    pub min: f64,
    pub max: f64,
    /// Dial center x in host coordinates. Falls back to the viewport midpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_center: Option<f64>,
    /// Dial center y in host coordinates. Falls back to the viewport midpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_center: Option<f64>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            btn_radius: DEFAULT_BUTTON_RADIUS,
            dial_radius: DEFAULT_DIAL_RADIUS,
            dial_width: DEFAULT_DIAL_WIDTH,
            meter_color: DEFAULT_METER_COLOR.to_owned(),
            text_color: DEFAULT_TEXT_COLOR.to_owned(),
            fill_color: DEFAULT_FILL_COLOR.to_owned(),
            stroke_color: DEFAULT_STROKE_COLOR.to_owned(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            text_size: DEFAULT_TEXT_SIZE,
            value: DEFAULT_VALUE,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            x_center: None,
            y_center: None,
        }
    }
}

impl SliderConfig {
    /// Parse a JSON object. Missing fields take their defaults. No validation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if `json` is not a valid config object.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The configured value range.
    #[must_use]
    pub fn range(&self) -> AngleRange {
        AngleRange::new(self.min, self.max)
    }

    /// Dial center, taking each missing coordinate from the viewport midpoint.
    #[must_use]
    pub fn center(&self, viewport: Viewport) -> Point {
        let mid = viewport.midpoint();
        Point::new(self.x_center.unwrap_or(mid.x), self.y_center.unwrap_or(mid.y))
    }

    /// Geometry for this config inside `viewport`.
    #[must_use]
    pub fn geometry(&self, viewport: Viewport) -> Geometry {
        Geometry::new(self.dial_radius, self.btn_radius, self.center(viewport))
    }

    /// Check the caller contract the engine itself relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violation found: non-finite numbers, non-positive
    /// radii, a range outside `0 <= min < max <= 360`, or an initial value
    /// outside the range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let numeric = [
            ("btnRadius", self.btn_radius),
            ("dialRadius", self.dial_radius),
            ("dialWidth", self.dial_width),
            ("strokeWidth", self.stroke_width),
            ("textSize", self.text_size),
            ("value", self.value),
            ("min", self.min),
            ("max", self.max),
            ("xCenter", self.x_center.unwrap_or(0.0)),
            ("yCenter", self.y_center.unwrap_or(0.0)),
        ];
        for (field, value) in numeric {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        for (field, value) in [("btnRadius", self.btn_radius), ("dialRadius", self.dial_radius)] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveRadius { field, value });
            }
        }

        if self.min < 0.0 || self.max > 360.0 || self.min >= self.max {
            return Err(ConfigError::InvalidRange { min: self.min, max: self.max });
        }

        if !self.range().contains(self.value) {
            return Err(ConfigError::ValueOutOfRange { value: self.value, min: self.min, max: self.max });
        }

        Ok(())
    }
}
