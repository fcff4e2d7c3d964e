//! Tunable gesture thresholds

use std::path::Path;

use handcrate_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Distance and position thresholds used by gesture analysis.
///
/// All distances are in normalized detector space (`[0, 1]` across the
/// image). The values are empirically tuned constants, not user settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureThresholds {
    /// Maximum index-to-thumb tip distance for a pinch (inclusive).
    pub pinch_threshold: f32,
    /// Subtracted from `pinch_threshold` to get the fist tip-to-base limit.
    pub fist_offset: f32,
    /// Maximum middle/ring/pinky-to-thumb distance for a squeeze (inclusive).
    pub squeeze_threshold: f32,
    /// Minimum average pinch-distance change that counts as a two-hand scale.
    pub scale_threshold: f32,
    /// Divides the single-hand pinch offset into a rotation delta.
    pub rotation_divisor: f32,
    /// Radius around the projected object a fingertip must be within.
    pub gate_radius: f32,
    /// Whether the preview is mirrored, so landmark x is compared as `1 - x`.
    pub mirror_x: bool,
    /// How far the index tip must sit above its PIP joint to count as pointing up.
    pub pointing_margin: f32,
    /// Horizontal tip-to-base offset needed for a left/right pointing direction.
    pub direction_threshold: f32,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            pinch_threshold: 0.08,
            fist_offset: 0.02,
            squeeze_threshold: 0.04,
            scale_threshold: 0.02,
            rotation_divisor: 20.0,
            gate_radius: 0.25,
            mirror_x: true,
            pointing_margin: 0.05,
            direction_threshold: 0.05,
        }
    }
}

impl GestureThresholds {
    /// Tip-to-base limit under which every non-thumb finger must be for a fist
    pub fn fist_threshold(&self) -> f32 {
        self.pinch_threshold - self.fist_offset
    }

    /// Check that every threshold is usable
    pub fn validate(&self) -> Result<()> {
        let named = [
            ("pinch_threshold", self.pinch_threshold),
            ("fist_offset", self.fist_offset),
            ("squeeze_threshold", self.squeeze_threshold),
            ("scale_threshold", self.scale_threshold),
            ("rotation_divisor", self.rotation_divisor),
            ("gate_radius", self.gate_radius),
            ("pointing_margin", self.pointing_margin),
            ("direction_threshold", self.direction_threshold),
        ];

        for (name, value) in named {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::Config(format!("{name} must be positive and finite, got {value}")));
            }
        }

        if self.fist_threshold() <= 0.0 {
            return Err(Error::Config(format!(
                "pinch_threshold ({}) must exceed fist_offset ({})",
                self.pinch_threshold, self.fist_offset
            )));
        }

        Ok(())
    }

    /// Parse from JSON; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let thresholds: Self = serde_json::from_str(json)
            .map_err(|e| Error::Config(format!("invalid thresholds: {e}")))?;
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Load from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_are_valid() {
        let thresholds = GestureThresholds::default();
        assert!(thresholds.validate().is_ok());
        assert_relative_eq!(thresholds.fist_threshold(), 0.06);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let thresholds = GestureThresholds::from_json_str(r#"{"pinch_threshold": 0.04}"#).unwrap();
        assert_relative_eq!(thresholds.pinch_threshold, 0.04);
        assert_relative_eq!(thresholds.gate_radius, 0.25);
        assert!(thresholds.mirror_x);
    }

    #[test]
    fn test_rejects_negative_radius() {
        let result = GestureThresholds::from_json_str(r#"{"gate_radius": -1.0}"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_rejects_fist_offset_above_pinch() {
        let thresholds = GestureThresholds {
            pinch_threshold: 0.02,
            fist_offset: 0.03,
            ..Default::default()
        };
        assert!(thresholds.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(GestureThresholds::from_json_str("{not json").is_err());
    }
}
