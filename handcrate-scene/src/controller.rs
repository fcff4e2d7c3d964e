//! Default mapping from classified gestures to object transforms

use std::path::Path;

use handcrate_algorithms::{Gesture, GestureResponse};
use handcrate_core::{Error, Finger, HandLandmarks, Point3, Result, Transformable};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::camera::{PerspectiveCamera, DEFAULT_FINGER_DISTANCE};

/// Tuning for [`GestureController`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Fractional scale change per scale-up / scale-down frame
    pub scale_step: f32,
    pub min_scale: f32,
    pub max_scale: f32,
    /// Radians of Y rotation per finger-direction frame
    pub finger_rotation_step: f32,
    /// Camera distance at which a squeezed object follows the index tip
    pub drag_distance: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            scale_step: 0.02,
            min_scale: 0.1,
            max_scale: 5.0,
            finger_rotation_step: 0.05,
            drag_distance: DEFAULT_FINGER_DISTANCE,
        }
    }
}

impl ControllerConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.scale_step > 0.0 && self.scale_step < 1.0) {
            return Err(Error::Config(format!("scale_step must be in (0, 1), got {}", self.scale_step)));
        }
        if !(self.min_scale > 0.0 && self.min_scale <= self.max_scale) {
            return Err(Error::Config(format!(
                "scale bounds must satisfy 0 < min_scale <= max_scale, got [{}, {}]",
                self.min_scale, self.max_scale
            )));
        }
        if !self.drag_distance.is_finite() || self.drag_distance <= 0.0 {
            return Err(Error::Config(format!("drag_distance must be positive, got {}", self.drag_distance)));
        }
        if !self.finger_rotation_step.is_finite() {
            return Err(Error::Config(format!(
                "finger_rotation_step must be finite, got {}",
                self.finger_rotation_step
            )));
        }
        Ok(())
    }

    /// Load from a JSON file; missing fields keep their defaults
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("invalid controller config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

/// What a gesture did to the object
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformChange {
    Unchanged,
    /// New uniform scale
    Scaled(f32),
    /// Y rotation applied, in radians
    Rotated(f32),
    /// New position
    Moved(Point3<f32>),
    RotationReset,
}

/// Applies gestures to an object's transform.
///
/// | gesture | effect |
/// |---|---|
/// | scale-up / scale-down | scale by `1 ± scale_step`, clamped |
/// | pinched | rotate about Y by the pinch payload |
/// | finger-up-left / right | rotate about Y by `∓finger_rotation_step` |
/// | squeezed | move to the index fingertip, `drag_distance` from the camera |
/// | fist | reset rotation |
#[derive(Debug, Clone, Default)]
pub struct GestureController {
    pub config: ControllerConfig,
}

impl GestureController {
    pub fn new(config: ControllerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn apply<T: Transformable + ?Sized>(
        &self,
        response: &GestureResponse,
        hand: &HandLandmarks,
        camera: &PerspectiveCamera,
        object: &mut T,
    ) -> TransformChange {
        let transform = object.transform_mut();
        let change = match response.gesture {
            Gesture::None | Gesture::TwoHandPinch => TransformChange::Unchanged,
            Gesture::ScaleUp | Gesture::ScaleDown => {
                let factor = if response.gesture == Gesture::ScaleUp {
                    1.0 + self.config.scale_step
                } else {
                    1.0 - self.config.scale_step
                };
                transform.scale_by(factor, self.config.min_scale, self.config.max_scale);
                TransformChange::Scaled(transform.uniform_scale())
            }
            Gesture::Pinched => match response.data {
                Some(angle) if angle != 0.0 => {
                    transform.rotate_y(angle);
                    TransformChange::Rotated(angle)
                }
                _ => TransformChange::Unchanged,
            },
            Gesture::FingerUpLeft => {
                transform.rotate_y(-self.config.finger_rotation_step);
                TransformChange::Rotated(-self.config.finger_rotation_step)
            }
            Gesture::FingerUpRight => {
                transform.rotate_y(self.config.finger_rotation_step);
                TransformChange::Rotated(self.config.finger_rotation_step)
            }
            Gesture::Squeezed => {
                match camera.landmark_to_world(hand.tip(Finger::Index), self.config.drag_distance) {
                    Some(position) => {
                        transform.position = position;
                        TransformChange::Moved(position)
                    }
                    None => TransformChange::Unchanged,
                }
            }
            Gesture::Fist => {
                transform.reset_rotation();
                TransformChange::RotationReset
            }
        };

        if change != TransformChange::Unchanged {
            debug!(gesture = %response.gesture, ?change, "applied gesture");
        }
        change
    }
}
