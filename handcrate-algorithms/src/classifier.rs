//! Pinch / squeeze / fist gesture classification.
//!
//! Each frame, each hand is first gated on its index tip being near the
//! tracked object. Past the gate, the checks run in a fixed order:
//!
//! 1. **Pinch**: index tip within `pinch_threshold` of the thumb tip, and
//!    neither a fist nor a squeeze. The hand enters or stays in the pinching
//!    state. If the other hand is pinching too, the averaged change in
//!    pinch-to-object distance
//!    drives a two-hand scale gesture; otherwise a single-hand pinch with a
//!    rotation delta is emitted.
//! 2. Anything else clears the pinch state of both hands, then reports a
//!    **squeeze** (middle, ring and pinky against the thumb), a **fist** (all
//!    four tips curled onto their bases), or nothing.
//!
//! Pinch, squeeze and fist overlap on the same distance features, so the pinch
//! branch excludes the other two; a closing fist or a full squeeze never
//! reads as a pinch.

use handcrate_core::{HandLabel, HandLandmarks, Point2, Point3, Projector, Result};
use tracing::{debug, trace};

use crate::config::GestureThresholds;
use crate::geometry::{finger_distances, FingerDistances};
use crate::gesture::{Gesture, GestureResponse};
use crate::pinch::{PinchState, PinchTracker};
use crate::proximity::ProximityGate;

/// Boolean features of one hand in one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HandFeatures {
    pub valid_pinch: bool,
    pub making_fist: bool,
    pub other_fingers_pinched: bool,
}

impl HandFeatures {
    /// Evaluate the threshold tests over precomputed distances
    pub fn evaluate(distances: &FingerDistances, thresholds: &GestureThresholds) -> Self {
        let fist_threshold = thresholds.fist_threshold();
        Self {
            valid_pinch: distances.index().distance_to_thumb <= thresholds.pinch_threshold,
            making_fist: distances.iter().all(|f| f.distance_to_base < fist_threshold),
            other_fingers_pinched: distances
                .others()
                .iter()
                .all(|f| f.distance_to_thumb <= thresholds.squeeze_threshold),
        }
    }
}

/// Per-hand gesture state machine.
///
/// The only state carried between frames is the pinch tracker; everything
/// else is recomputed from the current landmarks and object position.
#[derive(Debug, Clone)]
pub struct GestureClassifier {
    thresholds: GestureThresholds,
    gate: ProximityGate,
    pinches: PinchTracker,
}

impl GestureClassifier {
    /// Create a classifier, rejecting unusable thresholds
    pub fn new(thresholds: GestureThresholds) -> Result<Self> {
        thresholds.validate()?;
        Ok(Self {
            gate: ProximityGate::from_thresholds(&thresholds),
            thresholds,
            pinches: PinchTracker::new(),
        })
    }

    pub fn thresholds(&self) -> &GestureThresholds {
        &self.thresholds
    }

    pub fn gate(&self) -> &ProximityGate {
        &self.gate
    }

    pub fn pinch_state(&self, label: HandLabel) -> PinchState {
        self.pinches.state(label)
    }

    /// Drop all pinch tracking, e.g. when the video stream restarts
    pub fn reset(&mut self) {
        self.pinches.clear();
    }

    /// Classify one hand against an object at `object` in world space
    pub fn classify<P: Projector + ?Sized>(
        &mut self,
        label: HandLabel,
        hand: &HandLandmarks,
        object: &Point3<f32>,
        projector: &P,
    ) -> GestureResponse {
        let object_screen = self.gate.project_object(object, projector);
        self.classify_projected(label, hand, &object_screen)
    }

    /// Classify one hand against an object already projected into detector space
    pub fn classify_projected(
        &mut self,
        label: HandLabel,
        hand: &HandLandmarks,
        object: &Point2<f32>,
    ) -> GestureResponse {
        let distances = finger_distances(hand);

        if !self.gate.contains_projected(&[distances.index().tip], object) {
            trace!(hand = %label, "index tip not over object");
            return GestureResponse::none();
        }

        let features = HandFeatures::evaluate(&distances, &self.thresholds);

        if features.valid_pinch && !features.making_fist && !features.other_fingers_pinched {
            return self.track_pinch(label, &distances, object);
        }

        if self.pinches.clear() {
            debug!(hand = %label, "pinch released");
        }

        if features.other_fingers_pinched {
            GestureResponse::new(Gesture::Squeezed)
        } else if features.making_fist {
            GestureResponse::new(Gesture::Fist)
        } else {
            GestureResponse::none()
        }
    }

    fn track_pinch(
        &mut self,
        label: HandLabel,
        distances: &FingerDistances,
        object: &Point2<f32>,
    ) -> GestureResponse {
        let midpoint = distances.thumb_tip.midpoint(&distances.index().tip);
        let distance = self.gate.distance_to(&midpoint, object);
        let (pinch, started) = self.pinches.update(label, midpoint, distance);
        if started {
            debug!(hand = %label, initial_distance = distance, "pinch started");
        }

        if let Some(other) = self.pinches.get(label.other()) {
            let change = (pinch.delta() + other.delta()) / 2.0;
            let gesture = if change.abs() > self.thresholds.scale_threshold {
                if change > 0.0 {
                    Gesture::ScaleUp
                } else {
                    Gesture::ScaleDown
                }
            } else {
                Gesture::TwoHandPinch
            };
            trace!(hand = %label, change, %gesture, "two-hand pinch");
            return GestureResponse::with_data(gesture, change);
        }

        let rotation = (-midpoint.x - object.x) / self.thresholds.rotation_divisor;
        GestureResponse::with_data(Gesture::Pinched, rotation)
    }
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self {
            thresholds: GestureThresholds::default(),
            gate: ProximityGate::default(),
            pinches: PinchTracker::new(),
        }
    }
}
