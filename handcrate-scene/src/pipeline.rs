//! Per-frame gesture pipeline
//!
//! Drives every hand of every frame through the classifier and applies the
//! result to one scene object. Frames arrive as a lazy sequence; a malformed
//! frame is logged and skipped without disturbing the rest of the session.

use handcrate_algorithms::{FingerDirection, Gesture, GestureClassifier, GestureResponse};
use handcrate_core::{Finger, HandFrame, HandLabel, Result, Tracked, Transformable};
use tracing::{debug, info, warn};

use crate::camera::PerspectiveCamera;
use crate::controller::{GestureController, TransformChange};

/// Gesture and applied change for one hand
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandResponse {
    pub label: HandLabel,
    pub response: GestureResponse,
    pub change: TransformChange,
}

/// Everything that happened in one frame, in detector hand order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameOutcome {
    pub sequence: u64,
    pub responses: Vec<HandResponse>,
}

impl FrameOutcome {
    /// Gesture of the first hand labelled `label`, `None` if it is absent
    pub fn gesture(&self, label: HandLabel) -> Gesture {
        self.responses
            .iter()
            .find(|r| r.label == label)
            .map(|r| r.response.gesture)
            .unwrap_or_default()
    }

    /// True when any hand changed the object
    pub fn changed(&self) -> bool {
        self.responses.iter().any(|r| r.change != TransformChange::Unchanged)
    }
}

/// Counters over a processed session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStats {
    pub frames: usize,
    pub skipped: usize,
    pub gestures: usize,
}

/// Classifier, optional pointing fallback and controller wired together
#[derive(Debug, Clone, Default)]
pub struct GesturePipeline {
    classifier: GestureClassifier,
    finger_direction: Option<FingerDirection>,
    controller: GestureController,
    stats: SessionStats,
}

impl GesturePipeline {
    pub fn new(classifier: GestureClassifier, controller: GestureController) -> Self {
        Self {
            classifier,
            finger_direction: None,
            controller,
            stats: SessionStats::default(),
        }
    }

    /// Report index-finger direction for hands over the object that make no
    /// other gesture
    pub fn with_finger_direction(mut self, direction: FingerDirection) -> Self {
        self.finger_direction = Some(direction);
        self
    }

    pub fn classifier(&self) -> &GestureClassifier {
        &self.classifier
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Forget pinch tracking and counters
    pub fn reset(&mut self) {
        self.classifier.reset();
        self.stats = SessionStats::default();
    }

    /// Classify every hand in `frame` and apply the results to `object`.
    ///
    /// Two-hand scale gestures are reported by both hands but applied once.
    pub fn process_frame<T>(
        &mut self,
        frame: &HandFrame,
        camera: &PerspectiveCamera,
        object: &mut T,
    ) -> FrameOutcome
    where
        T: Tracked + Transformable + ?Sized,
    {
        let mut responses = Vec::with_capacity(frame.hands.len());
        let mut scaled = false;

        for hand in &frame.hands {
            let position = object.world_position();
            let mut response = self.classifier.classify(hand.label, &hand.landmarks, &position, camera);

            if response.is_none() {
                if let Some(direction) = &self.finger_direction {
                    let tip = *hand.landmarks.tip(Finger::Index);
                    if self.classifier.gate().contains(&[tip], &position, camera) {
                        response = direction.classify(&hand.landmarks);
                    }
                }
            }

            let is_scale = matches!(response.gesture, Gesture::ScaleUp | Gesture::ScaleDown);
            let change = if is_scale && scaled {
                TransformChange::Unchanged
            } else {
                self.controller.apply(&response, &hand.landmarks, camera, object)
            };
            scaled |= is_scale;

            if !response.is_none() {
                self.stats.gestures += 1;
                debug!(
                    sequence = frame.sequence,
                    hand = %hand.label,
                    gesture = %response.gesture,
                    data = ?response.data,
                    "gesture"
                );
            }
            responses.push(HandResponse { label: hand.label, response, change });
        }

        self.stats.frames += 1;
        FrameOutcome { sequence: frame.sequence, responses }
    }

    /// Process a whole session, skipping frames that failed to load
    pub fn run<I, T>(&mut self, frames: I, camera: &PerspectiveCamera, object: &mut T) -> Vec<FrameOutcome>
    where
        I: IntoIterator<Item = Result<HandFrame>>,
        T: Tracked + Transformable + ?Sized,
    {
        let mut outcomes = Vec::new();
        for frame in frames {
            match frame {
                Ok(frame) => outcomes.push(self.process_frame(&frame, camera, object)),
                Err(e) => {
                    self.stats.skipped += 1;
                    warn!("skipping frame: {e}");
                }
            }
        }
        info!(
            frames = self.stats.frames,
            skipped = self.stats.skipped,
            gestures = self.stats.gestures,
            "session processed"
        );
        outcomes
    }
}
