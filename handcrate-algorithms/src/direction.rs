//! Index-finger pointing direction.
//!
//! Kept apart from [`GestureClassifier`](crate::GestureClassifier): it does
//! not interact with pinch tracking and callers decide how to combine the two.

use handcrate_core::{HandLandmarks, INDEX_MCP, INDEX_PIP, INDEX_TIP};

use crate::config::GestureThresholds;
use crate::gesture::{Gesture, GestureResponse};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FingerDirection {
    pub pointing_margin: f32,
    pub direction_threshold: f32,
}

impl FingerDirection {
    pub fn new(pointing_margin: f32, direction_threshold: f32) -> Self {
        Self { pointing_margin, direction_threshold }
    }

    pub fn from_thresholds(thresholds: &GestureThresholds) -> Self {
        Self::new(thresholds.pointing_margin, thresholds.direction_threshold)
    }

    /// Index tip above its PIP joint by more than the margin (image y grows downward)
    pub fn is_pointing_up(&self, hand: &HandLandmarks) -> bool {
        hand[INDEX_TIP].y < hand[INDEX_PIP].y - self.pointing_margin
    }

    /// Classify the lean of a raised index finger.
    ///
    /// `data` carries the tip-minus-base horizontal offset.
    pub fn classify(&self, hand: &HandLandmarks) -> GestureResponse {
        if !self.is_pointing_up(hand) {
            return GestureResponse::none();
        }

        let tip = &hand[INDEX_TIP];
        let base = &hand[INDEX_MCP];
        let lean = tip.x - base.x;

        if tip.x < base.x - self.direction_threshold {
            GestureResponse::with_data(Gesture::FingerUpLeft, lean)
        } else if tip.x > base.x + self.direction_threshold {
            GestureResponse::with_data(Gesture::FingerUpRight, lean)
        } else {
            GestureResponse::none()
        }
    }
}

impl Default for FingerDirection {
    fn default() -> Self {
        Self::from_thresholds(&GestureThresholds::default())
    }
}
