//! Cross-frame pinch tracking, keyed by hand

use std::collections::HashMap;

use handcrate_core::{HandLabel, HandLandmark};

/// Data held for a hand while it stays pinched
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchData {
    /// Average of the thumb and index tips
    pub midpoint: HandLandmark,
    /// Current distance from the midpoint to the projected object
    pub distance: f32,
    /// Distance latched on the frame the pinch began
    pub initial_distance: f32,
}

impl PinchData {
    /// How far the pinch has drifted from the object since it began
    pub fn delta(&self) -> f32 {
        self.distance - self.initial_distance
    }
}

/// Per-hand pinch state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PinchState {
    Idle,
    Pinching(PinchData),
}

impl PinchState {
    pub fn is_pinching(&self) -> bool {
        matches!(self, PinchState::Pinching(_))
    }
}

/// Pinch state for every hand label.
///
/// Hands absent from the map are idle.
#[derive(Debug, Clone, Default)]
pub struct PinchTracker {
    hands: HashMap<HandLabel, PinchData>,
}

impl PinchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, label: HandLabel) -> PinchState {
        match self.hands.get(&label) {
            Some(data) => PinchState::Pinching(*data),
            None => PinchState::Idle,
        }
    }

    pub fn get(&self, label: HandLabel) -> Option<&PinchData> {
        self.hands.get(&label)
    }

    pub fn is_pinching(&self, label: HandLabel) -> bool {
        self.hands.contains_key(&label)
    }

    /// Record a pinch for `label`, keeping the initial distance of an ongoing one.
    ///
    /// Returns the stored data and whether this frame started the pinch.
    pub fn update(&mut self, label: HandLabel, midpoint: HandLandmark, distance: f32) -> (PinchData, bool) {
        let started = !self.hands.contains_key(&label);
        let entry = self.hands.entry(label).or_insert(PinchData {
            midpoint,
            distance,
            initial_distance: distance,
        });
        entry.midpoint = midpoint;
        entry.distance = distance;
        (*entry, started)
    }

    /// Return every hand to idle, reporting whether any hand was pinching
    pub fn clear(&mut self) -> bool {
        let was_pinching = !self.hands.is_empty();
        self.hands.clear();
        was_pinching
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_distance_latched_once() {
        let mut tracker = PinchTracker::new();
        let mid = HandLandmark::new(0.5, 0.5, 0.0);

        let (data, started) = tracker.update(HandLabel::Left, mid, 0.1);
        assert!(started);
        assert_eq!(data.initial_distance, 0.1);

        let (data, started) = tracker.update(HandLabel::Left, mid, 0.3);
        assert!(!started);
        assert_eq!(data.initial_distance, 0.1);
        assert_eq!(data.distance, 0.3);
        assert!((data.delta() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_clear_resets_both_hands() {
        let mut tracker = PinchTracker::new();
        let mid = HandLandmark::new(0.5, 0.5, 0.0);
        tracker.update(HandLabel::Left, mid, 0.1);
        tracker.update(HandLabel::Right, mid, 0.2);
        assert!(tracker.clear());
        assert_eq!(tracker.state(HandLabel::Left), PinchState::Idle);
        assert_eq!(tracker.state(HandLabel::Right), PinchState::Idle);
        assert!(!tracker.clear());
    }
}
