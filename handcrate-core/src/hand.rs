//! Per-frame hand observations as delivered by the landmark detector

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::landmark::{HandLandmark, HandLandmarks};

/// Which hand, as labelled by the detector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HandLabel {
    Left,
    Right,
}

impl HandLabel {
    /// The opposite hand
    pub fn other(self) -> Self {
        match self {
            HandLabel::Left => HandLabel::Right,
            HandLabel::Right => HandLabel::Left,
        }
    }

    /// Fallback label for a hand reported without handedness, by its position in the frame
    pub fn from_position(position: usize) -> Self {
        if position % 2 == 0 {
            HandLabel::Right
        } else {
            HandLabel::Left
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HandLabel::Left => "left",
            HandLabel::Right => "right",
        }
    }
}

impl std::fmt::Display for HandLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handedness record reported alongside each hand
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Handedness {
    pub label: HandLabel,
    #[serde(default)]
    pub score: f32,
    #[serde(default)]
    pub index: usize,
}

/// One detected hand in one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandObservation {
    pub label: HandLabel,
    pub score: f32,
    pub landmarks: HandLandmarks,
}

impl HandObservation {
    pub fn new(label: HandLabel, landmarks: HandLandmarks) -> Self {
        Self { label, score: 1.0, landmarks }
    }
}

/// All hands detected in one processed video frame
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HandFrame {
    pub sequence: u64,
    pub hands: Vec<HandObservation>,
}

impl HandFrame {
    pub fn new(sequence: u64, hands: Vec<HandObservation>) -> Self {
        Self { sequence, hands }
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    /// First hand with the given label
    pub fn hand(&self, label: HandLabel) -> Option<&HandObservation> {
        self.hands.iter().find(|h| h.label == label)
    }
}

/// Raw per-frame payload in the detector's result shape.
///
/// Landmark lists are unvalidated here; [`DetectorResults::into_frame`]
/// rejects any hand that does not carry exactly 21 points.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectorResults {
    #[serde(default)]
    pub multi_hand_landmarks: Vec<Vec<HandLandmark>>,
    #[serde(default)]
    pub multi_handedness: Vec<Handedness>,
}

impl DetectorResults {
    /// Validate and convert into a [`HandFrame`]
    pub fn into_frame(self, sequence: u64) -> Result<HandFrame> {
        if !self.multi_handedness.is_empty()
            && self.multi_handedness.len() != self.multi_hand_landmarks.len()
        {
            return Err(Error::InvalidData(format!(
                "{} hands reported with {} handedness records",
                self.multi_hand_landmarks.len(),
                self.multi_handedness.len()
            )));
        }

        let hands = self
            .multi_hand_landmarks
            .iter()
            .enumerate()
            .map(|(position, points)| {
                let landmarks = HandLandmarks::from_slice(points)?;
                let observation = match self.multi_handedness.get(position) {
                    Some(handedness) => HandObservation {
                        label: handedness.label,
                        score: handedness.score,
                        landmarks,
                    },
                    None => HandObservation::new(HandLabel::from_position(position), landmarks),
                };
                Ok(observation)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(HandFrame::new(sequence, hands))
    }

    /// Build the raw payload back from a validated frame
    pub fn from_frame(frame: &HandFrame) -> Self {
        Self {
            multi_hand_landmarks: frame.hands.iter().map(|h| h.landmarks.into()).collect(),
            multi_handedness: frame
                .hands
                .iter()
                .enumerate()
                .map(|(index, h)| Handedness { label: h.label, score: h.score, index })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::LANDMARK_COUNT;

    #[test]
    fn test_other_hand() {
        assert_eq!(HandLabel::Left.other(), HandLabel::Right);
        assert_eq!(HandLabel::Right.other(), HandLabel::Left);
    }

    #[test]
    fn test_into_frame_uses_handedness() {
        let results = DetectorResults {
            multi_hand_landmarks: vec![vec![HandLandmark::default(); LANDMARK_COUNT]],
            multi_handedness: vec![Handedness { label: HandLabel::Left, score: 0.8, index: 0 }],
        };
        let frame = results.into_frame(7).unwrap();
        assert_eq!(frame.sequence, 7);
        assert_eq!(frame.hands.len(), 1);
        assert_eq!(frame.hands[0].label, HandLabel::Left);
        assert!(frame.hand(HandLabel::Right).is_none());
    }

    #[test]
    fn test_into_frame_without_handedness_falls_back_to_position() {
        let results = DetectorResults {
            multi_hand_landmarks: vec![
                vec![HandLandmark::default(); LANDMARK_COUNT],
                vec![HandLandmark::default(); LANDMARK_COUNT],
            ],
            multi_handedness: Vec::new(),
        };
        let frame = results.into_frame(0).unwrap();
        assert_eq!(frame.hands[0].label, HandLabel::Right);
        assert_eq!(frame.hands[1].label, HandLabel::Left);
    }

    #[test]
    fn test_into_frame_rejects_short_hand() {
        let results = DetectorResults {
            multi_hand_landmarks: vec![vec![HandLandmark::default(); 5]],
            multi_handedness: Vec::new(),
        };
        assert!(matches!(
            results.into_frame(0),
            Err(Error::InvalidLandmarkCount { found: 5, .. })
        ));
    }

    #[test]
    fn test_into_frame_rejects_mismatched_handedness() {
        let results = DetectorResults {
            multi_hand_landmarks: vec![vec![HandLandmark::default(); LANDMARK_COUNT]],
            multi_handedness: vec![
                Handedness { label: HandLabel::Left, score: 0.9, index: 0 },
                Handedness { label: HandLabel::Right, score: 0.9, index: 1 },
            ],
        };
        assert!(matches!(results.into_frame(0), Err(Error::InvalidData(_))));
    }
}
