//! Gesture labels and per-hand classification results

use serde::{Deserialize, Serialize};

/// Recognized gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gesture {
    /// Nothing recognized, or the hand is not targeting the object.
    #[default]
    None,
    /// Thumb and index tips together on one hand.
    Pinched,
    /// Both hands pinching, pinch distance roughly unchanged.
    TwoHandPinch,
    /// Middle, ring and pinky tips all against the thumb.
    Squeezed,
    /// All non-thumb tips curled onto their bases.
    Fist,
    /// Both hands pinching and moving apart from the object.
    ScaleUp,
    /// Both hands pinching and closing in on the object.
    ScaleDown,
    /// Index finger pointing up and leaning left.
    FingerUpLeft,
    /// Index finger pointing up and leaning right.
    FingerUpRight,
}

impl Gesture {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Pinched => "pinched",
            Self::TwoHandPinch => "two-hand-pinch",
            Self::Squeezed => "squeezed",
            Self::Fist => "fist",
            Self::ScaleUp => "scale-up",
            Self::ScaleDown => "scale-down",
            Self::FingerUpLeft => "finger-up-left",
            Self::FingerUpRight => "finger-up-right",
        }
    }
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A gesture plus its optional continuous payload.
///
/// `data` is the rotation delta for [`Gesture::Pinched`], the averaged
/// pinch-distance change for the two-hand gestures, and the horizontal lean
/// for the finger-direction gestures.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GestureResponse {
    pub gesture: Gesture,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<f32>,
}

impl GestureResponse {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(gesture: Gesture) -> Self {
        Self { gesture, data: None }
    }

    pub fn with_data(gesture: Gesture, data: f32) -> Self {
        Self { gesture, data: Some(data) }
    }

    pub fn is_none(&self) -> bool {
        self.gesture == Gesture::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_kebab_case() {
        let json = serde_json::to_string(&GestureResponse::with_data(Gesture::ScaleUp, 0.5)).unwrap();
        assert_eq!(json, r#"{"gesture":"scale-up","data":0.5}"#);
        let json = serde_json::to_string(&GestureResponse::none()).unwrap();
        assert_eq!(json, r#"{"gesture":"none"}"#);
    }

    #[test]
    fn test_as_str_matches_display() {
        assert_eq!(Gesture::TwoHandPinch.to_string(), "two-hand-pinch");
        assert_eq!(Gesture::FingerUpLeft.as_str(), "finger-up-left");
    }
}
