//! Landmark geometry
//!
//! Derives, for each non-thumb finger, how far its tip is from the thumb tip
//! and from its own base. These four records are the only features the
//! pinch, squeeze and fist heuristics look at.

use handcrate_core::{Finger, HandLandmark, HandLandmarks};

/// Distances derived for one non-thumb finger
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FingerDistance {
    pub finger: Finger,
    pub tip: HandLandmark,
    /// Image-plane distance from this tip to the thumb tip
    pub distance_to_thumb: f32,
    /// Image-plane distance from this tip to the finger's own base
    pub distance_to_base: f32,
}

/// Finger distances for index, middle, ring and pinky, in that order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FingerDistances {
    pub thumb_tip: HandLandmark,
    pub fingers: [FingerDistance; 4],
}

impl FingerDistances {
    pub fn index(&self) -> &FingerDistance {
        &self.fingers[0]
    }

    /// Middle, ring and pinky
    pub fn others(&self) -> &[FingerDistance] {
        &self.fingers[1..]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FingerDistance> {
        self.fingers.iter()
    }
}

/// Compute distances for every non-thumb finger of `hand`.
///
/// The thumb tip is only used as the anchor for `distance_to_thumb`; it does
/// not get an entry of its own. Depth is ignored.
pub fn finger_distances(hand: &HandLandmarks) -> FingerDistances {
    let thumb_tip = *hand.tip(Finger::Thumb);
    let fingers = Finger::NON_THUMB.map(|finger| {
        let tip = *hand.tip(finger);
        FingerDistance {
            finger,
            tip,
            distance_to_thumb: tip.distance_2d(&thumb_tip),
            distance_to_base: tip.distance_2d(hand.base(finger)),
        }
    });

    FingerDistances { thumb_tip, fingers }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use handcrate_core::LANDMARK_COUNT;

    fn open_hand() -> HandLandmarks {
        let mut points = [HandLandmark::new(0.5, 0.8, 0.0); LANDMARK_COUNT];
        for (i, finger) in Finger::ALL.iter().enumerate() {
            let x = 0.3 + 0.1 * i as f32;
            points[finger.base()] = HandLandmark::new(x, 0.7, 0.0);
            points[finger.tip()] = HandLandmark::new(x, 0.4, 0.0);
        }
        // wrist is both the palm root and the thumb base
        points[0] = HandLandmark::new(0.5, 0.9, 0.0);
        HandLandmarks::new(points)
    }

    #[test]
    fn test_excludes_thumb() {
        let distances = finger_distances(&open_hand());
        let fingers: Vec<Finger> = distances.iter().map(|d| d.finger).collect();
        assert_eq!(fingers, vec![Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky]);
    }

    #[test]
    fn test_distances_to_thumb_and_base() {
        let distances = finger_distances(&open_hand());
        // thumb tip at (0.3, 0.4), index tip at (0.4, 0.4), index base at (0.4, 0.7)
        assert_relative_eq!(distances.index().distance_to_thumb, 0.1, epsilon = 1e-6);
        assert_relative_eq!(distances.index().distance_to_base, 0.3, epsilon = 1e-6);
        assert_relative_eq!(distances.fingers[3].distance_to_thumb, 0.4, epsilon = 1e-6);
    }

    #[test]
    fn test_depth_is_ignored() {
        let mut hand = open_hand();
        let mut points: Vec<HandLandmark> = hand.into();
        points[Finger::Index.tip()].z = 5.0;
        hand = HandLandmarks::from_slice(&points).unwrap();
        assert_relative_eq!(finger_distances(&hand).index().distance_to_thumb, 0.1, epsilon = 1e-6);
    }
}
