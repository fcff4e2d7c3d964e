//! Hand landmark types and the 21-point hand topology

use nalgebra::{Point2, Point3};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of landmarks reported for every detected hand
pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Fingertip indices, thumb first
pub const FINGER_TIPS: [usize; 5] = [THUMB_TIP, INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

/// Finger base indices, paired with [`FINGER_TIPS`]. The thumb's base is the wrist.
pub const FINGER_BASES: [usize; 5] = [WRIST, INDEX_MCP, MIDDLE_MCP, RING_MCP, PINKY_MCP];

/// Bones of the hand skeleton, for callers that draw it
pub const HAND_CONNECTIONS: [(usize, usize); 24] = [
    // thumb
    (WRIST, THUMB_CMC), (THUMB_CMC, THUMB_MCP), (THUMB_MCP, THUMB_IP), (THUMB_IP, THUMB_TIP),
    // index
    (WRIST, INDEX_MCP), (INDEX_MCP, INDEX_PIP), (INDEX_PIP, INDEX_DIP), (INDEX_DIP, INDEX_TIP),
    // middle
    (WRIST, MIDDLE_MCP), (MIDDLE_MCP, MIDDLE_PIP), (MIDDLE_PIP, MIDDLE_DIP), (MIDDLE_DIP, MIDDLE_TIP),
    // ring
    (WRIST, RING_MCP), (RING_MCP, RING_PIP), (RING_PIP, RING_DIP), (RING_DIP, RING_TIP),
    // pinky
    (WRIST, PINKY_MCP), (PINKY_MCP, PINKY_PIP), (PINKY_PIP, PINKY_DIP), (PINKY_DIP, PINKY_TIP),
    // palm
    (INDEX_MCP, MIDDLE_MCP), (MIDDLE_MCP, RING_MCP), (RING_MCP, PINKY_MCP), (WRIST, PINKY_MCP),
];

/// The five fingers of a hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    /// All fingers in detector order
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    /// Fingers other than the thumb
    pub const NON_THUMB: [Finger; 4] = [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky];

    fn ordinal(self) -> usize {
        self as usize
    }

    /// Landmark index of the fingertip
    pub fn tip(self) -> usize {
        FINGER_TIPS[self.ordinal()]
    }

    /// Landmark index of the finger base
    pub fn base(self) -> usize {
        FINGER_BASES[self.ordinal()]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Finger::Thumb => "thumb",
            Finger::Index => "index",
            Finger::Middle => "middle",
            Finger::Ring => "ring",
            Finger::Pinky => "pinky",
        }
    }
}

/// A single tracked point on a hand in normalized image space.
///
/// `x` and `y` are in `[0, 1]` with the origin at the top-left corner of the
/// image; `z` is relative depth. `visibility` is carried through from the
/// detector but not used by any analysis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HandLandmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f32>,
}

impl HandLandmark {
    /// Create a landmark without visibility information
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z, visibility: None }
    }

    /// Position as a 3D point
    pub fn position(&self) -> Point3<f32> {
        Point3::new(self.x, self.y, self.z)
    }

    /// Image-plane position, depth dropped
    pub fn xy(&self) -> Point2<f32> {
        Point2::new(self.x, self.y)
    }

    /// Euclidean distance in the image plane
    pub fn distance_2d(&self, other: &HandLandmark) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Euclidean distance including depth
    pub fn distance_3d(&self, other: &HandLandmark) -> f32 {
        nalgebra::distance(&self.position(), &other.position())
    }

    /// Midpoint between two landmarks
    pub fn midpoint(&self, other: &HandLandmark) -> HandLandmark {
        HandLandmark::new(
            (self.x + other.x) / 2.0,
            (self.y + other.y) / 2.0,
            (self.z + other.z) / 2.0,
        )
    }
}

/// The full 21-point skeleton of one detected hand.
///
/// Construction validates the landmark count, so every index in the hand
/// topology is always present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<HandLandmark>", into = "Vec<HandLandmark>")]
pub struct HandLandmarks {
    points: [HandLandmark; LANDMARK_COUNT],
}

impl HandLandmarks {
    /// Create from a fixed array
    pub fn new(points: [HandLandmark; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Create from a slice, failing if it is not exactly 21 landmarks long
    pub fn from_slice(points: &[HandLandmark]) -> Result<Self> {
        let points: [HandLandmark; LANDMARK_COUNT] =
            points.try_into().map_err(|_| Error::InvalidLandmarkCount {
                expected: LANDMARK_COUNT,
                found: points.len(),
            })?;
        Ok(Self { points })
    }

    /// Landmark at a topology index
    ///
    /// # Panics
    /// Panics if `index >= 21`.
    pub fn get(&self, index: usize) -> &HandLandmark {
        &self.points[index]
    }

    /// Tip landmark of a finger
    pub fn tip(&self, finger: Finger) -> &HandLandmark {
        &self.points[finger.tip()]
    }

    /// Base landmark of a finger
    pub fn base(&self, finger: Finger) -> &HandLandmark {
        &self.points[finger.base()]
    }

    pub fn wrist(&self) -> &HandLandmark {
        &self.points[WRIST]
    }

    pub fn as_slice(&self) -> &[HandLandmark] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HandLandmark> {
        self.points.iter()
    }
}

impl std::ops::Index<usize> for HandLandmarks {
    type Output = HandLandmark;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl TryFrom<Vec<HandLandmark>> for HandLandmarks {
    type Error = Error;

    fn try_from(points: Vec<HandLandmark>) -> Result<Self> {
        Self::from_slice(&points)
    }
}

impl TryFrom<&[HandLandmark]> for HandLandmarks {
    type Error = Error;

    fn try_from(points: &[HandLandmark]) -> Result<Self> {
        Self::from_slice(points)
    }
}

impl From<HandLandmarks> for Vec<HandLandmark> {
    fn from(hand: HandLandmarks) -> Self {
        hand.points.to_vec()
    }
}

impl<'a> IntoIterator for &'a HandLandmarks {
    type Item = &'a HandLandmark;
    type IntoIter = std::slice::Iter<'a, HandLandmark>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
