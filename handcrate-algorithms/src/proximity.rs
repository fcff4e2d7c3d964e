//! Proximity gate between fingertips and a projected 3D object

use handcrate_core::{HandLandmark, Point2, Point3, Projector};
use tracing::trace;

use crate::config::GestureThresholds;

/// Remap normalized device coordinates to detector space.
///
/// NDC has its origin at the centre with y up; detector space has its origin
/// at the top-left with y down.
pub fn to_detector_space(ndc: &Point3<f32>) -> Point2<f32> {
    Point2::new((ndc.x + 1.0) / 2.0, (1.0 - ndc.y) / 2.0)
}

/// Precondition that fingertips are near an object's screen position
/// before gestures may target it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityGate {
    pub radius: f32,
    pub mirror_x: bool,
}

impl ProximityGate {
    pub fn new(radius: f32, mirror_x: bool) -> Self {
        Self { radius, mirror_x }
    }

    pub fn from_thresholds(thresholds: &GestureThresholds) -> Self {
        Self::new(thresholds.gate_radius, thresholds.mirror_x)
    }

    /// Project a world position through `projector` into detector space
    pub fn project_object<P: Projector + ?Sized>(
        &self,
        object: &Point3<f32>,
        projector: &P,
    ) -> Point2<f32> {
        to_detector_space(&projector.project(object))
    }

    /// Distance from a landmark to an object already in detector space
    pub fn distance_to(&self, landmark: &HandLandmark, object: &Point2<f32>) -> f32 {
        let x = if self.mirror_x { 1.0 - landmark.x } else { landmark.x };
        (object.x - x).hypot(object.y - landmark.y)
    }

    /// True when every tip lies within the radius of `object`.
    ///
    /// The boundary is inclusive. An empty tip list passes; a NaN distance fails.
    pub fn contains_projected(&self, tips: &[HandLandmark], object: &Point2<f32>) -> bool {
        tips.iter().all(|tip| {
            let distance = self.distance_to(tip, object);
            if distance <= self.radius {
                true
            } else {
                trace!(distance, radius = self.radius, "fingertip outside proximity gate");
                false
            }
        })
    }

    /// Project `object` and test every tip against it
    pub fn contains<P: Projector + ?Sized>(
        &self,
        tips: &[HandLandmark],
        object: &Point3<f32>,
        projector: &P,
    ) -> bool {
        self.contains_projected(tips, &self.project_object(object, projector))
    }
}

impl Default for ProximityGate {
    fn default() -> Self {
        Self::from_thresholds(&GestureThresholds::default())
    }
}
