//! Camera utilities for mapping between world space and the detector image

use handcrate_core::{HandLandmark, Projector};
use nalgebra::{Matrix4, Perspective3, Point3, Vector3};

/// Default distance from the camera at which a fingertip ray is sampled
pub const DEFAULT_FINGER_DISTANCE: f32 = 5.0;

/// A perspective camera looking at the manipulated object
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    /// Vertical field of view in radians
    pub fov: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
}

impl PerspectiveCamera {
    /// Create a new camera
    pub fn new(
        position: Point3<f32>,
        target: Point3<f32>,
        up: Vector3<f32>,
        fov: f32,
        aspect_ratio: f32,
        near: f32,
        far: f32,
    ) -> Self {
        Self {
            position,
            target,
            up,
            fov,
            aspect_ratio,
            near,
            far,
        }
    }

    /// Get the view matrix
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    /// Get the projection matrix
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        let perspective = Perspective3::new(self.aspect_ratio, self.fov, self.near, self.far);
        perspective.into_inner()
    }

    pub fn view_projection(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }

    /// Track a resized viewport
    pub fn set_aspect_ratio(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect_ratio = width / height;
        }
    }

    /// Map a normalized device coordinate back to world space.
    ///
    /// Returns `None` if the view-projection matrix is singular.
    pub fn unproject(&self, ndc: &Point3<f32>) -> Option<Point3<f32>> {
        let inverse = self.view_projection().try_inverse()?;
        Point3::from_homogeneous(inverse * ndc.to_homogeneous())
    }

    /// World position under a fingertip, `distance` units along the camera ray.
    ///
    /// The preview is mirrored, so the landmark's x is flipped before it is
    /// mapped to NDC. Projecting the result lands on `(1 - x, y)` in detector
    /// space, which is where the proximity gate looks for mirrored tips.
    pub fn landmark_to_world(&self, landmark: &HandLandmark, distance: f32) -> Option<Point3<f32>> {
        let ndc = Point3::new((1.0 - landmark.x) * 2.0 - 1.0, (1.0 - landmark.y) * 2.0 - 1.0, 0.5);
        let on_ray = self.unproject(&ndc)?;
        let direction = (on_ray - self.position).try_normalize(f32::EPSILON)?;
        Some(self.position + direction * distance)
    }
}

impl Projector for PerspectiveCamera {
    /// Points on the camera plane have no projection and are sent to infinity,
    /// which keeps them outside any proximity gate.
    fn project(&self, world: &Point3<f32>) -> Point3<f32> {
        Point3::from_homogeneous(self.view_projection() * world.to_homogeneous())
            .unwrap_or_else(|| Point3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY))
    }
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::new(
            Point3::new(3.0, 3.0, 3.0),
            Point3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            75f32.to_radians(),
            16.0 / 9.0,
            0.1,
            100.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use handcrate_algorithms::to_detector_space;

    fn front_camera() -> PerspectiveCamera {
        PerspectiveCamera::new(
            Point3::new(0.0, 0.0, 5.0),
            Point3::origin(),
            Vector3::y(),
            std::f32::consts::FRAC_PI_4,
            1.0,
            0.1,
            100.0,
        )
    }

    #[test]
    fn test_target_projects_to_centre() {
        let camera = PerspectiveCamera::default();
        let ndc = camera.project(&camera.target);
        assert_relative_eq!(ndc.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(ndc.y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_right_and_up_in_view() {
        let camera = front_camera();
        let ndc = camera.project(&Point3::new(1.0, 1.0, 0.0));
        assert!(ndc.x > 0.0);
        assert!(ndc.y > 0.0);
        let screen = to_detector_space(&ndc);
        // up in the world is towards the top of the image
        assert!(screen.y < 0.5);
    }

    #[test]
    fn test_unproject_inverts_project() {
        let camera = front_camera();
        let world = Point3::new(0.5, -0.25, 1.0);
        let back = camera.unproject(&camera.project(&world)).unwrap();
        assert_relative_eq!(back, world, epsilon = 1e-2);
    }

    #[test]
    fn test_landmark_to_world_distance_and_mirroring() {
        let camera = front_camera();
        let tip = HandLandmark::new(0.3, 0.6, 0.0);
        let world = camera.landmark_to_world(&tip, DEFAULT_FINGER_DISTANCE).unwrap();

        assert_relative_eq!(nalgebra::distance(&camera.position, &world), 5.0, epsilon = 1e-3);

        let screen = to_detector_space(&camera.project(&world));
        assert_relative_eq!(screen.x, 0.7, epsilon = 1e-3);
        assert_relative_eq!(screen.y, 0.6, epsilon = 1e-3);
    }

    #[test]
    fn test_centre_landmark_lies_on_view_axis() {
        let camera = front_camera();
        let world = camera
            .landmark_to_world(&HandLandmark::new(0.5, 0.5, 0.0), 5.0)
            .unwrap();
        assert_relative_eq!(world, Point3::origin(), epsilon = 1e-3);
    }

    #[test]
    fn test_set_aspect_ratio_ignores_empty_viewport() {
        let mut camera = front_camera();
        camera.set_aspect_ratio(1920.0, 1080.0);
        assert_relative_eq!(camera.aspect_ratio, 16.0 / 9.0);
        camera.set_aspect_ratio(0.0, 1080.0);
        assert_relative_eq!(camera.aspect_ratio, 16.0 / 9.0);
    }
}
