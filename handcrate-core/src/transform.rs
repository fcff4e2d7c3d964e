//! Object transform utilities

use nalgebra::{Isometry3, Matrix4, Point3, Translation3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Position, rotation and scale of a manipulable 3D object
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectTransform {
    pub position: Point3<f32>,
    pub rotation: UnitQuaternion<f32>,
    pub scale: Vector3<f32>,
}

impl ObjectTransform {
    /// Create an identity transform at the origin
    pub fn identity() -> Self {
        Self {
            position: Point3::origin(),
            rotation: UnitQuaternion::identity(),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }

    /// Create an unrotated, unscaled transform at `position`
    pub fn at(position: Point3<f32>) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }

    /// Move by an offset
    pub fn translate(&mut self, offset: Vector3<f32>) {
        self.position += offset;
    }

    /// Rotate about the world Y axis
    pub fn rotate_y(&mut self, angle: f32) {
        self.rotation = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), angle) * self.rotation;
    }

    /// Rotate about the world X axis
    pub fn rotate_x(&mut self, angle: f32) {
        self.rotation = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), angle) * self.rotation;
    }

    pub fn reset_rotation(&mut self) {
        self.rotation = UnitQuaternion::identity();
    }

    /// Multiply the scale uniformly, keeping every axis within `[min, max]`
    pub fn scale_by(&mut self, factor: f32, min: f32, max: f32) {
        self.scale = (self.scale * factor).map(|s| s.clamp(min, max));
    }

    /// Mean of the three scale axes
    pub fn uniform_scale(&self) -> f32 {
        self.scale.mean()
    }

    /// Homogeneous matrix applying scale, then rotation, then translation
    pub fn to_matrix(&self) -> Matrix4<f32> {
        let isometry = Isometry3::from_parts(Translation3::from(self.position.coords), self.rotation);
        isometry.to_homogeneous() * Matrix4::new_nonuniform_scaling(&self.scale)
    }

    /// Apply the transform to a point in object space
    pub fn transform_point(&self, point: &Point3<f32>) -> Point3<f32> {
        let homogeneous = self.to_matrix() * point.to_homogeneous();
        Point3::from_homogeneous(homogeneous).unwrap_or(*point)
    }
}

impl Default for ObjectTransform {
    fn default() -> Self {
        Self::identity()
    }
}
