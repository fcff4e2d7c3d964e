//! Core traits for handcrate

use nalgebra::Point3;

use crate::transform::ObjectTransform;

/// Anything that can project a world-space point into normalized device coordinates.
///
/// The result uses the usual clip-space convention: `x` and `y` in `[-1, 1]`
/// with `y` pointing up, `z` the normalized depth.
pub trait Projector {
    fn project(&self, world: &Point3<f32>) -> Point3<f32>;
}

/// An object whose world position gestures can target
pub trait Tracked {
    fn world_position(&self) -> Point3<f32>;
}

/// Trait for objects that gestures can transform
pub trait Transformable {
    fn transform(&self) -> &ObjectTransform;

    fn transform_mut(&mut self) -> &mut ObjectTransform;
}

impl Tracked for ObjectTransform {
    fn world_position(&self) -> Point3<f32> {
        self.position
    }
}

impl Tracked for Point3<f32> {
    fn world_position(&self) -> Point3<f32> {
        *self
    }
}
