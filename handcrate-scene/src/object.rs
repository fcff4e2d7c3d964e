//! Objects in the scene that gestures manipulate

use handcrate_core::{ObjectTransform, Point3, Tracked, Transformable};

/// A named object with a transform
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub transform: ObjectTransform,
}

impl SceneObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: ObjectTransform::identity(),
        }
    }

    pub fn at(name: impl Into<String>, position: Point3<f32>) -> Self {
        Self {
            name: name.into(),
            transform: ObjectTransform::at(position),
        }
    }
}

impl Tracked for SceneObject {
    fn world_position(&self) -> Point3<f32> {
        self.transform.position
    }
}

impl Transformable for SceneObject {
    fn transform(&self) -> &ObjectTransform {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut ObjectTransform {
        &mut self.transform
    }
}
