//! Core data structures and traits for handcrate
//! 
//! This crate provides the fundamental types shared by the gesture pipeline:
//! normalized hand landmarks, per-frame hand observations, object transforms,
//! and the traits that connect gesture analysis to a 3D scene.

pub mod landmark;
pub mod hand;
pub mod traits;
pub mod transform;
pub mod error;

pub use landmark::*;
pub use hand::*;
pub use traits::*;
pub use transform::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point2, Point3, Vector3, Matrix4, UnitQuaternion};
