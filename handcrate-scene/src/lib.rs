//! Scene-side helpers for gesture-driven object manipulation
//! 
//! This crate connects gesture classification to a 3D scene:
//! - Perspective camera projection and fingertip unprojection
//! - Tracked scene objects with position, rotation and scale
//! - A default policy mapping gestures to object transforms
//! - A per-frame pipeline over a stream of hand observations
//!
//! Rendering itself is left to the host application.

pub mod camera;
pub mod object;
pub mod controller;
pub mod pipeline;

pub use camera::*;
pub use object::*;
pub use controller::*;
pub use pipeline::*;
