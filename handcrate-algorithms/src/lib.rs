//! # handcrate Algorithms
//!
//! Gesture analysis over 21-point hand landmarks.
//!
//! This crate derives per-finger distances from a hand skeleton, gates
//! gestures on fingertip proximity to a projected 3D object, and classifies
//! pinch, two-hand pinch, squeeze, fist and pointing-direction gestures.

pub mod config;
pub mod geometry;
pub mod proximity;
pub mod gesture;
pub mod pinch;
pub mod classifier;
pub mod direction;

// Re-export commonly used items
pub use config::*;
pub use geometry::*;
pub use proximity::*;
pub use gesture::*;
pub use pinch::*;
pub use classifier::*;
pub use direction::*;
