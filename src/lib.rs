//! # handcrate
//!
//! Heuristic hand gesture recognition over 21-point hand landmarks, for
//! manipulating 3D objects with a webcam.
//!
//! This is the umbrella crate that provides convenient access to all handcrate
//! functionality. You can use this crate to get everything in one place, or use
//! individual crates for more granular control over dependencies.
//!
//! ## Features
//!
//! - **Core**: Landmarks, hands, frames, object transforms and the error type
//! - **Algorithms**: Finger geometry, proximity gating and gesture classification
//! - **I/O**: Recorded session files (JSON Lines and JSON arrays)
//! - **Scene**: Camera projection, scene objects and the per-frame pipeline
//!
//! ## Quick Start
//!
//! ```rust
//! use handcrate::prelude::*;
//!
//! # fn main() -> handcrate::Result<()> {
//! let mut points = [HandLandmark::new(0.5, 0.9, 0.0); LANDMARK_COUNT];
//! points[THUMB_TIP] = HandLandmark::new(0.48, 0.5, 0.0);
//! points[INDEX_TIP] = HandLandmark::new(0.50, 0.5, 0.0);
//! points[INDEX_MCP] = HandLandmark::new(0.50, 0.8, 0.0);
//! let hand = HandLandmarks::new(points);
//!
//! let mut classifier = GestureClassifier::new(GestureThresholds::default())?;
//! let camera = PerspectiveCamera::default();
//! let response = classifier.classify(HandLabel::Right, &hand, &camera.target, &camera);
//! assert_eq!(response.gesture, Gesture::Pinched);
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: Enables algorithms, io and scene
//! - `algorithms`: Gesture classification
//! - `io`: Session file support
//! - `scene`: Camera, objects and the gesture pipeline (implies `algorithms`)
//! - `all`: Enables all features

// Re-export core functionality
pub use handcrate_core::*;

// Re-export sub-crates
#[cfg(feature = "algorithms")]
pub use handcrate_algorithms as algorithms;

#[cfg(feature = "io")]
pub use handcrate_io as io;

#[cfg(feature = "scene")]
pub use handcrate_scene as scene;

/// Convenient imports for common use cases
pub mod prelude {
    pub use handcrate_core::*;

    #[cfg(feature = "algorithms")]
    pub use handcrate_algorithms::*;

    #[cfg(feature = "io")]
    pub use handcrate_io::*;

    #[cfg(feature = "scene")]
    pub use handcrate_scene::*;
}
