//! # FitForm Core
//!
//! Core types for the FitForm exercise analysis engine.
//!
//! This crate provides the foundational building blocks shared by the
//! analysis engine and its bindings:
//!
//! - **Geometry**: [`Point2`] and the joint-angle / vertical-distance
//!   primitives used by metric extraction.
//! - **Pose Types**: [`PoseFrame`] and the standard 33-point landmark index
//!   layout emitted by the pose detector.
//! - **Exercise Catalog**: [`Exercise`], [`ExerciseFamily`] and
//!   [`Difficulty`], with per-family descriptors that drive metric
//!   extraction and repetition detection.
//! - **Metrics**: [`MetricSet`], the named scalar features extracted from a
//!   frame.
//! - **Thresholds**: [`ThresholdTable`], the externally supplied
//!   exercise × difficulty form-correctness bounds.
//! - **Feedback**: [`Feedback`], the per-frame record reported upward.
//! - **Errors**: the [`error`] module.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization via serde, including
//!   JSON loading for [`ThresholdTable`].
//!
//! ## Example
//!
//! ```rust
//! use fitform_core::{Exercise, Difficulty};
//!
//! let exercise = Exercise::from_id("squat").unwrap();
//! assert_eq!(exercise.key_metric(), Some("knee_angle"));
//! assert!(!exercise.is_static_hold());
//! assert_eq!(Difficulty::Medium.band_tolerance(), 0.05);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod exercise;
pub mod feedback;
pub mod geometry;
pub mod metrics;
pub mod pose;
pub mod thresholds;

// Re-export commonly used types at the crate root
pub use error::{ConfigError, CoreError, CoreResult};
pub use exercise::{Difficulty, Direction, Exercise, ExerciseFamily, SecondarySense};
pub use feedback::{messages, Feedback};
pub use geometry::{angle_deg, vertical_gap, Point2};
pub use metrics::{metric, MetricSet};
pub use pose::{landmark, PoseFrame, POSE_LANDMARK_COUNT};
pub use thresholds::{split_bound_key, BoundKind, ThresholdRow, ThresholdTable};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Expected camera frame width in pixels, used by the viewpoint gate.
pub const DEFAULT_FRAME_WIDTH: f32 = 640.0;

/// Maximum horizontal hip separation, as a fraction of the frame width,
/// tolerated by the side-view gate.
pub const HIP_SEPARATION_RATIO: f32 = 0.1;

/// Prelude module for convenient imports.
///
/// ```rust
/// use fitform_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ConfigError, CoreError, CoreResult};
    pub use crate::exercise::{Difficulty, Direction, Exercise, ExerciseFamily, SecondarySense};
    pub use crate::feedback::Feedback;
    pub use crate::geometry::Point2;
    pub use crate::metrics::MetricSet;
    pub use crate::pose::{PoseFrame, POSE_LANDMARK_COUNT};
    pub use crate::thresholds::{ThresholdRow, ThresholdTable};
}
