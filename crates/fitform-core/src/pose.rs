//! Pose frames and the standard landmark index layout.
//!
//! The upstream pose detector emits 33 body landmarks per video frame in a
//! fixed anatomical order (the MediaPipe Pose layout). Analysis reads a small
//! subset of indices; the constants in [`landmark`] name the ones the engine
//! consumes.

use crate::error::{CoreError, CoreResult};
use crate::geometry::Point2;

/// Number of landmarks in a complete pose frame.
pub const POSE_LANDMARK_COUNT: usize = 33;

/// Landmark indices (MediaPipe Pose - 33 total).
pub mod landmark {
    /// Nose
    pub const NOSE: usize = 0;
    /// Left shoulder
    pub const LEFT_SHOULDER: usize = 11;
    /// Right shoulder
    pub const RIGHT_SHOULDER: usize = 12;
    /// Right elbow
    pub const RIGHT_ELBOW: usize = 14;
    /// Right wrist
    pub const RIGHT_WRIST: usize = 16;
    /// Left hip
    pub const LEFT_HIP: usize = 23;
    /// Right hip
    pub const RIGHT_HIP: usize = 24;
    /// Right knee
    pub const RIGHT_KNEE: usize = 26;
    /// Right ankle
    pub const RIGHT_ANKLE: usize = 28;
}

/// One detector output: an ordered sequence of 2-D landmark positions.
///
/// A frame may arrive with fewer than [`POSE_LANDMARK_COUNT`] points (a
/// partial detection); the engine rejects such frames per call rather than
/// at construction, so the type itself accepts any length.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PoseFrame {
    points: Vec<Point2>,
}

impl PoseFrame {
    /// Creates a frame from landmark positions.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Creates a frame from a flat `[x0, y0, x1, y1, ...]` coordinate array,
    /// the layout used across the FFI boundary.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the slice length is odd.
    pub fn from_flat(coords: &[f32]) -> CoreResult<Self> {
        if coords.len() % 2 != 0 {
            return Err(CoreError::validation(format!(
                "flat coordinate array must have even length, got {}",
                coords.len()
            )));
        }
        let points = coords
            .chunks_exact(2)
            .map(|pair| Point2::new(pair[0], pair[1]))
            .collect();
        Ok(Self { points })
    }

    /// Number of landmarks in this frame.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the frame contains no landmarks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns `true` if the frame carries the full 33-point layout.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.points.len() >= POSE_LANDMARK_COUNT
    }

    /// Landmark position by index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range; callers validate with
    /// [`Self::is_complete`] before reading anatomical indices.
    #[must_use]
    pub fn point(&self, index: usize) -> Point2 {
        self.points[index]
    }

    /// Landmark position by index, `None` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Point2> {
        self.points.get(index).copied()
    }

    /// All landmark positions in index order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }
}
