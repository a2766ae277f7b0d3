//! The per-frame feedback record reported to the presentation layer.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Canonical feedback message strings.
pub mod messages {
    /// Frame carried fewer than the required 33 landmarks.
    pub const CANNOT_DETECT_POSE: &str = "Cannot detect pose";
    /// Hip landmarks too far apart horizontally for a side-view exercise.
    pub const WRONG_VIEWPOINT: &str = "Incorrect viewpoint: Please use a side view";
    /// Default message while a dynamic exercise progresses.
    pub const CONTINUE: &str = "Continue";
    /// Static hold within all bounds.
    pub const HOLD_GOOD: &str = "Good form! Hold steady";
    /// Static hold violating a bound.
    pub const HOLD_ADJUST: &str = "Adjust your form";
    /// No threshold entry for the active exercise/difficulty.
    pub const NO_THRESHOLDS: &str = "No thresholds available for this exercise";
}

/// Result of analyzing one frame.
///
/// Input rejections (short frames, wrong viewpoint) and configuration gaps
/// are reported here with `is_correct = false` and a descriptive message —
/// never as errors — so the engine keeps serving the live stream.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Feedback {
    /// Whether the frame (or the hold it belongs to) passed evaluation
    pub is_correct: bool,
    /// Single feedback message for display
    pub message: String,
    /// Total repetitions counted this session
    pub rep_count: u32,
    /// Repetitions that passed correctness evaluation
    pub correct_rep_count: u32,
}

impl Feedback {
    /// Creates a feedback record.
    #[must_use]
    pub fn new(
        is_correct: bool,
        message: impl Into<String>,
        rep_count: u32,
        correct_rep_count: u32,
    ) -> Self {
        Self {
            is_correct,
            message: message.into(),
            rep_count,
            correct_rep_count,
        }
    }

    /// Feedback for a rejected or failed frame; counters pass through
    /// unchanged.
    #[must_use]
    pub fn incorrect(message: impl Into<String>, rep_count: u32, correct_rep_count: u32) -> Self {
        Self::new(false, message, rep_count, correct_rep_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incorrect_preserves_counters() {
        let fb = Feedback::incorrect(messages::CANNOT_DETECT_POSE, 4, 2);
        assert!(!fb.is_correct);
        assert_eq!(fb.rep_count, 4);
        assert_eq!(fb.correct_rep_count, 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let fb = Feedback::new(true, messages::CONTINUE, 3, 1);
        let json = serde_json::to_string(&fb).unwrap();
        let parsed: Feedback = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, fb);
        assert!(json.contains("\"rep_count\":3"));
    }
}
