//! # FitForm Engine
//!
//! Repetition counting and real-time form feedback over a live stream of
//! body-landmark frames.
//!
//! The engine is one deterministic, synchronous component: each call to
//! [`ExerciseAnalyzer::analyze`] processes one 33-landmark frame to
//! completion and returns a [`Feedback`](fitform_core::Feedback) record.
//! There is no internal suspension and no shared mutable state beyond the
//! per-session [`SessionState`]; callers only need to serialize calls.
//!
//! ## Pipeline
//!
//! ```text
//! frame ──► input gates ──► metric extraction ──► temporal smoothing ──┐
//!                                                                      │
//!      ┌───────────────────────────────┬──────────────────────────────┘
//!      ▼ (dynamic exercises)           ▼ (static holds)
//!  trend estimation                correctness vs thresholds
//!  rep state machine                   │
//!  correctness vs thresholds           │
//!      └───────────────┬───────────────┘
//!                      ▼
//!                  feedback record
//! ```
//!
//! ## Example
//!
//! ```rust
//! use fitform_core::{PoseFrame, Point2, ThresholdTable};
//! use fitform_engine::ExerciseAnalyzer;
//!
//! let mut analyzer = ExerciseAnalyzer::new();
//! analyzer.set_exercise("squat");
//! analyzer.load_thresholds(ThresholdTable::new());
//!
//! let frame = PoseFrame::new(vec![Point2::default(); 33]);
//! let feedback = analyzer.analyze(&frame);
//! assert_eq!(feedback.rep_count, 0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod analyzer;
pub mod buffer;
pub mod evaluator;
pub mod extractor;
pub mod session;
pub mod smoother;
pub mod state_machine;
pub mod trend;

pub use analyzer::{AnalyzerConfig, ExerciseAnalyzer};
pub use buffer::BoundedBuffer;
pub use extractor::extract;
pub use session::{SessionState, REP_FRAME_CAPACITY};
pub use smoother::{MetricSmoother, SMOOTHING_WINDOW};
pub use state_machine::{RepPhase, TransitionPolicy, TriggerBand, TriggerBands, TREND_GATE};
pub use trend::{TrendEstimator, TREND_ACTIVATION_SAMPLES, TREND_SPAN, TREND_WINDOW};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
