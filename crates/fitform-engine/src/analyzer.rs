//! The top-level frame analyzer.
//!
//! One `ExerciseAnalyzer` owns the active exercise selection, difficulty,
//! threshold table and session state, and processes one landmark frame per
//! call: input gates → metric extraction → smoothing → static or dynamic
//! evaluation → feedback record.
//!
//! The call is fully synchronous and infallible at the type level: input
//! rejections and configuration gaps surface in the returned [`Feedback`],
//! and the next frame is processed normally.

use fitform_core::{
    landmark, messages, metrics::SECONDARY_METRIC_PRIORITY, Difficulty, Exercise, Feedback,
    MetricSet, PoseFrame, ThresholdTable, DEFAULT_FRAME_WIDTH, HIP_SEPARATION_RATIO,
};

use crate::evaluator;
use crate::extractor;
use crate::session::SessionState;
use crate::state_machine::{self, TransitionPolicy, TriggerBands};

/// Configuration for the frame analyzer.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Expected camera frame width in pixels
    pub frame_width: f32,
    /// Maximum hip separation for the side-view gate, as a fraction of the
    /// frame width
    pub hip_separation_ratio: f32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            frame_width: DEFAULT_FRAME_WIDTH,
            hip_separation_ratio: HIP_SEPARATION_RATIO,
        }
    }
}

/// Exercise analysis engine: repetition counting and form feedback over a
/// live landmark stream.
pub struct ExerciseAnalyzer {
    exercise: Option<Exercise>,
    difficulty: Difficulty,
    thresholds: ThresholdTable,
    bands: Option<TriggerBands>,
    policy: Option<TransitionPolicy>,
    session: SessionState,
    config: AnalyzerConfig,
    frame_count: u64,
}

impl ExerciseAnalyzer {
    /// Creates an analyzer with the default configuration. The initial
    /// selection is a medium-difficulty squat with an empty threshold table.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::default())
    }

    /// Creates an analyzer with a custom configuration.
    #[must_use]
    pub fn with_config(config: AnalyzerConfig) -> Self {
        let mut analyzer = Self {
            exercise: Some(Exercise::Squat),
            difficulty: Difficulty::Medium,
            thresholds: ThresholdTable::new(),
            bands: None,
            policy: None,
            session: SessionState::new(),
            config,
            frame_count: 0,
        };
        analyzer.refresh_descriptors();
        analyzer
    }

    /// Replaces the active exercise and fully resets the session.
    ///
    /// An unrecognized id is accepted: the session simply extracts no
    /// metrics and stays inert until a known exercise is selected.
    pub fn set_exercise(&mut self, id: &str) {
        self.exercise = Exercise::from_id(id);
        if self.exercise.is_none() {
            tracing::warn!(exercise = %id, "unknown exercise id, session will stay inert");
        } else {
            tracing::debug!(exercise = %id, "exercise selected");
        }
        self.session = SessionState::new();
        self.frame_count = 0;
        self.refresh_descriptors();
    }

    /// Changes the difficulty. The session is kept.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        tracing::debug!(difficulty = %difficulty, "difficulty selected");
        self.refresh_descriptors();
    }

    /// Replaces the threshold table. Queued messages about the previous
    /// configuration are dropped.
    pub fn load_thresholds(&mut self, thresholds: ThresholdTable) {
        tracing::debug!(exercises = thresholds.len(), "threshold table replaced");
        self.thresholds = thresholds;
        self.session.messages.clear();
    }

    /// Clears session state without touching exercise, difficulty or
    /// thresholds.
    pub fn reset(&mut self) {
        self.session = SessionState::new();
        self.frame_count = 0;
    }

    /// Analyzes one landmark frame and returns the feedback record.
    pub fn analyze(&mut self, frame: &PoseFrame) -> Feedback {
        self.frame_count += 1;

        if !frame.is_complete() {
            return Feedback::incorrect(
                messages::CANNOT_DETECT_POSE,
                self.session.rep_count,
                self.session.correct_rep_count,
            );
        }

        if self.requires_side_view() && !self.hips_aligned(frame) {
            return Feedback::incorrect(
                messages::WRONG_VIEWPOINT,
                self.session.rep_count,
                self.session.correct_rep_count,
            );
        }

        let raw = self
            .exercise
            .map(|exercise| extractor::extract(exercise, frame))
            .unwrap_or_default();
        let smoothed = self.session.smoother.push_and_smooth(raw);

        if let Some(exercise) = self.exercise {
            if exercise.is_static_hold() {
                return self.analyze_static_hold(exercise, &smoothed);
            }
        }

        self.session.rep_frames.push(smoothed.clone());
        self.advance_state_machine(&smoothed);

        Feedback::new(
            true,
            self.session.current_message(),
            self.session.rep_count,
            self.session.correct_rep_count,
        )
    }

    /// Active exercise, if the last selected id was recognized.
    #[must_use]
    pub fn exercise(&self) -> Option<Exercise> {
        self.exercise
    }

    /// Active difficulty.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Read-only view of the session state.
    #[must_use]
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Frames analyzed since the last reset.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Ids of every supported exercise, in catalog order.
    #[must_use]
    pub fn available_exercises() -> Vec<&'static str> {
        Exercise::all().iter().map(|e| e.id()).collect()
    }

    /// All difficulty levels.
    #[must_use]
    pub fn available_difficulties() -> [Difficulty; 3] {
        Difficulty::all()
    }

    /// Re-resolves the per-exercise descriptor after a selection change.
    fn refresh_descriptors(&mut self) {
        self.bands = self
            .exercise
            .and_then(|e| TriggerBands::for_exercise(e, self.difficulty));
        self.policy = self.exercise.map(TransitionPolicy::for_exercise);
    }

    fn requires_side_view(&self) -> bool {
        self.exercise.map_or(true, |e| e.requires_side_view())
    }

    /// Side-view gate: the hip landmarks must nearly overlap horizontally.
    fn hips_aligned(&self, frame: &PoseFrame) -> bool {
        let left = frame.point(landmark::LEFT_HIP);
        let right = frame.point(landmark::RIGHT_HIP);
        let max_separation = self.config.hip_separation_ratio * self.config.frame_width;
        (left.x - right.x).abs() <= max_separation
    }

    /// Dynamic path: feed the key metric into the trend estimator and run
    /// the rep state machine once enough history is buffered.
    fn advance_state_machine(&mut self, smoothed: &MetricSet) {
        let (Some(exercise), Some(bands), Some(policy)) = (self.exercise, self.bands, self.policy)
        else {
            return;
        };
        let Some(value) = exercise.key_metric().and_then(|key| smoothed.get(key)) else {
            return;
        };

        let secondary = smoothed.first_of(&SECONDARY_METRIC_PRIORITY);
        self.session.trend.push(value);

        let Some(trend) = self.session.trend.signal() else {
            return;
        };
        if state_machine::advance(&mut self.session, value, trend, secondary, &bands, policy) {
            self.complete_rep(exercise);
        }
    }

    /// Scores the buffered repetition and re-arms the machine.
    fn complete_rep(&mut self, exercise: Exercise) {
        let within_bounds = match self.thresholds.first_row(exercise.id(), self.difficulty) {
            Some(row) => {
                !self.session.rep_frames.is_empty()
                    && evaluator::frames_within_bounds(self.session.rep_frames.iter(), row)
            }
            None => {
                // Correctness cannot be evaluated; surface why.
                if !self.session.messages.iter().any(|m| m == messages::NO_THRESHOLDS) {
                    self.session.messages.push(messages::NO_THRESHOLDS.to_string());
                }
                false
            }
        };
        self.session.finish_rep(within_bounds);
        tracing::debug!(
            rep = self.session.rep_count,
            correct = self.session.correct_rep_count,
            "repetition complete"
        );
    }

    /// Static-hold path: score the current smoothed metric set directly;
    /// the first evaluated frame counts as the hold's single repetition.
    fn analyze_static_hold(&mut self, exercise: Exercise, smoothed: &MetricSet) -> Feedback {
        let Some(row) = self.thresholds.first_row(exercise.id(), self.difficulty) else {
            return Feedback::incorrect(
                messages::NO_THRESHOLDS,
                self.session.rep_count,
                self.session.correct_rep_count,
            );
        };

        let correct = evaluator::metrics_within_bounds(smoothed, row);

        if self.session.rep_count == 0 {
            self.session.rep_count = 1;
            if correct {
                self.session.correct_rep_count = 1;
            }
        }

        let message = if correct {
            messages::HOLD_GOOD
        } else {
            messages::HOLD_ADJUST
        };
        Feedback::new(
            correct,
            message,
            self.session.rep_count,
            self.session.correct_rep_count,
        )
    }
}

impl Default for ExerciseAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
