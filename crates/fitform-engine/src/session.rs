//! Per-session mutable state.
//!
//! One `SessionState` exists per active exercise selection. It is created
//! fresh whenever the selection changes, mutated frame by frame exclusively
//! by the engine, and only ever read by the feedback path. Fields are public
//! so tests can construct interesting states directly.

use fitform_core::{messages, MetricSet};

use crate::buffer::BoundedBuffer;
use crate::smoother::MetricSmoother;
use crate::state_machine::RepPhase;
use crate::trend::TrendEstimator;

/// Capacity of the per-repetition frame buffer.
pub const REP_FRAME_CAPACITY: usize = 30;

/// Mutable state for one exercise session.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Current phase of the rep state machine
    pub phase: RepPhase,
    /// Deepest phase reached during the current repetition
    pub max_phase: RepPhase,
    /// Total repetitions counted
    pub rep_count: u32,
    /// Repetitions that passed correctness evaluation
    pub correct_rep_count: u32,
    /// Guards against double-scoring one repetition
    pub rep_logged: bool,
    /// Raw-metric smoothing window
    pub smoother: MetricSmoother,
    /// Key-metric history for trend estimation
    pub trend: TrendEstimator,
    /// Smoothed metric sets accumulated since entering DOWN
    pub rep_frames: BoundedBuffer<MetricSet>,
    /// Queued coaching messages; the analyzer reports the first
    pub messages: Vec<String>,
}

impl SessionState {
    /// Creates a fresh session.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: RepPhase::Start,
            max_phase: RepPhase::Start,
            rep_count: 0,
            correct_rep_count: 0,
            rep_logged: false,
            smoother: MetricSmoother::new(),
            trend: TrendEstimator::new(),
            rep_frames: BoundedBuffer::with_capacity(REP_FRAME_CAPACITY),
            messages: Vec::new(),
        }
    }

    /// Moves to `phase`, tracking the deepest phase reached.
    pub fn enter_phase(&mut self, phase: RepPhase) {
        self.phase = phase;
        self.max_phase = self.max_phase.max(phase);
    }

    /// Starts a new repetition: enters DOWN, re-seeds the rep frame buffer
    /// with the most recent raw metric set, and re-arms scoring.
    pub fn begin_rep(&mut self) {
        self.enter_phase(RepPhase::Down);
        self.rep_frames.clear();
        if let Some(last_raw) = self.smoother.last_raw() {
            self.rep_frames.push(last_raw.clone());
        }
        self.rep_logged = false;
    }

    /// Completes the current repetition.
    ///
    /// The count always advances. Correctness is credited at most once per
    /// repetition, and only when the movement reached at least HOLD depth.
    /// Either way the machine re-arms at START.
    pub fn finish_rep(&mut self, within_bounds: bool) {
        self.rep_count += 1;

        if !self.rep_logged {
            if within_bounds && self.max_phase >= RepPhase::Hold {
                self.correct_rep_count += 1;
            }
            self.rep_logged = true;
            self.rep_frames.clear();
        }

        self.phase = RepPhase::Start;
        self.max_phase = RepPhase::Start;
    }

    /// The first queued message, or the default.
    #[must_use]
    pub fn current_message(&self) -> &str {
        self.messages
            .first()
            .map_or(messages::CONTINUE, String::as_str)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
