//! The per-repetition phase state machine.
//!
//! Phases cycle START → DOWN → HOLD → UP → START, driven by the smoothed key
//! metric, its trend, and optionally a secondary metric. Per-exercise trigger
//! values widen into acceptance bands by a difficulty-dependent tolerance;
//! families whose key metric *increases* on the down phase run the same logic
//! with every comparison mirrored.

use fitform_core::{Difficulty, Direction, Exercise, SecondarySense};

use crate::session::SessionState;

/// Minimum trend magnitude (key-metric units per frame) for a phase entry or
/// repetition completion.
pub const TREND_GATE: f32 = 1.0;

/// Phase of the rep state machine.
///
/// `Complete` is part of the state vocabulary but is never entered by the
/// current transition logic: a finished repetition re-arms at `Start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RepPhase {
    /// Waiting for the down phase to begin
    Start,
    /// Descending (or driving) toward depth
    Down,
    /// At target depth
    Hold,
    /// Past target depth / auxiliary exit
    Up,
    /// Terminal state, unreachable in practice
    Complete,
}

/// One trigger value widened into an acceptance band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerBand {
    /// Lower edge: `value · (1 − tolerance)`
    pub lower: f32,
    /// Upper edge: `value · (1 + tolerance)`
    pub upper: f32,
}

impl TriggerBand {
    /// Widens a base value into its band.
    #[must_use]
    pub fn around(value: f32, tolerance: f32) -> Self {
        Self {
            lower: value * (1.0 - tolerance),
            upper: value * (1.0 + tolerance),
        }
    }
}

/// The four named trigger bands for an exercise/difficulty pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerBands {
    /// Standing/extended reference band (kept for table shape; no
    /// transition consults it)
    pub state1: TriggerBand,
    /// Down-phase entry and repetition-completion band
    pub state2: TriggerBand,
    /// HOLD depth band
    pub state3: TriggerBand,
    /// UP / auxiliary-exit band
    pub state4: TriggerBand,
}

impl TriggerBands {
    /// Builds the bands for an exercise at a difficulty, or `None` for
    /// families without a trigger table (their dynamic path stays inert).
    #[must_use]
    pub fn for_exercise(exercise: Exercise, difficulty: Difficulty) -> Option<Self> {
        let bases = exercise.family().trigger_bases(difficulty)?;
        let tolerance = difficulty.band_tolerance();
        Some(Self {
            state1: TriggerBand::around(bases[0], tolerance),
            state2: TriggerBand::around(bases[1], tolerance),
            state3: TriggerBand::around(bases[2], tolerance),
            state4: TriggerBand::around(bases[3], tolerance),
        })
    }
}

/// Direction-aware comparison policy for one exercise.
#[derive(Debug, Clone, Copy)]
pub struct TransitionPolicy {
    /// Which way the key metric moves on the down phase
    pub direction: Direction,
    /// How the secondary metric compares against `state4`
    pub secondary_sense: SecondarySense,
}

impl TransitionPolicy {
    /// The policy for an exercise.
    #[must_use]
    pub fn for_exercise(exercise: Exercise) -> Self {
        Self {
            direction: exercise.direction(),
            secondary_sense: exercise.secondary_sense(),
        }
    }

    /// Key metric has passed `band` in the down direction.
    fn passed_down(&self, value: f32, band: TriggerBand) -> bool {
        match self.direction {
            Direction::Decreasing => value < band.upper,
            Direction::Increasing => value > band.lower,
        }
    }

    /// Key metric has returned past `band` in the up direction.
    fn returned_up(&self, value: f32, band: TriggerBand) -> bool {
        match self.direction {
            Direction::Decreasing => value > band.lower,
            Direction::Increasing => value < band.upper,
        }
    }

    /// Trend points in the down direction.
    fn trending_down(&self, trend: f32) -> bool {
        match self.direction {
            Direction::Decreasing => trend < -TREND_GATE,
            Direction::Increasing => trend > TREND_GATE,
        }
    }

    /// Trend points in the up direction.
    fn trending_up(&self, trend: f32) -> bool {
        match self.direction {
            Direction::Decreasing => trend > TREND_GATE,
            Direction::Increasing => trend < -TREND_GATE,
        }
    }

    /// The DOWN/HOLD → UP condition. Families with the `Below` sense accept
    /// either the key metric or the secondary metric crossing `state4`;
    /// families with the `Above` sense exit on the secondary metric alone.
    fn exit_to_up(&self, value: f32, secondary: Option<f32>, band: TriggerBand) -> bool {
        match self.secondary_sense {
            SecondarySense::Below => {
                self.passed_down(value, band) || secondary.is_some_and(|s| s < band.upper)
            }
            SecondarySense::Above => secondary.is_some_and(|s| s > band.lower),
        }
    }

    /// The repetition-completion condition: moving up, back past `state2`.
    fn rep_complete(&self, value: f32, trend: f32, band: TriggerBand) -> bool {
        self.trending_up(trend) && self.returned_up(value, band)
    }
}

/// Advances the state machine by one frame.
///
/// Returns `true` when a repetition boundary is reached; the caller then
/// evaluates correctness over the buffered frames and calls
/// [`SessionState::finish_rep`].
pub fn advance(
    session: &mut SessionState,
    value: f32,
    trend: f32,
    secondary: Option<f32>,
    bands: &TriggerBands,
    policy: TransitionPolicy,
) -> bool {
    match session.phase {
        RepPhase::Start => {
            if policy.trending_down(trend) && policy.passed_down(value, bands.state2) {
                session.begin_rep();
            }
            false
        }
        RepPhase::Down => {
            if policy.passed_down(value, bands.state3) {
                session.enter_phase(RepPhase::Hold);
                false
            } else if policy.exit_to_up(value, secondary, bands.state4) {
                session.enter_phase(RepPhase::Up);
                false
            } else {
                policy.rep_complete(value, trend, bands.state2)
            }
        }
        RepPhase::Hold => {
            if policy.exit_to_up(value, secondary, bands.state4) {
                session.enter_phase(RepPhase::Up);
                false
            } else {
                policy.rep_complete(value, trend, bands.state2)
            }
        }
        RepPhase::Up => policy.rep_complete(value, trend, bands.state2),
        RepPhase::Complete => false,
    }
}
