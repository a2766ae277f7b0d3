//! The exercise catalog: identifiers, difficulty levels, and the per-family
//! descriptors that drive metric extraction and repetition detection.
//!
//! Instead of branching on individual exercise ids at every decision point,
//! each exercise resolves once to a family descriptor: which metrics to
//! extract, which single metric keys the rep state machine, which direction
//! the key metric moves on the down phase, how the secondary metric is
//! compared, and which trigger-table row (if any) applies.

use crate::metrics::metric;

/// Difficulty level for an exercise session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    /// Wide tolerance bands, shallow depth targets
    Easy,
    /// Default tolerance bands
    Medium,
    /// Tight tolerance bands, deep depth targets
    Hard,
}

impl Difficulty {
    /// All difficulty levels in ascending order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Easy, Self::Medium, Self::Hard]
    }

    /// Returns the difficulty name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Parses a difficulty from its wire name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    /// Relative half-width applied to each trigger value to form its
    /// acceptance band `[v·(1−tol), v·(1+tol)]`.
    #[must_use]
    pub const fn band_tolerance(&self) -> f32 {
        match self {
            Self::Easy => 0.10,
            Self::Medium => 0.05,
            Self::Hard => 0.02,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Medium
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction the key metric moves during the down (effort) phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Key metric falls on the way down (squats, pushups, knee drives)
    Decreasing,
    /// Key metric rises on the way down (jumping jacks, crunches, bridges)
    Increasing,
}

/// How the secondary metric is compared against the `state4` band when
/// deciding the transition out of HOLD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecondarySense {
    /// Secondary metric below the band triggers the transition
    Below,
    /// Secondary metric above the band triggers the transition
    Above,
}

/// Exercise families sharing landmark reads, metrics, and transition shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExerciseFamily {
    /// Knee-dominant lowering: squat, burpee, step-up, lunge, split squat
    Squat,
    /// Arm press/pull: pushups, rows, tricep dip
    PushRow,
    /// Hip drive off the floor: glute bridge, bridge, hip thrust
    HipHinge,
    /// Knee raised toward the chest: mountain climber, high knees
    KneeDrive,
    /// Trunk curled toward the knee: bicycle crunch, alternating abs
    TrunkFlexion,
    /// Limb extended behind a stable trunk: deadlift, bird dog, leg raise,
    /// donkey kick
    PosteriorChain,
    /// Frontal-plane arm/leg spread
    JumpingJack,
    /// Static straight-body hold: plank, side bridge, superman
    BodyLineHold,
    /// Static seated hold against a wall
    WallSit,
}

impl ExerciseFamily {
    /// The single metric that drives the rep state machine for this family.
    #[must_use]
    pub const fn key_metric(&self) -> &'static str {
        match self {
            Self::Squat | Self::WallSit => metric::KNEE_ANGLE,
            Self::PushRow => metric::ELBOW_ANGLE,
            Self::HipHinge => metric::HIP_HEIGHT,
            Self::KneeDrive => metric::KNEE_TO_SHOULDER_DISTANCE,
            Self::TrunkFlexion => metric::KNEE_TO_ELBOW_DISTANCE,
            Self::PosteriorChain => metric::HIP_ANGLE,
            Self::JumpingJack => metric::HIP_ABDUCTION_ANGLE,
            Self::BodyLineHold => metric::BODY_ALIGNMENT_ANGLE,
        }
    }

    /// Direction the key metric moves on the down phase.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        match self {
            Self::Squat
            | Self::PushRow
            | Self::KneeDrive
            | Self::PosteriorChain
            | Self::BodyLineHold
            | Self::WallSit => Direction::Decreasing,
            Self::HipHinge | Self::TrunkFlexion | Self::JumpingJack => Direction::Increasing,
        }
    }

    /// How the secondary metric is compared for the HOLD exit.
    #[must_use]
    pub const fn secondary_sense(&self) -> SecondarySense {
        match self {
            Self::HipHinge | Self::TrunkFlexion => SecondarySense::Above,
            _ => SecondarySense::Below,
        }
    }

    /// Returns `true` for families evaluated as static holds (no state
    /// machine, one conventional repetition).
    #[must_use]
    pub const fn is_static_hold(&self) -> bool {
        matches!(self, Self::BodyLineHold | Self::WallSit)
    }

    /// Base trigger values `state1..state4` for this family at the given
    /// difficulty, or `None` for families whose dynamic path is inert.
    #[must_use]
    pub const fn trigger_bases(&self, difficulty: Difficulty) -> Option<[f32; 4]> {
        match self {
            Self::Squat => Some(match difficulty {
                Difficulty::Easy => [140.0, 110.0, 80.0, 60.0],
                Difficulty::Medium => [140.0, 105.0, 75.0, 60.0],
                Difficulty::Hard => [140.0, 100.0, 70.0, 60.0],
            }),
            Self::PushRow => Some(match difficulty {
                Difficulty::Easy => [150.0, 120.0, 80.0, 170.0],
                Difficulty::Medium => [150.0, 115.0, 75.0, 170.0],
                Difficulty::Hard => [150.0, 110.0, 70.0, 170.0],
            }),
            _ => None,
        }
    }
}

/// One exercise from the supported catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exercise {
    /// Bodyweight squat
    Squat,
    /// Mountain climber
    MountainClimber,
    /// Burpee
    Burpee,
    /// High knees
    HighKnees,
    /// Bicycle crunch
    BicycleCrunch,
    /// Wall sit (static)
    WallSit,
    /// Tricep dip
    TricepDip,
    /// Step-up
    StepUp,
    /// Single-leg deadlift
    SingleLegDeadlift,
    /// Donkey kick
    DonkeyKick,
    /// Bird dog
    BirdDog,
    /// Leg raise
    LegRaise,
    /// Jumping jack
    JumpingJack,
    /// Static lunge
    StaticLunge,
    /// Elevated pushup
    ElevatedPushup,
    /// Glute bridge
    GluteBridge,
    /// Bent-leg inverted row
    BentLegInvertedRow,
    /// Plank (static)
    Plank,
    /// Bulgarian split squat
    BulgarianSplitSquat,
    /// Pushup
    Pushup,
    /// Single-leg hip thrust
    SingleLegHipThrust,
    /// Inverted row
    InvertedRow,
    /// Superman pose (static)
    SupermanPose,
    /// Alternating abs
    AbsAlternating,
    /// Bridge
    Bridge,
    /// Side bridge (static)
    SideBridge,
}

/// Number of exercises in the catalog.
pub const EXERCISE_COUNT: usize = 26;

impl Exercise {
    /// All exercises in catalog order.
    #[must_use]
    pub const fn all() -> &'static [Self; EXERCISE_COUNT] {
        &[
            Self::Squat,
            Self::MountainClimber,
            Self::Burpee,
            Self::HighKnees,
            Self::BicycleCrunch,
            Self::WallSit,
            Self::TricepDip,
            Self::StepUp,
            Self::SingleLegDeadlift,
            Self::DonkeyKick,
            Self::BirdDog,
            Self::LegRaise,
            Self::JumpingJack,
            Self::StaticLunge,
            Self::ElevatedPushup,
            Self::GluteBridge,
            Self::BentLegInvertedRow,
            Self::Plank,
            Self::BulgarianSplitSquat,
            Self::Pushup,
            Self::SingleLegHipThrust,
            Self::InvertedRow,
            Self::SupermanPose,
            Self::AbsAlternating,
            Self::Bridge,
            Self::SideBridge,
        ]
    }

    /// Returns the exercise id as used on the wire and in threshold
    /// documents.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Squat => "squat",
            Self::MountainClimber => "mountain_climber",
            Self::Burpee => "burpee",
            Self::HighKnees => "high_knees",
            Self::BicycleCrunch => "bicycle_crunch",
            Self::WallSit => "wall_sit",
            Self::TricepDip => "tricep_dip",
            Self::StepUp => "step_up",
            Self::SingleLegDeadlift => "single_leg_deadlift",
            Self::DonkeyKick => "donkey_kick",
            Self::BirdDog => "bird_dog",
            Self::LegRaise => "leg_raise",
            Self::JumpingJack => "jumping_jack",
            Self::StaticLunge => "static_lunge",
            Self::ElevatedPushup => "elevated_pushup",
            Self::GluteBridge => "glute_bridge",
            Self::BentLegInvertedRow => "bent_leg_inverted_row",
            Self::Plank => "plank",
            Self::BulgarianSplitSquat => "bulgarian_split_squat",
            Self::Pushup => "pushup",
            Self::SingleLegHipThrust => "single_leg_hip_thrust",
            Self::InvertedRow => "inverted_row",
            Self::SupermanPose => "superman_pose",
            Self::AbsAlternating => "abs_alternating",
            Self::Bridge => "bridge",
            Self::SideBridge => "side_bridge",
        }
    }

    /// Resolves an exercise from its wire id.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|e| e.id() == id)
    }

    /// The family this exercise belongs to.
    #[must_use]
    pub const fn family(&self) -> ExerciseFamily {
        match self {
            Self::Squat
            | Self::Burpee
            | Self::StepUp
            | Self::StaticLunge
            | Self::BulgarianSplitSquat => ExerciseFamily::Squat,
            Self::Pushup
            | Self::ElevatedPushup
            | Self::InvertedRow
            | Self::BentLegInvertedRow
            | Self::TricepDip => ExerciseFamily::PushRow,
            Self::GluteBridge | Self::Bridge | Self::SingleLegHipThrust => ExerciseFamily::HipHinge,
            Self::MountainClimber | Self::HighKnees => ExerciseFamily::KneeDrive,
            Self::BicycleCrunch | Self::AbsAlternating => ExerciseFamily::TrunkFlexion,
            Self::SingleLegDeadlift | Self::DonkeyKick | Self::BirdDog | Self::LegRaise => {
                ExerciseFamily::PosteriorChain
            }
            Self::JumpingJack => ExerciseFamily::JumpingJack,
            Self::Plank | Self::SideBridge | Self::SupermanPose => ExerciseFamily::BodyLineHold,
            Self::WallSit => ExerciseFamily::WallSit,
        }
    }

    /// The metric driving this exercise's rep state machine, `None` for
    /// static holds.
    #[must_use]
    pub fn key_metric(&self) -> Option<&'static str> {
        let family = self.family();
        if family.is_static_hold() {
            None
        } else {
            Some(family.key_metric())
        }
    }

    /// Direction the key metric moves on the down phase.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.family().direction()
    }

    /// How the secondary metric is compared for the HOLD exit. Bird dog
    /// overrides its family: its secondary (hip rotation) grows as form
    /// degrades, so the comparison flips.
    #[must_use]
    pub const fn secondary_sense(&self) -> SecondarySense {
        match self {
            Self::BirdDog => SecondarySense::Above,
            _ => self.family().secondary_sense(),
        }
    }

    /// Returns `true` if this exercise is scored as a static hold.
    #[must_use]
    pub const fn is_static_hold(&self) -> bool {
        self.family().is_static_hold()
    }

    /// Returns `true` if the exercise requires a side-on camera view.
    /// Jumping jack is performed facing the camera and is exempt.
    #[must_use]
    pub const fn requires_side_view(&self) -> bool {
        !matches!(self, Self::JumpingJack)
    }
}

impl std::fmt::Display for Exercise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
