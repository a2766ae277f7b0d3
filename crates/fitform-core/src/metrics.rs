//! Named scalar metrics extracted from a pose frame.

use std::collections::btree_map;
use std::collections::BTreeMap;

/// Metric names produced by the extractor.
///
/// Threshold documents reference these names with a `_min`/`_max` suffix
/// (e.g. `knee_angle_min`).
pub mod metric {
    /// Hip-knee-ankle angle
    pub const KNEE_ANGLE: &str = "knee_angle";
    /// Shoulder-elbow-wrist angle
    pub const ELBOW_ANGLE: &str = "elbow_angle";
    /// Shoulder-hip-knee angle
    pub const HIP_ANGLE: &str = "hip_angle";
    /// Shoulder-hip-ankle angle
    pub const BODY_ALIGNMENT_ANGLE: &str = "body_alignment_angle";
    /// Vertical hip-to-shoulder distance
    pub const HIP_HEIGHT: &str = "hip_height";
    /// Vertical hip-to-ankle distance
    pub const HIP_TO_GROUND: &str = "hip_to_ground";
    /// Vertical knee-to-shoulder distance
    pub const KNEE_TO_SHOULDER_DISTANCE: &str = "knee_to_shoulder_distance";
    /// Vertical knee-to-elbow distance
    pub const KNEE_TO_ELBOW_DISTANCE: &str = "knee_to_elbow_distance";
    /// Left-hip-shoulder-right-hip angle
    pub const HIP_ABDUCTION_ANGLE: &str = "hip_abduction_angle";
    /// Left-shoulder-hip-right-shoulder angle
    pub const TORSO_ANGLE: &str = "torso_angle";
    /// Vertical left-to-right hip offset
    pub const HIP_ROTATION_ANGLE: &str = "hip_rotation_angle";
    /// Shoulder-hip-opposite-shoulder angle
    pub const BACK_ANGLE: &str = "back_angle";
}

/// Priority order for the secondary metric consulted by the rep state
/// machine: the first of these present in the smoothed set is used.
pub const SECONDARY_METRIC_PRIORITY: [&str; 4] = [
    metric::BODY_ALIGNMENT_ANGLE,
    metric::TORSO_ANGLE,
    metric::HIP_ROTATION_ANGLE,
    metric::BACK_ANGLE,
];

/// A mapping from metric name to value, produced fresh per frame.
///
/// Absent keys carry no implicit value: a metric that was not extracted this
/// frame is simply not in the set, and is never treated as zero.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricSet {
    values: BTreeMap<&'static str, f32>,
}

impl MetricSet {
    /// Creates an empty metric set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a metric value.
    pub fn insert(&mut self, name: &'static str, value: f32) {
        self.values.insert(name, value);
    }

    /// Looks a metric up by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f32> {
        self.values.get(name).copied()
    }

    /// Returns `true` if the metric is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// First metric from `names` present in this set.
    #[must_use]
    pub fn first_of(&self, names: &[&str]) -> Option<f32> {
        names.iter().find_map(|name| self.get(name))
    }

    /// Number of metrics in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the set holds no metrics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> btree_map::Iter<'_, &'static str, f32> {
        self.values.iter()
    }

    /// Iterates over metric names in name order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.keys().copied()
    }
}

impl<'a> IntoIterator for &'a MetricSet {
    type Item = (&'a &'static str, &'a f32);
    type IntoIter = btree_map::Iter<'a, &'static str, f32>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl FromIterator<(&'static str, f32)> for MetricSet {
    fn from_iter<I: IntoIterator<Item = (&'static str, f32)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
