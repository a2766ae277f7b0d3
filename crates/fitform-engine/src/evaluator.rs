//! Correctness evaluation against the threshold table.
//!
//! A bound named `X_min` fails a frame whose metric `X` falls below it;
//! `X_max` fails a frame whose metric exceeds it. A metric that is absent,
//! or exactly 0, counts as "not observed this frame" and is skipped — a
//! collapsed landmark must not fail a repetition. Bound names without a
//! recognized suffix are ignored.

use fitform_core::{split_bound_key, BoundKind, MetricSet, ThresholdRow};

/// Returns `true` if no bound in `row` is violated by `metrics`.
#[must_use]
pub fn metrics_within_bounds(metrics: &MetricSet, row: &ThresholdRow) -> bool {
    for (key, bound) in row.iter() {
        let Some((name, kind)) = split_bound_key(key) else {
            continue;
        };
        let Some(value) = metrics.get(name) else {
            continue;
        };
        if value == 0.0 {
            continue;
        }
        let violated = match kind {
            BoundKind::Min => value < bound,
            BoundKind::Max => value > bound,
        };
        if violated {
            return false;
        }
    }
    true
}

/// Returns `true` if every buffered frame satisfies every bound in `row`.
#[must_use]
pub fn frames_within_bounds<'a, I>(frames: I, row: &ThresholdRow) -> bool
where
    I: IntoIterator<Item = &'a MetricSet>,
{
    frames
        .into_iter()
        .all(|metrics| metrics_within_bounds(metrics, row))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitform_core::metric;

    fn row(pairs: &[(&str, f32)]) -> ThresholdRow {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), *v))
            .collect()
    }

    fn set(pairs: &[(&'static str, f32)]) -> MetricSet {
        pairs.iter().copied().collect()
    }

    #[test]
    fn min_bound_fails_low_values() {
        let row = row(&[("knee_angle_min", 40.0)]);
        assert!(metrics_within_bounds(&set(&[(metric::KNEE_ANGLE, 60.0)]), &row));
        assert!(!metrics_within_bounds(&set(&[(metric::KNEE_ANGLE, 30.0)]), &row));
    }

    #[test]
    fn max_bound_fails_high_values() {
        let row = row(&[("body_alignment_angle_max", 190.0)]);
        assert!(metrics_within_bounds(
            &set(&[(metric::BODY_ALIGNMENT_ANGLE, 175.0)]),
            &row
        ));
        assert!(!metrics_within_bounds(
            &set(&[(metric::BODY_ALIGNMENT_ANGLE, 195.0)]),
            &row
        ));
    }

    #[test]
    fn zero_metric_is_unobserved() {
        let row = row(&[("knee_angle_min", 100.0)]);
        assert!(metrics_within_bounds(&set(&[(metric::KNEE_ANGLE, 0.0)]), &row));
    }

    #[test]
    fn absent_metric_is_unobserved() {
        let row = row(&[("knee_angle_min", 100.0)]);
        assert!(metrics_within_bounds(&MetricSet::new(), &row));
    }

    #[test]
    fn unsuffixed_bounds_are_ignored() {
        let row = row(&[("knee_angle", 100.0)]);
        assert!(metrics_within_bounds(&set(&[(metric::KNEE_ANGLE, 30.0)]), &row));
    }

    #[test]
    fn one_bad_frame_fails_the_rep() {
        let row = row(&[("knee_angle_min", 40.0)]);
        let frames = [
            set(&[(metric::KNEE_ANGLE, 90.0)]),
            set(&[(metric::KNEE_ANGLE, 35.0)]),
            set(&[(metric::KNEE_ANGLE, 120.0)]),
        ];
        assert!(!frames_within_bounds(frames.iter(), &row));
    }

    #[test]
    fn all_clean_frames_pass() {
        let row = row(&[("knee_angle_min", 40.0), ("knee_angle_max", 180.0)]);
        let frames = [
            set(&[(metric::KNEE_ANGLE, 90.0)]),
            set(&[(metric::KNEE_ANGLE, 55.0)]),
        ];
        assert!(frames_within_bounds(frames.iter(), &row));
    }
}
