//! Temporal smoothing of raw metric sets.

use fitform_core::MetricSet;

use crate::buffer::BoundedBuffer;

/// Number of raw frames averaged into each smoothed metric set.
pub const SMOOTHING_WINDOW: usize = 3;

/// Sliding-window mean over the last [`SMOOTHING_WINDOW`] raw metric sets.
///
/// Smoothing is per key: a key present in the current raw frame is averaged
/// over the buffered frames that actually contain it. Frames lacking a key
/// are skipped, never counted as zero, so intermittently observed metrics
/// degrade gracefully instead of being dragged down.
#[derive(Debug, Clone)]
pub struct MetricSmoother {
    window: BoundedBuffer<MetricSet>,
}

impl MetricSmoother {
    /// Creates an empty smoother.
    #[must_use]
    pub fn new() -> Self {
        Self {
            window: BoundedBuffer::with_capacity(SMOOTHING_WINDOW),
        }
    }

    /// Pushes a raw metric set and returns the smoothed set for this frame.
    ///
    /// The smoothed set carries exactly the keys of the current raw frame.
    pub fn push_and_smooth(&mut self, raw: MetricSet) -> MetricSet {
        self.window.push(raw);

        let Some(latest) = self.window.back() else {
            return MetricSet::new();
        };

        let mut smoothed = MetricSet::new();
        for name in latest.names() {
            let mut sum = 0.0;
            let mut count = 0u32;
            for buffered in self.window.iter() {
                if let Some(value) = buffered.get(name) {
                    sum += value;
                    count += 1;
                }
            }
            if count > 0 {
                #[allow(clippy::cast_precision_loss)]
                smoothed.insert(name, sum / count as f32);
            }
        }
        smoothed
    }

    /// The most recent raw metric set, if any frame has been pushed.
    #[must_use]
    pub fn last_raw(&self) -> Option<&MetricSet> {
        self.window.back()
    }

    /// Number of buffered raw frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Returns `true` if no frame has been pushed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Drops all buffered frames.
    pub fn clear(&mut self) {
        self.window.clear();
    }
}

impl Default for MetricSmoother {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use fitform_core::metric;

    fn set(pairs: &[(&'static str, f32)]) -> MetricSet {
        pairs.iter().copied().collect()
    }

    #[test]
    fn smoothed_value_is_window_mean() {
        let mut smoother = MetricSmoother::new();
        smoother.push_and_smooth(set(&[(metric::KNEE_ANGLE, 170.0)]));
        smoother.push_and_smooth(set(&[(metric::KNEE_ANGLE, 160.0)]));
        let smoothed = smoother.push_and_smooth(set(&[(metric::KNEE_ANGLE, 150.0)]));

        assert_relative_eq!(smoothed.get(metric::KNEE_ANGLE).unwrap(), 160.0);
    }

    #[test]
    fn window_slides_past_capacity() {
        let mut smoother = MetricSmoother::new();
        for angle in [170.0, 160.0, 150.0, 140.0] {
            smoother.push_and_smooth(set(&[(metric::KNEE_ANGLE, angle)]));
        }
        let smoothed = smoother.push_and_smooth(set(&[(metric::KNEE_ANGLE, 130.0)]));

        // Window now holds 150, 140, 130.
        assert_relative_eq!(smoothed.get(metric::KNEE_ANGLE).unwrap(), 140.0);
    }

    #[test]
    fn frames_missing_a_key_are_skipped_not_zeroed() {
        let mut smoother = MetricSmoother::new();
        smoother.push_and_smooth(set(&[
            (metric::KNEE_ANGLE, 100.0),
            (metric::HIP_ANGLE, 80.0),
        ]));
        smoother.push_and_smooth(set(&[(metric::KNEE_ANGLE, 110.0)]));
        let smoothed = smoother.push_and_smooth(set(&[
            (metric::KNEE_ANGLE, 120.0),
            (metric::HIP_ANGLE, 90.0),
        ]));

        // hip_angle averages over the two frames that carry it.
        assert_relative_eq!(smoothed.get(metric::HIP_ANGLE).unwrap(), 85.0);
        assert_relative_eq!(smoothed.get(metric::KNEE_ANGLE).unwrap(), 110.0);
    }

    #[test]
    fn smoothed_keys_follow_current_frame() {
        let mut smoother = MetricSmoother::new();
        smoother.push_and_smooth(set(&[(metric::HIP_ANGLE, 80.0)]));
        let smoothed = smoother.push_and_smooth(set(&[(metric::KNEE_ANGLE, 100.0)]));

        // hip_angle is buffered but absent from the current raw frame.
        assert!(!smoothed.contains(metric::HIP_ANGLE));
        assert!(smoothed.contains(metric::KNEE_ANGLE));
    }

    #[test]
    fn empty_raw_set_smooths_to_empty() {
        let mut smoother = MetricSmoother::new();
        let smoothed = smoother.push_and_smooth(MetricSet::new());
        assert!(smoothed.is_empty());
    }
}
