//! Short-horizon trend estimation over the key metric.

use crate::buffer::BoundedBuffer;

/// Capacity of the key-metric history.
pub const TREND_WINDOW: usize = 10;

/// Number of buffered samples required before the trend activates.
///
/// Six samples guarantee at least five usable first-differences, smoothing
/// out single-frame jitter before any phase transition can fire.
pub const TREND_ACTIVATION_SAMPLES: usize = 6;

/// Number of most recent first-differences averaged into the trend signal.
pub const TREND_SPAN: usize = 3;

/// Rate-of-change estimator for a single scalar stream.
#[derive(Debug, Clone)]
pub struct TrendEstimator {
    history: BoundedBuffer<f32>,
}

impl TrendEstimator {
    /// Creates an empty estimator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            history: BoundedBuffer::with_capacity(TREND_WINDOW),
        }
    }

    /// Pushes the latest key-metric value.
    pub fn push(&mut self, value: f32) {
        self.history.push(value);
    }

    /// Number of buffered samples.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.history.len()
    }

    /// Returns `true` once enough samples are buffered for the trend signal.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.history.len() >= TREND_ACTIVATION_SAMPLES
    }

    /// The trend signal: mean of the last [`TREND_SPAN`] first-differences,
    /// in key-metric units per frame. `None` until activation.
    #[must_use]
    pub fn signal(&self) -> Option<f32> {
        if !self.is_active() {
            return None;
        }

        let values: Vec<f32> = self.history.iter().copied().collect();
        let diffs: Vec<f32> = values.windows(2).map(|pair| pair[1] - pair[0]).collect();
        let span = diffs.len().min(TREND_SPAN);
        let recent = &diffs[diffs.len() - span..];

        #[allow(clippy::cast_precision_loss)]
        Some(recent.iter().sum::<f32>() / span as f32)
    }

    /// Drops all buffered samples.
    pub fn clear(&mut self) {
        self.history.clear();
    }
}

impl Default for TrendEstimator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn inactive_below_six_samples() {
        let mut trend = TrendEstimator::new();
        for value in [170.0, 160.0, 150.0, 140.0, 130.0] {
            trend.push(value);
        }
        assert!(!trend.is_active());
        assert_eq!(trend.signal(), None);
    }

    #[test]
    fn activates_at_exactly_six_samples() {
        let mut trend = TrendEstimator::new();
        for value in [170.0, 160.0, 150.0, 140.0, 130.0, 120.0] {
            trend.push(value);
        }
        assert!(trend.is_active());
        assert_relative_eq!(trend.signal().unwrap(), -10.0);
    }

    #[test]
    fn signal_averages_last_three_differences() {
        let mut trend = TrendEstimator::new();
        for value in [100.0, 100.0, 100.0, 100.0, 103.0, 109.0, 118.0] {
            trend.push(value);
        }
        // Last three diffs: +3, +6, +9.
        assert_relative_eq!(trend.signal().unwrap(), 6.0);
    }

    #[test]
    fn history_is_bounded() {
        let mut trend = TrendEstimator::new();
        for i in 0..25 {
            trend.push(i as f32);
        }
        assert_eq!(trend.sample_count(), TREND_WINDOW);
    }

    #[test]
    fn clear_deactivates() {
        let mut trend = TrendEstimator::new();
        for i in 0..10 {
            trend.push(i as f32);
        }
        trend.clear();
        assert!(!trend.is_active());
        assert_eq!(trend.sample_count(), 0);
    }
}
