use std::fmt;
use std::time::Duration;

/// Render time statistics over one window of frames, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingSummary {
    pub min: u128,
    pub max: u128,
    pub avg: u128,
    pub p50: u128,
    pub p90: u128,
    pub p99: u128,
}

impl fmt::Display for TimingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            min,
            max,
            avg,
            p50,
            p90,
            p99,
        } = self;
        write!(
            f,
            "\n * min: {min}ms\n * max: {max}ms\n * avg: {avg}ms\n * p50: {p50}ms\n * p90: {p90}ms\n * p99: {p99}ms"
        )
    }
}

pub struct FrameTimings {
    window: usize,
    samples: Vec<u128>,
}

impl FrameTimings {
    pub fn new(window: usize) -> Self {
        Self {
            window: window.max(1),
            samples: Vec::with_capacity(window),
        }
    }

    /// Record one frame; returns a summary each time the window fills.
    pub fn record(&mut self, elapsed: Duration) -> Option<TimingSummary> {
        self.samples.push(elapsed.as_millis());
        if self.samples.len() < self.window {
            return None;
        }

        let timings = &mut self.samples;
        timings.sort();
        let sum: u128 = timings.iter().sum();
        let len = timings.len();
        let percentile = |p: usize| timings[(len * p / 100).min(len - 1)];
        let summary = TimingSummary {
            min: timings[0],
            max: timings[timings.len() - 1],
            avg: sum / timings.len() as u128,
            p50: timings[timings.len() / 2],
            p90: percentile(90),
            p99: percentile(99),
        };
        timings.clear();
        Some(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarizes_a_full_window() {
        let mut timings = FrameTimings::new(100);
        for ms in (1..=99).rev() {
            assert_eq!(timings.record(Duration::from_millis(ms)), None);
        }
        let summary = timings.record(Duration::from_millis(100)).unwrap();

        assert_eq!(summary.min, 1);
        assert_eq!(summary.max, 100);
        assert_eq!(summary.avg, 50);
        assert_eq!(summary.p50, 51);
        assert_eq!(summary.p90, 91);
        assert_eq!(summary.p99, 100);
    }

    #[test]
    fn window_restarts_after_a_summary() {
        let mut timings = FrameTimings::new(2);
        assert!(timings.record(Duration::from_millis(3)).is_none());
        assert!(timings.record(Duration::from_millis(5)).is_some());
        assert!(timings.record(Duration::from_millis(7)).is_none());
    }
}
