//! Frame timing metrics for the debug overlay

use std::collections::VecDeque;
use std::time::Duration;

const HISTORY: usize = 60;
const SLOW_FRAME: Duration = Duration::from_millis(100);

/// Rolling frame timings
#[derive(Debug, Clone, Default)]
pub struct FrameMetrics {
    /// Last frame total time
    pub last_frame_time: Duration,
    /// Rolling window of the last 60 frame times
    pub frame_history: VecDeque<Duration>,
    /// Number of slow frames (>100ms)
    pub slow_frame_count: u32,
}

impl FrameMetrics {
    /// Record a new frame time
    pub fn record_frame(&mut self, total: Duration) {
        self.last_frame_time = total;

        self.frame_history.push_back(total);
        if self.frame_history.len() > HISTORY {
            self.frame_history.pop_front();
        }

        if total > SLOW_FRAME {
            self.slow_frame_count += 1;
            tracing::warn!(total_ms = total.as_millis(), "Slow frame detected");
        }
    }

    /// Get average frame time from history
    pub fn avg_frame_time(&self) -> Duration {
        if self.frame_history.is_empty() {
            return Duration::ZERO;
        }

        let sum: Duration = self.frame_history.iter().sum();
        sum / self.frame_history.len() as u32
    }

    /// Get frame rate (FPS)
    pub fn fps(&self) -> f64 {
        let avg = self.avg_frame_time();
        if avg.is_zero() {
            return 0.0;
        }
        1.0 / avg.as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_is_bounded() {
        let mut metrics = FrameMetrics::default();
        for _ in 0..200 {
            metrics.record_frame(Duration::from_millis(16));
        }
        assert_eq!(metrics.frame_history.len(), HISTORY);
        assert_eq!(metrics.avg_frame_time(), Duration::from_millis(16));
        assert!((metrics.fps() - 62.5).abs() < 1e-6);
    }

    #[test]
    fn test_slow_frames_counted() {
        let mut metrics = FrameMetrics::default();
        metrics.record_frame(Duration::from_millis(16));
        metrics.record_frame(Duration::from_millis(250));
        assert_eq!(metrics.slow_frame_count, 1);
        assert_eq!(metrics.last_frame_time, Duration::from_millis(250));
    }
}
