use std::time::Duration;

/// Fixed-capacity ring buffer of recent frame durations.
///
/// Records overwrite the oldest entry once the buffer fills, so the
/// summary always reflects the most recent window.
#[derive(Debug)]
pub struct FrameTimer {
    samples: Vec<Duration>,
    next: usize,
    len: usize,
}

/// Aggregates over the recorded window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    pub average: Duration,
    pub min: Duration,
    pub max: Duration,
    pub frames: usize,
}

impl std::fmt::Display for FrameStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "avg={:?} min={:?} max={:?} over {} frames",
            self.average, self.min, self.max, self.frames
        )
    }
}

impl FrameTimer {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be positive");
        Self {
            samples: vec![Duration::ZERO; capacity],
            next: 0,
            len: 0,
        }
    }

    /// Record one frame duration.
    pub fn record(&mut self, dt: Duration) {
        self.samples[self.next] = dt;
        self.next = (self.next + 1) % self.samples.len();
        self.len = (self.len + 1).min(self.samples.len());
    }

    /// Frames currently in the window.
    pub fn count(&self) -> usize {
        self.len
    }

    /// Summarize the recorded window. Empty windows summarize to zeros.
    pub fn summary(&self) -> FrameStats {
        let window = &self.samples[..self.len];
        if window.is_empty() {
            return FrameStats {
                average: Duration::ZERO,
                min: Duration::ZERO,
                max: Duration::ZERO,
                frames: 0,
            };
        }
        let total: Duration = window.iter().sum();
        FrameStats {
            average: total / window.len() as u32,
            min: window.iter().copied().min().unwrap_or(Duration::ZERO),
            max: window.iter().copied().max().unwrap_or(Duration::ZERO),
            frames: window.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_tracks_recorded_frames() {
        let mut timer = FrameTimer::new(4);
        timer.record(Duration::from_millis(10));
        timer.record(Duration::from_millis(20));
        timer.record(Duration::from_millis(30));

        let stats = timer.summary();
        assert_eq!(stats.frames, 3);
        assert_eq!(stats.average, Duration::from_millis(20));
        assert_eq!(stats.min, Duration::from_millis(10));
        assert_eq!(stats.max, Duration::from_millis(30));
    }

    #[test]
    fn window_wraps_around() {
        let mut timer = FrameTimer::new(2);
        timer.record(Duration::from_millis(10));
        timer.record(Duration::from_millis(20));
        timer.record(Duration::from_millis(30)); // overwrites the first

        let stats = timer.summary();
        assert_eq!(stats.frames, 2);
        assert_eq!(stats.average, Duration::from_millis(25));
    }

    #[test]
    fn empty_timer_summarizes_to_zero() {
        let timer = FrameTimer::new(8);
        let stats = timer.summary();
        assert_eq!(stats.frames, 0);
        assert_eq!(stats.average, Duration::ZERO);
    }

    #[test]
    fn stats_display_is_readable() {
        let mut timer = FrameTimer::new(4);
        timer.record(Duration::from_millis(16));
        let s = format!("{}", timer.summary());
        assert!(s.contains("1 frames"));
    }
}
