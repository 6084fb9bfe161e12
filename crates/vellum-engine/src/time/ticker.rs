use std::time::{Duration, Instant};

/// Refresh tick snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time since the previous tick, in seconds, clamped to `dt_max`.
    pub dt: f32,

    /// Monotonic timestamp of the tick.
    pub now: Instant,

    /// Monotonic tick counter.
    pub frame_index: u64,
}

/// Periodic driver aligned to a fixed refresh interval.
///
/// The host loop polls it with the current time; a tick is produced at most once per
/// interval. Missed intervals are not replayed: after a stall the next poll yields one
/// tick and the schedule restarts from there.
#[derive(Debug, Clone)]
pub struct RefreshTicker {
    interval: Duration,
    last: Option<Instant>,
    frame_index: u64,
    dt_max: Duration,
}

impl RefreshTicker {
    /// Default refresh rate.
    pub const DEFAULT_HZ: u32 = 60;

    pub fn new() -> Self {
        Self::with_rate(Self::DEFAULT_HZ)
    }

    /// Ticker for a display refreshing `hz` times per second (`hz` is clamped to ≥ 1).
    pub fn with_rate(hz: u32) -> Self {
        Self::with_interval(Duration::from_secs(1) / hz.max(1))
    }

    pub fn with_interval(interval: Duration) -> Self {
        debug_assert!(!interval.is_zero(), "RefreshTicker: zero interval");
        Self {
            interval,
            last: None,
            frame_index: 0,
            dt_max: Duration::from_millis(250),
        }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Forgets the previous tick; the next poll fires immediately.
    ///
    /// Useful after the surface was hidden or the host loop was suspended.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Time left until the next boundary, `Duration::ZERO` if one is due.
    pub fn until_next(&self, now: Instant) -> Duration {
        match self.last {
            None => Duration::ZERO,
            Some(last) => (last + self.interval).saturating_duration_since(now),
        }
    }

    /// Returns a tick if a refresh boundary has passed since the previous one.
    pub fn poll(&mut self, now: Instant) -> Option<FrameTime> {
        let dt = match self.last {
            None => Duration::ZERO,
            Some(last) => {
                let elapsed = now.saturating_duration_since(last);
                if elapsed < self.interval {
                    return None;
                }
                elapsed.min(self.dt_max)
            }
        };

        self.last = Some(now);
        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        Some(ft)
    }
}

impl Default for RefreshTicker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_poll_fires_immediately() {
        let mut t = RefreshTicker::with_rate(60);
        let ft = t.poll(Instant::now()).unwrap();
        assert_eq!(ft.frame_index, 0);
        assert_eq!(ft.dt, 0.0);
    }

    #[test]
    fn polls_inside_interval_are_skipped() {
        let start = Instant::now();
        let mut t = RefreshTicker::with_interval(Duration::from_millis(16));
        assert!(t.poll(start).is_some());
        assert!(t.poll(start + Duration::from_millis(5)).is_none());
        assert!(t.poll(start + Duration::from_millis(15)).is_none());
        let ft = t.poll(start + Duration::from_millis(16)).unwrap();
        assert_eq!(ft.frame_index, 1);
    }

    #[test]
    fn stall_yields_single_clamped_tick() {
        let start = Instant::now();
        let mut t = RefreshTicker::with_interval(Duration::from_millis(10));
        t.poll(start);
        let ft = t.poll(start + Duration::from_secs(5)).unwrap();
        assert!((ft.dt - 0.25).abs() < 1e-6);
        assert!(t.poll(start + Duration::from_secs(5)).is_none());
    }

    #[test]
    fn until_next_counts_down() {
        let start = Instant::now();
        let mut t = RefreshTicker::with_interval(Duration::from_millis(10));
        assert_eq!(t.until_next(start), Duration::ZERO);
        t.poll(start);
        assert_eq!(t.until_next(start + Duration::from_millis(4)), Duration::from_millis(6));
        t.reset();
        assert_eq!(t.until_next(start), Duration::ZERO);
    }
}
