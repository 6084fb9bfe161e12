/// Trailing-edge request coalescer.
///
/// Any number of [`request`](Self::request) calls between two refresh ticks collapse into
/// a single run. The run reads whatever state exists when it fires, so it always reflects
/// the latest request. At most one run is pending; there is no queue.
#[derive(Debug, Clone, Default)]
pub struct FrameThrottle {
    pending: bool,
    requests: u64,
    runs: u64,
}

impl FrameThrottle {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a run as pending.
    #[inline]
    pub fn request(&mut self) {
        self.pending = true;
        self.requests = self.requests.wrapping_add(1);
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Consumes the pending flag. Returns `true` when the caller should run now.
    ///
    /// The flag is cleared before the run starts, so a request issued during the run
    /// schedules the next tick rather than being lost.
    #[inline]
    pub fn take(&mut self) -> bool {
        let fire = self.pending;
        if fire {
            self.pending = false;
            self.runs = self.runs.wrapping_add(1);
        }
        fire
    }

    /// Driver hook: runs `f` once if a request is pending.
    pub fn on_tick<R>(&mut self, f: impl FnOnce() -> R) -> Option<R> {
        self.take().then(f)
    }

    /// Total requests seen.
    #[inline]
    pub fn requests(&self) -> u64 {
        self.requests
    }

    /// Total runs fired.
    #[inline]
    pub fn runs(&self) -> u64 {
        self.runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_collapses_into_one_run() {
        let mut t = FrameThrottle::new();
        for _ in 0..5 {
            t.request();
        }
        let mut ran = 0;
        t.on_tick(|| ran += 1);
        t.on_tick(|| ran += 1);
        assert_eq!(ran, 1);
        assert_eq!((t.requests(), t.runs()), (5, 1));
    }

    #[test]
    fn idle_tick_does_nothing() {
        let mut t = FrameThrottle::new();
        assert_eq!(t.on_tick(|| 42), None);
        assert_eq!(t.runs(), 0);
    }

    #[test]
    fn request_after_take_schedules_next_tick() {
        let mut t = FrameThrottle::new();
        t.request();
        assert!(t.take());
        t.request();
        assert!(t.is_pending());
        assert_eq!(t.on_tick(|| "second"), Some("second"));
    }

    #[test]
    fn run_sees_latest_state() {
        let mut t = FrameThrottle::new();
        let mut value = 0;
        for v in 1..=3 {
            value = v;
            t.request();
        }
        assert_eq!(t.on_tick(|| value), Some(3));
    }
}
