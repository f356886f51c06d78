use std::time::{Duration, Instant};

/// Timing of one frame.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped by the clock.
    pub dt: f32,
    pub now: Instant,
    /// Counts ticks from zero.
    pub frame_index: u64,
}

impl FrameTime {
    #[inline]
    pub fn dt_ms(&self) -> f32 {
        self.dt * 1000.0
    }
}

/// Produces a [`FrameTime`] per tick.
///
/// Deltas are clamped to `[min_dt, max_dt]`: a stalled or minimized window
/// must not dump seconds of elapsed time into widget timers in one frame.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    ticks: u64,
    min_dt: Duration,
    max_dt: Duration,
}

impl FrameClock {
    pub const DEFAULT_MIN_DT: Duration = Duration::from_micros(100);
    pub const DEFAULT_MAX_DT: Duration = Duration::from_millis(250);

    pub fn new() -> Self {
        Self::with_clamps(Self::DEFAULT_MIN_DT, Self::DEFAULT_MAX_DT)
    }

    pub fn with_clamps(min_dt: Duration, max_dt: Duration) -> Self {
        debug_assert!(min_dt <= max_dt);
        Self { last: Instant::now(), ticks: 0, min_dt, max_dt }
    }

    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last).clamp(self.min_dt, self.max_dt);
        self.last = now;

        let frame_index = self.ticks;
        self.ticks = self.ticks.wrapping_add(1);
        FrameTime { dt: dt.as_secs_f32(), now, frame_index }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dt_is_clamped_to_bounds() {
        let mut clock = FrameClock::with_clamps(Duration::from_millis(5), Duration::from_millis(10));
        let ft = clock.tick();
        assert!(ft.dt >= 0.005 && ft.dt <= 0.010);
        assert_eq!(ft.frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
    }

    #[test]
    fn dt_ms_converts_seconds() {
        let ft = FrameTime { dt: 0.016, now: Instant::now(), frame_index: 0 };
        assert!((ft.dt_ms() - 16.0).abs() < 1e-3);
    }
}
