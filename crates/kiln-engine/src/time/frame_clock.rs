use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Time elapsed since the clock was created, in seconds.
    ///
    /// Unclamped; animated tasks derive rotation angles from it.
    pub elapsed: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// One clock per window so that multi-window runs do not share delta-time state.
///
/// Delta time is clamped to avoid pathological values when the application is paused
/// by the debugger, minimized, or stalls.
#[derive(Debug, Clone)]
pub struct FrameClock {
    origin: Instant,
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a new clock with default clamps (100 µs .. 250 ms).
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        let now = Instant::now();
        Self {
            origin: now,
            last: now,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let mut dt = now.saturating_duration_since(self.last);

        // Clamp delta time to keep downstream systems stable.
        if dt < self.dt_min {
            dt = self.dt_min;
        } else if dt > self.dt_max {
            dt = self.dt_max;
        }

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            elapsed: now.saturating_duration_since(self.origin).as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
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
    fn tick_clamps_to_minimum() {
        let mut clock = FrameClock::with_clamps(Duration::from_secs(1), Duration::from_secs(2));
        assert_eq!(clock.tick().dt, 1.0);
    }

    #[test]
    fn tick_clamps_to_maximum() {
        let mut clock = FrameClock::with_clamps(Duration::ZERO, Duration::ZERO);
        std::thread::sleep(Duration::from_millis(2));
        assert_eq!(clock.tick().dt, 0.0);
    }

    #[test]
    fn frame_index_increments_per_tick() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
        assert_eq!(clock.tick().frame_index, 2);
    }

    #[test]
    fn elapsed_is_monotonic() {
        let mut clock = FrameClock::new();
        let first = clock.tick();
        let second = clock.tick();
        assert!(second.elapsed >= first.elapsed);
        assert!(second.now >= first.now);
    }
}
