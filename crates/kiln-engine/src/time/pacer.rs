use std::fmt;
use std::time::{Duration, Instant};

use super::clock::{Clock, SystemClock};

/// Frame rate the pacer targets unless configured otherwise.
pub const DEFAULT_TARGET_FPS: f64 = 60.0;

const REPORT_WINDOW: Duration = Duration::from_secs(1);

/// Converts a target frequency into a per-frame budget.
///
/// Non-finite or non-positive frequencies fall back to 1 Hz.
pub fn frame_duration_for(target_fps: f64) -> Duration {
    if !target_fps.is_finite() || target_fps <= 0.0 {
        log::warn!("invalid target frame rate {target_fps}; falling back to 1 Hz");
        return Duration::from_secs(1);
    }
    Duration::from_secs_f64(1.0 / target_fps)
}

/// How elapsed time is measured when deciding whether an FPS report is due.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ReportCadence {
    /// Elapsed time is truncated to whole seconds.
    ///
    /// A report fires somewhere between 1.0 s and 2.0 s of real time and the rate is
    /// `frames / floor(elapsed)`.
    #[default]
    WholeSeconds,

    /// Elapsed time is compared and divided as a fractional value.
    Continuous,
}

/// Throughput measured over one reporting window.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FpsReport {
    /// Frames per second as computed under the active cadence.
    pub fps: f64,

    /// Frames completed within the window.
    pub frames: u64,

    /// Real elapsed time of the window (not truncated).
    pub elapsed: Duration,
}

impl fmt::Display for FpsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FPS: {}", self.fps)
    }
}

/// Sleep-based frame limiter with a periodic FPS report.
///
/// Call order per loop iteration:
/// 1. render, present, poll events
/// 2. `record_frame_complete()`
/// 3. `maybe_report()`
/// 4. `pace()`
/// 5. `tick_start()`
///
/// Steps 2 to 5 are bundled as [`end_frame`](Self::end_frame).
///
/// Both marks are taken at construction, so the first iteration is measured from there.
/// Achieved rate is always at or below the target; late frames are not compensated.
#[derive(Debug, Clone)]
pub struct FramePacer<C: Clock = SystemClock> {
    clock: C,
    target: Duration,
    cadence: ReportCadence,

    frame_start: Instant,
    window_start: Instant,
    frame_count: u64,
}

impl FramePacer<SystemClock> {
    /// Creates a pacer on the system clock targeting `target_fps`.
    pub fn new(target_fps: f64) -> Self {
        Self::with_clock(SystemClock, frame_duration_for(target_fps))
    }
}

impl Default for FramePacer<SystemClock> {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_FPS)
    }
}

impl<C: Clock> FramePacer<C> {
    /// Creates a pacer on an arbitrary clock with an explicit frame budget.
    pub fn with_clock(clock: C, target_frame_duration: Duration) -> Self {
        let now = clock.now();
        Self {
            clock,
            target: target_frame_duration,
            cadence: ReportCadence::default(),
            frame_start: now,
            window_start: now,
            frame_count: 0,
        }
    }

    /// Selects how the reporting window is measured.
    pub fn with_cadence(mut self, cadence: ReportCadence) -> Self {
        self.cadence = cadence;
        self
    }

    #[inline]
    pub fn target_frame_duration(&self) -> Duration {
        self.target
    }

    #[inline]
    pub fn cadence(&self) -> ReportCadence {
        self.cadence
    }

    /// Frames completed since the last report.
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Marks the beginning of this iteration's billable work.
    pub fn tick_start(&mut self) {
        self.frame_start = self.clock.now();
    }

    /// Counts one finished iteration toward the current reporting window.
    pub fn record_frame_complete(&mut self) {
        self.frame_count = self.frame_count.saturating_add(1);
    }

    /// Emits an FPS report if the reporting window has elapsed.
    ///
    /// On report, the frame counter is reset and the window restarts at the current time.
    pub fn maybe_report(&mut self) -> Option<FpsReport> {
        let now = self.clock.now();
        let elapsed = now.saturating_duration_since(self.window_start);

        let seconds = match self.cadence {
            ReportCadence::WholeSeconds => {
                let whole = elapsed.as_secs();
                if whole < REPORT_WINDOW.as_secs() {
                    return None;
                }
                whole as f64
            }
            ReportCadence::Continuous => {
                if elapsed < REPORT_WINDOW {
                    return None;
                }
                elapsed.as_secs_f64()
            }
        };

        let report = FpsReport {
            fps: self.frame_count as f64 / seconds,
            frames: self.frame_count,
            elapsed,
        };

        log::info!("{report}");

        self.frame_count = 0;
        self.window_start = now;

        Some(report)
    }

    /// Remaining budget for this iteration, measured from the last `tick_start()`.
    ///
    /// Zero once the iteration has used up the whole budget.
    pub fn sleep_budget(&self) -> Duration {
        let spent = self.clock.now().saturating_duration_since(self.frame_start);
        self.target.saturating_sub(spent)
    }

    /// Blocks for the remaining budget, if any, and returns the requested duration.
    pub fn pace(&mut self) -> Duration {
        let budget = self.sleep_budget();
        if !budget.is_zero() {
            self.clock.sleep(budget);
        }
        budget
    }

    /// Closes one loop iteration after its frame was presented.
    ///
    /// Counts the frame, reports if due, sleeps out the budget and starts the next
    /// iteration's measurement, in that order.
    pub fn end_frame(&mut self) -> Option<FpsReport> {
        self.record_frame_complete();
        let report = self.maybe_report();
        self.pace();
        self.tick_start();
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// Clock that only moves when told to (or when slept on).
    struct ManualClock {
        origin: Instant,
        offset: Cell<Duration>,
        sleeps: RefCell<Vec<Duration>>,
    }

    impl ManualClock {
        fn new() -> Self {
            Self {
                origin: Instant::now(),
                offset: Cell::new(Duration::ZERO),
                sleeps: RefCell::new(Vec::new()),
            }
        }

        fn advance(&self, by: Duration) {
            self.offset.set(self.offset.get() + by);
        }

        fn sleeps(&self) -> Vec<Duration> {
            self.sleeps.borrow().clone()
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            self.origin + self.offset.get()
        }

        fn sleep(&self, duration: Duration) {
            self.sleeps.borrow_mut().push(duration);
            self.advance(duration);
        }
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn assert_close(actual: Duration, expected: Duration) {
        let diff = if actual > expected { actual - expected } else { expected - actual };
        assert!(
            diff <= Duration::from_micros(1),
            "expected ~{expected:?}, got {actual:?}"
        );
    }

    fn pacer_60(clock: &ManualClock) -> FramePacer<&ManualClock> {
        FramePacer::with_clock(clock, frame_duration_for(60.0))
    }

    // ── pacing ────────────────────────────────────────────────────────────

    #[test]
    fn short_frame_sleeps_for_remaining_budget() {
        let clock = ManualClock::new();
        let mut pacer = pacer_60(&clock);

        pacer.tick_start();
        clock.advance(ms(5));

        let slept = pacer.pace();
        assert_close(slept, Duration::from_micros(11_667));
        assert_eq!(clock.sleeps(), vec![slept]);
    }

    #[test]
    fn long_frame_does_not_sleep() {
        let clock = ManualClock::new();
        let mut pacer = pacer_60(&clock);

        pacer.tick_start();
        clock.advance(ms(20));

        assert_eq!(pacer.pace(), Duration::ZERO);
        assert!(clock.sleeps().is_empty());
    }

    #[test]
    fn frame_exactly_on_budget_does_not_sleep() {
        let clock = ManualClock::new();
        let mut pacer = pacer_60(&clock);

        pacer.tick_start();
        clock.advance(pacer.target_frame_duration());

        assert_eq!(pacer.pace(), Duration::ZERO);
        assert!(clock.sleeps().is_empty());
    }

    #[test]
    fn pace_measures_from_latest_tick_start() {
        let clock = ManualClock::new();
        let mut pacer = pacer_60(&clock);

        pacer.tick_start();
        clock.advance(ms(10));
        pacer.tick_start();
        clock.advance(ms(5));

        assert_close(pacer.pace(), Duration::from_micros(11_667));
    }

    #[test]
    fn first_iteration_is_measured_from_construction() {
        let clock = ManualClock::new();
        let mut pacer = pacer_60(&clock);

        clock.advance(ms(6));

        assert_close(pacer.pace(), Duration::from_micros(10_667));
    }

    #[test]
    fn sleep_budget_has_no_side_effects() {
        let clock = ManualClock::new();
        let pacer = pacer_60(&clock);

        clock.advance(ms(1));
        let a = pacer.sleep_budget();
        let b = pacer.sleep_budget();

        assert_eq!(a, b);
        assert!(clock.sleeps().is_empty());
    }

    #[test]
    fn custom_target_is_respected() {
        let clock = ManualClock::new();
        let mut pacer = FramePacer::with_clock(&clock, frame_duration_for(30.0));

        pacer.tick_start();
        clock.advance(ms(20));

        assert_close(pacer.pace(), Duration::from_micros(13_333));
    }

    #[test]
    fn invalid_target_falls_back_to_one_hertz() {
        assert_eq!(frame_duration_for(0.0), Duration::from_secs(1));
        assert_eq!(frame_duration_for(-5.0), Duration::from_secs(1));
        assert_eq!(frame_duration_for(f64::NAN), Duration::from_secs(1));
    }

    // ── reporting ─────────────────────────────────────────────────────────

    #[test]
    fn report_over_two_seconds() {
        let clock = ManualClock::new();
        let mut pacer = pacer_60(&clock);

        for _ in 0..120 {
            pacer.record_frame_complete();
        }
        clock.advance(ms(2000));

        let report = pacer.maybe_report().expect("report should fire");
        assert_eq!(report.fps, 60.0);
        assert_eq!(report.frames, 120);
        assert_eq!(pacer.frame_count(), 0);
    }

    #[test]
    fn report_suppressed_before_one_second() {
        let clock = ManualClock::new();
        let mut pacer = pacer_60(&clock);

        for _ in 0..45 {
            pacer.record_frame_complete();
        }
        clock.advance(ms(999));

        assert!(pacer.maybe_report().is_none());
        assert_eq!(pacer.frame_count(), 45);

        clock.advance(ms(1));

        let report = pacer.maybe_report().expect("report should fire at 1.000s");
        assert_eq!(report.fps, 45.0);
        assert_eq!(pacer.frame_count(), 0);
    }

    #[test]
    fn whole_second_cadence_truncates_elapsed() {
        let clock = ManualClock::new();
        let mut pacer = pacer_60(&clock);

        for _ in 0..90 {
            pacer.record_frame_complete();
        }
        clock.advance(ms(1900));

        let report = pacer.maybe_report().expect("report should fire");
        // 90 frames over floor(1.9) = 1 second.
        assert_eq!(report.fps, 90.0);
        assert_eq!(report.elapsed, ms(1900));
    }

    #[test]
    fn continuous_cadence_uses_fractional_elapsed() {
        let clock = ManualClock::new();
        let mut pacer = pacer_60(&clock).with_cadence(ReportCadence::Continuous);

        for _ in 0..95 {
            pacer.record_frame_complete();
        }
        clock.advance(ms(999));
        assert!(pacer.maybe_report().is_none());

        clock.advance(ms(901));
        let report = pacer.maybe_report().expect("report should fire");
        assert!((report.fps - 50.0).abs() < 1e-9);
    }

    #[test]
    fn report_advances_window_mark() {
        let clock = ManualClock::new();
        let mut pacer = pacer_60(&clock);

        pacer.record_frame_complete();
        clock.advance(ms(1500));
        assert!(pacer.maybe_report().is_some());

        // Window restarted at 1.5s; 0.9s later is still inside it.
        pacer.record_frame_complete();
        clock.advance(ms(900));
        assert!(pacer.maybe_report().is_none());
        assert_eq!(pacer.frame_count(), 1);

        clock.advance(ms(100));
        let report = pacer.maybe_report().expect("report should fire");
        assert_eq!(report.fps, 1.0);
    }

    #[test]
    fn report_with_no_frames_is_zero() {
        let clock = ManualClock::new();
        let mut pacer = pacer_60(&clock);

        clock.advance(ms(3000));
        let report = pacer.maybe_report().expect("report should fire");
        assert_eq!(report.fps, 0.0);
    }

    #[test]
    fn report_display_matches_diagnostic_format() {
        let report = FpsReport { fps: 60.0, frames: 60, elapsed: ms(1000) };
        assert_eq!(report.to_string(), "FPS: 60");

        let report = FpsReport { fps: 59.5, frames: 119, elapsed: ms(2000) };
        assert_eq!(report.to_string(), "FPS: 59.5");
    }

    // ── full loop ─────────────────────────────────────────────────────────

    #[test]
    fn simulated_loop_holds_target_rate() {
        let clock = ManualClock::new();
        let mut pacer = pacer_60(&clock);
        let mut reports = Vec::new();

        for _ in 0..200 {
            clock.advance(ms(4)); // render work
            pacer.record_frame_complete();
            if let Some(r) = pacer.maybe_report() {
                reports.push(r);
            }
            pacer.pace();
            pacer.tick_start();
        }

        // Every iteration is padded to the 60 Hz budget; the first report lands
        // one frame past the one-second mark.
        assert!(!reports.is_empty());
        assert!(reports[0].fps <= 61.0 && reports[0].fps >= 59.0, "{:?}", reports[0]);
    }

    // ── end_frame ─────────────────────────────────────────────────────────

    #[test]
    fn end_frame_sleeps_then_restarts_measurement() {
        let clock = ManualClock::new();
        let mut pacer = pacer_60(&clock);

        clock.advance(ms(5));
        assert_eq!(pacer.end_frame(), None);
        assert_eq!(clock.sleeps().len(), 1);
        assert_close(clock.sleeps()[0], Duration::from_micros(11_667));

        // tick_start ran after the sleep, so the next budget is whole again.
        assert_close(pacer.sleep_budget(), pacer.target_frame_duration());
        assert_eq!(pacer.frame_count(), 1);
    }

    #[test]
    fn end_frame_counts_the_frame_before_reporting() {
        let clock = ManualClock::new();
        let mut pacer = pacer_60(&clock);

        for _ in 0..59 {
            clock.advance(ms(5));
            assert_eq!(pacer.end_frame(), None);
        }

        // 59 paced frames sit just under one second; the 60th crosses it.
        clock.advance(ms(20));
        let report = pacer.end_frame().expect("report after one second");
        assert_eq!(report.frames, 60);
        assert_eq!(report.fps, 60.0);
        assert_eq!(pacer.frame_count(), 0);
    }

    #[test]
    fn end_frame_reports_before_sleeping() {
        let clock = ManualClock::new();
        let mut pacer = pacer_60(&clock);

        clock.advance(ms(995));
        pacer.tick_start();
        clock.advance(ms(5));
        let report = pacer.end_frame().expect("window elapsed");

        // The sleep of this iteration lands in the next window.
        assert_eq!(report.elapsed, ms(1000));
        assert_eq!(clock.sleeps().len(), 1);
        assert_close(clock.sleeps()[0], Duration::from_micros(11_667));
    }
}
