use std::time::{Duration, Instant};

/// Monotonic time source plus a blocking sleep primitive.
///
/// The pacer only ever subtracts two `now()` samples, so any monotonic source works.
pub trait Clock {
    fn now(&self) -> Instant;

    /// Blocks the calling thread for `duration`.
    fn sleep(&self, duration: Duration);
}

/// Wall clock backed by `Instant::now` and `std::thread::sleep`.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }

    #[inline]
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now(&self) -> Instant {
        (**self).now()
    }

    #[inline]
    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration)
    }
}
