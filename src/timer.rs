use std::time::Instant;

/// Scoped wall-clock measurement. The elapsed time in seconds is written to the
/// borrowed slot when the guard is dropped, so an early `break` or `return` out
/// of the measured block is still accounted for.
///
/// ```
/// use grid_search_bench::timer::Timer;
///
/// let mut elapsed = -1.0;
/// {
///     let _timer = Timer::start(&mut elapsed);
/// }
/// assert!(elapsed >= 0.0);
/// ```
#[must_use = "the measurement ends when the timer is dropped"]
pub struct Timer<'a> {
    start: Instant,
    elapsed_s: &'a mut f64,
}

impl<'a> Timer<'a> {
    pub fn start(elapsed_s: &'a mut f64) -> Timer<'a> {
        Timer {
            start: Instant::now(),
            elapsed_s,
        }
    }
}

impl Drop for Timer<'_> {
    fn drop(&mut self) {
        *self.elapsed_s = self.start.elapsed().as_secs_f64();
    }
}
