use std::time::Duration;

fn rem(elapsed: Duration, period: Duration) -> (u128, Duration) {
    let period_nanos = period.as_nanos();
    let elapsed_nanos = elapsed.as_nanos();
    let rest = u64::try_from(elapsed_nanos % period_nanos).unwrap_or(u64::MAX);
    (elapsed_nanos / period_nanos, Duration::from_nanos(rest))
}

/// Gates reveal frames to a minimum interval.
///
/// Fires once the accumulated time is strictly greater than the interval and
/// carries the sub-interval remainder into the next frame.
#[derive(Debug, Clone)]
pub(crate) struct FrameClock {
    elapsed: Duration,
    interval: Duration,
}

impl FrameClock {
    #[must_use]
    pub(crate) fn new(interval: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            interval,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    pub(crate) fn advance(&mut self, delta: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(delta);
        if self.elapsed <= self.interval {
            return false;
        }
        self.elapsed = if self.interval.is_zero() {
            Duration::ZERO
        } else {
            rem(self.elapsed, self.interval).1
        };
        true
    }
}

/// Fixed-period timer counting whole elapsed periods.
#[derive(Debug, Clone)]
pub(crate) struct RotationTimer {
    elapsed: Duration,
    period: Duration,
}

impl RotationTimer {
    #[must_use]
    pub(crate) fn new(period: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            period,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    /// Returns the number of periods that completed during `delta`.
    pub(crate) fn advance(&mut self, delta: Duration) -> u32 {
        if self.period.is_zero() {
            return 0;
        }
        self.elapsed = self.elapsed.saturating_add(delta);
        let (fired, rest) = rem(self.elapsed, self.period);
        self.elapsed = rest;
        u32::try_from(fired).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub(crate) fn until_next(&self) -> Duration {
        self.period.saturating_sub(self.elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::{FrameClock, RotationTimer};
    use std::time::Duration;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn frame_clock_requires_strictly_more_than_interval() {
        let mut clock = FrameClock::new(MS * 10);
        assert!(!clock.advance(MS * 10));
        assert!(clock.advance(MS));
    }

    #[test]
    fn frame_clock_carries_remainder() {
        let mut clock = FrameClock::new(MS * 10);
        assert!(clock.advance(MS * 16));
        // 6ms carried: 5ms more reaches 11ms.
        assert!(clock.advance(MS * 5));
        assert!(!clock.advance(MS * 2));
    }

    #[test]
    fn frame_clock_zero_interval_fires_on_any_progress() {
        let mut clock = FrameClock::new(Duration::ZERO);
        assert!(!clock.advance(Duration::ZERO));
        assert!(clock.advance(Duration::from_nanos(1)));
    }

    #[test]
    fn frame_clock_reset_drops_carry() {
        let mut clock = FrameClock::new(MS * 10);
        assert!(!clock.advance(MS * 9));
        clock.reset();
        assert!(!clock.advance(MS * 9));
    }

    #[test]
    fn rotation_counts_whole_periods() {
        let mut timer = RotationTimer::new(MS * 4000);
        assert_eq!(timer.advance(MS * 3999), 0);
        assert_eq!(timer.advance(MS), 1);
        assert_eq!(timer.until_next(), MS * 4000);
    }

    #[test]
    fn rotation_catches_up_after_stall() {
        let mut timer = RotationTimer::new(MS * 4000);
        assert_eq!(timer.advance(MS * 12_500), 3);
        assert_eq!(timer.until_next(), MS * 3500);
    }

    #[test]
    fn rotation_reset_restarts_period() {
        let mut timer = RotationTimer::new(MS * 100);
        timer.advance(MS * 60);
        timer.reset();
        assert_eq!(timer.advance(MS * 60), 0);
    }

    #[test]
    fn zero_period_never_fires() {
        let mut timer = RotationTimer::new(Duration::ZERO);
        assert_eq!(timer.advance(Duration::from_secs(10)), 0);
    }
}
