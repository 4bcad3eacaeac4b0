//! The single pending "advance" timer
//!
//! The timer is plain data: a deadline that the event loop checks. Arming
//! always replaces the previous deadline, so there is never more than one
//! outstanding tick, and dropping the owner drops the timer with it.

use std::time::{Duration, Instant};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickTimer {
    deadline: Option<Instant>,
}

impl TickTimer {
    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// Schedules the next tick `interval` after `now`, cancelling any pending one.
    pub fn arm(&mut self, now: Instant, interval: Duration) {
        self.deadline = Some(now + interval);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the tick fires; zero when overdue, `None` when idle.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Consumes the deadline if it has passed. The caller re-arms if needed.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_timer_is_idle() {
        let mut timer = TickTimer::new();
        assert!(!timer.is_armed());
        assert_eq!(timer.remaining(Instant::now()), None);
        assert!(!timer.fire_if_due(Instant::now()));
    }

    #[test]
    fn test_fires_once_at_deadline() {
        let start = Instant::now();
        let mut timer = TickTimer::new();
        timer.arm(start, Duration::from_millis(200));

        assert!(!timer.fire_if_due(start + Duration::from_millis(199)));
        assert!(timer.fire_if_due(start + Duration::from_millis(200)));
        assert!(!timer.fire_if_due(start + Duration::from_millis(400)));
    }

    #[test]
    fn test_arming_replaces_pending_deadline() {
        let start = Instant::now();
        let mut timer = TickTimer::new();
        timer.arm(start, Duration::from_millis(100));
        timer.arm(start, Duration::from_millis(500));

        assert!(!timer.fire_if_due(start + Duration::from_millis(100)));
        assert_eq!(
            timer.remaining(start + Duration::from_millis(100)),
            Some(Duration::from_millis(400))
        );
    }

    #[test]
    fn test_cancel_clears_deadline() {
        let start = Instant::now();
        let mut timer = TickTimer::new();
        timer.arm(start, Duration::from_millis(10));
        timer.cancel();
        assert!(!timer.fire_if_due(start + Duration::from_secs(1)));
    }

    #[test]
    fn test_remaining_saturates_when_overdue() {
        let start = Instant::now();
        let mut timer = TickTimer::new();
        timer.arm(start, Duration::from_millis(10));
        assert_eq!(
            timer.remaining(start + Duration::from_secs(1)),
            Some(Duration::ZERO)
        );
    }
}
