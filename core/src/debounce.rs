//! Trailing-edge debouncing with injectable time
//!
//! [`Debouncer`] does not own a timer. Callers report the current time on
//! every call and ask [`Debouncer::poll`] whether the pending value is due,
//! which keeps ordering and cancellation testable without sleeping.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of the current time
pub trait Clock {
    fn now(&self) -> Instant;
}

/// The real monotonic clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    /// Move time forward
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Collapses bursts of calls into one call carrying the latest value
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    leading: bool,
    pending: Option<Pending<T>>,
}

impl<T: Clone> Debouncer<T> {
    /// Create a trailing-edge debouncer
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            leading: false,
            pending: None,
        }
    }

    /// Also fire the first call of a burst immediately
    pub fn with_leading(mut self, leading: bool) -> Self {
        self.leading = leading;
        self
    }

    /// Quiet period before a pending value fires
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule a value, superseding any pending one.
    ///
    /// Returns the value when it should fire right away (leading edge).
    pub fn call(&mut self, value: T, now: Instant) -> Option<T> {
        let immediate = if self.leading && self.pending.is_none() {
            Some(value.clone())
        } else {
            None
        };

        self.pending = Some(Pending {
            value,
            deadline: now + self.delay,
        });

        immediate
    }

    /// Take the pending value if its deadline has passed
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if pending.deadline <= now => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// When the pending value becomes due
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Whether a value is waiting
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending value without firing it
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(500);

    #[test]
    fn test_burst_collapses_to_last_value() {
        let clock = ManualClock::new();
        let mut debouncer = Debouncer::new(DELAY);

        assert_eq!(debouncer.call("a", clock.now()), None);
        clock.advance(Duration::from_millis(100));
        assert_eq!(debouncer.call("ab", clock.now()), None);
        clock.advance(Duration::from_millis(100));
        assert_eq!(debouncer.call("abc", clock.now()), None);

        // Not yet due: the deadline moved with the last call
        clock.advance(Duration::from_millis(499));
        assert_eq!(debouncer.poll(clock.now()), None);

        clock.advance(Duration::from_millis(1));
        assert_eq!(debouncer.poll(clock.now()), Some("abc"));
        assert_eq!(debouncer.poll(clock.now()), None);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_separate_bursts_fire_separately() {
        let clock = ManualClock::new();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.call(1, clock.now());
        clock.advance(DELAY);
        assert_eq!(debouncer.poll(clock.now()), Some(1));

        debouncer.call(2, clock.now());
        clock.advance(DELAY * 2);
        assert_eq!(debouncer.poll(clock.now()), Some(2));
    }

    #[test]
    fn test_leading_edge() {
        let clock = ManualClock::new();
        let mut debouncer = Debouncer::new(DELAY).with_leading(true);

        assert_eq!(debouncer.call("x", clock.now()), Some("x"));
        assert_eq!(debouncer.call("xy", clock.now()), None);

        clock.advance(DELAY);
        assert_eq!(debouncer.poll(clock.now()), Some("xy"));

        // A new burst fires immediately again
        assert_eq!(debouncer.call("z", clock.now()), Some("z"));
    }

    #[test]
    fn test_cancel_and_deadline() {
        let clock = ManualClock::new();
        let mut debouncer = Debouncer::new(DELAY);
        let start = clock.now();

        debouncer.call("gone", start);
        assert_eq!(debouncer.deadline(), Some(start + DELAY));
        assert_eq!(debouncer.cancel(), Some("gone"));

        clock.advance(DELAY);
        assert_eq!(debouncer.poll(clock.now()), None);
        assert_eq!(debouncer.deadline(), None);
    }

    #[test]
    fn test_clones_share_time() {
        let clock = ManualClock::new();
        let other = clock.clone();
        let before = other.now();

        clock.advance(Duration::from_secs(1));
        assert_eq!(other.now() - before, Duration::from_secs(1));
    }
}
