use std::time::Duration;
use std::time::Instant;

/// Time source for the session loop.
pub trait Clock {
    /// Time since the clock started.
    fn now(&self) -> Duration;
    /// Block for `duration`.
    fn sleep(&mut self, duration: Duration);
}

/// Real time.
#[derive(Debug, Clone, Copy)]
pub struct Wall(Instant);

impl Default for Wall {
    fn default() -> Self {
        Self(Instant::now())
    }
}

impl Clock for Wall {
    fn now(&self) -> Duration {
        self.0.elapsed()
    }
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Deterministic clock: every reading advances time by a fixed step,
    /// sleeping advances it by the requested amount. Clones share one time.
    #[derive(Debug, Clone)]
    pub(crate) struct Ticker {
        now: Rc<Cell<Duration>>,
        step: Duration,
    }

    impl Ticker {
        pub(crate) fn new(step: Duration) -> Self {
            Self {
                now: Rc::new(Cell::new(Duration::ZERO)),
                step,
            }
        }
    }

    impl Clock for Ticker {
        fn now(&self) -> Duration {
            let now = self.now.get();
            self.now.set(now + self.step);
            now
        }
        fn sleep(&mut self, duration: Duration) {
            self.now.set(self.now.get() + duration);
        }
    }

    #[test]
    fn ticker_steps_per_reading() {
        let ref mut clock = Ticker::new(Duration::from_millis(10));
        assert_eq!(clock.now(), Duration::ZERO);
        assert_eq!(clock.now(), Duration::from_millis(10));
        clock.sleep(Duration::from_millis(100));
        assert_eq!(clock.now(), Duration::from_millis(120));
    }

    #[test]
    fn ticker_clones_share_time() {
        let clock = Ticker::new(Duration::from_millis(10));
        let ref mut other = clock.clone();
        other.sleep(Duration::from_millis(50));
        assert_eq!(clock.now(), Duration::from_millis(50));
    }

    #[test]
    fn wall_clock_moves_forward() {
        let ref mut clock = Wall::default();
        let before = clock.now();
        clock.sleep(Duration::from_millis(2));
        assert!(clock.now() > before);
    }
}
