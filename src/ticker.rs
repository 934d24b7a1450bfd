use std::thread::sleep;
use std::time::{Duration, Instant};

/// Fixed-rate tick clock.
///
/// Each `wait` sleeps until the next deadline and then moves the deadline one
/// interval forward, so time spent between waits does not stretch the tick.
/// When a tick overran its deadline the clock re-anchors on the current time
/// rather than firing the missed ticks back to back.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_deadline: Instant,
}

impl Ticker {
    pub fn start(interval: Duration) -> Self {
        Ticker {
            interval,
            next_deadline: Instant::now() + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn next_deadline(&self) -> Instant {
        self.next_deadline
    }

    /// Blocks until the current deadline. Returns `false` if it had already
    /// passed.
    pub fn wait(&mut self) -> bool {
        let now = Instant::now();

        if now < self.next_deadline {
            sleep(self.next_deadline - now);
            self.next_deadline += self.interval;
            true
        } else {
            self.next_deadline = now + self.interval;
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wait_sleeps_until_deadline() {
        let mut ticker = Ticker::start(Duration::from_millis(20));
        let deadline = ticker.next_deadline();

        assert!(ticker.wait());

        assert!(Instant::now() >= deadline);
        assert_eq!(ticker.next_deadline(), deadline + Duration::from_millis(20));
    }

    #[test]
    fn deadlines_do_not_drift_with_work() {
        let mut ticker = Ticker::start(Duration::from_millis(50));
        let first = ticker.next_deadline();

        sleep(Duration::from_millis(10));
        assert!(ticker.wait());
        sleep(Duration::from_millis(10));
        assert!(ticker.wait());

        assert_eq!(ticker.next_deadline(), first + Duration::from_millis(100));
    }

    #[test]
    fn overrun_reanchors_instead_of_bursting() {
        let mut ticker = Ticker::start(Duration::from_millis(5));
        sleep(Duration::from_millis(30));

        let before = Instant::now();
        assert!(!ticker.wait());

        assert!(ticker.next_deadline() >= before + Duration::from_millis(5));
    }

    #[test]
    fn zero_interval_never_blocks() {
        let mut ticker = Ticker::start(Duration::from_millis(0));
        for _ in 0..100 {
            ticker.wait();
        }
        assert_eq!(ticker.interval(), Duration::from_millis(0));
    }
}
