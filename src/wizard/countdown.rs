//! Payment countdown
//!
//! After the UPI app is opened the buyer waits a fixed number of seconds
//! before "I Have Paid" appears. The counter itself ([`Countdown`]) is plain
//! state owned by the wizard; the pacing comes from a [`CountdownTimer`]
//! worker that is cancelled and joined when its handle is dropped.
//!
//! Every countdown run gets a generation number. Ticks carry it, and the
//! wizard ignores ticks from a run it has already abandoned.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Interval between countdown ticks
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Remaining seconds of one countdown run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    generation: u64,
    initial: u32,
    remaining: u32,
}

impl Countdown {
    pub fn new(generation: u64, initial: u32) -> Self {
        Self {
            generation,
            initial,
            remaining: initial,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn initial(&self) -> u32 {
        self.initial
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    /// Fraction of the wait already elapsed, for progress bars
    pub fn elapsed_fraction(&self) -> f64 {
        if self.initial == 0 {
            return 1.0;
        }
        f64::from(self.initial - self.remaining) / f64::from(self.initial)
    }

    /// Count down one second; returns the seconds left
    pub(crate) fn tick(&mut self) -> u32 {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }
}

/// Worker thread calling back once per interval
///
/// Dropping the handle stops the worker before the next callback and waits
/// for it to exit, so no tick can arrive after the owner is gone.
pub struct CountdownTimer {
    cancelled: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl CountdownTimer {
    /// Call `on_tick` up to `ticks` times, `interval` apart
    ///
    /// The worker also stops early when `on_tick` returns `false`, which is
    /// how a closed event channel ends it.
    pub fn start<F>(ticks: u32, interval: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() -> bool + Send + 'static,
    {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);

        let worker = thread::spawn(move || {
            for _ in 0..ticks {
                let deadline = Instant::now() + interval;
                loop {
                    if flag.load(Ordering::Acquire) {
                        return;
                    }
                    let now = Instant::now();
                    if now >= deadline {
                        break;
                    }
                    thread::park_timeout(deadline - now);
                }

                if flag.load(Ordering::Acquire) || !on_tick() {
                    return;
                }
            }
        });

        Self {
            cancelled,
            worker: Some(worker),
        }
    }

    /// Stop the worker and wait for it to exit
    pub fn cancel(&mut self) {
        self.cancelled.store(true, Ordering::Release);
        if let Some(worker) = self.worker.take() {
            worker.thread().unpark();
            if worker.join().is_err() {
                tracing::warn!("countdown worker panicked");
            }
        }
    }

    /// Whether the worker has run out of ticks or been cancelled
    pub fn is_finished(&self) -> bool {
        self.worker.as_ref().map_or(true, |w| w.is_finished())
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_countdown_counts_to_zero() {
        let mut c = Countdown::new(1, 3);
        assert_eq!(c.elapsed_fraction(), 0.0);
        assert_eq!(c.tick(), 2);
        assert_eq!(c.tick(), 1);
        assert_eq!(c.tick(), 0);
        assert!(c.is_finished());
        assert_eq!(c.tick(), 0);
        assert_eq!(c.elapsed_fraction(), 1.0);
    }

    #[test]
    fn test_zero_length_countdown_is_finished() {
        let c = Countdown::new(7, 0);
        assert!(c.is_finished());
        assert_eq!(c.elapsed_fraction(), 1.0);
    }

    #[test]
    fn test_timer_ticks_exactly_n_times() {
        let (tx, rx) = mpsc::channel();
        let timer = CountdownTimer::start(3, Duration::from_millis(10), move || tx.send(()).is_ok());

        let ticks: Vec<()> = rx.iter().collect();
        assert_eq!(ticks.len(), 3);
        drop(timer);
    }

    #[test]
    fn test_drop_cancels_timer() {
        let (tx, rx) = mpsc::channel();
        let timer = CountdownTimer::start(1000, Duration::from_millis(5), move || tx.send(()).is_ok());

        rx.recv_timeout(Duration::from_secs(5)).unwrap();
        drop(timer);

        // The worker has been joined, so its sender is gone and the
        // channel drains to a disconnect well before 1000 ticks.
        let remaining = rx.iter().count();
        assert!(remaining < 999);
    }

    #[test]
    fn test_false_from_callback_stops_worker() {
        let (tx, rx) = mpsc::channel();
        let mut calls = 0;
        let _timer = CountdownTimer::start(50, Duration::from_millis(1), move || {
            calls += 1;
            tx.send(calls).is_ok() && calls < 2
        });

        let seen: Vec<u32> = rx.iter().collect();
        assert_eq!(seen, vec![1, 2]);
    }
}
