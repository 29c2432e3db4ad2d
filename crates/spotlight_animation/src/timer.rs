//! Fixed-interval timer driven by elapsed time
//!
//! The timer owns no thread and no OS handle. Its host feeds elapsed time
//! through [`IntervalTimer::advance`] and receives the number of ticks that
//! fell due. A stopped timer discards any partially accumulated interval, so
//! nothing fires after [`IntervalTimer::stop`] returns.

use std::time::Duration;

/// Smallest accepted interval
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Timer lifecycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimerState {
    #[default]
    Idle,
    Running,
}

/// Fires ticks at a fixed interval while running
#[derive(Debug)]
pub struct IntervalTimer {
    interval: Duration,
    state: TimerState,
    /// Time accumulated since the last tick
    pending: Duration,
    /// Ticks fired over the timer's lifetime
    fired: u64,
}

impl IntervalTimer {
    /// Create an idle timer. Intervals below 1ms are raised to 1ms.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(MIN_INTERVAL),
            state: TimerState::Idle,
            pending: Duration::ZERO,
            fired: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    /// Total ticks fired so far
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Start ticking. Starting a running timer does nothing.
    pub fn start(&mut self) {
        if self.state == TimerState::Running {
            return;
        }
        self.state = TimerState::Running;
        self.pending = Duration::ZERO;
        tracing::debug!(interval_ms = self.interval.as_millis() as u64, "timer started");
    }

    /// Stop ticking. Stopping an idle timer does nothing.
    pub fn stop(&mut self) {
        if self.state == TimerState::Idle {
            return;
        }
        self.state = TimerState::Idle;
        self.pending = Duration::ZERO;
        tracing::debug!(fired = self.fired, "timer stopped");
    }

    /// Feed elapsed time and return how many ticks fell due.
    ///
    /// Always returns 0 while idle; the elapsed time is dropped, not banked.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.state == TimerState::Idle {
            return 0;
        }

        self.pending += elapsed;
        let interval_nanos = self.interval.as_nanos();
        let due = self.pending.as_nanos() / interval_nanos;
        if due == 0 {
            return 0;
        }

        let due = u32::try_from(due).unwrap_or(u32::MAX);
        self.pending = self.pending.saturating_sub(self.interval * due);
        self.fired += u64::from(due);
        due
    }

    /// Time left until the next tick, `None` while idle
    pub fn time_until_next(&self) -> Option<Duration> {
        match self.state {
            TimerState::Idle => None,
            TimerState::Running => Some(self.interval.saturating_sub(self.pending)),
        }
    }
}
