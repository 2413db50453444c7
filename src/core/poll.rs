//! The polling state machine behind every wait.

use crate::error::TimeoutError;
use crate::root::GlobalRoot;
use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

/// Fixed delay between two readiness checks of one wait.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Milliseconds in `duration`, saturating at `u64::MAX`.
pub(crate) fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// State of a single wait.
///
/// A wait starts in `Checking` and ends in exactly one of the two terminal
/// states; it never leaves a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    /// Still polling the root.
    Checking,
    /// The property was observed on the root.
    DoneReady,
    /// The deadline passed before the property appeared.
    DoneTimedOut,
}

impl PollState {
    /// Whether the wait is over.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Checking)
    }
}

/// Result of a completed wait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitOutcome {
    /// The property appeared before the deadline.
    Ready {
        /// Number of readiness checks performed, including the successful one.
        checks: u32,
        /// Time from the start of the wait to the successful check.
        elapsed: Duration,
    },
    /// The deadline passed first.
    TimedOut {
        /// The timeout signal, suitable for logging.
        error: TimeoutError,
        /// Number of readiness checks performed.
        checks: u32,
        /// Time from the start of the wait to the moment the deadline was observed.
        elapsed: Duration,
    },
}

impl WaitOutcome {
    /// Whether the dependency became ready.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    /// Whether the wait gave up.
    pub fn is_timed_out(&self) -> bool {
        matches!(self, Self::TimedOut { .. })
    }

    /// Number of readiness checks performed.
    pub fn checks(&self) -> u32 {
        match self {
            Self::Ready { checks, .. } | Self::TimedOut { checks, .. } => *checks,
        }
    }

    /// Time the wait took.
    pub fn elapsed(&self) -> Duration {
        match self {
            Self::Ready { elapsed, .. } | Self::TimedOut { elapsed, .. } => *elapsed,
        }
    }

    /// The timeout signal, if the wait timed out.
    pub fn timeout_error(&self) -> Option<&TimeoutError> {
        match self {
            Self::TimedOut { error, .. } => Some(error),
            Self::Ready { .. } => None,
        }
    }

    /// The terminal state this outcome corresponds to.
    pub fn state(&self) -> PollState {
        match self {
            Self::Ready { .. } => PollState::DoneReady,
            Self::TimedOut { .. } => PollState::DoneTimedOut,
        }
    }
}

/// One in-flight wait.
///
/// The deadline is fixed when the poll is created. Checks run on a repeating
/// schedule of [`POLL_INTERVAL`] ticks, with a single outstanding tick at a time.
pub(crate) struct Poll<'a> {
    root: &'a dyn GlobalRoot,
    property: &'a str,
    timeout: Duration,
    started: Instant,
    // `None` when `started + timeout` is not representable.
    deadline: Option<Instant>,
    ticker: Interval,
    state: PollState,
    checks: u32,
}

impl<'a> Poll<'a> {
    pub(crate) fn new(root: &'a dyn GlobalRoot, property: &'a str, timeout: Duration) -> Self {
        let started = Instant::now();
        let mut ticker = interval_at(started + POLL_INTERVAL, POLL_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        Self {
            root,
            property,
            timeout,
            started,
            deadline: started.checked_add(timeout),
            ticker,
            state: PollState::Checking,
            checks: 0,
        }
    }

    pub(crate) fn state(&self) -> PollState {
        self.state
    }

    /// Look at the root once.
    fn check(&mut self) -> PollState {
        self.checks += 1;
        let ready = self.root.has_own(self.property);
        tracing::trace!(property = %self.property, check = self.checks, ready, "dependency check");
        if ready {
            self.state = PollState::DoneReady;
        }
        self.state
    }

    /// Suspend until the next tick, unless the deadline has already passed.
    async fn suspend(&mut self) -> PollState {
        let passed = self
            .deadline
            .is_some_and(|deadline| deadline < Instant::now());
        if passed {
            self.state = PollState::DoneTimedOut;
            return self.state;
        }
        self.ticker.tick().await;
        self.state
    }

    /// Drive the wait to a terminal state.
    pub(crate) async fn run(mut self) -> WaitOutcome {
        while !self.state().is_terminal() {
            if self.check().is_terminal() {
                break;
            }
            self.suspend().await;
        }

        let checks = self.checks;
        let elapsed = self.started.elapsed();
        match self.state {
            PollState::DoneReady => WaitOutcome::Ready { checks, elapsed },
            _ => WaitOutcome::TimedOut {
                error: TimeoutError {
                    root: self.root.name(),
                    property: self.property.to_string(),
                    timeout: self.timeout,
                },
                checks,
                elapsed,
            },
        }
    }
}
