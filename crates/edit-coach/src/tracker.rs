//! Adjacency and debounce bookkeeping.

use std::time::{Duration, Instant};

/// Debounce used when none is configured, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 100;

/// Debounce used when none is configured.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(DEFAULT_DEBOUNCE_MS);

/// The last line that newly became marked, and when.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerState {
    /// Line index.
    pub line: usize,
    /// Time of the detection.
    pub at: Instant,
}

/// Remembers the last newly marked line and decides whether a new one continues a manual run.
///
/// A candidate fires when it is directly above or below the last marked line **and** more than
/// the debounce threshold has passed since that line was marked. The threshold filters out the
/// editor's own multi-line command, which marks adjacent lines almost simultaneously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyTracker {
    debounce: Duration,
    last: Option<MarkerState>,
}

impl AdjacencyTracker {
    /// Create a tracker with the given debounce threshold.
    pub fn new(debounce: Duration) -> Self {
        Self {
            debounce,
            last: None,
        }
    }

    /// Debounce threshold.
    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Last recorded detection, if any.
    pub fn last_marked(&self) -> Option<MarkerState> {
        self.last
    }

    /// Returns `true` if `line` is adjacent to the last marked line and the debounce has elapsed.
    ///
    /// Pure read; call [`AdjacencyTracker::record`] afterwards to update the state.
    pub fn check(&self, line: usize, now: Instant) -> bool {
        let Some(last) = self.last else {
            return false;
        };
        let adjacent = line.abs_diff(last.line) == 1;
        let cooled_down = now.saturating_duration_since(last.at) > self.debounce;
        adjacent && cooled_down
    }

    /// Overwrite the last marked line.
    pub fn record(&mut self, line: usize, now: Instant) {
        self.last = Some(MarkerState { line, at: now });
    }

    /// Forget the last marked line.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

impl Default for AdjacencyTracker {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
