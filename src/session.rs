// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Interaction helpers for the search surface.
//!
//! Two small primitives keep a human-paced UI honest:
//!
//! - [`Debouncer`]: a query fires only after a full quiet window with no
//!   further keystrokes. Each keystroke restarts the window.
//! - [`RequestSequence`]: a monotonically increasing token per issued
//!   query. A response whose token is no longer current belongs to a
//!   superseded query and must be discarded (last-write-wins), which is
//!   cheaper and simpler than cancellable fetches — the scoring itself is
//!   synchronous anyway.
//!
//! Both take explicit time/token values rather than reading clocks
//! internally, so tests stay deterministic.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Recommended debounce interval for keystroke-driven queries.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(300);

/// Quiet-window debouncer.
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    last_touch: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Debouncer {
            window,
            last_touch: None,
        }
    }

    /// A keystroke arrived: restart the quiet window.
    pub fn touch(&mut self, now: Instant) {
        self.last_touch = Some(now);
    }

    /// Has a full quiet window elapsed since the last touch?
    pub fn ready(&self, now: Instant) -> bool {
        self.last_touch
            .is_some_and(|t| now.saturating_duration_since(t) >= self.window)
    }

    /// Consume readiness: returns true at most once per quiet window.
    pub fn take_ready(&mut self, now: Instant) -> bool {
        if self.ready(now) {
            self.last_touch = None;
            true
        } else {
            false
        }
    }

    /// Closing the surface clears pending state. Persisted history is
    /// someone else's concern and stays untouched.
    pub fn reset(&mut self) {
        self.last_touch = None;
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Debouncer::new(DEBOUNCE_WINDOW)
    }
}

/// Monotonic request tokens for stale-response detection.
#[derive(Debug, Default)]
pub struct RequestSequence {
    counter: AtomicU64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new token; it becomes the current one.
    pub fn begin(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Is this token still the latest issued? Stale responses answer false
    /// and their results must not be rendered.
    pub fn is_current(&self, token: u64) -> bool {
        self.counter.load(Ordering::SeqCst) == token
    }
}
