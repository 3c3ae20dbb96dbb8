//! Auto-advancing carousel state.
//!
//! [`CarouselController`] owns the rotation index of a testimonial
//! carousel. It advances on a fixed period while the carousel is visible,
//! pauses offscreen, and lets manual navigation override the cadence with
//! a fresh full-period countdown. Every time-sensitive operation takes an
//! injected `now`, so scheduling behavior reduces to plain [`Instant`]
//! arithmetic under test.

use std::time::{Duration, Instant};

use thiserror::Error;

const DEFAULT_PERIOD_MS: u64 = 5000;

/// Transition direction reported alongside index changes.
///
/// Only consumed by the renderer to pick a slide animation; it never
/// affects which index is selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// Lifecycle phase of the automatic cadence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Hidden, or fewer than two items; no countdown armed.
    #[default]
    Idle,

    /// Visible with the automatic cadence running.
    AutoRunning,

    /// A manual action just reset the countdown; settles back to
    /// [`Phase::AutoRunning`] on the next automatic advance.
    ManualPending,
}

/// Carousel misuse reported to the caller.
#[derive(Debug, Error)]
pub enum CarouselError {
    #[error("carousel index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Published carousel snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    /// Index of the item currently shown.
    pub current_index: usize,

    /// Direction of the most recent index change.
    pub direction: Direction,

    /// Whether a countdown towards an automatic advance is armed.
    pub is_auto_advancing: bool,
}

/// Tunables for [`CarouselController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselSettings {
    /// Delay between automatic advances.
    pub period: Duration,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            period: Duration::from_millis(DEFAULT_PERIOD_MS),
        }
    }
}

impl CarouselSettings {
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }
}

/// Visible-only rotating index with manual override.
#[derive(Debug)]
pub struct CarouselController {
    settings: CarouselSettings,
    len: usize,
    current_index: usize,
    direction: Direction,
    phase: Phase,
    deadline: Option<Instant>,
}

impl CarouselController {
    /// Create a controller over `len` items, starting at index 0.
    pub fn new(len: usize, settings: CarouselSettings) -> Self {
        Self {
            settings,
            len,
            current_index: 0,
            direction: Direction::Forward,
            phase: Phase::Idle,
            deadline: None,
        }
    }

    /// Current published snapshot.
    pub fn state(&self) -> CarouselState {
        CarouselState {
            current_index: self.current_index,
            direction: self.direction,
            is_auto_advancing: self.phase != Phase::Idle,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Deadline of the next automatic advance, while one is armed.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Number of items under rotation.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Report a visibility change from the embedding viewport.
    ///
    /// Becoming visible arms a full-period countdown; leaving the
    /// viewport cancels it, so an offscreen carousel never advances in
    /// the background. Redundant "visible" reports do not extend an
    /// already armed countdown.
    pub fn set_visible(&mut self, visible: bool, now: Instant) {
        if visible {
            if self.phase == Phase::Idle && self.can_rotate() {
                log::debug!("carousel visible, cadence armed");
                self.phase = Phase::AutoRunning;
                self.deadline = Some(now + self.settings.period);
            }
        } else if self.phase != Phase::Idle {
            log::debug!("carousel hidden, cadence cancelled");
            self.phase = Phase::Idle;
            self.deadline = None;
        }
    }

    /// Advance once if an armed countdown has run out.
    ///
    /// Returns whether an advance happened. Ticks while idle or before
    /// the deadline do nothing, so the driving tick interval may be much
    /// coarser than the period without affecting correctness.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {},
            _ => return false,
        }

        // A countdown is only ever armed with at least two items.
        self.current_index = (self.current_index + 1) % self.len;
        self.direction = Direction::Forward;
        self.phase = Phase::AutoRunning;
        self.deadline = Some(now + self.settings.period);
        true
    }

    /// Manual advance; resets the automatic countdown.
    pub fn next(&mut self, now: Instant) {
        self.step(Direction::Forward, now);
    }

    /// Manual retreat; resets the automatic countdown.
    pub fn previous(&mut self, now: Instant) {
        self.step(Direction::Backward, now);
    }

    /// Jump straight to `index`, inferring the direction from the current
    /// position.
    ///
    /// Jumping to the current index leaves it unchanged but still resets
    /// the countdown: any explicit interaction refreshes the cadence. An
    /// out-of-range index is rejected without touching any state.
    pub fn jump_to(
        &mut self,
        index: usize,
        now: Instant,
    ) -> Result<(), CarouselError> {
        if index >= self.len {
            return Err(CarouselError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }

        self.direction = if index > self.current_index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.current_index = index;
        self.reset_countdown(now);
        Ok(())
    }

    fn step(&mut self, direction: Direction, now: Instant) {
        if self.len == 0 {
            return;
        }

        self.current_index = match direction {
            Direction::Forward => (self.current_index + 1) % self.len,
            Direction::Backward => {
                (self.current_index + self.len - 1) % self.len
            },
        };
        self.direction = direction;
        self.reset_countdown(now);
    }

    /// Restart the countdown after a manual action, but only while the
    /// cadence is running; manual navigation on a hidden carousel moves
    /// the index without arming anything.
    fn reset_countdown(&mut self, now: Instant) {
        if self.phase == Phase::Idle {
            return;
        }

        self.phase = Phase::ManualPending;
        self.deadline = Some(now + self.settings.period);
    }

    fn can_rotate(&self) -> bool {
        self.len >= 2
    }
}
