//! Scroll-driven navigation state.
//!
//! [`ScrollTracker`] folds a stream of raw vertical scroll offsets into a
//! [`ScrollState`]: whether the page is scrolled past the header styling
//! threshold, and which registered section is currently active.
//! Recomputation runs at most once per throttle interval; input arriving
//! inside the window is kept pending and flushed on the next tick, so the
//! published state always settles on the resting offset.

use std::time::{Duration, Instant};

const DEFAULT_THRESHOLD: f32 = 20.0;
const DEFAULT_HEADER_OFFSET: f32 = 100.0;
const DEFAULT_THROTTLE_MS: u64 = 100;

/// Tunables for [`ScrollTracker`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSettings {
    /// Offset beyond which the page counts as scrolled.
    pub threshold: f32,

    /// Compensation for the fixed header when probing sections.
    pub header_offset: f32,

    /// Minimum interval between recomputations.
    pub throttle: Duration,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            header_offset: DEFAULT_HEADER_OFFSET,
            throttle: Duration::from_millis(DEFAULT_THROTTLE_MS),
        }
    }
}

impl ScrollSettings {
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_header_offset(mut self, header_offset: f32) -> Self {
        self.header_offset = header_offset;
        self
    }

    pub fn with_throttle(mut self, throttle: Duration) -> Self {
        self.throttle = throttle;
        self
    }
}

/// Geometry of one rendered section, in page coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    /// Section identifier, matching a nav link id.
    pub id: String,

    /// Distance from the page top to the section's top edge.
    pub top: f32,

    /// Rendered height of the section.
    pub height: f32,
}

impl SectionBounds {
    /// Create bounds for a section.
    pub fn new(id: impl Into<String>, top: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Whether `point` falls within `[top, top + height)`.
    #[inline]
    fn contains(&self, point: f32) -> bool {
        point >= self.top && point < self.top + self.height
    }
}

/// Published scroll-derived state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// Whether the offset is past the header styling threshold.
    pub scrolled: bool,

    /// Id of the section the page is currently considered to be in.
    ///
    /// Keeps its last known value when no section contains the probe
    /// point, so the highlight does not flicker at page extremes.
    pub active_section: String,
}

/// Throttled scroll offset to [`ScrollState`] machine.
///
/// The clock is injected: every time-sensitive call takes `now`, which
/// makes the throttle window deterministic under test. The tracker never
/// reads the clock itself.
#[derive(Debug)]
pub struct ScrollTracker {
    settings: ScrollSettings,
    sections: Vec<SectionBounds>,
    state: ScrollState,
    last_offset: f32,
    pending: bool,
    recomputed_at: Option<Instant>,
}

impl ScrollTracker {
    /// Create a tracker with no registered sections.
    pub fn new(settings: ScrollSettings) -> Self {
        Self {
            settings,
            sections: Vec::new(),
            state: ScrollState::default(),
            last_offset: 0.0,
            pending: false,
            recomputed_at: None,
        }
    }

    /// Current published snapshot.
    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    /// Whether an offset recorded inside the throttle window still awaits
    /// its flush.
    pub fn needs_flush(&self) -> bool {
        self.pending
    }

    /// Replace the registered section list and recompute immediately.
    ///
    /// Layout changes must be reflected without waiting out the throttle;
    /// the window itself is left untouched, so the next raw scroll still
    /// respects it. Returns whether the snapshot changed.
    pub fn set_sections(&mut self, sections: Vec<SectionBounds>) -> bool {
        self.sections = sections;

        let before = self.state.clone();
        if self.state.active_section.is_empty() {
            if let Some(first) = self.sections.first() {
                self.state.active_section = first.id.clone();
            }
        }
        self.apply();
        self.state != before
    }

    /// Record a raw scroll offset.
    ///
    /// Recomputes immediately when the throttle window has elapsed,
    /// otherwise keeps the offset pending for [`ScrollTracker::flush`].
    /// Returns whether the snapshot changed.
    pub fn record_scroll(&mut self, offset: f32, now: Instant) -> bool {
        self.last_offset = offset;
        if self.throttled(now) {
            self.pending = true;
            return false;
        }

        self.recompute(now)
    }

    /// Trailing-edge flush of a pending offset.
    ///
    /// Driven by a periodic tick; does nothing while the throttle window
    /// is still open or when no offset is pending. Returns whether the
    /// snapshot changed.
    pub fn flush(&mut self, now: Instant) -> bool {
        if !self.pending || self.throttled(now) {
            return false;
        }

        self.recompute(now)
    }

    fn throttled(&self, now: Instant) -> bool {
        self.recomputed_at
            .is_some_and(|at| now.duration_since(at) < self.settings.throttle)
    }

    fn recompute(&mut self, now: Instant) -> bool {
        self.recomputed_at = Some(now);

        let before = self.state.clone();
        self.apply();
        self.state != before
    }

    fn apply(&mut self) {
        self.pending = false;
        self.state.scrolled = self.last_offset > self.settings.threshold;

        // Linear scan, last match wins on overlapping bounds.
        let probe = self.last_offset + self.settings.header_offset;
        let mut active = None;
        for section in &self.sections {
            if section.contains(probe) {
                active = Some(&section.id);
            }
        }

        if let Some(id) = active {
            if *id != self.state.active_section {
                log::debug!("active section changed to {id}");
                self.state.active_section = id.clone();
            }
        }
    }
}
