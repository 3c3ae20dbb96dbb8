//! Measured page geometry.
//!
//! The embedding view measures its rendered blocks once per layout pass
//! and hands the result to [`crate::Page`]; everything here is plain
//! arithmetic over those measurements, so visibility behavior stays unit
//! testable without a real window.

use folio_state::SectionBounds;

/// Vertical extent of one rendered block, in page coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Region {
    /// Distance from the page top to the block's top edge.
    pub top: f32,

    /// Rendered height of the block.
    pub height: f32,
}

impl Region {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    /// Fraction of this region covered by a viewport window of
    /// `viewport_height` starting at `offset`, in `0.0..=1.0`.
    pub fn visible_fraction(&self, offset: f32, viewport_height: f32) -> f32 {
        if self.height <= 0.0 {
            return 0.0;
        }

        let top = self.top.max(offset);
        let bottom = (self.top + self.height).min(offset + viewport_height);
        ((bottom - top).max(0.0) / self.height).clamp(0.0, 1.0)
    }
}

/// Measured geometry of the rendered page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
    /// Nav-addressable sections, in declaration order.
    pub sections: Vec<SectionBounds>,

    /// The testimonial carousel's own block, tracked for visibility.
    pub carousel: Region,

    /// Height of the visible window the page scrolls within.
    pub viewport_height: f32,
}

impl Layout {
    /// Top edge of the section with the given id, if it is registered.
    pub fn section_top(&self, id: &str) -> Option<f32> {
        self.sections
            .iter()
            .find(|section| section.id == id)
            .map(|section| section.top)
    }
}
