//! Row geometry of the rendered page.
//!
//! The view measures the page while building it and hands the result back
//! so the pure state can answer "which section is on screen" and "is this
//! counter visible" without knowing anything about rendering.

use crate::model::SectionId;
use std::ops::Range;

/// Rows occupied by one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpan {
    /// Which section.
    pub id: SectionId,
    /// Page rows, end exclusive.
    pub rows: Range<u16>,
}

/// Measured page geometry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageLayout {
    /// Sections in page order.
    pub sections: Vec<SectionSpan>,
    /// Rows of each statistic, in the order of `Portfolio::stats`.
    pub counter_anchors: Vec<Range<u16>>,
    /// Total page rows.
    pub height: u16,
}

impl PageLayout {
    /// Rows of `id`, if the section was laid out.
    pub fn section_rows(&self, id: SectionId) -> Option<Range<u16>> {
        self.sections
            .iter()
            .find(|span| span.id == id)
            .map(|span| span.rows.clone())
    }

    /// Last section whose first row is at or above `row`.
    ///
    /// Rows above every section belong to the first one.
    pub fn section_at(&self, row: u16) -> Option<SectionId> {
        self.sections
            .iter()
            .take_while(|span| span.rows.start <= row)
            .last()
            .or_else(|| self.sections.first())
            .map(|span| span.id)
    }

    /// Last laid-out section.
    pub fn last_section(&self) -> Option<SectionId> {
        self.sections.last().map(|span| span.id)
    }
}
