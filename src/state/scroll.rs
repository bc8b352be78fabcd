//! Scroll position and the read-only transforms derived from it.
//!
//! All row coordinates are page rows: row 0 is the first line of the hero,
//! and the viewport covers `offset..offset + viewport_height`.

use crate::anim::{lerp, progress_between};
use std::ops::Range;

/// Vertical scroll state of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    offset: u16,
    content_height: u16,
    viewport_height: u16,
}

impl ScrollState {
    /// Scroll state at the top of a page.
    pub fn new(content_height: u16, viewport_height: u16) -> Self {
        Self {
            offset: 0,
            content_height,
            viewport_height,
        }
    }

    /// First visible row.
    pub fn offset(&self) -> u16 {
        self.offset
    }

    /// Total page rows.
    pub fn content_height(&self) -> u16 {
        self.content_height
    }

    /// Visible rows.
    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    /// Rows currently on screen.
    pub fn viewport(&self) -> Range<u16> {
        self.offset..self.offset.saturating_add(self.viewport_height)
    }

    /// Largest valid offset.
    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Whether the last row is on screen.
    pub fn is_at_bottom(&self) -> bool {
        self.offset >= self.max_offset()
    }

    /// Update page and viewport sizes, keeping the offset in range.
    pub fn set_dimensions(&mut self, content_height: u16, viewport_height: u16) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Scroll by `delta` rows (negative is up), clamped to the page.
    pub fn scroll_by(&mut self, delta: i32) {
        let target = i32::from(self.offset).saturating_add(delta);
        let clamped = target.clamp(0, i32::from(self.max_offset()));
        self.offset = u16::try_from(clamped).unwrap_or(0);
    }

    /// Scroll so `row` is the first visible row, clamped to the page.
    pub fn scroll_to(&mut self, row: u16) {
        self.offset = row.min(self.max_offset());
    }

    /// Scroll up one viewport.
    pub fn page_up(&mut self) {
        self.scroll_by(-i32::from(self.viewport_height.max(1)));
    }

    /// Scroll down one viewport.
    pub fn page_down(&mut self) {
        self.scroll_by(i32::from(self.viewport_height.max(1)));
    }

    /// Jump to the first row.
    pub fn to_top(&mut self) {
        self.offset = 0;
    }

    /// Jump so the last row is on screen.
    pub fn to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// How far down the page the reader is, in `[0, 1]`.
    ///
    /// A page that fits entirely on screen reports `0.0`.
    pub fn progress(&self) -> f64 {
        let max = self.max_offset();
        if max == 0 {
            return 0.0;
        }
        f64::from(self.offset) / f64::from(max)
    }
}

/// Fraction of `anchor` rows that lie inside `viewport`, in `[0, 1]`.
///
/// An empty anchor is never visible.
pub fn intersection_ratio(anchor: &Range<u16>, viewport: &Range<u16>) -> f32 {
    let height = anchor.end.saturating_sub(anchor.start);
    if height == 0 {
        return 0.0;
    }
    let start = anchor.start.max(viewport.start);
    let end = anchor.end.min(viewport.end);
    let visible = end.saturating_sub(start);
    f32::from(visible) / f32::from(height)
}

/// Displacement of a section as it scrolls through the viewport.
///
/// Progress runs from 0 when the section's top touches the bottom of the
/// viewport to 1 when its bottom leaves the top; the result moves linearly
/// from `offset` to `-offset` over that span.
pub fn section_parallax(section: &Range<u16>, scroll: &ScrollState, offset: f64) -> f64 {
    let enter = f64::from(section.start) - f64::from(scroll.viewport_height());
    let leave = f64::from(section.end);
    let progress = progress_between(f64::from(scroll.offset()), enter, leave);
    lerp(offset, -offset, progress)
}

/// Displacement of a background layer that moves at `speed` times the scroll.
pub fn background_parallax(scroll_offset: u16, speed: f64) -> f64 {
    f64::from(scroll_offset) * speed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_by_clamps_to_page() {
        let mut scroll = ScrollState::new(100, 20);

        scroll.scroll_by(-5);
        assert_eq!(scroll.offset(), 0);
        scroll.scroll_by(500);
        assert_eq!(scroll.offset(), 80);
        assert!(scroll.is_at_bottom());
    }

    #[test]
    fn page_navigation_moves_by_viewport_height() {
        let mut scroll = ScrollState::new(100, 20);

        scroll.page_down();
        assert_eq!(scroll.offset(), 20);
        scroll.page_up();
        assert_eq!(scroll.offset(), 0);
        scroll.to_bottom();
        assert_eq!(scroll.offset(), 80);
        scroll.to_top();
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn shrinking_content_pulls_offset_back_in_range() {
        let mut scroll = ScrollState::new(100, 20);
        scroll.to_bottom();

        scroll.set_dimensions(50, 20);
        assert_eq!(scroll.offset(), 30);
    }

    #[test]
    fn progress_spans_zero_to_one() {
        let mut scroll = ScrollState::new(120, 20);
        assert_eq!(scroll.progress(), 0.0);
        scroll.scroll_to(50);
        assert_eq!(scroll.progress(), 0.5);
        scroll.to_bottom();
        assert_eq!(scroll.progress(), 1.0);
    }

    #[test]
    fn progress_is_zero_when_page_fits() {
        let scroll = ScrollState::new(10, 40);
        assert_eq!(scroll.progress(), 0.0);
    }

    #[test]
    fn intersection_ratio_counts_overlapping_rows() {
        assert_eq!(intersection_ratio(&(10..14), &(0..20)), 1.0);
        assert_eq!(intersection_ratio(&(18..22), &(0..20)), 0.5);
        assert_eq!(intersection_ratio(&(30..34), &(0..20)), 0.0);
        assert_eq!(intersection_ratio(&(5..5), &(0..20)), 0.0);
    }

    #[test]
    fn section_parallax_moves_from_offset_to_negative_offset() {
        let section = 40..60;
        let mut scroll = ScrollState::new(200, 20);

        // Top of section at the bottom edge of the viewport
        scroll.scroll_to(20);
        assert_eq!(section_parallax(&section, &scroll, 4.0), 4.0);

        // Bottom of section at the top edge
        scroll.scroll_to(60);
        assert_eq!(section_parallax(&section, &scroll, 4.0), -4.0);

        scroll.scroll_to(40);
        assert_eq!(section_parallax(&section, &scroll, 4.0), 0.0);
    }

    #[test]
    fn background_parallax_scales_scroll() {
        assert_eq!(background_parallax(10, 0.5), 5.0);
        assert_eq!(background_parallax(0, 0.5), 0.0);
    }
}
