//! Page assembly: turns the state into styled lines and measures them.
//!
//! The page is one tall column of lines rendered through a scrolled
//! paragraph. While building it the row span of every section and every
//! statistic is recorded, and the resulting [`PageLayout`] is handed back to
//! the state for navigation and counter visibility.

use super::sections;
use super::styles::Theme;
use crate::model::SectionId;
use crate::state::{AppState, PageLayout, SectionSpan};
use ratatui::text::Line;
use unicode_width::UnicodeWidthStr;

/// Built page lines and their geometry.
#[derive(Debug, Clone)]
pub struct PageView {
    /// Every page row, top to bottom.
    pub lines: Vec<Line<'static>>,
    /// Where the sections and counters landed.
    pub layout: PageLayout,
}

/// Inputs shared by every section builder.
pub(crate) struct PageContext<'a> {
    pub state: &'a AppState,
    pub theme: &'a Theme,
    pub width: u16,
    pub viewport_height: u16,
    pub year: i32,
}

/// Accumulates lines while tracking row positions.
#[derive(Debug, Default)]
pub(crate) struct PageBuilder {
    lines: Vec<Line<'static>>,
    sections: Vec<SectionSpan>,
    counter_anchors: Vec<std::ops::Range<u16>>,
    open: Option<(SectionId, u16)>,
}

impl PageBuilder {
    /// Row the next pushed line lands on.
    pub fn row(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }

    pub fn push(&mut self, line: impl Into<Line<'static>>) {
        self.lines.push(line.into());
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    pub fn begin_section(&mut self, id: SectionId) {
        self.end_section();
        self.open = Some((id, self.row()));
    }

    pub fn end_section(&mut self) {
        if let Some((id, start)) = self.open.take() {
            self.sections.push(SectionSpan {
                id,
                rows: start..self.row(),
            });
        }
    }

    /// Push a counter line and remember its row.
    pub fn push_counter(&mut self, line: impl Into<Line<'static>>) {
        let row = self.row();
        self.counter_anchors.push(row..row.saturating_add(1));
        self.push(line);
    }

    fn finish(mut self) -> PageView {
        self.end_section();
        let height = self.row();
        PageView {
            lines: self.lines,
            layout: PageLayout {
                sections: self.sections,
                counter_anchors: self.counter_anchors,
                height,
            },
        }
    }
}

/// Build the whole page for a content column `width` wide.
pub fn build_page(
    state: &AppState,
    theme: &Theme,
    width: u16,
    viewport_height: u16,
    year: i32,
) -> PageView {
    let ctx = PageContext {
        state,
        theme,
        width: width.max(1),
        viewport_height,
        year,
    };
    let mut page = PageBuilder::default();

    sections::hero(&mut page, &ctx);
    sections::about(&mut page, &ctx);
    sections::skills(&mut page, &ctx);
    sections::education(&mut page, &ctx);
    sections::projects(&mut page, &ctx);
    sections::contact(&mut page, &ctx);
    page.end_section();
    sections::footer(&mut page, &ctx);

    page.finish()
}

/// Greedy word wrap by display width.
///
/// Words wider than `width` are split across lines. Always returns at least
/// one (possibly empty) line.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        for ch in word.chars() {
            if current.width() + ch.to_string().width() > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current.push(ch);
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
#[path = "page_tests.rs"]
mod tests;
