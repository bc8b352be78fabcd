//! Frame layout rendering.
//!
//! Splits the screen into navbar, scroll progress bar and page viewport,
//! and draws the loading splash while the intro runs.

use super::constants::{
    CONTENT_MARGIN, CONTENT_MAX_WIDTH, NAVBAR_HEIGHT, PROGRESS_BAR_HEIGHT, SPLASH_HEIGHT,
    SPLASH_WIDTH,
};
use super::help::{render_help_overlay, sized_centered_rect};
use super::styles::Theme;
use crate::anim::LoadingSplash;
use crate::model::SectionId;
use crate::state::AppState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, LineGauge, Paragraph, Tabs},
    Frame,
};

/// Screen regions of the page phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageAreas {
    /// Navigation bar.
    pub navbar: Rect,
    /// Scroll progress bar.
    pub progress: Rect,
    /// Page viewport, centered and narrowed to the content column.
    pub content: Rect,
}

/// Split `area` into navbar, progress bar and content column.
pub fn page_areas(area: Rect) -> PageAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAVBAR_HEIGHT),
            Constraint::Length(PROGRESS_BAR_HEIGHT),
            Constraint::Min(0),
        ])
        .split(area);

    let body = chunks[2];
    let width = body
        .width
        .saturating_sub(CONTENT_MARGIN * 2)
        .min(CONTENT_MAX_WIDTH)
        .max(1)
        .min(body.width);
    let content = Rect {
        x: body.x + (body.width - width) / 2,
        y: body.y,
        width,
        height: body.height,
    };

    PageAreas {
        navbar: chunks[0],
        progress: chunks[1],
        content,
    }
}

/// Render one frame.
///
/// `page` holds the page lines built for `page_areas(frame.area()).content`;
/// it is ignored while the splash is up.
pub fn render_layout(frame: &mut Frame, state: &AppState, theme: &Theme, page: Vec<Line<'static>>) {
    match state.splash() {
        Some(splash) => render_splash(frame, splash, &state.portfolio().profile.name, theme),
        None => {
            let areas = page_areas(frame.area());
            render_navbar(frame, areas.navbar, state, theme);
            render_progress(frame, areas.progress, state, theme);
            let paragraph = Paragraph::new(page).scroll((state.scroll().offset(), 0));
            frame.render_widget(paragraph, areas.content);
        }
    }

    if state.help_visible {
        render_help_overlay(frame, theme);
    }
}

/// Centered card with the rotating message and a percentage gauge.
fn render_splash(frame: &mut Frame, splash: &LoadingSplash, name: &str, theme: &Theme) {
    let card = sized_centered_rect(SPLASH_WIDTH, SPLASH_HEIGHT, frame.area());
    let block = Block::default()
        .title(format!(" {name} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(theme.accent());
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let message = Paragraph::new(Line::styled(splash.message(), theme.text()))
        .alignment(Alignment::Center);
    frame.render_widget(message, rows[1]);

    let gauge = Gauge::default()
        .gauge_style(theme.accent())
        .use_unicode(true)
        .percent(u16::from(splash.progress()))
        .label(Span::styled(format!("{}%", splash.progress()), theme.title()));
    frame.render_widget(gauge, rows[3]);
}

/// Owner name on the left, section links on the right.
fn render_navbar(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let name = &state.portfolio().profile.name;
    let name_width = u16::try_from(name.chars().count() + 2).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(name_width), Constraint::Min(0)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::styled(format!(" {name}"), theme.heading())),
        chunks[0],
    );

    let tabs = Tabs::new(SectionId::ALL.iter().map(|id| id.title()))
        .select(state.active_section().index())
        .style(theme.muted())
        .highlight_style(theme.nav_active())
        .divider(" ");
    frame.render_widget(tabs, chunks[1]);
}

/// One-row bar filled in proportion to how far the reader has scrolled.
fn render_progress(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let gauge = LineGauge::default()
        .ratio(state.scroll().progress().clamp(0.0, 1.0))
        .label("")
        .line_set(symbols::line::THICK)
        .filled_style(theme.accent())
        .unfilled_style(theme.muted());
    frame.render_widget(gauge, area);
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
