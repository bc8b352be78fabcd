//! Tests for frame layout rendering.

use super::*;
use crate::model::{KeyAction, Portfolio};
use crate::state::AnimationSettings;
use crate::view::page::build_page;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use std::time::Instant;

// ===== Test Helpers =====

fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn render(state: &mut AppState, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let theme = Theme::plain();
    let areas = page_areas(Rect::new(0, 0, width, height));
    let page = build_page(state, &theme, areas.content.width, areas.content.height, 2026);
    state.set_layout(page.layout, areas.content.height, Instant::now());

    terminal
        .draw(|frame| render_layout(frame, state, &theme, page.lines))
        .unwrap();
    buffer_to_string(terminal.backend().buffer())
}

fn new_state(intro: bool) -> AppState {
    AppState::new(
        Portfolio::default(),
        AnimationSettings::default(),
        intro,
        Instant::now(),
    )
    .unwrap()
}

// ===== page_areas =====

#[test]
fn page_areas_stack_navbar_progress_and_content() {
    let areas = page_areas(Rect::new(0, 0, 80, 24));

    assert_eq!(areas.navbar, Rect::new(0, 0, 80, 1));
    assert_eq!(areas.progress, Rect::new(0, 1, 80, 1));
    assert_eq!(areas.content, Rect::new(2, 2, 76, 22));
}

#[test]
fn page_areas_cap_content_width_on_wide_terminals() {
    let areas = page_areas(Rect::new(0, 0, 120, 40));
    assert_eq!(areas.content.width, CONTENT_MAX_WIDTH);
    assert_eq!(areas.content.x, 12);
}

#[test]
fn page_areas_survive_zero_size() {
    let areas = page_areas(Rect::new(0, 0, 0, 0));
    assert_eq!(areas.content.width, 0);
}

// ===== Rendering =====

#[test]
fn loading_phase_renders_splash_card() {
    let mut state = new_state(true);
    let rendered = render(&mut state, 80, 24);

    assert!(rendered.contains("Alex Morgan"), "Card title shows the name");
    assert!(rendered.contains("Brewing some magic..."));
    assert!(rendered.contains("0%"));
    assert!(!rendered.contains("Projects"), "Navbar hidden while loading");
}

#[test]
fn page_phase_renders_navbar_with_every_section() {
    let mut state = new_state(false);
    let rendered = render(&mut state, 100, 24);
    let navbar = rendered.lines().next().unwrap();

    assert!(navbar.contains("Alex Morgan"));
    for id in SectionId::ALL {
        assert!(navbar.contains(id.title()), "Navbar missing {:?}", id);
    }
}

#[test]
fn scrolled_page_shows_later_sections() {
    let mut state = new_state(false);
    render(&mut state, 80, 24);

    state.apply_action(KeyAction::JumpTo(SectionId::Projects), Instant::now());
    let rendered = render(&mut state, 80, 24);

    assert!(rendered.contains("── Projects ──"));
    assert!(!rendered.contains("Press n or ↓ to explore"));
}

#[test]
fn help_overlay_draws_over_the_page() {
    let mut state = new_state(false);
    state.help_visible = true;
    let rendered = render(&mut state, 80, 30);

    assert!(rendered.contains("Keyboard Shortcuts"));
}
