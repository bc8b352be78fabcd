//! Tests for help overlay widget

use super::*;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

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

fn render(width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| render_help_overlay(frame, &Theme::plain()))
        .unwrap();
    buffer_to_string(terminal.backend().buffer())
}

#[test]
fn render_help_overlay_shows_bordered_modal() {
    let rendered = render(80, 30);
    assert!(rendered.contains('┌'), "Help overlay should render a bordered box");
    assert!(rendered.contains("Keyboard Shortcuts"));
}

#[test]
fn render_help_overlay_lists_every_category() {
    let rendered = render(80, 30);
    for category in ["Scrolling", "Sections", "Application"] {
        assert!(rendered.contains(category), "Missing category {category}");
    }
}

#[test]
fn render_help_overlay_lists_section_jumps_and_quit() {
    let rendered = render(80, 30);
    assert!(rendered.contains("Jump to section"));
    assert!(rendered.contains("q/Ctrl+c"));
}

#[test]
fn render_help_overlay_shows_dismissal_hint() {
    let rendered = render(80, 30);
    assert!(rendered.contains("Press Esc or ? to close"));
}

#[test]
fn render_help_overlay_survives_tiny_terminal() {
    // Must not panic when the popup collapses to nothing
    let _ = render(4, 2);
}

#[test]
fn centered_rect_is_centered() {
    let area = Rect::new(0, 0, 100, 50);
    assert_eq!(centered_rect(60, 80, area), Rect::new(20, 5, 60, 40));
}

#[test]
fn sized_centered_rect_shrinks_to_fit() {
    let area = Rect::new(0, 0, 30, 10);
    assert_eq!(sized_centered_rect(48, 7, area), Rect::new(0, 1, 30, 7));
}
