//! Tests for page assembly.

use super::*;
use crate::model::{KeyAction, Portfolio};
use crate::state::AnimationSettings;
use crate::view::sections::starfield_row;
use std::time::{Duration, Instant};

fn text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

fn page_text(view: &PageView) -> String {
    view.lines.iter().map(text).collect::<Vec<_>>().join("\n")
}

fn state(now: Instant) -> AppState {
    AppState::new(Portfolio::default(), AnimationSettings::default(), false, now).unwrap()
}

// ===== wrap_words =====

#[test]
fn wrap_words_breaks_on_whitespace() {
    let lines = wrap_words("the quick brown fox jumps", 10);
    insta::assert_snapshot!(lines.join("|"), @"the quick|brown fox|jumps");
}

#[test]
fn wrap_words_splits_overlong_words() {
    let lines = wrap_words("abcdefghij xy", 4);
    assert_eq!(lines, ["abcd", "efgh", "ij", "xy"]);
}

#[test]
fn wrap_words_always_returns_a_line() {
    assert_eq!(wrap_words("", 10), [""]);
    assert_eq!(wrap_words("   ", 10), [""]);
}

// ===== Layout =====

#[test]
fn sections_are_laid_out_in_navbar_order() {
    let state = state(Instant::now());
    let view = build_page(&state, &Theme::plain(), 60, 20, 2026);

    let ids: Vec<SectionId> = view.layout.sections.iter().map(|s| s.id).collect();
    assert_eq!(ids, SectionId::ALL);

    // Contiguous, starting at the top
    assert_eq!(view.layout.sections[0].rows.start, 0);
    for pair in view.layout.sections.windows(2) {
        assert_eq!(pair[0].rows.end, pair[1].rows.start);
    }
    assert!(view.layout.height > view.layout.sections[5].rows.end);
    assert_eq!(usize::from(view.layout.height), view.lines.len());
}

#[test]
fn hero_fills_the_viewport() {
    let state = state(Instant::now());
    let view = build_page(&state, &Theme::plain(), 60, 30, 2026);

    assert_eq!(view.layout.sections[0].rows, 0..30);
}

#[test]
fn hero_has_a_minimum_height_on_short_terminals() {
    let state = state(Instant::now());
    let view = build_page(&state, &Theme::plain(), 60, 3, 2026);

    assert_eq!(view.layout.sections[0].rows, 0..9);
}

#[test]
fn counter_anchors_sit_inside_about() {
    let state = state(Instant::now());
    let view = build_page(&state, &Theme::plain(), 60, 20, 2026);

    let about = view.layout.section_rows(SectionId::About).unwrap();
    assert_eq!(view.layout.counter_anchors.len(), 3);
    for anchor in &view.layout.counter_anchors {
        assert!(about.start <= anchor.start && anchor.end <= about.end);
        assert_eq!(anchor.end - anchor.start, 1);
    }
}

#[test]
fn layout_does_not_depend_on_scroll_position() {
    let t0 = Instant::now();
    let mut state = state(t0);
    let first = build_page(&state, &Theme::plain(), 60, 20, 2026);
    state.set_layout(first.layout.clone(), 20, t0);

    state.apply_action(KeyAction::PageDown, t0);
    let second = build_page(&state, &Theme::plain(), 60, 20, 2026);

    assert_eq!(first.layout, second.layout);
}

// ===== Content =====

#[test]
fn page_shows_every_section_heading_and_footer_year() {
    let state = state(Instant::now());
    let rendered = page_text(&build_page(&state, &Theme::plain(), 80, 20, 2031));

    for id in &SectionId::ALL[1..] {
        assert!(
            rendered.contains(&format!("── {} ──", id.title())),
            "Missing heading for {:?}",
            id
        );
    }
    assert!(rendered.contains("© 2031 Alex Morgan"));
    assert!(rendered.contains("Trackify - Expense Tracker"));
    assert!(rendered.contains("hello@example.com"));
}

#[test]
fn dormant_counters_render_zero() {
    let state = state(Instant::now());
    let view = build_page(&state, &Theme::plain(), 60, 20, 2026);

    let row = usize::from(view.layout.counter_anchors[2].start);
    insta::assert_snapshot!(text(&view.lines[row]).trim(), @"0.0%  Uptime Achieved");
}

#[test]
fn hero_headline_follows_typing_progress() {
    let t0 = Instant::now();
    let mut state = state(t0);

    let hero_text = |state: &AppState| {
        let view = build_page(state, &Theme::plain(), 60, 20, 2026);
        view.lines[..20].iter().map(text).collect::<Vec<_>>().join("\n")
    };

    state.tick(t0 + Duration::from_millis(800));
    let rendered = hero_text(&state);
    assert!(rendered.contains("Hi,"));
    assert!(!rendered.contains("Alex"));

    state.tick(t0 + Duration::from_millis(3_000));
    assert!(hero_text(&state).contains("Hi, I'm Alex Morgan"));
}

// ===== Starfield =====

#[test]
fn starfield_drift_shifts_columns() {
    let still: Vec<char> = starfield_row(4, 40, 0).chars().collect();
    let drifted: Vec<char> = starfield_row(4, 37, 3).chars().collect();
    assert_eq!(&still[3..], &drifted[..]);
}

#[test]
fn starfield_is_sparse() {
    let row = starfield_row(1, 1_000, 0);
    let stars = row.chars().filter(|c| *c != ' ').count();
    assert!(stars > 0 && stars < 200, "Got {stars} stars");
}
