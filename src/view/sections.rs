//! Line builders, one per page section.

use super::constants::{HEADING_PARALLAX_OFFSET, HERO_MIN_HEIGHT, STARFIELD_PARALLAX_SPEED};
use super::page::{wrap_words, PageBuilder, PageContext};
use crate::anim::format_count;
use crate::model::SectionId;
use crate::state::{background_parallax, section_parallax};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

const BULLET: &str = " · ";

fn text_width(ctx: &PageContext<'_>) -> usize {
    usize::from(ctx.width)
}

fn wrapped(page: &mut PageBuilder, text: &str, prefix: &str, width: usize, style: Style) {
    let prefix_width = prefix.chars().count();
    for line in wrap_words(text, width.saturating_sub(prefix_width)) {
        page.push(Line::styled(format!("{prefix}{line}"), style));
    }
}

/// Section heading, drifting sideways as the section scrolls past.
fn heading(page: &mut PageBuilder, ctx: &PageContext<'_>, id: SectionId) {
    let shift = ctx
        .state
        .layout()
        .section_rows(id)
        .map(|rows| section_parallax(&rows, ctx.state.scroll(), HEADING_PARALLAX_OFFSET))
        .unwrap_or(HEADING_PARALLAX_OFFSET);
    let indent = (HEADING_PARALLAX_OFFSET + shift).round().max(0.0) as usize;

    page.push(Line::from(vec![
        Span::raw(" ".repeat(indent)),
        Span::styled(format!("── {} ──", id.title()), ctx.theme.heading()),
    ]));
    page.blank();
}

fn close_section(page: &mut PageBuilder) {
    page.blank();
    page.blank();
}

// ===== Hero =====

/// Deterministic star at `(row, col)` of the sky, or a space.
pub(crate) fn star_at(row: u16, col: usize) -> char {
    let mut h = u64::from(row).wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ (col as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F);
    h ^= h >> 29;
    h = h.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    h ^= h >> 32;
    match h % 64 {
        0 => '*',
        1..=3 => '·',
        _ => ' ',
    }
}

/// One row of the starfield, shifted left by `drift` columns.
pub(crate) fn starfield_row(row: u16, width: usize, drift: usize) -> String {
    (0..width).map(|col| star_at(row, col + drift)).collect()
}

fn hero_text(ctx: &PageContext<'_>) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let profile = &ctx.state.portfolio().profile;

    let (headline, tagline) = match ctx.state.hero() {
        Some(hero) if !hero.greeting().is_complete() => (
            Line::from(Span::styled(hero.greeting().display(), theme.title())),
            Line::from(Span::styled(hero.tagline().display(), theme.secondary())),
        ),
        Some(hero) => (
            Line::from(vec![
                Span::styled(hero.greeting().revealed().to_string(), theme.title()),
                Span::styled(hero.name().display(), theme.heading()),
            ]),
            Line::from(Span::styled(hero.tagline().display(), theme.secondary())),
        ),
        None => (
            Line::from(vec![
                Span::styled(profile.greeting.clone(), theme.title()),
                Span::styled(profile.name.clone(), theme.heading()),
            ]),
            Line::default(),
        ),
    };

    vec![
        headline.centered(),
        tagline.centered(),
        Line::default(),
        Line::styled("Press n or ↓ to explore", theme.muted()).centered(),
    ]
}

/// Full-viewport banner: typed headline, cycling tagline, drifting stars.
pub(crate) fn hero(page: &mut PageBuilder, ctx: &PageContext<'_>) {
    page.begin_section(SectionId::Home);

    let text = hero_text(ctx);
    let height = usize::from(ctx.viewport_height.max(HERO_MIN_HEIGHT));
    let top = height.saturating_sub(text.len()) / 2;
    let drift = background_parallax(ctx.state.scroll().offset(), STARFIELD_PARALLAX_SPEED)
        .round()
        .max(0.0) as usize;
    let star_style = ctx.theme.star();

    let mut text = text.into_iter();
    for i in 0..height {
        let row = page.row();
        match (i >= top).then(|| text.next()).flatten() {
            Some(line) => page.push(line),
            None => page.push(Line::styled(
                starfield_row(row, text_width(ctx), drift),
                star_style,
            )),
        }
    }
}

// ===== About =====

pub(crate) fn about(page: &mut PageBuilder, ctx: &PageContext<'_>) {
    let theme = ctx.theme;
    let portfolio = ctx.state.portfolio();
    let width = text_width(ctx);

    page.begin_section(SectionId::About);
    heading(page, ctx, SectionId::About);

    wrapped(page, &portfolio.profile.bio, "", width, theme.text());

    if !portfolio.hobbies.is_empty() {
        page.blank();
        wrapped(
            page,
            &format!("Hobbies: {}", portfolio.hobbies.join(BULLET)),
            "",
            width,
            theme.muted(),
        );
    }

    if !portfolio.stats.is_empty() {
        page.blank();
        let counters = ctx.state.counters();
        for (i, stat) in portfolio.stats.iter().enumerate() {
            let value = counters
                .get(i)
                .map(|counter| counter.display())
                .unwrap_or_else(|| format!("{}{}", format_count(stat.value, 0.0), stat.suffix));
            page.push_counter(Line::from(vec![
                Span::styled(format!("{value:>10}"), theme.counter()),
                Span::raw("  "),
                Span::styled(stat.label.clone(), theme.text()),
            ]));
        }
    }

    close_section(page);
}

// ===== Skills =====

pub(crate) fn skills(page: &mut PageBuilder, ctx: &PageContext<'_>) {
    let theme = ctx.theme;
    let portfolio = ctx.state.portfolio();
    let width = text_width(ctx);

    page.begin_section(SectionId::Skills);
    heading(page, ctx, SectionId::Skills);

    if !portfolio.tech_stack.is_empty() {
        wrapped(page, &portfolio.tech_stack.join(BULLET), "", width, theme.accent());
        page.blank();
    }

    for category in &portfolio.skills {
        page.push(Line::styled(category.title.clone(), theme.title()));
        wrapped(page, &category.skills.join(BULLET), "  ", width, theme.text());
    }

    close_section(page);
}

// ===== Education =====

pub(crate) fn education(page: &mut PageBuilder, ctx: &PageContext<'_>) {
    let theme = ctx.theme;
    let width = text_width(ctx);
    let entries = &ctx.state.portfolio().education;

    page.begin_section(SectionId::Education);
    heading(page, ctx, SectionId::Education);

    for (i, entry) in entries.iter().enumerate() {
        page.push(Line::styled(format!("◆ {}", entry.period), theme.accent()));
        page.push(Line::from(vec![
            Span::styled("│ ", theme.muted()),
            Span::styled(entry.title.clone(), theme.title()),
        ]));
        page.push(Line::styled(format!("│ {}", entry.institution), theme.muted()));
        if !entry.description.is_empty() {
            wrapped(page, &entry.description, "│ ", width, theme.text());
        }
        if i + 1 < entries.len() {
            page.push(Line::styled("│", theme.muted()));
        }
    }

    close_section(page);
}

// ===== Projects =====

pub(crate) fn projects(page: &mut PageBuilder, ctx: &PageContext<'_>) {
    let theme = ctx.theme;
    let width = text_width(ctx);
    let projects = &ctx.state.portfolio().projects;

    page.begin_section(SectionId::Projects);
    heading(page, ctx, SectionId::Projects);

    for (i, project) in projects.iter().enumerate() {
        if i > 0 {
            page.blank();
        }
        page.push(Line::styled(format!("▸ {}", project.title), theme.title()));
        wrapped(page, &project.description, "  ", width, theme.text());
        if !project.tech.is_empty() {
            wrapped(page, &project.tech.join(BULLET), "  ", width, theme.secondary());
        }
        if let Some(link) = &project.link {
            page.push(Line::styled(format!("  ↗ {link}"), theme.accent()));
        }
    }

    close_section(page);
}

// ===== Contact =====

pub(crate) fn contact(page: &mut PageBuilder, ctx: &PageContext<'_>) {
    let theme = ctx.theme;
    let channels = &ctx.state.portfolio().contact;

    page.begin_section(SectionId::Contact);
    heading(page, ctx, SectionId::Contact);

    page.push(Line::styled(
        "Have a project in mind? Reach out.",
        theme.text(),
    ));
    page.blank();

    let label_width = channels
        .iter()
        .map(|c| c.label.chars().count())
        .max()
        .unwrap_or(0);
    for channel in channels {
        page.push(Line::from(vec![
            Span::styled(format!("{:<label_width$}  ", channel.label), theme.muted()),
            Span::styled(channel.value.clone(), theme.accent()),
        ]));
    }

    close_section(page);
}

// ===== Footer =====

pub(crate) fn footer(page: &mut PageBuilder, ctx: &PageContext<'_>) {
    let theme = ctx.theme;
    let portfolio = ctx.state.portfolio();

    page.push(Line::styled("─".repeat(text_width(ctx)), theme.muted()));

    if !portfolio.links.is_empty() {
        let links = portfolio
            .links
            .iter()
            .map(|link| format!("{}: {}", link.label, link.value))
            .collect::<Vec<_>>()
            .join(BULLET);
        page.push(Line::styled(links, theme.accent()).centered());
    }

    page.push(
        Line::styled(
            format!(
                "© {} {}. Built with Rust and ratatui.",
                ctx.year, portfolio.profile.name
            ),
            theme.muted(),
        )
        .centered(),
    );
}
