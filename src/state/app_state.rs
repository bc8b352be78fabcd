//! Application state and transitions.
//!
//! AppState is the root state type. It owns every animation engine on the
//! page and drives them from a single clock: the shell calls [`AppState::tick`]
//! with the current instant and redraws when it returns `true`.

use crate::anim::{
    CounterParams, CycleParams, CyclingReveal, LoadingSplash, NumericCounter, RevealParams,
    TextReveal, DEFAULT_COUNTER_DURATION, DEFAULT_CYCLE_PAUSE, DEFAULT_CYCLE_SPEED,
};
use crate::model::{AnimError, KeyAction, Portfolio, SectionId};
use crate::state::{intersection_ratio, PageLayout, ScrollState};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Per-character speed of the hero greeting.
pub const GREETING_SPEED: Duration = Duration::from_millis(150);
/// Delay before the greeting starts typing.
pub const GREETING_DELAY: Duration = Duration::from_millis(500);
/// Per-character speed of the hero name.
pub const NAME_SPEED: Duration = Duration::from_millis(120);
/// Delay before the name starts typing.
pub const NAME_DELAY: Duration = Duration::from_millis(1_800);

// ===== AnimationSettings =====

/// Tunable timings resolved from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSettings {
    /// Per-character typing speed of the tagline.
    pub tagline_speed: Duration,
    /// Pause with a tagline fully typed.
    pub tagline_pause: Duration,
    /// Count-up duration of each statistic.
    pub counter_duration: Duration,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            tagline_speed: DEFAULT_CYCLE_SPEED,
            tagline_pause: DEFAULT_CYCLE_PAUSE,
            counter_duration: DEFAULT_COUNTER_DURATION,
        }
    }
}

// ===== Phase =====

/// Top-level screen.
#[derive(Debug)]
pub enum Phase {
    /// Splash shown before the page.
    Loading(LoadingSplash),
    /// The scrollable portfolio.
    Page,
}

// ===== Hero =====

/// Typing engines of the hero banner.
#[derive(Debug)]
pub struct Hero {
    greeting: TextReveal,
    name: TextReveal,
    tagline: CyclingReveal,
}

impl Hero {
    fn start(
        portfolio: &Portfolio,
        settings: &AnimationSettings,
        now: Instant,
    ) -> Result<Self, AnimError> {
        let greeting = TextReveal::start(
            RevealParams::new(portfolio.profile.greeting.clone())
                .with_speed(GREETING_SPEED)
                .with_delay(GREETING_DELAY),
            now,
        );
        let name = TextReveal::start(
            RevealParams::new(portfolio.profile.name.clone())
                .with_speed(NAME_SPEED)
                .with_delay(NAME_DELAY),
            now,
        )
        .on_complete(|| info!("Hero headline typed"));
        let tagline = CyclingReveal::start(
            CycleParams::new(portfolio.profile.taglines.iter().cloned())
                .with_speed(settings.tagline_speed)
                .with_pause(settings.tagline_pause),
            now,
        )?;
        Ok(Self {
            greeting,
            name,
            tagline,
        })
    }

    /// Greeting typed before the name.
    pub fn greeting(&self) -> &TextReveal {
        &self.greeting
    }

    /// The name.
    pub fn name(&self) -> &TextReveal {
        &self.name
    }

    /// Cycling tagline under the headline.
    pub fn tagline(&self) -> &CyclingReveal {
        &self.tagline
    }

    fn restart(&mut self, now: Instant) {
        self.greeting.restart(now);
        self.name.restart(now);
        self.tagline.restart(now);
    }

    fn advance(&mut self, now: Instant) -> bool {
        let greeting = self.greeting.advance(now);
        let name = self.name.advance(now);
        let tagline = self.tagline.advance(now);
        greeting || name || tagline
    }

    fn dispose(&mut self) {
        self.greeting.dispose();
        self.name.dispose();
        self.tagline.dispose();
    }
}

// ===== AppState =====

/// Application state. Pure data driven by an explicit clock.
///
/// # State Machine
///
/// - **Phase**: `Loading` → `Page`, when the splash finishes or is skipped.
///   The hero engines start at that instant.
/// - **Counters**: each statistic latches on the first time its anchor rows
///   are at least half visible.
/// - **Disposed**: terminal; `tick` and `apply_action` become no-ops.
#[derive(Debug)]
pub struct AppState {
    portfolio: Portfolio,
    settings: AnimationSettings,
    phase: Phase,
    hero: Hero,
    counters: Vec<NumericCounter>,
    scroll: ScrollState,
    layout: PageLayout,
    disposed: bool,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,
}

impl AppState {
    /// Create the state at `now`.
    ///
    /// With `intro` the loading splash runs first, otherwise the page starts
    /// immediately.
    ///
    /// # Errors
    ///
    /// [`AnimError::EmptyPhrases`] when the profile has no taglines.
    pub fn new(
        portfolio: Portfolio,
        settings: AnimationSettings,
        intro: bool,
        now: Instant,
    ) -> Result<Self, AnimError> {
        let hero = Hero::start(&portfolio, &settings, now)?;
        let counters = portfolio
            .stats
            .iter()
            .map(|stat| {
                NumericCounter::new(
                    CounterParams::new(stat.value)
                        .with_suffix(stat.suffix.clone())
                        .with_duration(settings.counter_duration),
                )
            })
            .collect();

        let mut state = Self {
            portfolio,
            settings,
            phase: Phase::Page,
            hero,
            counters,
            scroll: ScrollState::default(),
            layout: PageLayout::default(),
            disposed: false,
            help_visible: false,
        };

        if intro {
            state.phase = Phase::Loading(LoadingSplash::start(now));
        } else {
            state.start_page(now);
        }
        Ok(state)
    }

    // ===== Accessors =====

    /// Content being shown.
    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    /// Resolved animation timings.
    pub fn settings(&self) -> &AnimationSettings {
        &self.settings
    }

    /// Current phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Whether the splash is still up.
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading(_))
    }

    /// The splash, while loading.
    pub fn splash(&self) -> Option<&LoadingSplash> {
        match &self.phase {
            Phase::Loading(splash) => Some(splash),
            Phase::Page => None,
        }
    }

    /// Hero engines, once the page has started.
    pub fn hero(&self) -> Option<&Hero> {
        (!self.is_loading()).then_some(&self.hero)
    }

    /// One counter per statistic, in content order.
    pub fn counters(&self) -> &[NumericCounter] {
        &self.counters
    }

    /// Scroll position.
    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    /// Last measured page geometry.
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Whether [`dispose`](Self::dispose) was called.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Last section whose top is at or above the top of the viewport.
    ///
    /// Once a scrollable page hits bottom the final section is active, even if
    /// it is too short to reach the top of the viewport.
    pub fn active_section(&self) -> SectionId {
        let at_bottom = self.scroll.max_offset() > 0 && self.scroll.is_at_bottom();
        let section = if at_bottom {
            self.layout.last_section()
        } else {
            self.layout.section_at(self.scroll.offset())
        };
        section.unwrap_or(SectionId::Home)
    }

    // ===== Transitions =====

    /// Advance every engine to `now`.
    ///
    /// Returns `true` when anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.disposed {
            return false;
        }

        if let Phase::Loading(splash) = &mut self.phase {
            let changed = splash.advance(now);
            if !splash.is_finished() {
                return changed;
            }
            splash.dispose();
            self.phase = Phase::Page;
            self.start_page(now);
            return true;
        }

        let mut changed = false;
        changed |= self.hero.advance(now);
        for counter in &mut self.counters {
            changed |= counter.advance(now);
        }
        changed
    }

    /// Record freshly measured geometry and the viewport height.
    pub fn set_layout(&mut self, layout: PageLayout, viewport_height: u16, now: Instant) {
        self.scroll.set_dimensions(layout.height, viewport_height);
        self.layout = layout;
        self.observe_viewport(now);
    }

    /// Feed each counter the visible fraction of its anchor rows.
    ///
    /// Returns `true` when a counter activated.
    pub fn observe_viewport(&mut self, now: Instant) -> bool {
        if self.disposed || self.is_loading() {
            return false;
        }
        let viewport = self.scroll.viewport();
        let mut activated = false;
        for (counter, anchor) in self.counters.iter_mut().zip(&self.layout.counter_anchors) {
            activated |= counter.observe(intersection_ratio(anchor, &viewport), now);
        }
        activated
    }

    /// Apply a user action at `now`.
    ///
    /// [`KeyAction::Quit`] is left to the caller. Returns `true` when the
    /// screen needs a redraw.
    pub fn apply_action(&mut self, action: KeyAction, now: Instant) -> bool {
        if self.disposed {
            return false;
        }

        match action {
            KeyAction::Quit => false,
            KeyAction::Help => {
                self.help_visible = !self.help_visible;
                true
            }
            KeyAction::SkipIntro => self.skip_intro(now),
            _ if self.is_loading() => false,
            KeyAction::ScrollUp => self.scroll_with(now, |s| s.scroll_by(-1)),
            KeyAction::ScrollDown => self.scroll_with(now, |s| s.scroll_by(1)),
            KeyAction::PageUp => self.scroll_with(now, ScrollState::page_up),
            KeyAction::PageDown => self.scroll_with(now, ScrollState::page_down),
            KeyAction::ScrollToTop => self.scroll_with(now, ScrollState::to_top),
            KeyAction::ScrollToBottom => self.scroll_with(now, ScrollState::to_bottom),
            KeyAction::NextSection => match self.active_section().next() {
                Some(next) => self.jump_to(next, now),
                None => false,
            },
            KeyAction::PrevSection => match self.active_section().prev() {
                Some(prev) => self.jump_to(prev, now),
                None => false,
            },
            KeyAction::JumpTo(section) => self.jump_to(section, now),
        }
    }

    /// Tear down every engine. Further ticks are no-ops.
    pub fn dispose(&mut self) {
        if let Phase::Loading(splash) = &mut self.phase {
            splash.dispose();
        }
        self.hero.dispose();
        for counter in &mut self.counters {
            counter.dispose();
        }
        self.disposed = true;
        debug!("App state disposed");
    }

    fn start_page(&mut self, now: Instant) {
        self.hero.restart(now);
        info!(sections = self.layout.sections.len(), "Page started");
        self.observe_viewport(now);
    }

    fn skip_intro(&mut self, now: Instant) -> bool {
        match &mut self.phase {
            Phase::Loading(splash) => {
                splash.skip();
                debug!("Intro skipped");
                self.tick(now)
            }
            Phase::Page if self.help_visible => {
                self.help_visible = false;
                true
            }
            Phase::Page => false,
        }
    }

    fn jump_to(&mut self, section: SectionId, now: Instant) -> bool {
        match self.layout.section_rows(section) {
            Some(rows) => self.scroll_with(now, |s| s.scroll_to(rows.start)),
            None => false,
        }
    }

    fn scroll_with(&mut self, now: Instant, apply: impl FnOnce(&mut ScrollState)) -> bool {
        let before = self.scroll.offset();
        apply(&mut self.scroll);
        let moved = self.scroll.offset() != before;
        let activated = self.observe_viewport(now);
        moved || activated
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
