//! Page sections in navigation order.

/// One section of the portfolio page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    /// Hero banner with the typing headline.
    Home,
    /// Bio, hobbies and animated statistics.
    About,
    /// Skill categories and tech stack.
    Skills,
    /// Education timeline.
    Education,
    /// Project showcase.
    Projects,
    /// Contact channels.
    Contact,
}

impl SectionId {
    /// Every section, top to bottom.
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Education,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Label shown in the navigation bar.
    pub fn title(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About Me",
            SectionId::Skills => "Skills",
            SectionId::Education => "Education",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }

    /// Position in [`SectionId::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Section below this one, if any.
    pub fn next(self) -> Option<SectionId> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// Section above this one, if any.
    pub fn prev(self) -> Option<SectionId> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }
}
