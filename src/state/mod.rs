//! Page state machine (pure).
//!
//! All state transitions take the current instant as an argument and are
//! testable without a terminal.

pub mod app_state;
pub mod layout;
pub mod scroll;

// Re-export for convenience
pub use app_state::{AnimationSettings, AppState, Hero, Phase};
pub use layout::{PageLayout, SectionSpan};
pub use scroll::{background_parallax, intersection_ratio, section_parallax, ScrollState};
