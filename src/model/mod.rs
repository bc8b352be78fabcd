//! Domain model types (pure).
//!
//! Portfolio content, page sections, user intents and the error taxonomy.

pub mod content;
pub mod error;
pub mod key_action;
pub mod section;

// Re-export for convenience
pub use content::{Channel, EducationEntry, Portfolio, Profile, Project, SkillCategory, Stat};
pub use error::{AnimError, AppError, ContentError};
pub use key_action::KeyAction;
pub use section::SectionId;
