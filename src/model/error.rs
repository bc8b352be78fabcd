//! Error types for folio.
//!
//! Errors are layered with `thiserror` and compose through `From`, so `?`
//! carries them from the core out to `main`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - top-level wrapper
//!   - [`AnimError`] - an animation engine was constructed with unusable input
//!   - [`ContentError`] - the portfolio content file could not be read or parsed
//!   - `std::io::Error` - terminal failures
//!
//! Animation input is local and trusted, so [`AnimError`] only guards
//! preconditions that would otherwise leave an engine with nothing to do.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// An animation engine rejected its input.
    #[error("Animation setup failed: {0}")]
    Anim(#[from] AnimError),

    /// Portfolio content could not be loaded.
    #[error("Failed to load content: {0}")]
    Content(#[from] ContentError),

    /// Terminal or other I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Precondition violations of the animation engines.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnimError {
    /// A cycling reveal needs at least one phrase to cycle through.
    #[error("Cycling text needs at least one phrase")]
    EmptyPhrases,
}

/// Failures loading a portfolio content file.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// The file could not be read.
    #[error("Failed to read content file at {path}: {reason}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying reason.
        reason: String,
    },

    /// The file is not valid content TOML.
    #[error("Invalid content TOML in {path}: {reason}")]
    Parse {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// The profile has no tagline phrases for the hero animation.
    #[error("Profile must list at least one tagline")]
    NoTaglines,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anim_error_converts_into_app_error() {
        let err: AppError = AnimError::EmptyPhrases.into();
        assert!(matches!(err, AppError::Anim(AnimError::EmptyPhrases)));
    }

    #[test]
    fn content_error_message_names_the_path() {
        let err = ContentError::Read {
            path: PathBuf::from("/tmp/portfolio.toml"),
            reason: "permission denied".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("/tmp/portfolio.toml"), "got: {message}");
        assert!(message.contains("permission denied"), "got: {message}");
    }

    #[test]
    fn io_error_converts_into_app_error() {
        let err: AppError = std::io::Error::other("boom").into();
        assert!(matches!(err, AppError::Io(_)));
    }
}
