//! Error taxonomy for the translation pipeline

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TranslateError>;

/// Errors raised while turning C# source into a TypeScript skeleton.
///
/// Unrecognized constructs are deliberately not errors: unknown types,
/// initializers, and documentation shapes pass through unchanged so the
/// tool always emits something usable for manual completion.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TranslateError {
    /// The source did not contain exactly one top-level class declaration.
    #[error("expected exactly one top-level class declaration, found {found}")]
    MalformedInput { found: usize },

    /// The declaration parser could not make sense of the source text.
    #[error("parse error: {message}")]
    Parse { message: String },
}

impl TranslateError {
    pub fn parse(message: impl Into<String>) -> Self {
        TranslateError::Parse {
            message: message.into(),
        }
    }
}
