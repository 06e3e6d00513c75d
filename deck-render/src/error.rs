//! Error types for deck conversion

use std::fmt;

/// Errors that can surface from whole-document rendering.
///
/// Region-level failures (an underivable video id, an unhighlightable code
/// block) never reach this type: they degrade to emitting the original text.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// The document produced zero slides after metadata removal
    NoContent,
    /// Error while assembling the output document
    Render(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::NoContent => write!(f, "no slides found in document"),
            ConvertError::Render(msg) => write!(f, "render error: {msg}"),
        }
    }
}

impl std::error::Error for ConvertError {}
