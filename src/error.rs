//! Error types for layout invocations.

use core::fmt;

/// Reasons a layout invocation is rejected.
///
/// Every variant is raised before any text measurement happens; there is no
/// partial layout result.
#[derive(Clone, Debug, PartialEq)]
pub enum LayoutError {
    /// Viewport width is non-positive, or height is non-positive in page mode.
    InvalidGeometry {
        /// Offending config field.
        field: &'static str,
        /// Rejected value.
        value: f32,
    },
    /// Body or title font size is non-positive.
    InvalidFontSize {
        /// Offending config field.
        field: &'static str,
        /// Rejected value.
        value: f32,
    },
    /// No content was supplied.
    EmptyContent,
    /// Persisted settings could not be decoded into a config.
    InvalidSettings(String),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGeometry { field, value } => write!(
                f,
                "invalid container {}: {} (must be greater than 0)",
                field, value
            ),
            Self::InvalidFontSize { field, value } => {
                write!(f, "invalid {}: {} (must be greater than 0)", field, value)
            }
            Self::EmptyContent => write!(f, "no content provided"),
            Self::InvalidSettings(reason) => write!(f, "invalid layout settings: {}", reason),
        }
    }
}

impl std::error::Error for LayoutError {}

impl From<serde_json::Error> for LayoutError {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidSettings(value.to_string())
    }
}
