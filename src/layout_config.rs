use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::measure::StyleEnvironment;

/// How lines are grouped for presentation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaginationMode {
    /// Fixed-height pages; requires a positive viewport height.
    #[default]
    Page,
    /// Continuous scrolling; all lines are returned as a single page.
    Line,
}

/// Geometry and typography options for one layout invocation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Left and right padding.
    pub padding_h: f32,
    /// Top and bottom padding.
    pub padding_v: f32,
    /// Viewport width.
    pub width: f32,
    /// Viewport height.
    pub height: f32,
    /// Font family; resolved from the environment when empty.
    pub font_family: String,
    /// Body font size.
    pub font_size: f32,
    /// Body line height as a multiple of `font_size`.
    pub line_height: f32,
    /// Extra gap above a paragraph's first line.
    pub paragraph_gap: f32,
    /// Title font size.
    pub title_size: f32,
    /// Title line height as a multiple of `title_size`.
    pub title_line_height: f32,
    /// Title font weight, passed through to the measurer.
    pub title_weight: String,
    /// Gap between the title and the body, reserved on pages starting with a title.
    pub title_gap: f32,
    /// Paragraph delimiter characters; runs of any of them split paragraphs.
    pub delimiter: String,
    /// Pagination mode.
    pub mode: PaginationMode,
    /// Skip width search for body lines and trust the max-chars estimate.
    pub fast: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            padding_h: 20.0,
            padding_v: 20.0,
            width: 327.0,
            height: 511.0,
            font_family: String::new(),
            font_size: 20.0,
            line_height: 1.8,
            paragraph_gap: 16.0,
            title_size: 28.0,
            title_line_height: 1.8,
            title_weight: "600".to_string(),
            title_gap: 24.0,
            delimiter: "\r\n".to_string(),
            mode: PaginationMode::Page,
            fast: false,
        }
    }
}

impl LayoutConfig {
    /// Convenience for a viewport size with default typography.
    pub fn for_viewport(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Decode persisted JSON settings. Missing keys take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode as JSON settings.
    pub fn to_json_string(&self) -> Result<String, LayoutError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Usable width for text.
    pub fn content_width(&self) -> f32 {
        self.width - self.padding_h * 2.0
    }

    /// Usable height for text.
    pub fn content_height(&self) -> f32 {
        self.height - self.padding_v * 2.0
    }

    /// Check geometry and font sizes, returning the effective config.
    ///
    /// An empty font family is filled from `env`, which is queried at most
    /// once.
    pub fn validate(&self, env: &dyn StyleEnvironment) -> Result<Self, LayoutError> {
        if !is_positive(self.width) {
            return Err(LayoutError::InvalidGeometry {
                field: "width",
                value: self.width,
            });
        }
        if self.mode == PaginationMode::Page && !is_positive(self.height) {
            return Err(LayoutError::InvalidGeometry {
                field: "height",
                value: self.height,
            });
        }
        if !is_positive(self.font_size) {
            return Err(LayoutError::InvalidFontSize {
                field: "font_size",
                value: self.font_size,
            });
        }
        if !is_positive(self.title_size) {
            return Err(LayoutError::InvalidFontSize {
                field: "title_size",
                value: self.title_size,
            });
        }

        let mut effective = self.clone();
        if effective.font_family.is_empty() {
            if let Some(family) = env.default_font_family() {
                effective.font_family = family;
            }
        }
        Ok(effective)
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
