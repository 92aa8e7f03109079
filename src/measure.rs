/// Font attributes handed to a [`TextMeasurer`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSpec<'a> {
    /// Font size in viewport units.
    pub size_px: f32,
    /// CSS-like font family list.
    pub family: &'a str,
    /// Font weight, empty for regular body text.
    pub weight: &'a str,
}

/// Text measurement hook used for line fitting.
///
/// Implementations must be deterministic for fixed inputs; the engine caches
/// results derived from them across page-fit backtracking.
pub trait TextMeasurer: Send + Sync {
    /// Measure rendered text width for the provided font.
    fn measure_text_px(&self, text: &str, font: &FontSpec<'_>) -> f32;
}

/// Resolves style defaults owned by the embedding environment.
pub trait StyleEnvironment: Send + Sync {
    /// Font family to use when the config leaves it empty.
    fn default_font_family(&self) -> Option<String>;
}

/// Environment without any style defaults.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoStyleEnvironment;

impl StyleEnvironment for NoStyleEnvironment {
    fn default_font_family(&self) -> Option<String> {
        None
    }
}

/// Environment that always resolves the same font family.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FixedStyleEnvironment {
    /// Family returned by [`StyleEnvironment::default_font_family`].
    pub family: String,
}

impl FixedStyleEnvironment {
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
        }
    }
}

impl StyleEnvironment for FixedStyleEnvironment {
    fn default_font_family(&self) -> Option<String> {
        if self.family.is_empty() {
            None
        } else {
            Some(self.family.clone())
        }
    }
}

/// Cell-based measurer: wide (CJK) glyphs take one em, narrow glyphs a
/// configurable fraction of it.
///
/// Useful for terminals, monospace CJK fonts and tests. Font family and
/// weight are ignored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellWidthMeasurer {
    /// Width of a narrow glyph as a fraction of the font size.
    pub narrow_ratio: f32,
    /// Treat East-Asian ambiguous punctuation (quotes, dashes, ellipsis) as wide.
    pub ambiguous_wide: bool,
}

impl Default for CellWidthMeasurer {
    fn default() -> Self {
        Self {
            narrow_ratio: 0.5,
            ambiguous_wide: true,
        }
    }
}

impl CellWidthMeasurer {
    /// Width of a single character in em units.
    pub fn char_em(&self, ch: char) -> f32 {
        if ch.is_control() {
            0.0
        } else if is_wide(ch) || (self.ambiguous_wide && is_ambiguous(ch)) {
            1.0
        } else {
            self.narrow_ratio
        }
    }
}

impl TextMeasurer for CellWidthMeasurer {
    fn measure_text_px(&self, text: &str, font: &FontSpec<'_>) -> f32 {
        let ems: f32 = text.chars().map(|ch| self.char_em(ch)).sum();
        ems * font.size_px
    }
}

fn is_wide(ch: char) -> bool {
    matches!(
        ch as u32,
        0x1100..=0x115F
            | 0x2E80..=0x303E
            | 0x3041..=0x33FF
            | 0x3400..=0x4DBF
            | 0x4E00..=0x9FFF
            | 0xA000..=0xA4CF
            | 0xAC00..=0xD7A3
            | 0xF900..=0xFAFF
            | 0xFE30..=0xFE4F
            | 0xFF00..=0xFF60
            | 0xFFE0..=0xFFE6
            | 0x1F300..=0x1F64F
            | 0x20000..=0x2FFFD
            | 0x30000..=0x3FFFD
    )
}

fn is_ambiguous(ch: char) -> bool {
    matches!(ch, '\u{00B7}' | '\u{2014}' | '\u{2018}'..='\u{201F}' | '\u{2026}')
}
