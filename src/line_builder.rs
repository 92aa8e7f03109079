use crate::layout_config::LayoutConfig;
use crate::layout_ir::Line;
use crate::line_fit::{WidthSearch, BASE_CHAR};
use crate::measure::{FontSpec, TextMeasurer};
use crate::paragraph::Paragraph;
use crate::typography::{
    is_latin, is_line_start_prohibited, is_numeral, is_trailing_punctuation, trailing_run_len,
};

/// Reference characters reserved for a body paragraph's first-line indent.
const INDENT_CHARS: usize = 2;
/// A trailing punctuation run this long is never pulled to the next line.
const MAX_PULLED_PUNCTUATION: usize = 3;

/// Splits paragraphs into width-fitted lines.
pub(crate) struct LineBuilder<'a> {
    cfg: &'a LayoutConfig,
    measurer: &'a dyn TextMeasurer,
    max_chars: usize,
}

impl<'a> LineBuilder<'a> {
    pub fn new(cfg: &'a LayoutConfig, measurer: &'a dyn TextMeasurer, max_chars: usize) -> Self {
        Self {
            cfg,
            measurer,
            max_chars,
        }
    }

    /// Fit one paragraph into lines. Empty paragraphs yield no lines.
    pub fn build(&self, paragraph: &Paragraph, paragraph_index: usize, is_title: bool) -> Vec<Line> {
        let chars: Vec<char> = paragraph.text.chars().collect();
        let len = chars.len();
        let mut lines = Vec::with_capacity(len / self.max_chars.max(1) + 1);
        let mut start = 0;
        let mut line_index = 0;

        while start < len {
            line_index += 1;
            let paragraph_first = !is_title && line_index == 1;
            let slice_len = if paragraph_first {
                self.max_chars.saturating_sub(INDENT_CHARS)
            } else {
                self.max_chars
            };
            let remaining = len - start;

            let mut end = if !is_title && remaining <= slice_len {
                len
            } else if self.cfg.fast && !is_title {
                start + slice_len.clamp(1, remaining)
            } else {
                start + self.fit(&chars[start..], slice_len, paragraph_first, is_title)
            };

            let mut center = true;
            if end < len {
                end -= leading_punctuation_shift(&chars[start..end], chars[end]);
            }
            if end < len {
                let shift = word_run_shift(&chars[start..end], chars[end]);
                if shift > 0 {
                    end -= shift;
                    center = false;
                }
            }
            if is_title || end == len {
                center = false;
            }

            lines.push(Line {
                is_title,
                center,
                paragraph_first,
                paragraph_index,
                line_index,
                text_index: paragraph.raw_offset + start,
                text: chars[start..end].iter().collect(),
                title_last: is_title && end == len,
            });
            start = end;
        }

        lines
    }

    /// Number of leading characters of `rest` that fit the content width.
    fn fit(&self, rest: &[char], seed: usize, indent: bool, is_title: bool) -> usize {
        let font = if is_title {
            FontSpec {
                size_px: self.cfg.title_size,
                family: &self.cfg.font_family,
                weight: &self.cfg.title_weight,
            }
        } else {
            FontSpec {
                size_px: self.cfg.font_size,
                family: &self.cfg.font_family,
                weight: "",
            }
        };
        let search = WidthSearch {
            measurer: self.measurer,
            font,
            target: self.cfg.content_width(),
            min_count: 1,
            max_count: Some(rest.len()),
        };
        search.longest_fit(seed, |count| {
            let mut candidate = String::with_capacity((count + INDENT_CHARS) * 3);
            if indent {
                candidate.extend(core::iter::repeat(BASE_CHAR).take(INDENT_CHARS));
            }
            candidate.extend(&rest[..count]);
            candidate
        })
    }
}

/// Characters to move from the end of `line` so that the next line does not
/// open with `next` when it is prohibited punctuation.
///
/// The trailing punctuation run travels with the character before it; a line
/// without such a run gives up its last character.
fn leading_punctuation_shift(line: &[char], next: char) -> usize {
    if !is_line_start_prohibited(next) {
        return 0;
    }
    let run = trailing_run_len(line, is_trailing_punctuation);
    let shift = if run == 0 {
        1
    } else if run >= MAX_PULLED_PUNCTUATION || run + 2 >= line.len() {
        return 0;
    } else {
        run + 1
    };
    if shift < line.len() {
        shift
    } else {
        0
    }
}

/// Characters to move so a digit or Latin run is not split at the boundary.
fn word_run_shift(line: &[char], next: char) -> usize {
    let run = if is_numeral(next) {
        trailing_run_len(line, is_numeral)
    } else if is_latin(next) {
        trailing_run_len(line, is_latin)
    } else {
        0
    };
    if run < line.len() {
        run
    } else {
        0
    }
}
