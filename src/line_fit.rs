use crate::measure::{FontSpec, TextMeasurer};

/// Full-width reference character used for estimates and indents.
pub const BASE_CHAR: char = '阅';

/// Tolerance for width and height equality checks.
pub(crate) const FIT_EPSILON: f32 = 0.01;

/// Upper bound on the estimate, as a multiple of the probe seed.
const PROBE_GROWTH_LIMIT: usize = 4;

pub(crate) fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= FIT_EPSILON
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Widen,
    Narrow,
}

/// Longest-prefix search against a target width.
///
/// Candidates are described by a character count; `render` turns a count
/// into the string to measure. The search starts at a seed count and moves
/// one character at a time, so it needs only a handful of measurements when
/// the seed is close.
pub(crate) struct WidthSearch<'a> {
    pub measurer: &'a dyn TextMeasurer,
    pub font: FontSpec<'a>,
    pub target: f32,
    /// Smallest count the search may return.
    pub min_count: usize,
    /// Largest count available, `None` when candidates can grow without bound.
    /// The measurer must then eventually exceed the target.
    pub max_count: Option<usize>,
}

impl WidthSearch<'_> {
    /// Count of the longest candidate whose width does not exceed the target.
    ///
    /// Falls back to `min_count` when even that candidate overflows.
    pub fn longest_fit(&self, seed: usize, mut render: impl FnMut(usize) -> String) -> usize {
        let mut count = seed.max(self.min_count);
        if let Some(max) = self.max_count {
            count = count.min(max);
        }
        let width = self.measure(&render(count));
        if approx_eq(width, self.target) {
            return count;
        }
        let direction = if width < self.target {
            Direction::Widen
        } else {
            Direction::Narrow
        };

        loop {
            match direction {
                Direction::Widen => {
                    if self.max_count.is_some_and(|max| count >= max) {
                        return count;
                    }
                    let grown = self.measure(&render(count + 1));
                    if approx_eq(grown, self.target) {
                        return count + 1;
                    }
                    if grown > self.target {
                        return count;
                    }
                    count += 1;
                }
                Direction::Narrow => {
                    if count <= self.min_count {
                        return count;
                    }
                    count -= 1;
                    let narrowed = self.measure(&render(count));
                    if narrowed <= self.target + FIT_EPSILON {
                        return count;
                    }
                }
            }
        }
    }

    fn measure(&self, text: &str) -> f32 {
        self.measurer.measure_text_px(text, &self.font)
    }
}

/// Estimate how many reference characters fit the content width.
///
/// The probe starts at `ceil(content_width / font_size)` characters and is
/// refined against the measurer. Always at least 1, and never more than
/// `PROBE_GROWTH_LIMIT` times the seed, so a measurer that never reaches the
/// content width still terminates.
pub(crate) fn estimate_max_chars(
    measurer: &dyn TextMeasurer,
    font: FontSpec<'_>,
    content_width: f32,
) -> usize {
    let seed = if content_width > 0.0 {
        (content_width / font.size_px).ceil() as usize
    } else {
        1
    };
    let search = WidthSearch {
        measurer,
        font,
        target: content_width,
        min_count: 1,
        max_count: Some(seed.saturating_mul(PROBE_GROWTH_LIMIT).max(1)),
    };
    search.longest_fit(seed, |count| {
        core::iter::repeat(BASE_CHAR).take(count).collect()
    })
}
