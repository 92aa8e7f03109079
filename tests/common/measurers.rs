use std::sync::atomic::{AtomicUsize, Ordering};

use reader_layout::{CellWidthMeasurer, FontSpec, TextMeasurer};

/// Cell-width measurer that counts calls.
#[derive(Debug, Default)]
pub struct CountingMeasurer {
    inner: CellWidthMeasurer,
    calls: AtomicUsize,
}

impl CountingMeasurer {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl TextMeasurer for CountingMeasurer {
    fn measure_text_px(&self, text: &str, font: &FontSpec<'_>) -> f32 {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.measure_text_px(text, font)
    }
}

/// Wide glyphs 1em, digits 0.3em, everything else 0.5em.
#[derive(Clone, Copy, Debug, Default)]
pub struct NarrowDigitMeasurer;

impl TextMeasurer for NarrowDigitMeasurer {
    fn measure_text_px(&self, text: &str, font: &FontSpec<'_>) -> f32 {
        let cells = CellWidthMeasurer::default();
        text.chars()
            .map(|ch| {
                if ch.is_ascii_digit() {
                    0.3
                } else {
                    cells.char_em(ch)
                }
            })
            .sum::<f32>()
            * font.size_px
    }
}
