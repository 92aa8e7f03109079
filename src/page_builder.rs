use crate::layout_config::LayoutConfig;
use crate::layout_ir::{Line, Page};
use crate::line_fit::approx_eq;
use crate::line_height::LineHeightCache;

/// Assembles a flat line sequence into height-bounded pages.
pub(crate) struct PageBuilder<'a> {
    cfg: &'a LayoutConfig,
    heights: &'a mut LineHeightCache,
}

impl<'a> PageBuilder<'a> {
    pub fn new(cfg: &'a LayoutConfig, heights: &'a mut LineHeightCache) -> Self {
        Self { cfg, heights }
    }

    /// Seed for the per-page line count: how many gap-free body lines fit.
    pub fn estimate_max_lines(&self, lines: &[Line]) -> usize {
        if lines.len() < 2 {
            return 1;
        }
        let base = LineHeightCache::base_height(self.cfg);
        let estimate = (self.cfg.content_height() / base).floor();
        if estimate.is_finite() && estimate >= 1.0 {
            estimate as usize
        } else {
            1
        }
    }

    /// Split `lines` into pages, starting each search from `max_lines`.
    pub fn build(&mut self, lines: Vec<Line>, max_lines: usize) -> Vec<Page> {
        let mut counts = Vec::with_capacity(lines.len() / max_lines.max(1) + 1);
        let mut cursor = 0;
        while cursor < lines.len() {
            let count = self.fit_page(&lines[cursor..], max_lines);
            log::trace!(
                "page {} accepted {} lines starting at paragraph {}",
                counts.len() + 1,
                count,
                lines[cursor].paragraph_index
            );
            counts.push(count);
            cursor += count;
        }

        let mut lines = lines.into_iter();
        counts
            .into_iter()
            .map(|count| Page::new(lines.by_ref().take(count).collect()))
            .collect()
    }

    /// Number of leading `lines` that make up the next page.
    ///
    /// Grows or shrinks a tentative page one line at a time until its height
    /// meets the available height. A single overflowing line is accepted
    /// on its own.
    fn fit_page(&mut self, lines: &[Line], max_lines: usize) -> usize {
        let mut count = max_lines.clamp(1, lines.len());
        let mut available = self.cfg.content_height();
        if lines[0].is_title {
            available -= self.cfg.title_gap;
        }

        let mut height = self.heights.page_height(self.cfg, &lines[..count]);
        if approx_eq(height, available) {
            return count;
        }

        if height < available {
            loop {
                if count >= lines.len() {
                    return count;
                }
                let grown = self.heights.page_height(self.cfg, &lines[..count + 1]);
                if approx_eq(grown, available) {
                    return count + 1;
                }
                if grown > available {
                    self.heights.free(&lines[count]);
                    return count;
                }
                count += 1;
            }
        }

        loop {
            if count <= 1 {
                return count;
            }
            count -= 1;
            self.heights.free(&lines[count]);
            height = self.heights.page_height(self.cfg, &lines[..count]);
            if height <= available || approx_eq(height, available) {
                return count;
            }
        }
    }
}
