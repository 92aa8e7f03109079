use std::collections::HashMap;

use crate::layout_config::LayoutConfig;
use crate::layout_ir::Line;

/// Memoized line heights keyed by (paragraph index, line index).
///
/// A height depends on where the line sits in its page: a paragraph's first
/// line pays the paragraph gap unless it opens the page. Entries measured
/// under a page position that is later abandoned must be freed.
#[derive(Clone, Debug, Default)]
pub(crate) struct LineHeightCache {
    heights: HashMap<(usize, usize), f32>,
}

impl LineHeightCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gap-free body line height, used only to seed the max-lines estimate.
    pub fn base_height(cfg: &LayoutConfig) -> f32 {
        cfg.font_size * cfg.line_height
    }

    /// Height of `line` when it is the `position`-th line of a page.
    pub fn height(&mut self, cfg: &LayoutConfig, line: &Line, position: usize) -> f32 {
        let key = (line.paragraph_index, line.line_index);
        if let Some(height) = self.heights.get(&key) {
            return *height;
        }
        let (size, multiple) = if line.is_title {
            (cfg.title_size, cfg.title_line_height)
        } else {
            (cfg.font_size, cfg.line_height)
        };
        let gap = if !line.is_title && line.line_index == 1 && position != 0 {
            cfg.paragraph_gap
        } else {
            0.0
        };
        let height = size * multiple + gap;
        self.heights.insert(key, height);
        height
    }

    /// Summed height of `lines` laid out from the top of a page.
    pub fn page_height(&mut self, cfg: &LayoutConfig, lines: &[Line]) -> f32 {
        lines
            .iter()
            .enumerate()
            .map(|(position, line)| self.height(cfg, line, position))
            .sum()
    }

    /// Forget the memoized height of `line`.
    pub fn free(&mut self, line: &Line) {
        self.heights.remove(&(line.paragraph_index, line.line_index));
    }
}
