use std::sync::Arc;

use crate::error::LayoutError;
use crate::layout_config::{LayoutConfig, PaginationMode};
use crate::layout_ir::{Line, Page};
use crate::line_builder::LineBuilder;
use crate::line_fit::estimate_max_chars;
use crate::line_height::LineHeightCache;
use crate::measure::{FontSpec, NoStyleEnvironment, StyleEnvironment, TextMeasurer};
use crate::page_builder::PageBuilder;
use crate::paragraph::split_paragraphs;

/// Inputs the geometry-derived estimates depend on.
#[derive(Clone, Copy, Debug, PartialEq)]
struct GeometryKey {
    content_width: f32,
    content_height: f32,
    font_size: f32,
}

impl GeometryKey {
    fn of(cfg: &LayoutConfig) -> Self {
        Self {
            content_width: cfg.content_width(),
            content_height: cfg.content_height(),
            font_size: cfg.font_size,
        }
    }
}

/// Estimates reused across invocations while the geometry is unchanged.
#[derive(Clone, Copy, Debug)]
struct GeometryCache {
    key: GeometryKey,
    max_chars: Option<usize>,
    max_lines: Option<usize>,
}

impl GeometryCache {
    fn new(key: GeometryKey) -> Self {
        Self {
            key,
            max_chars: None,
            max_lines: None,
        }
    }
}

/// Paginates prose into fitted lines and pages.
///
/// The engine keeps per-geometry estimates between calls to
/// [`layout`](Self::layout); everything else is rebuilt per invocation.
pub struct LayoutEngine {
    measurer: Arc<dyn TextMeasurer>,
    environment: Arc<dyn StyleEnvironment>,
    geometry: Option<GeometryCache>,
}

impl core::fmt::Debug for LayoutEngine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LayoutEngine")
            .field("geometry", &self.geometry)
            .finish()
    }
}

impl LayoutEngine {
    /// Create an engine measuring text with `measurer`.
    pub fn new(measurer: Arc<dyn TextMeasurer>) -> Self {
        Self {
            measurer,
            environment: Arc::new(NoStyleEnvironment),
            geometry: None,
        }
    }

    /// Install the environment used to resolve a missing font family.
    pub fn with_style_environment(mut self, environment: Arc<dyn StyleEnvironment>) -> Self {
        self.environment = environment;
        self
    }

    /// Lay out `content` into pages.
    ///
    /// With a `title`, paragraph 0 is the title and its lines are flagged.
    /// In [`PaginationMode::Line`] all lines are returned as one page.
    pub fn layout(
        &mut self,
        content: &str,
        title: Option<&str>,
        cfg: &LayoutConfig,
    ) -> Result<Vec<Page>, LayoutError> {
        let cfg = cfg.validate(self.environment.as_ref())?;
        if content.is_empty() {
            return Err(LayoutError::EmptyContent);
        }
        let lines = self.build_lines(content, title, &cfg);
        if lines.is_empty() {
            return Ok(Vec::new());
        }
        if cfg.mode == PaginationMode::Line {
            return Ok(vec![Page::new(lines)]);
        }

        let mut heights = LineHeightCache::new();
        let mut pages = PageBuilder::new(&cfg, &mut heights);
        let geometry = sync_geometry(&mut self.geometry, &cfg);
        let max_lines = *geometry.max_lines.get_or_insert_with(|| {
            let estimate = pages.estimate_max_lines(&lines);
            log::debug!("estimated {} lines per page", estimate);
            estimate
        });
        Ok(pages.build(lines, max_lines))
    }

    /// Lay out `content` into a flat line sequence without paging.
    pub fn layout_lines(
        &mut self,
        content: &str,
        title: Option<&str>,
        cfg: &LayoutConfig,
    ) -> Result<Vec<Line>, LayoutError> {
        let cfg = cfg.validate(self.environment.as_ref())?;
        if content.is_empty() {
            return Err(LayoutError::EmptyContent);
        }
        Ok(self.build_lines(content, title, &cfg))
    }

    /// Drop the cached per-geometry estimates.
    pub fn reset_geometry(&mut self) {
        self.geometry = None;
    }

    /// Cached characters-per-line estimate for the last geometry, if computed.
    pub fn max_chars_per_line(&self) -> Option<usize> {
        self.geometry.and_then(|g| g.max_chars)
    }

    /// Cached lines-per-page estimate for the last geometry, if computed.
    pub fn max_lines_per_page(&self) -> Option<usize> {
        self.geometry.and_then(|g| g.max_lines)
    }

    fn build_lines(&mut self, content: &str, title: Option<&str>, cfg: &LayoutConfig) -> Vec<Line> {
        let measurer = self.measurer.as_ref();
        let geometry = sync_geometry(&mut self.geometry, cfg);
        let max_chars = *geometry.max_chars.get_or_insert_with(|| {
            let font = FontSpec {
                size_px: cfg.font_size,
                family: &cfg.font_family,
                weight: "",
            };
            let estimate = estimate_max_chars(measurer, font, cfg.content_width());
            log::debug!(
                "estimated {} chars per line for content width {}",
                estimate,
                cfg.content_width()
            );
            estimate
        });

        let has_title = title.is_some_and(|t| !t.is_empty());
        let paragraphs = split_paragraphs(content, title, &cfg.delimiter);
        let builder = LineBuilder::new(cfg, measurer, max_chars);
        let mut lines = Vec::with_capacity(paragraphs.len() * 2);
        for (idx, paragraph) in paragraphs.iter().enumerate() {
            lines.extend(builder.build(paragraph, idx, has_title && idx == 0));
        }
        lines
    }
}

fn sync_geometry<'a>(
    slot: &'a mut Option<GeometryCache>,
    cfg: &LayoutConfig,
) -> &'a mut GeometryCache {
    let key = GeometryKey::of(cfg);
    match slot {
        Some(cache) if cache.key == key => {}
        _ => {
            log::debug!(
                "geometry changed to {}x{} @ {}px; resetting layout estimates",
                key.content_width,
                key.content_height,
                key.font_size
            );
            *slot = Some(GeometryCache::new(key));
        }
    }
    slot.get_or_insert_with(|| GeometryCache::new(key))
}
