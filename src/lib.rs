//! Line fitting and pagination for reflowable readers.
//!
//! `reader-layout` turns raw prose (mixed CJK/Latin text) into fixed-size
//! pages of fitted lines. Width decisions are delegated to an injected
//! [`TextMeasurer`], so the same engine drives a canvas, a terminal, or an
//! e-ink framebuffer.
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use reader_layout::{CellWidthMeasurer, LayoutConfig, LayoutEngine};
//!
//! # fn example() -> Result<(), reader_layout::LayoutError> {
//! let mut engine = LayoutEngine::new(Arc::new(CellWidthMeasurer::default()));
//! let cfg = LayoutConfig::default();
//! let pages = engine.layout("第一段。\r\n第二段。", Some("序章"), &cfg)?;
//! assert!(pages[0].lines[0].is_title);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![cfg_attr(
    not(test),
    deny(
        clippy::disallowed_methods,
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::panic_in_result_fn,
        clippy::todo,
        clippy::unimplemented
    )
)]

pub mod error;
mod layout_config;
mod layout_engine;
mod layout_ir;
mod line_builder;
mod line_fit;
mod line_height;
mod measure;
mod page_builder;
pub mod paragraph;
pub mod typography;

pub use error::LayoutError;
pub use layout_config::{LayoutConfig, PaginationMode};
pub use layout_engine::LayoutEngine;
pub use layout_ir::{Line, Page};
pub use line_fit::BASE_CHAR;
pub use measure::{
    CellWidthMeasurer, FixedStyleEnvironment, FontSpec, NoStyleEnvironment, StyleEnvironment,
    TextMeasurer,
};
pub use paragraph::{split_paragraphs, Paragraph};
