//! Rendering module for slider.
//!
//! Slides are laid out by [`render_slide`] against any [`DocumentRenderer`].
//! [`PdfRenderer`] is the production implementation.

mod layout;
mod pdf;
mod wrap;

use std::path::Path;

use crate::error::Result;
use crate::types::{Alignment, Colour, FontFamily};

pub use layout::{render_deck, render_slide, text_origin};
pub use pdf::{DocumentInfo, PdfRenderer};
pub use wrap::{wrap_lines, Metrics};

/// Handle to a page allocated by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageId(pub usize);

/// An axis-aligned rectangle in page units (origin bottom-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }
}

/// A block of text to wrap within `wrap_width`, first baseline at `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBlock<'a> {
    pub text: &'a str,
    pub font_size: u32,
    pub x: i32,
    pub y: i32,
    pub colour: Colour,
    pub wrap_width: u32,
}

/// Document backend the layout engine draws into.
///
/// Text blocks wrap downward: each following line sits `font_size` units
/// below the previous one.
pub trait DocumentRenderer {
    /// Append a new page.
    fn create_page(&mut self, width: u32, height: u32) -> Result<PageId>;

    /// Select the font for subsequent text operations.
    fn set_font(&mut self, family: FontFamily);

    fn fill_rect(&mut self, page: PageId, rect: Rect, border_radius: u32, colour: Colour)
        -> Result<()>;

    /// Height the block would occupy once wrapped, without drawing it.
    fn measure_wrapped_text(&self, block: &TextBlock<'_>) -> Result<u32>;

    fn draw_wrapped_text(
        &mut self,
        page: PageId,
        block: &TextBlock<'_>,
        alignment: Alignment,
    ) -> Result<()>;

    /// Serialize the document to `path`.
    fn save(&mut self, path: &Path) -> Result<()>;
}
