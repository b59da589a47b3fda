//! slider - plain-text slide decks to PDF
//!
//! A library for parsing a one-slide-per-line markup format and laying the
//! slides out as full-page PDF slides.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod parser;
pub mod render;
pub mod types;

pub use config::Config;
pub use error::{Result, SliderError};
pub use parser::{parse_deck, parse_deck_with, SlideParser, TrailingLine};
pub use render::{
    render_deck, render_slide, DocumentInfo, DocumentRenderer, PageId, PdfRenderer, Rect,
    TextBlock,
};
pub use types::{
    Alignment, AspectRatio, Colour, ColourScheme, Deck, FontFamily, FontSize, PageConfig, Slide,
    SlideText, Theme,
};
