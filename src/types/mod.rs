//! Core domain types for slider.
//!
//! - `Slide` / `Deck` - parsed slide records
//! - `Colour` - RGB colour values
//! - `PageConfig` - page geometry and colour mode

mod colour;
mod page;
mod slide;

pub use colour::Colour;
pub use page::{AspectRatio, ColourScheme, PageConfig, Theme, DEFAULT_PAGE_HEIGHT};
pub use slide::{Alignment, Deck, FontFamily, FontSize, Slide, SlideText, MAX_TEXT_LEN};
