//! Parser for slide markup.
//!
//! # Format
//!
//! One slide per line. A line may start with any combination of format
//! flags, optionally followed by a single separating space:
//!
//! - `!` monospace
//! - `<` left align
//! - `-` small font
//!
//! A `#` before any text makes the whole line a comment. Inside the text,
//! `\n` and `\t` insert a line break or tab, and a backslash before any other
//! character inserts that character as-is. Lines longer than
//! [`MAX_TEXT_LEN`](crate::types::MAX_TEXT_LEN) bytes continue on a new
//! slide.
//!
//! # Usage
//!
//! ```ignore
//! use slider::parser::parse_deck;
//!
//! let deck = parse_deck("# intro\n!< Hello\n- world\n");
//! assert_eq!(deck.len(), 2);
//! ```

mod slide;

pub use slide::{parse_deck, parse_deck_with, SlideParser, TrailingLine};
