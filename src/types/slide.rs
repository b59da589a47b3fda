//! Slide records produced by the parser.
//!
//! A slide is one line of markup: optional format flags followed by text.
//!
//! # Example
//!
//! ```text
//! # comments are skipped
//! Plain centred text
//! !< left aligned monospace
//! - smaller\ttext with a tab
//! ```

use std::fmt;

/// Maximum number of content bytes a slide's text can hold.
pub const MAX_TEXT_LEN: usize = 255;

/// Horizontal alignment of a slide's text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// One font unit of left margin, lines flush left.
    Left,
    /// Each line centred within the page width.
    #[default]
    Center,
}

/// Text size of a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSize {
    #[default]
    Normal,
    Small,
}

impl FontSize {
    /// Size in page units.
    pub const fn size(self) -> u32 {
        match self {
            FontSize::Normal => 72,
            FontSize::Small => 54,
        }
    }
}

/// Font family used to draw a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFamily {
    ProportionalBold,
    MonospaceBold,
}

impl FontFamily {
    /// Name of the matching PDF base-14 font.
    pub const fn base_font(self) -> &'static str {
        match self {
            FontFamily::ProportionalBold => "Helvetica-Bold",
            FontFamily::MonospaceBold => "Courier-Bold",
        }
    }
}

/// Slide text, capped at [`MAX_TEXT_LEN`] bytes.
///
/// Characters that would push the text past the cap are rejected whole,
/// so the contents are always valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlideText(String);

impl SlideText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a character if it fits. Returns `false` when rejected.
    #[must_use]
    pub fn try_push(&mut self, c: char) -> bool {
        if !self.has_room_for(c) {
            return false;
        }
        self.0.push(c);
        true
    }

    /// Whether `c` can be appended without exceeding the cap.
    pub fn has_room_for(&self, c: char) -> bool {
        self.0.len() + c.len_utf8() <= MAX_TEXT_LEN
    }

    /// Whether no further byte fits.
    pub fn is_full(&self) -> bool {
        self.0.len() >= MAX_TEXT_LEN
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SlideText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single parsed slide.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Slide {
    pub monospace: bool,
    pub alignment: Alignment,
    pub font_size: FontSize,
    pub text: SlideText,
}

impl Slide {
    /// Font family selected by the monospace flag.
    pub fn font_family(&self) -> FontFamily {
        if self.monospace {
            FontFamily::MonospaceBold
        } else {
            FontFamily::ProportionalBold
        }
    }

    /// Whether all format fields are still at their defaults.
    pub fn has_default_format(&self) -> bool {
        !self.monospace && self.alignment == Alignment::Center && self.font_size == FontSize::Normal
    }

    /// Serialize back to a markup line (including the trailing newline).
    ///
    /// Parsing the result yields an identical slide.
    pub fn to_markup(&self) -> String {
        let mut out = String::with_capacity(self.text.len() + 8);

        if self.monospace {
            out.push('!');
        }
        if self.alignment == Alignment::Left {
            out.push('<');
        }
        if self.font_size == FontSize::Small {
            out.push('-');
        }

        let needs_separator = !out.is_empty()
            || self
                .text
                .as_str()
                .starts_with(|c: char| matches!(c, '!' | '<' | '-' | '#' | ' '));
        if needs_separator {
            out.push(' ');
        }

        for c in self.text.as_str().chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\t' => out.push_str("\\t"),
                '\r' => out.push_str("\\\r"),
                _ => out.push(c),
            }
        }
        out.push('\n');
        out
    }
}

/// An ordered sequence of slides from one input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck(Vec<Slide>);

impl Deck {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slide> {
        self.0.iter()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.0
    }
}

impl FromIterator<Slide> for Deck {
    fn from_iter<T: IntoIterator<Item = Slide>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Deck {
    type Item = Slide;
    type IntoIter = std::vec::IntoIter<Slide>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Slide;
    type IntoIter = std::slice::Iter<'a, Slide>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_defaults() {
        let slide = Slide::default();
        assert!(!slide.monospace);
        assert_eq!(slide.alignment, Alignment::Center);
        assert_eq!(slide.font_size, FontSize::Normal);
        assert!(slide.text.is_empty());
        assert!(slide.has_default_format());
    }

    #[test]
    fn test_font_sizes() {
        assert_eq!(FontSize::Normal.size(), 72);
        assert_eq!(FontSize::Small.size(), 54);
    }

    #[test]
    fn test_font_family_from_flag() {
        let mut slide = Slide::default();
        assert_eq!(slide.font_family(), FontFamily::ProportionalBold);
        slide.monospace = true;
        assert_eq!(slide.font_family(), FontFamily::MonospaceBold);
        assert_eq!(slide.font_family().base_font(), "Courier-Bold");
    }

    #[test]
    fn test_text_rejects_past_capacity() {
        let mut text = SlideText::new();
        for _ in 0..MAX_TEXT_LEN {
            assert!(text.try_push('a'));
        }
        assert!(text.is_full());
        assert!(!text.try_push('b'));
        assert_eq!(text.len(), MAX_TEXT_LEN);
    }

    #[test]
    fn test_text_rejects_split_multibyte() {
        let mut text = SlideText::new();
        for _ in 0..MAX_TEXT_LEN - 1 {
            assert!(text.try_push('a'));
        }
        // 'é' is two bytes, only one is left
        assert!(!text.is_full());
        assert!(!text.try_push('é'));
        assert!(text.try_push('z'));
        assert!(text.is_full());
    }

    #[test]
    fn test_to_markup_plain() {
        let mut slide = Slide::default();
        for c in "Hello".chars() {
            assert!(slide.text.try_push(c));
        }
        assert_eq!(slide.to_markup(), "Hello\n");
    }

    #[test]
    fn test_to_markup_flags_and_escapes() {
        let mut slide = Slide {
            monospace: true,
            alignment: Alignment::Left,
            font_size: FontSize::Small,
            text: SlideText::new(),
        };
        for c in "a\\b\nc\td".chars() {
            assert!(slide.text.try_push(c));
        }
        assert_eq!(slide.to_markup(), "!<- a\\\\b\\nc\\td\n");
    }

    #[test]
    fn test_to_markup_guards_leading_markers() {
        let mut slide = Slide::default();
        for c in "# not a comment".chars() {
            assert!(slide.text.try_push(c));
        }
        assert_eq!(slide.to_markup(), " # not a comment\n");
    }

    #[test]
    fn test_deck_collects() {
        let deck: Deck = vec![Slide::default(), Slide::default()].into_iter().collect();
        assert_eq!(deck.len(), 2);
        assert!(!deck.is_empty());
        assert_eq!(deck.iter().count(), 2);
    }
}
