//! Streaming slide parser.
//!
//! Reads one character at a time and builds one [`Slide`] per physical
//! line. Parsing is driven by an explicit [`ParseState`]; every character is
//! dispatched to the handler for the current state, which returns a
//! [`Transition`] saying whether the character was consumed and where to go
//! next.

use std::iter::Peekable;

use crate::types::{Alignment, Deck, FontSize, Slide};

/// What to do with a final line that has no terminating newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingLine {
    /// Discard it. A deck only contains newline-terminated slides.
    #[default]
    Drop,
    /// Emit it as a slide if anything besides comments was read.
    Keep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Start of a slide: comments and format flags are recognised.
    Format,
    /// Discarding the rest of a comment line.
    Comment,
    /// Character right after the separating space: text, never a comment.
    Separated,
    /// Collecting text.
    Content,
    /// The previous character was a backslash.
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    /// Consume the character and continue in the given state.
    Consume(ParseState),
    /// Leave the character in the stream and dispatch it again in the given state.
    Reprocess(ParseState),
    /// The slide is complete. An unconsumed character starts the next slide.
    Finish { consume: bool },
}

/// Parses slides from a character stream.
///
/// ```ignore
/// let mut parser = SlideParser::new("!< Hello\n".chars());
/// let slide = parser.next_slide().unwrap();
/// assert!(slide.monospace);
/// ```
pub struct SlideParser<I: Iterator<Item = char>> {
    chars: Peekable<I>,
    trailing: TrailingLine,
}

impl<I: Iterator<Item = char>> SlideParser<I> {
    pub fn new(chars: I) -> Self {
        Self {
            chars: chars.peekable(),
            trailing: TrailingLine::default(),
        }
    }

    /// Set the policy for an unterminated final line.
    pub fn trailing_line(mut self, policy: TrailingLine) -> Self {
        self.trailing = policy;
        self
    }

    /// Parse the next slide, or `None` once the stream is exhausted.
    pub fn next_slide(&mut self) -> Option<Slide> {
        let mut slide = Slide::default();
        let mut state = ParseState::Format;
        let mut touched = false;

        while let Some(&c) = self.chars.peek() {
            let transition = match state {
                ParseState::Format => format_char(&mut slide, c),
                ParseState::Comment => comment_char(c),
                ParseState::Separated => content_char(&mut slide, c, false),
                ParseState::Content => content_char(&mut slide, c, true),
                ParseState::Escape => escape_char(&mut slide, c),
            };

            match transition {
                Transition::Consume(next) => {
                    self.chars.next();
                    touched |= state != ParseState::Comment && next != ParseState::Comment;
                    state = next;
                }
                Transition::Reprocess(next) => state = next,
                Transition::Finish { consume } => {
                    if consume {
                        self.chars.next();
                    }
                    return Some(slide);
                }
            }
        }

        match self.trailing {
            TrailingLine::Keep if touched => Some(slide),
            _ => None,
        }
    }
}

impl<I: Iterator<Item = char>> Iterator for SlideParser<I> {
    type Item = Slide;

    fn next(&mut self) -> Option<Slide> {
        self.next_slide()
    }
}

/// Parse a whole source string into a deck.
pub fn parse_deck(source: &str) -> Deck {
    parse_deck_with(source, TrailingLine::default())
}

/// Parse a whole source string with an explicit trailing-line policy.
pub fn parse_deck_with(source: &str, trailing: TrailingLine) -> Deck {
    SlideParser::new(source.chars())
        .trailing_line(trailing)
        .collect()
}

fn format_char(slide: &mut Slide, c: char) -> Transition {
    match c {
        '#' => Transition::Consume(ParseState::Comment),
        '!' => {
            slide.monospace = true;
            Transition::Consume(ParseState::Format)
        }
        '<' => {
            slide.alignment = Alignment::Left;
            Transition::Consume(ParseState::Format)
        }
        '-' => {
            slide.font_size = FontSize::Small;
            Transition::Consume(ParseState::Format)
        }
        // separator, never part of the text
        ' ' => Transition::Consume(ParseState::Separated),
        _ => Transition::Reprocess(ParseState::Content),
    }
}

fn comment_char(c: char) -> Transition {
    match c {
        '\n' => Transition::Consume(ParseState::Format),
        _ => Transition::Consume(ParseState::Comment),
    }
}

fn content_char(slide: &mut Slide, c: char, comments: bool) -> Transition {
    match c {
        '#' if comments && slide.text.is_empty() => Transition::Consume(ParseState::Comment),
        '\n' => Transition::Finish { consume: true },
        '\r' => Transition::Consume(ParseState::Content),
        '\\' if slide.text.is_full() => Transition::Finish { consume: false },
        '\\' => Transition::Consume(ParseState::Escape),
        _ if slide.text.try_push(c) => Transition::Consume(ParseState::Content),
        _ => Transition::Finish { consume: false },
    }
}

fn escape_char(slide: &mut Slide, c: char) -> Transition {
    // nothing written yet, so the comment check still applies
    if c == '#' && slide.text.is_empty() {
        return Transition::Consume(ParseState::Comment);
    }

    let mapped = match c {
        'n' => '\n',
        't' => '\t',
        other => other,
    };

    if slide.text.try_push(mapped) {
        Transition::Consume(ParseState::Content)
    } else {
        Transition::Finish { consume: false }
    }
}
