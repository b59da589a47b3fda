//! Greedy word wrapping with fixed-advance font metrics.

use crate::types::FontFamily;

/// Approximate glyph metrics for one font at one size.
///
/// Every character advances by the same amount: exact for Courier, an
/// average for Helvetica.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    advance: f32,
}

impl Metrics {
    pub fn new(family: FontFamily, font_size: u32) -> Self {
        let em = match family {
            FontFamily::MonospaceBold => 0.6,
            FontFamily::ProportionalBold => 0.556,
        };
        Self {
            advance: em * font_size as f32,
        }
    }

    /// Width of `text` in page units.
    pub fn width_of(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.advance
    }

    /// Most characters that fit strictly inside `width`, at least one.
    fn chars_fitting(&self, width: f32) -> usize {
        ((width / self.advance).ceil() as usize).saturating_sub(1).max(1)
    }
}

/// Break `text` into lines no wider than `wrap_width`.
///
/// Line breaks in the text always start a new line and tabs count as a
/// single space. Words are kept whole unless a single word is wider than
/// the wrap width. Empty text has no lines.
pub fn wrap_lines(text: &str, metrics: Metrics, wrap_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    if text.is_empty() {
        return lines;
    }

    for paragraph in text.split('\n') {
        let paragraph = paragraph.replace('\t', " ");
        let mut current = String::new();
        // an empty first word still holds a place, so leading spaces survive
        let mut started = false;

        for word in paragraph.split(' ') {
            if started {
                let candidate = metrics.width_of(&current) + metrics.width_of(" ") + metrics.width_of(word);
                if candidate < wrap_width {
                    current.push(' ');
                    current.push_str(word);
                    continue;
                }
                lines.push(std::mem::take(&mut current));
            }

            let mut rest = word;
            while metrics.width_of(rest) >= wrap_width && rest.chars().count() > 1 {
                let fit = metrics.chars_fitting(wrap_width);
                let split = rest
                    .char_indices()
                    .nth(fit)
                    .map_or(rest.len(), |(i, _)| i);
                lines.push(rest[..split].to_string());
                rest = &rest[split..];
            }
            current.push_str(rest);
            started = true;
        }

        lines.push(current);
    }

    lines
}
