//! Slide layout - turns a slide into draw calls.
//!
//! Each slide becomes one page: a full-bleed background and a word-wrapped
//! text block centred vertically around the middle of the page.

use crate::error::Result;
use crate::types::{Alignment, PageConfig, Slide};

use super::{DocumentRenderer, Rect, TextBlock};

/// Draw one slide onto a new page.
pub fn render_slide<R>(renderer: &mut R, slide: &Slide, page: &PageConfig) -> Result<()>
where
    R: DocumentRenderer + ?Sized,
{
    let page_id = renderer.create_page(page.width, page.height)?;
    renderer.set_font(slide.font_family());

    let colours = page.colours();
    renderer.fill_rect(
        page_id,
        Rect::new(0, 0, page.width, page.height),
        0,
        colours.background,
    )?;

    let font_size = slide.font_size.size();
    let mut block = TextBlock {
        text: slide.text.as_str(),
        font_size,
        x: 0,
        y: (page.height / 2) as i32,
        colour: colours.foreground,
        wrap_width: page.width,
    };
    let wrapped_height = renderer.measure_wrapped_text(&block)?;

    (block.x, block.y) = text_origin(slide.alignment, font_size, page.height, wrapped_height);

    renderer.draw_wrapped_text(page_id, &block, slide.alignment)
}

/// Draw every slide in order. Returns the number of pages drawn.
pub fn render_deck<'a, R, S>(renderer: &mut R, slides: S, page: &PageConfig) -> Result<usize>
where
    R: DocumentRenderer + ?Sized,
    S: IntoIterator<Item = &'a Slide>,
{
    let mut count = 0;
    for slide in slides {
        render_slide(renderer, slide, page)?;
        count += 1;
    }
    Ok(count)
}

/// First-baseline position for a wrapped block of `wrapped_height` units.
///
/// The block is shifted up half a line for every line past the first so it
/// stays centred on the page's vertical midpoint.
pub fn text_origin(
    alignment: Alignment,
    font_size: u32,
    page_height: u32,
    wrapped_height: u32,
) -> (i32, i32) {
    let lines = (wrapped_height / font_size) as i32;
    let mid = (page_height / 2) as i32;
    let y = (f64::from(mid) + f64::from(lines - 1) * 0.5 * f64::from(font_size)) as i32;

    let x = match alignment {
        Alignment::Left => font_size as i32,
        Alignment::Center => 0,
    };

    (x, y)
}
