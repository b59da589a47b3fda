//! PDF output using the base-14 fonts.
//!
//! Pages are kept in memory as content-stream bytes and assembled into a
//! document when the renderer is serialized.

use std::path::Path;

use pdf_writer::{Content, Finish, Name, Pdf, Rect as PdfRect, Ref, Str, TextStr};

use crate::error::{Result, SliderError};
use crate::types::{Alignment, Colour, FontFamily};

use super::wrap::{wrap_lines, Metrics};
use super::{DocumentRenderer, PageId, Rect, TextBlock};

const FONT_FAMILIES: [FontFamily; 2] = [FontFamily::ProportionalBold, FontFamily::MonospaceBold];

/// Bezier control-point factor for quarter circles.
const KAPPA: f32 = 0.552_284_8;

/// Document metadata written to the PDF info dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInfo {
    pub creator: String,
    pub producer: String,
    pub title: String,
}

impl DocumentInfo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

impl Default for DocumentInfo {
    fn default() -> Self {
        Self {
            creator: "slider".to_string(),
            producer: "slider".to_string(),
            title: "presentation".to_string(),
        }
    }
}

struct PageData {
    width: u32,
    height: u32,
    content: Vec<u8>,
}

/// [`DocumentRenderer`] that writes a PDF file.
pub struct PdfRenderer {
    info: DocumentInfo,
    pages: Vec<PageData>,
    font: FontFamily,
}

impl PdfRenderer {
    pub fn new(info: DocumentInfo) -> Self {
        Self {
            info,
            pages: Vec::new(),
            font: FontFamily::ProportionalBold,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Serialize the document.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let tree_id = Ref::new(2);
        let info_id = Ref::new(3);
        let font_ids = [Ref::new(4), Ref::new(5)];
        let first_page = 6;

        let page_ids: Vec<(Ref, Ref)> = (0..self.pages.len() as i32)
            .map(|i| (Ref::new(first_page + 2 * i), Ref::new(first_page + 2 * i + 1)))
            .collect();

        pdf.catalog(catalog_id).pages(tree_id);
        pdf.pages(tree_id)
            .kids(page_ids.iter().map(|(page_id, _)| *page_id))
            .count(self.pages.len() as i32);

        pdf.document_info(info_id)
            .creator(TextStr(&self.info.creator))
            .producer(TextStr(&self.info.producer))
            .title(TextStr(&self.info.title));

        for (family, id) in FONT_FAMILIES.iter().zip(font_ids) {
            pdf.type1_font(id)
                .base_font(Name(family.base_font().as_bytes()))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        for (page, (page_id, content_id)) in self.pages.iter().zip(&page_ids) {
            let mut writer = pdf.page(*page_id);
            writer.media_box(PdfRect::new(0.0, 0.0, page.width as f32, page.height as f32));
            writer.parent(tree_id);
            writer.contents(*content_id);
            {
                let mut resources = writer.resources();
                let mut fonts = resources.fonts();
                for (family, id) in FONT_FAMILIES.iter().zip(font_ids) {
                    fonts.pair(Name(resource_name(*family)), id);
                }
            }
            writer.finish();

            pdf.stream(*content_id, &page.content);
        }

        pdf.finish()
    }

    fn page_mut(&mut self, page: PageId) -> Result<&mut PageData> {
        let count = self.pages.len();
        self.pages.get_mut(page.0).ok_or_else(|| SliderError::Render {
            message: format!("Page {} does not exist ({} allocated)", page.0, count),
            help: None,
        })
    }
}

impl Default for PdfRenderer {
    fn default() -> Self {
        Self::new(DocumentInfo::default())
    }
}

impl DocumentRenderer for PdfRenderer {
    fn create_page(&mut self, width: u32, height: u32) -> Result<PageId> {
        self.pages.push(PageData {
            width,
            height,
            content: Vec::new(),
        });
        Ok(PageId(self.pages.len() - 1))
    }

    fn set_font(&mut self, family: FontFamily) {
        self.font = family;
    }

    fn fill_rect(
        &mut self,
        page: PageId,
        rect: Rect,
        border_radius: u32,
        colour: Colour,
    ) -> Result<()> {
        let mut content = Content::new();
        let [r, g, b] = colour.to_unit_rgb();
        content.set_fill_rgb(r, g, b);

        let (x, y) = (rect.x as f32, rect.y as f32);
        let (w, h) = (rect.width as f32, rect.height as f32);
        let radius = (border_radius as f32).min(w / 2.0).min(h / 2.0);

        if radius > 0.0 {
            let k = radius * KAPPA;
            content.move_to(x + radius, y);
            content.line_to(x + w - radius, y);
            content.cubic_to(x + w - radius + k, y, x + w, y + radius - k, x + w, y + radius);
            content.line_to(x + w, y + h - radius);
            content.cubic_to(x + w, y + h - radius + k, x + w - radius + k, y + h, x + w - radius, y + h);
            content.line_to(x + radius, y + h);
            content.cubic_to(x + radius - k, y + h, x, y + h - radius + k, x, y + h - radius);
            content.line_to(x, y + radius);
            content.cubic_to(x, y + radius - k, x + radius - k, y, x + radius, y);
            content.close_path();
        } else {
            content.rect(x, y, w, h);
        }
        content.fill_nonzero();

        self.page_mut(page)?.content.extend_from_slice(&content.finish());
        Ok(())
    }

    fn measure_wrapped_text(&self, block: &TextBlock<'_>) -> Result<u32> {
        let metrics = Metrics::new(self.font, block.font_size);
        let lines = wrap_lines(block.text, metrics, block.wrap_width as f32);
        Ok(lines.len() as u32 * block.font_size)
    }

    fn draw_wrapped_text(
        &mut self,
        page: PageId,
        block: &TextBlock<'_>,
        alignment: Alignment,
    ) -> Result<()> {
        let metrics = Metrics::new(self.font, block.font_size);
        let wrap_width = block.wrap_width as f32;
        let font_name = resource_name(self.font);

        let mut content = Content::new();
        let [r, g, b] = block.colour.to_unit_rgb();
        content.set_fill_rgb(r, g, b);

        for (i, line) in wrap_lines(block.text, metrics, wrap_width).iter().enumerate() {
            let x = match alignment {
                Alignment::Left => block.x as f32,
                Alignment::Center => block.x as f32 + (wrap_width - metrics.width_of(line)) / 2.0,
            };
            let y = block.y as f32 - (i as u32 * block.font_size) as f32;

            content.begin_text();
            content.set_font(Name(font_name), block.font_size as f32);
            content.next_line(x, y);
            content.show(Str(&encode_win_ansi(line)));
            content.end_text();
        }

        self.page_mut(page)?.content.extend_from_slice(&content.finish());
        Ok(())
    }

    fn save(&mut self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_bytes()).map_err(|e| SliderError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PDF: {}", e),
        })
    }
}

fn resource_name(family: FontFamily) -> &'static [u8] {
    match family {
        FontFamily::ProportionalBold => b"F1",
        FontFamily::MonospaceBold => b"F2",
    }
}

/// Encode a line for a base-14 font. Characters outside Latin-1 become `?`.
fn encode_win_ansi(line: &str) -> Vec<u8> {
    line.chars()
        .map(|c| match u8::try_from(u32::from(c)) {
            Ok(b) if b >= 0x20 => b,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_deck;
    use crate::parser::parse_deck;
    use crate::types::PageConfig;
    use tempfile::tempdir;

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    fn render(source: &str) -> PdfRenderer {
        let deck = parse_deck(source);
        let mut renderer = PdfRenderer::default();
        render_deck(&mut renderer, &deck, &PageConfig::default()).unwrap();
        renderer
    }

    #[test]
    fn test_one_page_per_slide() {
        let renderer = render("one\ntwo\n# skip\nthree\n");
        assert_eq!(renderer.page_count(), 3);

        let bytes = renderer.to_bytes();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(contains(&bytes, b"/Count 3"));
    }

    #[test]
    fn test_fonts_and_metadata() {
        let bytes = render("hello\n").to_bytes();

        assert!(contains(&bytes, b"/Helvetica-Bold"));
        assert!(contains(&bytes, b"/Courier-Bold"));
        assert!(contains(&bytes, b"(presentation)"));
        assert!(contains(&bytes, b"(slider)"));
    }

    #[test]
    fn test_text_is_written() {
        let bytes = render("Hello World\n").to_bytes();
        assert!(contains(&bytes, b"(Hello World)"));
    }

    #[test]
    fn test_measure_counts_wrapped_lines() {
        let mut renderer = PdfRenderer::default();
        renderer.set_font(FontFamily::MonospaceBold);

        let block = TextBlock {
            text: "one\ntwo\nthree",
            font_size: 72,
            x: 0,
            y: 270,
            colour: Colour::INK,
            wrap_width: 959,
        };
        assert_eq!(renderer.measure_wrapped_text(&block).unwrap(), 216);

        let empty = TextBlock { text: "", ..block };
        assert_eq!(renderer.measure_wrapped_text(&empty).unwrap(), 0);
    }

    #[test]
    fn test_unknown_page_is_an_error() {
        let mut renderer = PdfRenderer::default();
        let result = renderer.fill_rect(PageId(3), Rect::new(0, 0, 10, 10), 0, Colour::BLACK);
        assert!(matches!(result, Err(SliderError::Render { .. })));
    }

    #[test]
    fn test_rounded_rect_uses_curves() {
        let mut renderer = PdfRenderer::default();
        let page = renderer.create_page(100, 100).unwrap();
        renderer
            .fill_rect(page, Rect::new(0, 0, 100, 100), 10, Colour::BLACK)
            .unwrap();
        assert!(contains(&renderer.pages[0].content, b" c"));
    }

    #[test]
    fn test_encode_non_latin() {
        assert_eq!(encode_win_ansi("café ☃"), b"caf\xe9 ?".to_vec());
    }

    #[test]
    fn test_save_writes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deck.pdf");

        let mut renderer = render("a\nb\n");
        renderer.save(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("deck.pdf");

        let mut renderer = render("a\n");
        assert!(matches!(renderer.save(&path), Err(SliderError::Io { .. })));
    }
}
