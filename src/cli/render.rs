//! Render command implementation.
//!
//! Parses a slide file and writes one PDF page per slide.

use std::fmt;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::error::{Result, SliderError};
use crate::output::{display_path, preview, Printer};
use crate::parser::{SlideParser, TrailingLine};
use crate::render::{render_slide, DocumentInfo, DocumentRenderer, PdfRenderer};
use crate::types::AspectRatio;

use super::Cli;

/// Outcome of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    pub slides: usize,
    pub elapsed: Duration,
}

impl fmt::Display for RenderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rendered {} slides in {}ms",
            self.slides,
            self.elapsed.as_millis()
        )
    }
}

pub fn run(input: &Path, cli: &Cli) -> Result<RenderSummary> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let aspect = if cli.standard {
        AspectRatio::Standard
    } else {
        AspectRatio::Widescreen
    };
    let page = config.page_config(aspect, cli.dark)?;

    let source = fs::read_to_string(input).map_err(|e| SliderError::Io {
        path: input.to_path_buf(),
        message: format!("can't open input file: {}", e),
    })?;

    let start = Instant::now();
    let printer = Printer::new();

    if cli.verbose {
        printer.info(
            "Rendering",
            &format!(
                "{} -> {}",
                display_path(input),
                display_path(&cli.output)
            ),
        );
    }

    let trailing = if cli.keep_trailing {
        TrailingLine::Keep
    } else {
        TrailingLine::Drop
    };

    let mut pdf = PdfRenderer::new(DocumentInfo::new(config.title()));
    let mut slides = 0;

    for slide in SlideParser::new(source.chars()).trailing_line(trailing) {
        render_slide(&mut pdf, &slide, &page)?;
        slides += 1;

        if cli.verbose {
            printer.status("Rendering", &slide_status(slides, slide.text.as_str()));
        }
    }

    pdf.save(&cli.output)?;

    Ok(RenderSummary {
        slides,
        elapsed: start.elapsed(),
    })
}

/// Verbose progress message for the `n`th slide, completing "Rendering".
fn slide_status(n: usize, text: &str) -> String {
    format!("slide {}: {}", n, preview(text))
}
