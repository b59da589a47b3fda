//! Page geometry and colour schemes.

use super::Colour;

/// Default page height in page units.
pub const DEFAULT_PAGE_HEIGHT: u32 = 540;

/// Page aspect ratio. Width is derived from the height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AspectRatio {
    /// 16:9
    #[default]
    Widescreen,
    /// 4:3
    Standard,
}

impl AspectRatio {
    /// Page width for the given height, truncated to whole units.
    pub fn width_for(self, height: u32) -> u32 {
        let factor = match self {
            AspectRatio::Widescreen => 1.777,
            AspectRatio::Standard => 1.333,
        };
        (f64::from(height) * factor) as u32
    }
}

/// Background and text colour pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColourScheme {
    pub background: Colour,
    pub foreground: Colour,
}

/// Colour schemes for light and dark mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub light: ColourScheme,
    pub dark: ColourScheme,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            light: ColourScheme {
                background: Colour::PAPER,
                foreground: Colour::INK,
            },
            dark: ColourScheme {
                background: Colour::BLACK,
                foreground: Colour::PAPER,
            },
        }
    }
}

/// Page dimensions and colour mode shared by every slide of a deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    pub width: u32,
    pub height: u32,
    pub dark_mode: bool,
    pub theme: Theme,
}

impl PageConfig {
    pub fn new(height: u32, aspect: AspectRatio, dark_mode: bool) -> Self {
        Self {
            width: aspect.width_for(height),
            height,
            dark_mode,
            theme: Theme::default(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// The colour scheme for the active mode.
    pub fn colours(&self) -> ColourScheme {
        if self.dark_mode {
            self.theme.dark
        } else {
            self.theme.light
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_HEIGHT, AspectRatio::default(), false)
    }
}
