//! Optional YAML configuration.
//!
//! ```yaml
//! page_height: 540
//! title: My talk
//! theme:
//!   dark:
//!     background: "#101820"
//!     foreground: "#F2AA4C"
//! ```
//!
//! Every field is optional; missing fields keep the built-in defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SliderError};
use crate::types::{AspectRatio, Colour, ColourScheme, PageConfig, Theme, DEFAULT_PAGE_HEIGHT};

/// Settings loaded from a config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Page height in page units. Width follows from the aspect ratio.
    pub page_height: Option<u32>,

    /// PDF document title.
    pub title: Option<String>,

    pub theme: ThemeConfig,
}

/// Colour overrides for each mode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub light: SchemeConfig,
    pub dark: SchemeConfig,
}

/// Hex colour overrides for one mode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchemeConfig {
    pub background: Option<String>,
    pub foreground: Option<String>,
}

impl SchemeConfig {
    fn apply(&self, base: ColourScheme) -> Result<ColourScheme> {
        let parse = |value: &Option<String>, fallback: Colour| match value {
            Some(hex) => Colour::from_hex(hex),
            None => Ok(fallback),
        };

        Ok(ColourScheme {
            background: parse(&self.background, base.background)?,
            foreground: parse(&self.foreground, base.foreground)?,
        })
    }
}

impl Config {
    /// Load config from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SliderError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty file deserializes as unit, not as an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| SliderError::Config {
            message: format!("Invalid config: {}", e),
            help: Some("Check the YAML syntax and field names".to_string()),
        })
    }

    /// Document title, `presentation` unless configured.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("presentation")
    }

    /// Resolve the page configuration for the chosen aspect ratio and mode.
    pub fn page_config(&self, aspect: AspectRatio, dark_mode: bool) -> Result<PageConfig> {
        let height = self.page_height.unwrap_or(DEFAULT_PAGE_HEIGHT);
        if height == 0 {
            return Err(SliderError::Config {
                message: "page_height must be greater than zero".to_string(),
                help: None,
            });
        }

        let defaults = Theme::default();
        let theme = Theme {
            light: self.theme.light.apply(defaults.light)?,
            dark: self.theme.dark.apply(defaults.dark)?,
        };

        Ok(PageConfig::new(height, aspect, dark_mode).with_theme(theme))
    }
}
