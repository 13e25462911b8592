// src/config.rs

use crate::constants::{ENABLE_TITLE, PLOT_HEIGHT, PLOT_WIDTH};

/// Render settings handed to every chart at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// When false, no figure carries a title regardless of the request text.
    pub enable_title: bool,
    pub width: u32,
    pub height: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            enable_title: ENABLE_TITLE,
            width: PLOT_WIDTH,
            height: PLOT_HEIGHT,
        }
    }
}

impl RenderConfig {
    pub fn with_titles(mut self, enable_title: bool) -> Self {
        self.enable_title = enable_title;
        self
    }

    /// The title to draw for a figure, if any.
    pub fn resolve_title<'a>(&self, title: &'a str) -> Option<&'a str> {
        if self.enable_title && !title.is_empty() {
            Some(title)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles_disabled_by_default() {
        let config = RenderConfig::default();
        assert!(!config.enable_title);
        assert_eq!(config.resolve_title("ZetaSDR, no modulation"), None);
        assert_eq!((config.width, config.height), (1000, 800));
    }

    #[test]
    fn test_enabled_titles_skip_empty_text() {
        let config = RenderConfig::default().with_titles(true);
        assert_eq!(config.resolve_title("I/Q"), Some("I/Q"));
        assert_eq!(config.resolve_title(""), None);
    }
}
