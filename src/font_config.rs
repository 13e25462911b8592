// src/font_config.rs

// Font styles for plot rendering, kept in one place so every chart uses the
// same text configuration.

use plotters::style::{register_font, FontStyle};
use std::sync::OnceLock;

use crate::constants::{
    FONT_SIZE_AXIS_LABEL, FONT_SIZE_LEGEND, FONT_SIZE_MAIN_TITLE, FONT_SIZE_MESSAGE,
};
use crate::error::PlotError;

/// Embedded sans-serif font at compile time
pub static BUNDLED_FONT_BYTES: &[u8] = include_bytes!("../fonts/DejaVuSans.ttf");

/// Font family name for the bundled font
pub const FONT_FAMILY_BUNDLED: &str = "DejaVu Sans";

// Tuple representations for use with plotters' IntoFont trait
pub const FONT_TUPLE_MAIN_TITLE: (&str, i32) = (FONT_FAMILY_BUNDLED, FONT_SIZE_MAIN_TITLE);
pub const FONT_TUPLE_AXIS_LABEL: (&str, i32) = (FONT_FAMILY_BUNDLED, FONT_SIZE_AXIS_LABEL);
pub const FONT_TUPLE_LEGEND: (&str, i32) = (FONT_FAMILY_BUNDLED, FONT_SIZE_LEGEND);
pub const FONT_TUPLE_MESSAGE: (&str, i32) = (FONT_FAMILY_BUNDLED, FONT_SIZE_MESSAGE);

static BUNDLED_FONT_REGISTERED: OnceLock<bool> = OnceLock::new();

/// Makes the bundled font known to plotters. Must run before any text is
/// laid out; repeated calls are free.
pub fn register_bundled_font() -> Result<(), PlotError> {
    let registered = *BUNDLED_FONT_REGISTERED.get_or_init(|| {
        register_font(FONT_FAMILY_BUNDLED, FontStyle::Normal, BUNDLED_FONT_BYTES).is_ok()
    });
    if registered {
        Ok(())
    } else {
        Err(PlotError::Render(format!(
            "bundled font '{FONT_FAMILY_BUNDLED}' could not be loaded"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_font_registers() {
        assert!(register_bundled_font().is_ok());
        // Second call hits the cached outcome.
        assert!(register_bundled_font().is_ok());
    }
}
