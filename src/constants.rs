// src/constants.rs

use plotters::style::RGBColor;

// Plot dimensions (a 10x8 inch figure at 100 dpi).
pub const PLOT_WIDTH: u32 = 1000;
pub const PLOT_HEIGHT: u32 = 800;

// Figure titles are off unless a RenderConfig turns them on.
pub const ENABLE_TITLE: bool = false;

// Simulator time stamps are in seconds; every chart is drawn in microseconds.
pub const TIME_SCALE_US: f64 = 1e6;

// Fraction of the data span added above and below each panel's traces.
pub const RANGE_PADDING_FRACTION: f64 = 0.05;
// Padding used when a panel's data is flat.
pub const FLAT_RANGE_PADDING: f64 = 0.5;

// Font sizes.
pub const FONT_SIZE_MAIN_TITLE: i32 = 22;
pub const FONT_SIZE_AXIS_LABEL: i32 = 14;
pub const FONT_SIZE_LEGEND: i32 = 14;
pub const FONT_SIZE_MESSAGE: i32 = 18;

// Label area sizes in pixels.
pub const Y_LABEL_AREA_SIZE: u32 = 70;
pub const X_LABEL_AREA_SIZE: u32 = 45;
pub const X_LABEL_AREA_SIZE_HIDDEN: u32 = 10;

// --- Plot Color Assignments (matplotlib single-letter colours) ---
pub const COLOR_RF_SIGNAL: RGBColor = RGBColor(255, 0, 0); // 'r'
pub const COLOR_FIRST_OF_PAIR: RGBColor = RGBColor(191, 191, 0); // 'y'
pub const COLOR_SECOND_OF_PAIR: RGBColor = RGBColor(0, 0, 255); // 'b'
pub const COLOR_DIFFERENCE: RGBColor = RGBColor(0, 128, 0); // 'g'
pub const COLOR_MODULATION: RGBColor = RGBColor(0, 191, 191); // 'c'
pub const COLOR_DEMODULATED: RGBColor = RGBColor(0, 191, 191); // 'c'
pub const COLOR_ZERO_LINE: RGBColor = RGBColor(0, 0, 0);

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_LEGEND: u32 = 2;
pub const LINE_WIDTH_ZERO: u32 = 1;

// Axis descriptions shared by every chart.
pub const Y_LABEL_VOLTS: &str = "volts";
pub const X_LABEL_MICROSECONDS: &str = "microseconds";

// src/constants.rs
