// src/plot_framework.rs

use log::{debug, info, warn};
use plotters::backend::{BitMapBackend, DrawingBackend, SVGBackend};
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{PathElement, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use std::ops::Range;
use std::path::Path;

use crate::config::RenderConfig;
use crate::constants::{
    COLOR_ZERO_LINE, FLAT_RANGE_PADDING, FONT_SIZE_MESSAGE, LINE_WIDTH_LEGEND, LINE_WIDTH_PLOT,
    LINE_WIDTH_ZERO, RANGE_PADDING_FRACTION, X_LABEL_AREA_SIZE, X_LABEL_AREA_SIZE_HIDDEN,
    X_LABEL_MICROSECONDS, Y_LABEL_AREA_SIZE, Y_LABEL_VOLTS,
};
use crate::error::PlotError;
use crate::font_config::{
    register_bundled_font, FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_LEGEND, FONT_TUPLE_MAIN_TITLE,
    FONT_TUPLE_MESSAGE,
};
use crate::types::SeriesPoints;

/// Process-unique identifier of a rendered figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FigureId(pub u32);

impl std::fmt::Display for FigureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out figure ids in increasing order. Owned by whoever drives the run.
#[derive(Debug, Default)]
pub struct FigureCounter {
    next: u32,
}

impl FigureCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> FigureId {
        let id = FigureId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    pub fn allocated(&self) -> u32 {
        self.next
    }
}

/// Calculate plot range with padding.
/// Adds a fractional padding, or a fixed padding for flat data.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-12 {
        FLAT_RANGE_PADDING
    } else {
        range * RANGE_PADDING_FRACTION
    };
    (min - padding, max + padding)
}

/// Smallest and largest finite value, if there is one.
fn finite_bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[derive(Debug, Clone)]
pub struct PlotSeries {
    pub data: SeriesPoints,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

impl PlotSeries {
    pub fn line(data: SeriesPoints, label: &str, color: RGBColor) -> Self {
        Self {
            data,
            label: label.to_string(),
            color,
            stroke_width: LINE_WIDTH_PLOT,
        }
    }
}

/// One sub-plot of a stacked figure.
#[derive(Debug, Clone)]
pub struct Panel {
    pub series: Vec<PlotSeries>,
    pub y_label: String,
    pub x_label: Option<String>,
    pub show_x_tick_labels: bool,
    pub zero_line: bool, // Horizontal reference line at 0 V
}

impl Panel {
    pub fn new(series: Vec<PlotSeries>) -> Self {
        Self {
            series,
            y_label: Y_LABEL_VOLTS.to_string(),
            x_label: None,
            show_x_tick_labels: false,
            zero_line: false,
        }
    }

    pub fn with_zero_line(mut self) -> Self {
        self.zero_line = true;
        self
    }

    pub fn legend_labels(&self) -> Vec<String> {
        self.series
            .iter()
            .filter(|s| !s.label.is_empty())
            .map(|s| s.label.clone())
            .collect()
    }

    pub fn has_data(&self) -> bool {
        self.series.iter().any(|s| !s.data.is_empty())
    }

    pub fn y_range(&self) -> Range<f64> {
        let values = self.series.iter().flat_map(|s| s.data.iter().map(|&(_, y)| y));
        let bounds = if self.zero_line {
            finite_bounds(values.chain(std::iter::once(0.0)))
        } else {
            finite_bounds(values)
        };
        let (lo, hi) = bounds.unwrap_or((0.0, 0.0));
        let (lo, hi) = calculate_range(lo, hi);
        lo..hi
    }
}

/// A stack of panels sharing one time axis.
#[derive(Debug, Clone)]
pub struct Figure {
    pub id: FigureId,
    pub title: String,
    pub panels: Vec<Panel>,
}

impl Figure {
    /// Stacks `panels` top to bottom. Only the bottom panel keeps its x tick
    /// labels and carries the "microseconds" axis description.
    pub fn stacked(id: FigureId, title: &str, mut panels: Vec<Panel>) -> Self {
        let last = panels.len().saturating_sub(1);
        for (index, panel) in panels.iter_mut().enumerate() {
            if index == last {
                panel.show_x_tick_labels = true;
                panel.x_label = Some(X_LABEL_MICROSECONDS.to_string());
            } else {
                panel.show_x_tick_labels = false;
                panel.x_label = None;
            }
        }
        Self {
            id,
            title: title.to_string(),
            panels,
        }
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    /// Shared x range covering every series of every panel.
    pub fn x_range(&self) -> Range<f64> {
        let bounds = finite_bounds(
            self.panels
                .iter()
                .flat_map(|p| p.series.iter())
                .flat_map(|s| s.data.iter().map(|&(x, _)| x)),
        );
        match bounds {
            Some((lo, hi)) if hi > lo => lo..hi,
            Some((lo, hi)) => {
                let (lo, hi) = calculate_range(lo, hi);
                lo..hi
            }
            None => 0.0..1.0,
        }
    }

    /// Legend text per panel, top to bottom.
    pub fn legend_labels(&self) -> Vec<Vec<String>> {
        self.panels.iter().map(Panel::legend_labels).collect()
    }

    /// `(x label, y label)` per panel, top to bottom.
    pub fn axis_labels(&self) -> Vec<(Option<String>, String)> {
        self.panels
            .iter()
            .map(|p| (p.x_label.clone(), p.y_label.clone()))
            .collect()
    }
}

/// Image encoding picked from the output file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Bitmap,
    Svg,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => OutputFormat::Svg,
            _ => OutputFormat::Bitmap,
        }
    }
}

fn hide_tick_label(_: &f64) -> String {
    String::new()
}

/// Draw a "Data Unavailable" message on a panel area.
pub fn draw_unavailable_message<DB>(
    area: &DrawingArea<DB, Shift>,
    panel_index: usize,
    reason: &str,
) -> Result<(), PlotError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    const CHAR_WIDTH_RATIO: f32 = 0.6; // Approximate character width relative to font size

    let (x_range, y_range) = area.get_pixel_range();
    let (width, height) = (x_range.end - x_range.start, y_range.end - y_range.start);
    let message = format!("Panel {} Data Unavailable: {reason}", panel_index + 1);

    let estimated_text_width = (message.len() as f32 * FONT_SIZE_MESSAGE as f32 * CHAR_WIDTH_RATIO) as i32;
    let center_x = width / 2 - estimated_text_width / 2;
    let center_y = height / 2 - FONT_SIZE_MESSAGE / 2;

    let text_style = FONT_TUPLE_MESSAGE.into_font().color(&RED);
    area.draw(&Text::new(message, (center_x, center_y), text_style))?;
    Ok(())
}

/// Draws one panel: traces, optional zero line, legend at centre right.
fn draw_panel<DB>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    x_range: Range<f64>,
) -> Result<(), PlotError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let x_label_area = if panel.show_x_tick_labels {
        X_LABEL_AREA_SIZE
    } else {
        X_LABEL_AREA_SIZE_HIDDEN
    };
    let mut chart = ChartBuilder::on(area)
        .margin(5)
        .x_label_area_size(x_label_area)
        .y_label_area_size(Y_LABEL_AREA_SIZE)
        .build_cartesian_2d(x_range.clone(), panel.y_range())?;

    {
        let mut mesh = chart.configure_mesh();
        mesh.y_desc(panel.y_label.as_str())
            .x_labels(10)
            .y_labels(6)
            .light_line_style(WHITE.mix(0.7))
            .label_style(FONT_TUPLE_AXIS_LABEL);
        if let Some(x_label) = &panel.x_label {
            mesh.x_desc(x_label.as_str());
        }
        if !panel.show_x_tick_labels {
            mesh.x_label_formatter(&hide_tick_label);
        }
        mesh.draw()?;
    }

    let mut legend_series_count = 0;
    for s in &panel.series {
        if s.data.is_empty() {
            continue;
        }
        let color = s.color;
        let series = chart.draw_series(LineSeries::new(
            s.data.iter().cloned(),
            color.stroke_width(s.stroke_width),
        ))?;
        if !s.label.is_empty() {
            series.label(s.label.as_str()).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH_LEGEND))
            });
            legend_series_count += 1;
        }
    }

    if panel.zero_line {
        chart.draw_series(LineSeries::new(
            vec![(x_range.start, 0.0), (x_range.end, 0.0)],
            COLOR_ZERO_LINE.stroke_width(LINE_WIDTH_ZERO),
        ))?;
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::MiddleRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(FONT_TUPLE_LEGEND)
            .draw()?;
    }
    Ok(())
}

fn draw_figure<DB>(
    root_area: DrawingArea<DB, Shift>,
    figure: &Figure,
    config: &RenderConfig,
    output_filename: &Path,
) -> Result<(), PlotError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root_area.fill(&WHITE)?;
    let plot_area = match config.resolve_title(&figure.title) {
        Some(title) => root_area.titled(title, FONT_TUPLE_MAIN_TITLE)?,
        None => root_area.margin(5, 5, 5, 5),
    };

    let sub_plot_areas = plot_area.split_evenly((figure.panel_count(), 1));
    let x_range = figure.x_range();

    for (panel_index, (panel, area)) in figure.panels.iter().zip(sub_plot_areas.iter()).enumerate() {
        if panel.has_data() {
            draw_panel(area, panel, x_range.clone())?;
        } else {
            warn!(
                "  Figure {} panel {} of '{}' has no data points.",
                figure.id,
                panel_index + 1,
                output_filename.display()
            );
            draw_unavailable_message(area, panel_index, "No data points")?;
        }
    }

    root_area
        .present()
        .map_err(|e| PlotError::OutputWriteError {
            path: output_filename.to_path_buf(),
            reason: e.to_string(),
        })
}

/// Fails early when `output_filename` cannot be written. An existing file is
/// left untouched; the backend only replaces it on `present()`.
pub fn check_output_target(output_filename: &Path) -> Result<(), PlotError> {
    let output_error = |reason: String| PlotError::OutputWriteError {
        path: output_filename.to_path_buf(),
        reason,
    };
    let parent = match output_filename.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !parent.is_dir() {
        return Err(output_error(format!(
            "directory '{}' does not exist",
            parent.display()
        )));
    }
    if output_filename.is_dir() {
        return Err(output_error("path is a directory".to_string()));
    }
    match std::fs::metadata(output_filename) {
        Ok(meta) if meta.permissions().readonly() => {
            Err(output_error("file is read-only".to_string()))
        }
        _ => Ok(()),
    }
}

/// Renders `figure` to `output_filename`, then releases the drawing area.
pub fn render_figure(
    figure: &Figure,
    output_filename: &Path,
    config: &RenderConfig,
) -> Result<(), PlotError> {
    if figure.panels.is_empty() {
        return Err(PlotError::Render(format!(
            "figure {} has no panels",
            figure.id
        )));
    }
    check_output_target(output_filename)?;
    register_bundled_font()?;

    let size = (config.width, config.height);
    match OutputFormat::from_path(output_filename) {
        OutputFormat::Svg => draw_figure(
            SVGBackend::new(output_filename, size).into_drawing_area(),
            figure,
            config,
            output_filename,
        )?,
        OutputFormat::Bitmap => draw_figure(
            BitMapBackend::new(output_filename, size).into_drawing_area(),
            figure,
            config,
            output_filename,
        )?,
    }

    info!(
        "  Stacked plot saved as '{}' ({} panels).",
        output_filename.display(),
        figure.panel_count()
    );
    debug!("  Released figure {}.", figure.id);
    Ok(())
}


// src/plot_framework.rs
