// src/plot_functions/plot_demodulation.rs

use plotters::style::RGBColor;
use std::path::Path;

use crate::config::RenderConfig;
use crate::constants::{
    COLOR_DEMODULATED, COLOR_FIRST_OF_PAIR, COLOR_MODULATION, COLOR_RF_SIGNAL,
    COLOR_SECOND_OF_PAIR,
};
use crate::data_input::column_schema::{ColumnSchema, Field};
use crate::data_input::sample_data::SampleSet;
use crate::data_input::sample_loader::load_samples;
use crate::error::PlotError;
use crate::plot_framework::{render_figure, Figure, FigureId, Panel, PlotSeries};
use crate::series_labels::demodulation_stage_labels;

/// Index of the low-pass stage, which gets a zero reference line.
const LOW_PASS_STAGE: usize = 3;

/// Fields of each stage, top to bottom. Raw I/Q comes from the schema, so the
/// ZetaSDR view shows its mixer inputs where the I/Q mixer shows I and Q.
fn stage_fields(schema: &ColumnSchema) -> [Vec<Field>; 5] {
    let (in_phase, quadrature) = schema.raw_iq();
    [
        vec![Field::Modulation],
        vec![Field::Signal],
        vec![in_phase, quadrature],
        vec![Field::InPhaseLowPass, Field::QuadratureLowPass],
        vec![Field::Demodulated],
    ]
}

fn stage_colors(stage: usize) -> &'static [RGBColor] {
    const MODULATION: [RGBColor; 1] = [COLOR_MODULATION];
    const RF: [RGBColor; 1] = [COLOR_RF_SIGNAL];
    const PAIR: [RGBColor; 2] = [COLOR_FIRST_OF_PAIR, COLOR_SECOND_OF_PAIR];
    const DEMODULATED: [RGBColor; 1] = [COLOR_DEMODULATED];
    match stage {
        0 => &MODULATION,
        1 => &RF,
        4 => &DEMODULATED,
        _ => &PAIR,
    }
}

/// Fields to load besides time.
pub fn demodulation_fields(schema: &ColumnSchema) -> Vec<Field> {
    stage_fields(schema).into_iter().flatten().collect()
}

/// Five-stage view: modulation, RF signal, I & Q, low-pass I & Q, demodulated.
pub fn demodulation_figure(
    samples: &SampleSet,
    schema: &ColumnSchema,
    id: FigureId,
    title: &str,
) -> Figure {
    let panels = stage_fields(schema)
        .iter()
        .enumerate()
        .map(|(stage, fields)| {
            let series = fields
                .iter()
                .zip(demodulation_stage_labels(stage))
                .zip(stage_colors(stage))
                .map(|((&field, label), &color)| PlotSeries::line(samples.points(field), label, color))
                .collect();
            let panel = Panel::new(series);
            if stage == LOW_PASS_STAGE {
                panel.with_zero_line()
            } else {
                panel
            }
        })
        .collect();
    Figure::stacked(id, title, panels)
}

pub fn plot_demodulation(
    input_file: &Path,
    output_file: &Path,
    schema: &ColumnSchema,
    title: &str,
    id: FigureId,
    config: &RenderConfig,
) -> Result<Figure, PlotError> {
    let samples = load_samples(input_file, schema, &demodulation_fields(schema))?;
    let figure = demodulation_figure(&samples, schema, id, title);
    render_figure(&figure, output_file, config)?;
    Ok(figure)
}
