// src/plot_functions/plot_voltage_pair.rs

use std::path::Path;

use crate::config::RenderConfig;
use crate::constants::{COLOR_DIFFERENCE, COLOR_FIRST_OF_PAIR, COLOR_RF_SIGNAL, COLOR_SECOND_OF_PAIR};
use crate::data_input::column_schema::{ColumnSchema, Field};
use crate::data_input::sample_data::SampleSet;
use crate::data_input::sample_loader::load_samples;
use crate::error::PlotError;
use crate::plot_framework::{render_figure, Figure, FigureId, Panel, PlotSeries};
use crate::series_labels::LABEL_RF_SIGNAL;

/// Which two detector capacitors to overlay, and their difference trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoltagePair {
    pub first: Field,
    pub second: Field,
    pub difference: Field,
    pub first_label: String,
    pub second_label: String,
    pub difference_label: String,
    /// Put the RF signal in a panel of its own above the pair.
    pub three_panel: bool,
}

impl VoltagePair {
    pub fn new(
        (first, first_label): (Field, &str),
        (second, second_label): (Field, &str),
        (difference, difference_label): (Field, &str),
        three_panel: bool,
    ) -> Self {
        Self {
            first,
            second,
            difference,
            first_label: first_label.to_string(),
            second_label: second_label.to_string(),
            difference_label: difference_label.to_string(),
            three_panel,
        }
    }

    /// C2 and C3 with their IC2A difference.
    pub fn c2_c3(three_panel: bool) -> Self {
        Self::new(
            (Field::CapC2, "C2"),
            (Field::CapC3, "C3"),
            (Field::MixerInputA, "C2 - C3"),
            three_panel,
        )
    }

    /// C4 and C5 with their IC2B difference.
    pub fn c4_c5(three_panel: bool) -> Self {
        Self::new(
            (Field::CapC4, "C4"),
            (Field::CapC5, "C5"),
            (Field::MixerInputB, "C4 - C5"),
            three_panel,
        )
    }

    /// Fields to load besides time.
    pub fn fields(&self) -> Vec<Field> {
        vec![Field::Signal, self.first, self.second, self.difference]
    }
}

/// Lays out the capacitor voltage view: optional RF panel, pair overlay, difference.
pub fn voltage_pair_figure(
    samples: &SampleSet,
    id: FigureId,
    title: &str,
    pair: &VoltagePair,
) -> Figure {
    let rf_signal = PlotSeries::line(samples.points(Field::Signal), LABEL_RF_SIGNAL, COLOR_RF_SIGNAL);
    let first = PlotSeries::line(samples.points(pair.first), &pair.first_label, COLOR_FIRST_OF_PAIR);
    let second = PlotSeries::line(samples.points(pair.second), &pair.second_label, COLOR_SECOND_OF_PAIR);
    let difference = PlotSeries::line(
        samples.points(pair.difference),
        &pair.difference_label,
        COLOR_DIFFERENCE,
    );

    let mut panels = Vec::with_capacity(3);
    let pair_series = if pair.three_panel {
        panels.push(Panel::new(vec![rf_signal]));
        vec![first, second]
    } else {
        vec![rf_signal, first, second]
    };
    panels.push(Panel::new(pair_series));
    panels.push(Panel::new(vec![difference]));

    Figure::stacked(id, title, panels)
}

/// Loads, lays out and writes one voltage-pair report.
pub fn plot_voltage_pair(
    input_file: &Path,
    output_file: &Path,
    schema: &ColumnSchema,
    title: &str,
    pair: &VoltagePair,
    id: FigureId,
    config: &RenderConfig,
) -> Result<Figure, PlotError> {
    let samples = load_samples(input_file, schema, &pair.fields())?;
    let figure = voltage_pair_figure(&samples, id, title, pair);
    render_figure(&figure, output_file, config)?;
    Ok(figure)
}
