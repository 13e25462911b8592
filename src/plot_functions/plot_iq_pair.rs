// src/plot_functions/plot_iq_pair.rs

use std::path::Path;

use crate::config::RenderConfig;
use crate::constants::{COLOR_FIRST_OF_PAIR, COLOR_RF_SIGNAL, COLOR_SECOND_OF_PAIR};
use crate::data_input::column_schema::{ColumnSchema, Field};
use crate::data_input::sample_data::SampleSet;
use crate::data_input::sample_loader::load_samples;
use crate::error::PlotError;
use crate::plot_framework::{render_figure, Figure, FigureId, Panel, PlotSeries};
use crate::series_labels::{LABEL_IN_PHASE, LABEL_QUADRATURE, LABEL_RF_SIGNAL};

/// Fields to load besides time. I and Q come from the schema's raw I/Q pair.
pub fn iq_pair_fields(schema: &ColumnSchema) -> Vec<Field> {
    let (in_phase, quadrature) = schema.raw_iq();
    vec![Field::Signal, in_phase, quadrature]
}

/// RF signal on top, then I and Q either together or in separate panels.
pub fn iq_pair_figure(
    samples: &SampleSet,
    schema: &ColumnSchema,
    id: FigureId,
    title: &str,
    three_panel: bool,
) -> Figure {
    let (in_phase, quadrature) = schema.raw_iq();
    let rf_signal = PlotSeries::line(samples.points(Field::Signal), LABEL_RF_SIGNAL, COLOR_RF_SIGNAL);
    let i = PlotSeries::line(samples.points(in_phase), LABEL_IN_PHASE, COLOR_FIRST_OF_PAIR);
    let q = PlotSeries::line(samples.points(quadrature), LABEL_QUADRATURE, COLOR_SECOND_OF_PAIR);

    let panels = if three_panel {
        vec![
            Panel::new(vec![rf_signal]),
            Panel::new(vec![i]),
            Panel::new(vec![q]),
        ]
    } else {
        vec![Panel::new(vec![rf_signal]), Panel::new(vec![i, q])]
    };
    Figure::stacked(id, title, panels)
}

pub fn plot_iq_pair(
    input_file: &Path,
    output_file: &Path,
    schema: &ColumnSchema,
    title: &str,
    three_panel: bool,
    id: FigureId,
    config: &RenderConfig,
) -> Result<Figure, PlotError> {
    let samples = load_samples(input_file, schema, &iq_pair_fields(schema))?;
    let figure = iq_pair_figure(&samples, schema, id, title, three_panel);
    render_figure(&figure, output_file, config)?;
    Ok(figure)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iq_pair_layouts() {
        let schema = ColumnSchema::iq_mixer();
        let samples = SampleSet::default();

        let figure = iq_pair_figure(&samples, &schema, FigureId(1), "", false);
        assert_eq!(figure.panel_count(), 2);
        assert_eq!(
            figure.legend_labels(),
            vec![
                vec!["RF signal".to_string()],
                vec!["I".to_string(), "Q".to_string()]
            ]
        );

        let figure = iq_pair_figure(&samples, &schema, FigureId(2), "", true);
        assert_eq!(figure.panel_count(), 3);
        assert_eq!(figure.legend_labels()[1], vec!["I".to_string()]);
        assert_eq!(figure.legend_labels()[2], vec!["Q".to_string()]);
    }

    #[test]
    fn test_fields_follow_schema() {
        assert_eq!(
            iq_pair_fields(&ColumnSchema::iq_mixer()),
            vec![Field::Signal, Field::InPhase, Field::Quadrature]
        );
        assert_eq!(
            iq_pair_fields(&ColumnSchema::zetasdr()),
            vec![Field::Signal, Field::MixerInputA, Field::MixerInputB]
        );
    }
}
