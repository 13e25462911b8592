// src/manifest.rs

use log::{error, info};
use std::path::{Path, PathBuf};

use crate::config::RenderConfig;
use crate::data_input::column_schema::ColumnSchema;
use crate::error::PlotError;
use crate::plot_framework::{Figure, FigureCounter, FigureId};
use crate::plot_functions::plot_demodulation::plot_demodulation;
use crate::plot_functions::plot_iq_pair::plot_iq_pair;
use crate::plot_functions::plot_voltage_pair::{plot_voltage_pair, VoltagePair};

/// Panel layout of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlotKind {
    VoltagePair(VoltagePair),
    IqPair { three_panel: bool },
    /// Five stacked stages; raw I/Q taken from the request's schema.
    Demodulation,
}

/// One report: which file to read, how to draw it, where to write it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub title: String,
    pub schema: ColumnSchema,
    pub kind: PlotKind,
}

impl PlotRequest {
    pub fn new(
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        title: &str,
        schema: ColumnSchema,
        kind: PlotKind,
    ) -> Self {
        Self {
            input: input.as_ref().to_path_buf(),
            output: output.as_ref().to_path_buf(),
            title: title.to_string(),
            schema,
            kind,
        }
    }

    fn zetasdr_voltage(input: &str, output: &str, title: &str, pair: VoltagePair) -> Self {
        Self::new(input, output, title, ColumnSchema::zetasdr(), PlotKind::VoltagePair(pair))
    }

    fn zetasdr_demod(input: &str, output: &str, title: &str) -> Self {
        Self::new(input, output, title, ColumnSchema::zetasdr(), PlotKind::Demodulation)
    }

    fn iq_voltage(input: &str, output: &str, title: &str, three_panel: bool) -> Self {
        Self::new(input, output, title, ColumnSchema::iq_mixer(), PlotKind::IqPair { three_panel })
    }

    fn iq_demod(input: &str, output: &str, title: &str) -> Self {
        Self::new(input, output, title, ColumnSchema::iq_mixer(), PlotKind::Demodulation)
    }
}

const ZETASDR_NO_MODULATION: &str = "ZetaSDR, no modulation";
const ZETASDR_35_DEGREES: &str = "ZetaSDR, 35 degree phase angle";
const ZETASDR_MODULATED: &str = "ZetaSDR, 7 MHz, 200 kHz modulation";
const ZETASDR_MODULATED_35: &str = "ZetaSDR, 7 MHz, 200 kHz modulation, 35 degrees phase angle";
const IQ_MODULATED_35: &str = "I/Q, 7 MHz, 200 kHz modulation, 35 degrees phase angle";

/// The reports produced from the simulator's result files, in order.
/// Paths are relative to the working directory.
pub fn default_manifest() -> Vec<PlotRequest> {
    vec![
        // ZetaSDR, unmodulated carrier in phase / 35 degrees out of phase
        // with the local oscillator
        PlotRequest::zetasdr_voltage(
            "zetasdr_unmodulated_0.txt",
            "c2c3_unmodulated_voltage.png",
            ZETASDR_NO_MODULATION,
            VoltagePair::c2_c3(false),
        ),
        PlotRequest::zetasdr_voltage(
            "zetasdr_unmodulated_35.txt",
            "c2c3_unmodulated_voltage_35.png",
            ZETASDR_35_DEGREES,
            VoltagePair::c2_c3(false),
        ),
        PlotRequest::zetasdr_voltage(
            "zetasdr_unmodulated_35.txt",
            "c4c5_unmodulated_voltage_35.png",
            ZETASDR_35_DEGREES,
            VoltagePair::c4_c5(false),
        ),
        PlotRequest::zetasdr_voltage(
            "zetasdr_unmodulated_0.txt",
            "c4c5_unmodulated_voltage.png",
            ZETASDR_NO_MODULATION,
            VoltagePair::c4_c5(false),
        ),
        // Modulated carrier
        PlotRequest::zetasdr_voltage(
            "zetasdr_modulated_0.txt",
            "c2c3_modulated_voltage.png",
            ZETASDR_MODULATED,
            VoltagePair::c2_c3(true),
        ),
        PlotRequest::zetasdr_voltage(
            "zetasdr_modulated_0.txt",
            "c4c5_modulated_voltage.png",
            ZETASDR_MODULATED,
            VoltagePair::c4_c5(true),
        ),
        PlotRequest::zetasdr_voltage(
            "zetasdr_modulated_35.txt",
            "zetasdr_modulated_35_va.png",
            "ZetaSDR, 7 MHz, 200 kHz modulation, 35 degrees phase",
            VoltagePair::c2_c3(true),
        ),
        PlotRequest::zetasdr_voltage(
            "zetasdr_modulated_35.txt",
            "zetasdr_modulated_35_vb.png",
            ZETASDR_MODULATED_35,
            VoltagePair::c4_c5(true),
        ),
        // ZetaSDR demodulation, including an adjacent channel and tuning to it
        PlotRequest::zetasdr_demod(
            "zetasdr_modulated_35.txt",
            "zetasdr_modulated_35_d.png",
            ZETASDR_MODULATED_35,
        ),
        PlotRequest::zetasdr_demod(
            "zetasdr_adjacent_35.txt",
            "zetasdr_adjacent_35.png",
            "ZetaSDR, 7 MHz, 200 kHz modulation, 35 degrees phase angle \
             with 7.5 MHz 300 kHz modulation adjacent signal",
        ),
        PlotRequest::zetasdr_demod(
            "zetasdr_tuned_adjacent_35.txt",
            "zetasdr_tuned_adjacent_35.png",
            "ZetaSDR, 7.5 MHz, 300 kHz modulation, 35 degrees phase angle \
             with 7 MHz 200 kHz modulation adjacent signal",
        ),
        // Multiplying I/Q mixer
        PlotRequest::iq_voltage(
            "iq_modulated_0.txt",
            "iq_modulated_0.png",
            "I/Q, 7 MHz, 200 kHz modulation",
            true,
        ),
        PlotRequest::iq_voltage("iq_modulated_35.txt", "iq_modulated_35.png", IQ_MODULATED_35, true),
        PlotRequest::iq_demod("iq_modulated_35.txt", "iq_modulated_35_d.png", IQ_MODULATED_35),
        PlotRequest::iq_demod(
            "iq_adjacent_35.txt",
            "iq_adjacent_35_d.png",
            "I/Q, 7 MHz, 200 kHz modulation, 35 degrees phase angle \
             with 7.5 MHz 300 kHz modulation adjacent signal",
        ),
        PlotRequest::iq_demod(
            "iq_tuned_adjacent_35.txt",
            "iq_tuned_adjacent_35_d.png",
            "I/Q, 7.5 MHz 300 kHz modulation 35 degrees phase angle \
             with 7 MHz, 200 kHz modulation, adjacent signal",
        ),
    ]
}

/// Loads, lays out and writes a single request.
pub fn run_request(
    request: &PlotRequest,
    id: FigureId,
    config: &RenderConfig,
) -> Result<Figure, PlotError> {
    info!("Writing {}", request.output.display());
    let PlotRequest {
        input,
        output,
        title,
        schema,
        kind,
    } = request;
    match kind {
        PlotKind::VoltagePair(pair) => {
            plot_voltage_pair(input, output, schema, title, pair, id, config)
        }
        PlotKind::IqPair { three_panel } => {
            plot_iq_pair(input, output, schema, title, *three_panel, id, config)
        }
        PlotKind::Demodulation => plot_demodulation(input, output, schema, title, id, config),
    }
}

/// A manifest entry that could not be written.
#[derive(Debug)]
pub struct FailedPlot {
    pub index: usize,
    pub output: PathBuf,
    pub error: PlotError,
}

/// Outcome of a manifest run.
#[derive(Debug, Default)]
pub struct ManifestReport {
    pub written: Vec<PathBuf>,
    pub failures: Vec<FailedPlot>,
}

impl ManifestReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn first_failure(&self) -> Option<&FailedPlot> {
        self.failures.first()
    }
}

/// Runs every request in order. A failing request is logged and recorded,
/// and the run moves on to the next one.
pub fn run_manifest(
    requests: &[PlotRequest],
    config: &RenderConfig,
    counter: &mut FigureCounter,
) -> ManifestReport {
    let mut report = ManifestReport::default();
    for (index, request) in requests.iter().enumerate() {
        let id = counter.allocate();
        match run_request(request, id, config) {
            Ok(_) => report.written.push(request.output.clone()),
            Err(error) => {
                error!(
                    "Plot {} ('{}' from '{}') failed [{}]: {}",
                    index + 1,
                    request.output.display(),
                    request.input.display(),
                    error.kind(),
                    error
                );
                report.failures.push(FailedPlot {
                    index,
                    output: request.output.clone(),
                    error,
                });
            }
        }
    }
    info!(
        "Finished: {} plots written, {} failed.",
        report.written.len(),
        report.failures.len()
    );
    report
}
