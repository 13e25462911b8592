// src/data_input/column_schema.rs

use crate::error::PlotError;

/// Semantic name of a column in a simulator result file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Step,
    Time,
    Signal,
    Modulation,
    LocalOscAngle,
    CapC2,
    CapC3,
    CapC4,
    CapC5,
    /// IC2A input of the ZetaSDR, i.e. C2 - C3.
    MixerInputA,
    /// IC2B input of the ZetaSDR, i.e. C4 - C5.
    MixerInputB,
    InPhase,
    Quadrature,
    InPhaseLowPass,
    QuadratureLowPass,
    Demodulated,
}

/// Comment marker used by the simulator for its heading line.
pub const COMMENT_MARKER: char = '#';

// ZetaSDR result rows: timestep, time, signal, modulation, C2, C3, C4, C5,
// IC2A, IC2B, filteredInphase, filteredQuadrature, demodulated
const ZETASDR_COLUMNS: [(Field, usize); 13] = [
    (Field::Step, 0),
    (Field::Time, 1),
    (Field::Signal, 2),
    (Field::Modulation, 3),
    (Field::CapC2, 4),
    (Field::CapC3, 5),
    (Field::CapC4, 6),
    (Field::CapC5, 7),
    (Field::MixerInputA, 8),
    (Field::MixerInputB, 9),
    (Field::InPhaseLowPass, 10),
    (Field::QuadratureLowPass, 11),
    (Field::Demodulated, 12),
];

// I/Q mixer result rows: timesteps, time, signal, localOsc, modulation,
// inphase, quadrature, filteredInphase, filteredQuadrature, demodulated
const IQ_MIXER_COLUMNS: [(Field, usize); 10] = [
    (Field::Step, 0),
    (Field::Time, 1),
    (Field::Signal, 2),
    (Field::LocalOscAngle, 3),
    (Field::Modulation, 4),
    (Field::InPhase, 5),
    (Field::Quadrature, 6),
    (Field::InPhaseLowPass, 7),
    (Field::QuadratureLowPass, 8),
    (Field::Demodulated, 9),
];

/// Column layout of one family of result files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    name: String,
    columns: Vec<(Field, usize)>,
    comment_marker: Option<char>,
    raw_iq: (Field, Field),
}

impl ColumnSchema {
    /// Starts an empty schema. Raw I/Q defaults to the I/Q mixer fields.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            columns: Vec::new(),
            comment_marker: None,
            raw_iq: (Field::InPhase, Field::Quadrature),
        }
    }

    /// Maps `field` to `column`, replacing any earlier mapping of the field.
    pub fn with_column(mut self, field: Field, column: usize) -> Self {
        self.columns.retain(|(f, _)| *f != field);
        self.columns.push((field, column));
        self
    }

    pub fn with_comment_marker(mut self, marker: char) -> Self {
        self.comment_marker = Some(marker);
        self
    }

    /// Selects which fields hold the unfiltered I and Q traces.
    pub fn with_raw_iq(mut self, in_phase: Field, quadrature: Field) -> Self {
        self.raw_iq = (in_phase, quadrature);
        self
    }

    fn from_table(name: &str, table: &[(Field, usize)], step_indexed: bool) -> Self {
        let mut schema = Self::new(name);
        for &(field, column) in table {
            if step_indexed {
                schema = schema.with_column(field, column);
            } else if field != Field::Step {
                schema = schema.with_column(field, column - 1);
            }
        }
        schema
    }

    /// ZetaSDR (Tayloe detector) results with the leading timestep column.
    pub fn zetasdr() -> Self {
        Self::from_table("zetasdr", &ZETASDR_COLUMNS, true)
            .with_comment_marker(COMMENT_MARKER)
            .with_raw_iq(Field::MixerInputA, Field::MixerInputB)
    }

    /// Multiplying I/Q mixer results with the leading timestep column.
    pub fn iq_mixer() -> Self {
        Self::from_table("iq_mixer", &IQ_MIXER_COLUMNS, true).with_comment_marker(COMMENT_MARKER)
    }

    /// ZetaSDR rows without the timestep column. No comment skipping.
    pub fn zetasdr_unindexed() -> Self {
        Self::from_table("zetasdr_unindexed", &ZETASDR_COLUMNS, false)
            .with_raw_iq(Field::MixerInputA, Field::MixerInputB)
    }

    /// I/Q mixer rows without the timestep column. No comment skipping.
    pub fn iq_mixer_unindexed() -> Self {
        Self::from_table("iq_mixer_unindexed", &IQ_MIXER_COLUMNS, false)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn comment_marker(&self) -> Option<char> {
        self.comment_marker
    }

    pub fn raw_iq(&self) -> (Field, Field) {
        self.raw_iq
    }

    pub fn column(&self, field: Field) -> Option<usize> {
        self.columns
            .iter()
            .find(|(f, _)| *f == field)
            .map(|&(_, column)| column)
    }

    /// Like [`ColumnSchema::column`], but a missing field is an error.
    pub fn require(&self, field: Field) -> Result<usize, PlotError> {
        self.column(field).ok_or_else(|| PlotError::FieldNotInSchema {
            schema: self.name.clone(),
            field,
        })
    }
}
