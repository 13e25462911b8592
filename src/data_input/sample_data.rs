// src/data_input/sample_data.rs

use crate::data_input::column_schema::Field;
use crate::types::SeriesPoints;

/// Values of one field, one per data row. Time is in microseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    pub field: Field,
    pub values: Vec<f64>,
}

/// Index-aligned series loaded from a single result file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampleSet {
    pub series: Vec<SampleSeries>,
    pub header: Option<Vec<String>>, // Names from the simulator's comment heading, if any.
    pub row_count: usize,
}

impl SampleSet {
    pub fn get(&self, field: Field) -> Option<&[f64]> {
        self.series
            .iter()
            .find(|s| s.field == field)
            .map(|s| s.values.as_slice())
    }

    /// Values of `field`, or an empty slice if the field was not loaded.
    pub fn values(&self, field: Field) -> &[f64] {
        self.get(field).unwrap_or(&[])
    }

    /// `(time, value)` pairs for plotting `field` against time.
    pub fn points(&self, field: Field) -> SeriesPoints {
        self.values(Field::Time)
            .iter()
            .copied()
            .zip(self.values(field).iter().copied())
            .collect()
    }

    /// Mean spacing between consecutive time samples, in microseconds.
    pub fn sample_interval_us(&self) -> Option<f64> {
        let time = self.get(Field::Time)?;
        if time.len() < 2 {
            return None;
        }
        let total = time[time.len() - 1] - time[0];
        Some(total / (time.len() - 1) as f64)
    }
}
