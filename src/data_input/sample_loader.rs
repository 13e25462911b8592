// src/data_input/sample_loader.rs

use csv::{ReaderBuilder, StringRecord};
use log::debug;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use crate::constants::TIME_SCALE_US;
use crate::data_input::column_schema::{ColumnSchema, Field};
use crate::data_input::sample_data::{SampleSeries, SampleSet};
use crate::error::PlotError;

fn is_comment(record: &StringRecord, marker: Option<char>) -> bool {
    match (marker, record.get(0)) {
        (Some(marker), Some(first)) => first.starts_with(marker),
        _ => false,
    }
}

/// Splits the simulator's "# timestep, time, signal, ..." heading into names.
fn header_names(record: &StringRecord, marker: char) -> Vec<String> {
    record
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let name = if i == 0 {
                name.trim_start_matches(marker)
            } else {
                name
            };
            name.trim().to_string()
        })
        .filter(|name| !name.is_empty())
        .collect()
}

/// Loads the requested fields of a simulator result file into aligned series.
///
/// Time is always loaded, whether requested or not, and is converted from
/// seconds to microseconds. Any data row whose selected columns are missing
/// or non-numeric aborts the load with [`PlotError::MalformedRow`].
pub fn load_samples(
    input_file_path: &Path,
    schema: &ColumnSchema,
    fields: &[Field],
) -> Result<SampleSet, PlotError> {
    // --- Column Mapping ---
    let mut wanted: Vec<Field> = vec![Field::Time];
    for &field in fields {
        if !wanted.contains(&field) {
            wanted.push(field);
        }
    }
    let mut columns = Vec::with_capacity(wanted.len());
    for &field in &wanted {
        let column = schema.require(field)?;
        debug!("  {:?}: column {} ({})", field, column, schema.name());
        columns.push(column);
    }

    let file = File::open(input_file_path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => PlotError::InputNotFound {
            path: input_file_path.to_path_buf(),
        },
        _ => PlotError::Read {
            path: input_file_path.to_path_buf(),
            source,
        },
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .delimiter(b',')
        .quote(b'"')
        .from_reader(BufReader::new(file));

    // --- Data Reading ---
    let mut values: Vec<Vec<f64>> = vec![Vec::new(); wanted.len()];
    let mut header: Option<Vec<String>> = None;
    let mut row_count = 0usize;

    for (row_index, result) in reader.records().enumerate() {
        let record = result.map_err(|source| PlotError::Csv {
            path: input_file_path.to_path_buf(),
            source,
        })?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(row_index as u64 + 1);

        if is_comment(&record, schema.comment_marker()) {
            if header.is_none() {
                if let Some(marker) = schema.comment_marker() {
                    let names = header_names(&record, marker);
                    debug!("Headers found in {}: {:?}", input_file_path.display(), names);
                    header = Some(names);
                }
            }
            continue;
        }

        // Parse the whole row before committing it, so a bad row leaves no trace.
        let mut row = Vec::with_capacity(columns.len());
        for &column in &columns {
            let raw = record.get(column).ok_or_else(|| PlotError::MalformedRow {
                path: input_file_path.to_path_buf(),
                line,
                column,
                value: String::new(),
                reason: format!("row has only {} columns", record.len()),
            })?;
            let value = raw.parse::<f64>().map_err(|e| PlotError::MalformedRow {
                path: input_file_path.to_path_buf(),
                line,
                column,
                value: raw.to_string(),
                reason: e.to_string(),
            })?;
            row.push(value);
        }

        for (series, value) in values.iter_mut().zip(row) {
            series.push(value);
        }
        row_count += 1;
    }

    // Time is the first wanted field.
    for t in values[0].iter_mut() {
        *t *= TIME_SCALE_US;
    }

    let sample_set = SampleSet {
        series: wanted
            .into_iter()
            .zip(values)
            .map(|(field, values)| SampleSeries { field, values })
            .collect(),
        header,
        row_count,
    };

    match sample_set.sample_interval_us() {
        Some(interval) => debug!(
            "Read {} data rows from {} (mean interval {:.4} us)",
            row_count,
            input_file_path.display(),
            interval
        ),
        None => debug!("Read {} data rows from {}", row_count, input_file_path.display()),
    }

    Ok(sample_set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_names_strip_marker() {
        let record = StringRecord::from(vec!["# timestep", "time", "signal"]);
        assert_eq!(header_names(&record, '#'), vec!["timestep", "time", "signal"]);
    }

    #[test]
    fn test_is_comment_respects_schema_option() {
        let record = StringRecord::from(vec!["#x", "1"]);
        assert!(is_comment(&record, Some('#')));
        assert!(!is_comment(&record, None));
        let data = StringRecord::from(vec!["1", "#"]);
        assert!(!is_comment(&data, Some('#')));
    }
}
