// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

use crate::data_input::column_schema::Field;

/// Everything that can go wrong while turning one CSV file into one chart.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("malformed row in {} at line {line}, column {column} ({value:?}): {reason}", path.display())]
    MalformedRow {
        path: PathBuf,
        line: u64,
        column: usize,
        value: String,
        reason: String,
    },

    #[error("field {field:?} is not part of the '{schema}' column schema")]
    FieldNotInSchema { schema: String, field: Field },

    #[error("cannot write {}: {reason}", path.display())]
    OutputWriteError { path: PathBuf, reason: String },

    #[error("failed to render plot: {0}")]
    Render(String),
}

impl PlotError {
    /// Short name of the error kind, used in manifest failure logs.
    pub fn kind(&self) -> &'static str {
        match self {
            PlotError::InputNotFound { .. } => "InputNotFound",
            PlotError::Read { .. } => "Read",
            PlotError::Csv { .. } => "Csv",
            PlotError::MalformedRow { .. } => "MalformedRow",
            PlotError::FieldNotInSchema { .. } => "FieldNotInSchema",
            PlotError::OutputWriteError { .. } => "OutputWriteError",
            PlotError::Render(_) => "Render",
        }
    }
}

impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for PlotError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        PlotError::Render(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_row_message_names_file_and_line() {
        let err = PlotError::MalformedRow {
            path: PathBuf::from("zetasdr_modulated_0.txt"),
            line: 7,
            column: 3,
            value: "abc".to_string(),
            reason: "not a number".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("zetasdr_modulated_0.txt"));
        assert!(message.contains("line 7"));
        assert!(message.contains("column 3"));
        assert_eq!(err.kind(), "MalformedRow");
    }

    #[test]
    fn test_kind_names() {
        let err = PlotError::InputNotFound {
            path: PathBuf::from("missing.txt"),
        };
        assert_eq!(err.kind(), "InputNotFound");
        let err = PlotError::OutputWriteError {
            path: PathBuf::from("out.png"),
            reason: "denied".to_string(),
        };
        assert_eq!(err.kind(), "OutputWriteError");
    }
}
