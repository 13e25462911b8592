// src/types.rs
// Type aliases shared by the loader and the plot functions

/// `(time in microseconds, value)` pairs of one trace.
pub type SeriesPoints = Vec<(f64, f64)>;
