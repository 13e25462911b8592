// src/data_input/mod.rs

pub mod column_schema;
pub mod sample_data;
pub mod sample_loader;

// src/data_input/mod.rs
