// src/plot_functions/mod.rs

pub mod plot_demodulation;
pub mod plot_iq_pair;
pub mod plot_voltage_pair;

// src/plot_functions/mod.rs
