/// Centralized legend labels
///
/// Provides consistent legend text across all plot functions.
pub const LABEL_RF_SIGNAL: &str = "RF signal";
pub const LABEL_MODULATION: &str = "Modulation";
pub const LABEL_IN_PHASE: &str = "I";
pub const LABEL_QUADRATURE: &str = "Q";
pub const LABEL_IN_PHASE_LOW_PASS: &str = "low pass(I)";
pub const LABEL_QUADRATURE_LOW_PASS: &str = "low pass(Q)";
pub const LABEL_DEMODULATED: &str = "sqrt(I^2 + Q^2)";

/// Top-to-bottom legend labels of the five-stage demodulation view
pub const DEMODULATION_STAGES: [&[&str]; 5] = [
    &[LABEL_MODULATION],
    &[LABEL_RF_SIGNAL],
    &[LABEL_IN_PHASE, LABEL_QUADRATURE],
    &[LABEL_IN_PHASE_LOW_PASS, LABEL_QUADRATURE_LOW_PASS],
    &[LABEL_DEMODULATED],
];

/// Get the legend labels of one demodulation stage
///
/// # Arguments
/// * `index` - Stage index, 0 (modulation) to 4 (demodulated)
///
/// # Panics
/// Panics if index is greater than 4
pub fn demodulation_stage_labels(index: usize) -> &'static [&'static str] {
    match DEMODULATION_STAGES.get(index) {
        Some(labels) => labels,
        None => panic!(
            "Invalid demodulation stage: {}. Expected 0 through 4",
            index
        ),
    }
}
