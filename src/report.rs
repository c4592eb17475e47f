use crate::correlation::{PeakLocation, ReceptiveFieldEstimate};

/// Render peak coordinates as `[(row, col), ...]`.
pub fn format_coordinates(peaks: &PeakLocation) -> String {
    let pairs: Vec<String> = peaks
        .coordinates
        .iter()
        .map(|(row, col)| format!("({}, {})", row, col))
        .collect();
    format!("[{}]", pairs.join(", "))
}

/// The one-line summary printed for each method.
pub fn format_report_line(estimate: &ReceptiveFieldEstimate) -> String {
    format!(
        "{}: the neuron with the highest correlation is at pixel {}",
        estimate.method,
        format_coordinates(&estimate.peaks)
    )
}
