pub mod contraction;
pub mod peak;
pub mod pixelwise;

use crate::data::Recording;
use crate::error::{ReceptiveFieldError, Result};
use log::{debug, info};
use ndarray::{Array2, ArrayView1, ArrayView3, Axis};
use std::fmt;
use std::time::{Duration, Instant};

pub use contraction::tensor_contraction;
pub use peak::{find_peaks, PeakLocation};
pub use pixelwise::pixelwise_correlation;

/// Correlation score per pixel, shaped like one stimulus frame `(rows, columns)`.
pub type CorrelationMap = Array2<f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrelationMethod {
    /// Pearson correlation of every pixel's time course with the response. Values lie in [-1, 1].
    Pixelwise,
    /// Sum over time of z-scored stimulus times z-scored response. Equals `Pixelwise` scaled by the sample count.
    TensorContraction,
}

impl CorrelationMethod {
    pub const ALL: [CorrelationMethod; 2] = [CorrelationMethod::Pixelwise, CorrelationMethod::TensorContraction];

    /// 1-based position used in the printed report.
    pub fn ordinal(&self) -> usize {
        match self {
            CorrelationMethod::Pixelwise => 1,
            CorrelationMethod::TensorContraction => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CorrelationMethod::Pixelwise => "Pixelwise temporal correlations",
            CorrelationMethod::TensorContraction => "Einstein Summation, essentially the Hardamard Product",
        }
    }
}

impl fmt::Display for CorrelationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Method {} ({})", self.ordinal(), self.name())
    }
}

/// Result of running one method over a recording.
#[derive(Debug, Clone)]
pub struct ReceptiveFieldEstimate {
    pub method: CorrelationMethod,
    pub map: CorrelationMap,
    pub peaks: PeakLocation,
    pub elapsed: Duration,
}

/// Check that the stimulus and response share a non-empty time axis.
pub(crate) fn check_dimensions(stimulus: &ArrayView3<f64>, response: &ArrayView1<f64>) -> Result<()> {
    let stimulus_samples = stimulus.len_of(Axis(0));
    let response_samples = response.len();

    if stimulus_samples != response_samples {
        return Err(ReceptiveFieldError::ShapeMismatch {
            stimulus_samples,
            response_samples,
        });
    }
    if stimulus_samples == 0 {
        return Err(ReceptiveFieldError::EmptyInput("recording has no samples".to_string()));
    }

    Ok(())
}

/// Compute the correlation map for the requested method.
pub fn compute_correlation_map(
    method: CorrelationMethod,
    stimulus: ArrayView3<f64>,
    response: ArrayView1<f64>,
) -> Result<CorrelationMap> {
    match method {
        CorrelationMethod::Pixelwise => pixelwise_correlation(stimulus, response),
        CorrelationMethod::TensorContraction => tensor_contraction(stimulus, response),
    }
}

/// Run one method end to end: correlation map, peak lookup and timing.
pub fn estimate_receptive_field(method: CorrelationMethod, recording: &Recording) -> Result<ReceptiveFieldEstimate> {
    debug!("Starting {}...", method);
    let start_time = Instant::now();

    let map = compute_correlation_map(method, recording.stimulus.view(), recording.response.view())?;
    let peaks = find_peaks(&map);

    let elapsed = start_time.elapsed();
    info!(
        "{} finished in {:.3}ms, peak value {:.4} at {} pixel(s)",
        method,
        elapsed.as_secs_f64() * 1e3,
        peaks.value,
        peaks.coordinates.len()
    );

    Ok(ReceptiveFieldEstimate {
        method,
        map,
        peaks,
        elapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, Array3};

    #[test]
    fn test_method_labels() {
        assert_eq!(
            CorrelationMethod::Pixelwise.to_string(),
            "Method 1 (Pixelwise temporal correlations)"
        );
        assert_eq!(
            CorrelationMethod::TensorContraction.to_string(),
            "Method 2 (Einstein Summation, essentially the Hardamard Product)"
        );
    }

    #[test]
    fn test_mismatched_time_axis_is_rejected() {
        let stimulus = Array3::<f64>::zeros((10, 2, 2));
        let response = Array1::<f64>::zeros(9);

        for method in CorrelationMethod::ALL {
            let err = compute_correlation_map(method, stimulus.view(), response.view()).unwrap_err();
            assert!(matches!(
                err,
                ReceptiveFieldError::ShapeMismatch {
                    stimulus_samples: 10,
                    response_samples: 9
                }
            ));
        }
    }

    #[test]
    fn test_empty_recording_is_rejected() {
        let stimulus = Array3::<f64>::zeros((0, 2, 2));
        let response = Array1::<f64>::zeros(0);
        let result = compute_correlation_map(CorrelationMethod::Pixelwise, stimulus.view(), response.view());
        assert!(matches!(result, Err(ReceptiveFieldError::EmptyInput(_))));
    }
}
