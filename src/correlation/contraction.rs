use crate::correlation::{check_dimensions, CorrelationMap};
use crate::error::Result;
use crate::stats::{zscore_1d, zscore_axis0};
use log::debug;
use ndarray::{ArrayView1, ArrayView3};

/// Vectorised receptive field: `einsum("nhw,n->hw", zscore(stimulus), zscore(response))`.
///
/// The stimulus is standardised per pixel along time, the response along its only
/// axis. The movie is then viewed as an `(n, h * w)` matrix so the whole contraction
/// is one vector-matrix product. Each entry equals the pixelwise Pearson coefficient
/// times the number of samples.
pub fn tensor_contraction(stimulus: ArrayView3<f64>, response: ArrayView1<f64>) -> Result<CorrelationMap> {
    check_dimensions(&stimulus, &response)?;

    let (samples, height, width) = stimulus.dim();
    debug!("Tensor contraction over {} samples of {}x{} frames", samples, height, width);

    let standardised_stimulus = zscore_axis0(stimulus);
    let standardised_response = zscore_1d(response);

    let frames = standardised_stimulus.to_shape((samples, height * width))?;
    let receptive_field = standardised_response.dot(&frames);

    Ok(receptive_field.into_shape_with_order((height, width))?)
}
