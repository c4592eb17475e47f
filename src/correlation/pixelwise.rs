use crate::correlation::{check_dimensions, CorrelationMap};
use crate::error::Result;
use crate::stats::pearson;
use log::debug;
use ndarray::{s, ArrayView1, ArrayView3};

/// Correlate every pixel's time course with the response, one pixel at a time.
///
/// `stimulus` is indexed `(time, row, column)` and `response` by time. Each map
/// entry is the Pearson coefficient of `stimulus[.., row, col]` against `response`,
/// so it lies in [-1, 1]. Constant pixels (or a constant response) give NaN.
pub fn pixelwise_correlation(stimulus: ArrayView3<f64>, response: ArrayView1<f64>) -> Result<CorrelationMap> {
    check_dimensions(&stimulus, &response)?;

    let (samples, height, width) = stimulus.dim();
    debug!("Pixelwise correlation over {}x{} pixels, {} samples", height, width, samples);

    let mut correlation_map = CorrelationMap::zeros((height, width));

    for row in 0..height {
        for col in 0..width {
            let single_pixel_time_series = stimulus.slice(s![.., row, col]);
            correlation_map[[row, col]] = pearson(single_pixel_time_series, response);
        }
    }

    Ok(correlation_map)
}
