use crate::data::Recording;
use crate::error::{ReceptiveFieldError, Result};
use log::debug;
use ndarray::{s, Array1, Array3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Parameters of a synthetic white-noise experiment with a single responsive pixel.
#[derive(Debug, Clone)]
pub struct SyntheticConfig {
    pub samples: usize,
    pub height: usize,
    pub width: usize,
    /// Row of the pixel that drives the response.
    pub signal_row: usize,
    /// Column of the pixel that drives the response.
    pub signal_col: usize,
    /// Standard deviation of the Gaussian noise added to the response.
    pub noise: f64,
    pub seed: u64,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            samples: 100,
            height: 10,
            width: 10,
            signal_row: 3,
            signal_col: 7,
            noise: 0.1,
            seed: 42,
        }
    }
}

impl SyntheticConfig {
    /// Generate a Gaussian white-noise movie and a response that follows the signal pixel.
    ///
    /// The same config always produces the same recording.
    pub fn generate(&self) -> Result<Recording> {
        if self.signal_row >= self.height || self.signal_col >= self.width {
            return Err(ReceptiveFieldError::Other(format!(
                "signal pixel ({}, {}) lies outside a {}x{} frame",
                self.signal_row, self.signal_col, self.height, self.width
            )));
        }

        debug!(
            "Generating synthetic recording: {} samples of {}x{} frames, signal at ({}, {}), noise {}",
            self.samples, self.height, self.width, self.signal_row, self.signal_col, self.noise
        );

        let mut rng = StdRng::seed_from_u64(self.seed);
        let stimulus = Array3::from_shape_fn((self.samples, self.height, self.width), |_| {
            rng.sample::<f64, _>(StandardNormal)
        });

        let signal = stimulus.slice(s![.., self.signal_row, self.signal_col]);
        let response: Array1<f64> = signal.mapv(|v| v + self.noise * rng.sample::<f64, _>(StandardNormal));

        Recording::new(stimulus, response)
    }
}
