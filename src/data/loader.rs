use crate::correlation::{check_dimensions, CorrelationMap};
use crate::error::Result;
use log::{debug, info};
use ndarray::{Array, Array1, Array3, Axis, Dimension};
use ndarray_npy::{read_npy, write_npy, ReadNpyError};
use std::path::Path;

/// A stimulus movie paired with the response it evoked.
#[derive(Debug, Clone)]
pub struct Recording {
    /// Frames indexed `(time, row, column)`.
    pub stimulus: Array3<f64>,
    /// Response indexed by time.
    pub response: Array1<f64>,
}

impl Recording {
    /// Pair a stimulus with a response, rejecting mismatched or empty time axes.
    pub fn new(stimulus: Array3<f64>, response: Array1<f64>) -> Result<Self> {
        check_dimensions(&stimulus.view(), &response.view())?;
        Ok(Self { stimulus, response })
    }

    /// Load both arrays from `.npy` files.
    pub fn from_npy_files<P: AsRef<Path>, Q: AsRef<Path>>(stimulus_path: P, response_path: Q) -> Result<Self> {
        let stimulus = load_stimulus(stimulus_path)?;
        let response = load_response(response_path)?;
        let recording = Self::new(stimulus, response)?;

        let (height, width) = recording.frame_shape();
        info!(
            "Loaded recording: {} samples of {}x{} frames",
            recording.num_samples(),
            height,
            width
        );
        Ok(recording)
    }

    pub fn num_samples(&self) -> usize {
        self.stimulus.len_of(Axis(0))
    }

    /// `(rows, columns)` of one stimulus frame.
    pub fn frame_shape(&self) -> (usize, usize) {
        let (_, height, width) = self.stimulus.dim();
        (height, width)
    }
}

/// Read a `(time, row, column)` stimulus movie.
pub fn load_stimulus<P: AsRef<Path>>(path: P) -> Result<Array3<f64>> {
    debug!("Loading stimulus from {}", path.as_ref().display());
    read_f64_array(path)
}

/// Read a one-dimensional response trace.
pub fn load_response<P: AsRef<Path>>(path: P) -> Result<Array1<f64>> {
    debug!("Loading response from {}", path.as_ref().display());
    read_f64_array(path)
}

/// Write a correlation map as a `(rows, columns)` float64 `.npy` file.
pub fn save_map<P: AsRef<Path>>(path: P, map: &CorrelationMap) -> Result<()> {
    write_npy(&path, map)?;
    info!("Correlation map saved: {}", path.as_ref().display());
    Ok(())
}

// float64 is read as-is; float32 files are widened.
fn read_f64_array<D: Dimension, P: AsRef<Path>>(path: P) -> Result<Array<f64, D>> {
    match read_npy::<_, Array<f64, D>>(&path) {
        Ok(array) => Ok(array),
        Err(ReadNpyError::WrongDescriptor(descriptor)) => {
            debug!("{} is not float64 ({:?}), retrying as float32", path.as_ref().display(), descriptor);
            let array: Array<f32, D> = read_npy(&path)?;
            Ok(array.mapv(f64::from))
        }
        Err(e) => Err(e.into()),
    }
}
