use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReceptiveFieldError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Image error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Failed to read .npy array: {0}")]
    NpyReadError(#[from] ndarray_npy::ReadNpyError),

    #[error("Failed to write .npy array: {0}")]
    NpyWriteError(#[from] ndarray_npy::WriteNpyError),

    #[error("Array shape error: {0}")]
    ShapeError(#[from] ndarray::ShapeError),

    #[error("Dimension mismatch: stimulus has {stimulus_samples} samples but response has {response_samples}")]
    ShapeMismatch {
        stimulus_samples: usize,
        response_samples: usize,
    },

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Font error: {0}")]
    FontError(String),

    #[error("Other error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ReceptiveFieldError>;
