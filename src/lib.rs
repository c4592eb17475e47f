//! Receptive Field Mapper
//!
//! Estimates a neuron's spatial receptive field from a stimulus movie and the
//! response it evoked, by correlating every pixel's time course with the response.
//!
//! ## Methods
//!
//! ### Method 1: pixelwise temporal correlation (`correlation::pixelwise`)
//! - Loops over every `(row, column)` of the frame
//! - Computes the Pearson coefficient of `stimulus[.., row, col]` against the response
//! - Map entries lie in [-1, 1]
//!
//! ### Method 2: tensor contraction (`correlation::contraction`)
//! - z-scores the stimulus per pixel along time and the response along time
//! - Contracts the time axis in one product: `einsum("nhw,n->hw", zs, zr)`
//! - Each entry equals the Method 1 coefficient times the number of samples,
//!   so both methods report the same peak pixels
//!
//! ## Pipeline
//!
//! 1. **Load** (`data`): `.npy` stimulus `(time, row, column)` and response `(time)`,
//!    or a seeded synthetic recording
//! 2. **Correlate** (`correlation`): either method produces a `CorrelationMap`
//! 3. **Locate** (`correlation::peak`): every pixel equal to the global maximum;
//!    NaN maps (constant input series) propagate NaN and report no pixels
//! 4. **Report** (`report`, `render`): one summary line per method and a grayscale
//!    heatmap of the Method 1 map with the peak marked

pub mod correlation;
pub mod data;
pub mod error;
pub mod render;
pub mod report;
pub mod stats;

pub use correlation::{
    compute_correlation_map, estimate_receptive_field, find_peaks, pixelwise_correlation, tensor_contraction,
    CorrelationMap, CorrelationMethod, PeakLocation, ReceptiveFieldEstimate,
};
pub use data::{Recording, SyntheticConfig};
pub use error::{ReceptiveFieldError, Result};
pub use render::{render_heatmap, save_heatmap, HeatmapConfig};
pub use report::format_report_line;
