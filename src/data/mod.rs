pub mod loader;
pub mod synthetic;

pub use loader::{load_response, load_stimulus, save_map, Recording};
pub use synthetic::SyntheticConfig;
