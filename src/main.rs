use clap::Parser;
use log::{error, info};
use std::path::PathBuf;

use receptive_field_mapper::data::save_map;
use receptive_field_mapper::{
    estimate_receptive_field, format_report_line, render_heatmap, save_heatmap, CorrelationMethod, HeatmapConfig,
    Recording, SyntheticConfig,
};

/// Receptive field mapper - correlate a stimulus movie with a neuron's response
#[derive(Parser, Debug)]
#[command(name = "receptive-field-mapper", version, about, long_about = None)]
struct Args {
    /// Stimulus movie (.npy, shape time x rows x columns)
    #[arg(required_unless_present = "synthetic")]
    stimulus: Option<PathBuf>,

    /// Response trace (.npy, shape time)
    #[arg(required_unless_present = "synthetic")]
    response: Option<PathBuf>,

    /// Generate a synthetic recording instead of loading files
    #[arg(long, default_value_t = false, conflicts_with_all = ["stimulus", "response"])]
    synthetic: bool,

    /// Samples in the synthetic recording
    #[arg(long, default_value_t = 100)]
    samples: usize,

    /// Rows of the synthetic frames
    #[arg(long, default_value_t = 10)]
    height: usize,

    /// Columns of the synthetic frames
    #[arg(long, default_value_t = 10)]
    width: usize,

    /// Row of the synthetic responsive pixel
    #[arg(long, default_value_t = 3)]
    signal_row: usize,

    /// Column of the synthetic responsive pixel
    #[arg(long, default_value_t = 7)]
    signal_col: usize,

    /// Response noise standard deviation for the synthetic recording
    #[arg(long, default_value_t = 0.1)]
    noise: f64,

    /// Random seed for the synthetic recording
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Where to write the Method 1 heatmap
    #[arg(short, long, default_value = "correlation_map.png")]
    output: PathBuf,

    /// Skip rendering the heatmap
    #[arg(long, default_value_t = false)]
    no_plot: bool,

    /// Pixels per correlation map cell in the heatmap
    #[arg(long, default_value_t = 40)]
    cell_size: u32,

    /// TrueType font for the heatmap title (system fonts are tried otherwise)
    #[arg(long)]
    font: Option<PathBuf>,

    /// Also write the Method 1 correlation map as .npy
    #[arg(long)]
    save_map: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    let recording = match (&args.stimulus, &args.response) {
        (Some(stimulus), Some(response)) if !args.synthetic => {
            info!("Loading stimulus {} and response {}", stimulus.display(), response.display());
            Recording::from_npy_files(stimulus, response)?
        }
        _ => {
            let config = SyntheticConfig {
                samples: args.samples,
                height: args.height,
                width: args.width,
                signal_row: args.signal_row,
                signal_col: args.signal_col,
                noise: args.noise,
                seed: args.seed,
            };
            info!("Generating synthetic recording (seed {})", config.seed);
            config.generate()?
        }
    };

    // Method 1
    let pixelwise = estimate_receptive_field(CorrelationMethod::Pixelwise, &recording)?;
    println!("{}", format_report_line(&pixelwise));

    if let Some(path) = &args.save_map {
        save_map(path, &pixelwise.map)?;
    }

    if !args.no_plot {
        let config = HeatmapConfig {
            cell_size: args.cell_size,
            font_path: args.font.clone(),
            ..HeatmapConfig::default()
        };
        let heatmap = render_heatmap(&pixelwise.map, &pixelwise.peaks, &config)?;
        if let Err(e) = save_heatmap(&heatmap, &args.output, &pixelwise) {
            error!("Failed to save heatmap to {}: {}", args.output.display(), e);
            return Err(e.into());
        }
    }

    // Method 2
    let contraction = estimate_receptive_field(CorrelationMethod::TensorContraction, &recording)?;
    println!("{}", format_report_line(&contraction));

    Ok(())
}
