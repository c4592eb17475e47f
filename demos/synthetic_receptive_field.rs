//! Example mapping the receptive field of a simulated neuron
//!
//! A white-noise movie drives a neuron that only watches pixel (3, 7). Both
//! correlation methods should recover that pixel.

use receptive_field_mapper::{
    estimate_receptive_field, format_report_line, render_heatmap, save_heatmap, CorrelationMethod, HeatmapConfig,
    SyntheticConfig,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let recording = SyntheticConfig::default().generate()?;

    let pixelwise = estimate_receptive_field(CorrelationMethod::Pixelwise, &recording)?;
    println!("{}", format_report_line(&pixelwise));

    let heatmap = render_heatmap(&pixelwise.map, &pixelwise.peaks, &HeatmapConfig::default())?;
    save_heatmap(&heatmap, "synthetic_correlation_map.png", &pixelwise)?;

    let contraction = estimate_receptive_field(CorrelationMethod::TensorContraction, &recording)?;
    println!("{}", format_report_line(&contraction));

    Ok(())
}
