pub mod font;

use crate::correlation::{CorrelationMap, PeakLocation, ReceptiveFieldEstimate};
use crate::error::Result;
use ab_glyph::{Font, PxScale};
use image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_rect_mut, draw_line_segment_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use std::path::{Path, PathBuf};

/// Colour palette for heatmap decorations
pub struct HeatmapColors;
impl HeatmapColors {
    // Peak marker - red
    pub const PEAK: Rgb<u8> = Rgb([255, 0, 0]);
    // Canvas, also used for NaN cells - white
    pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
    // Text, ticks and colorbar outline - black
    pub const TEXT: Rgb<u8> = Rgb([0, 0, 0]);
}

/// Layout and colour scaling for the rendered correlation map.
#[derive(Debug, Clone)]
pub struct HeatmapConfig {
    /// Edge length in pixels of one map cell.
    pub cell_size: u32,
    /// Values at or below `clim.0` are black, at or above `clim.1` white.
    pub clim: (f64, f64),
    /// Opacity of the peak marker.
    pub marker_alpha: f32,
    pub colorbar_width: u32,
    pub title_height: u32,
    pub margin: u32,
    pub font_size: f32,
    /// Font for title and labels; system fonts are tried when unset.
    pub font_path: Option<PathBuf>,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            cell_size: 40,
            clim: (-0.5, 0.5),
            marker_alpha: 0.5,
            colorbar_width: 20,
            title_height: 40,
            margin: 20,
            font_size: 16.0,
            font_path: None,
        }
    }
}

/// Map a correlation value onto an 8-bit gray level using the colour limits.
pub fn gray_level(value: f64, clim: (f64, f64)) -> Option<u8> {
    if value.is_nan() {
        return None;
    }
    let (low, high) = clim;
    let t = ((value - low) / (high - low)).clamp(0.0, 1.0);
    Some((t * 255.0).round() as u8)
}

/// Convert a correlation map to a grayscale image with one pixel per cell. NaN becomes white.
pub fn correlation_map_to_luma(map: &CorrelationMap, clim: (f64, f64)) -> GrayImage {
    let (height, width) = map.dim();
    GrayImage::from_fn(width as u32, height as u32, |x, y| {
        let value = map[[y as usize, x as usize]];
        Luma([gray_level(value, clim).unwrap_or(HeatmapColors::BACKGROUND.0[0])])
    })
}

/// Title naming the peak rows (y) and columns (x).
pub fn format_peak_title(peaks: &PeakLocation) -> String {
    format!(
        "Correlation map with neuron location at y={} and x={}",
        format_index_list(&peaks.rows()),
        format_index_list(&peaks.columns())
    )
}

fn format_index_list(indices: &[usize]) -> String {
    let joined: Vec<String> = indices.iter().map(|i| i.to_string()).collect();
    format!("[{}]", joined.join(" "))
}

/// Render the correlation map as an annotated heatmap.
///
/// Cells are scaled to `cell_size` squares, each peak gets a translucent red disc,
/// a vertical colorbar spans `clim`, and the peak coordinates are written as the title.
pub fn render_heatmap(map: &CorrelationMap, peaks: &PeakLocation, config: &HeatmapConfig) -> Result<RgbImage> {
    let font = font::resolve_font(config.font_path.as_ref())?;
    Ok(render_heatmap_with_font(map, peaks, config, font.as_ref()))
}

/// Render with an already loaded font; `None` skips all text.
pub fn render_heatmap_with_font<F: Font>(
    map: &CorrelationMap,
    peaks: &PeakLocation,
    config: &HeatmapConfig,
    font: Option<&F>,
) -> RgbImage {
    let (rows, cols) = map.dim();
    let cell = config.cell_size.max(1);
    let map_width = cols as u32 * cell;
    let map_height = rows as u32 * cell;

    let map_left = config.margin;
    let map_top = config.title_height;
    let bar_left = map_left + map_width + config.margin;
    let label_width = 50;

    let canvas_width = bar_left + config.colorbar_width + label_width;
    let canvas_height = map_top + map_height.max(1) + config.margin;
    let mut image = RgbImage::from_pixel(canvas_width, canvas_height, HeatmapColors::BACKGROUND);

    // Cells
    for ((row, col), &value) in map.indexed_iter() {
        let colour = match gray_level(value, config.clim) {
            Some(level) => Rgb([level, level, level]),
            None => HeatmapColors::BACKGROUND,
        };
        let x0 = map_left + col as u32 * cell;
        let y0 = map_top + row as u32 * cell;
        for y in y0..y0 + cell {
            for x in x0..x0 + cell {
                image.put_pixel(x, y, colour);
            }
        }
    }

    // Peak markers, alpha blended over the cells
    let mut marker_mask = GrayImage::new(canvas_width, canvas_height);
    let radius = (cell / 2) as i32;
    for &(row, col) in &peaks.coordinates {
        let centre_x = (map_left + col as u32 * cell + cell / 2) as i32;
        let centre_y = (map_top + row as u32 * cell + cell / 2) as i32;
        draw_filled_circle_mut(&mut marker_mask, (centre_x, centre_y), radius, Luma([255u8]));
        log::debug!("Peak marker at cell ({}, {}) value {:.3}", row, col, map[[row, col]]);
    }
    blend_mask(&mut image, &marker_mask, HeatmapColors::PEAK, config.marker_alpha);

    // Colorbar, high values on top
    let (low, high) = config.clim;
    if map_height > 0 {
        for y in 0..map_height {
            let t = 1.0 - y as f64 / (map_height.saturating_sub(1).max(1)) as f64;
            let level = gray_level(low + t * (high - low), config.clim).unwrap_or(0);
            for x in bar_left..bar_left + config.colorbar_width {
                image.put_pixel(x, map_top + y, Rgb([level, level, level]));
            }
        }
        let outline = Rect::at(bar_left as i32, map_top as i32).of_size(config.colorbar_width.max(1), map_height);
        draw_hollow_rect_mut(&mut image, outline, HeatmapColors::TEXT);
    }

    let Some(font) = font else {
        return image;
    };
    let scale = PxScale::from(config.font_size);

    // Colorbar ticks and labels
    let tick_right = (bar_left + config.colorbar_width) as f32;
    for (fraction, value) in [(0.0, high), (0.5, (low + high) / 2.0), (1.0, low)] {
        let y = map_top as f32 + fraction * map_height.saturating_sub(1) as f32;
        draw_line_segment_mut(&mut image, (tick_right, y), (tick_right + 4.0, y), HeatmapColors::TEXT);

        let label = format!("{:.1}", value);
        let (_, label_height) = text_size(scale, font, &label);
        let label_y = (y as i32 - label_height as i32 / 2).max(0);
        draw_text_mut(&mut image, HeatmapColors::TEXT, tick_right as i32 + 6, label_y, scale, font, &label);
    }

    // Title centred over the map
    let title = format_peak_title(peaks);
    let (title_width, title_height) = text_size(scale, font, &title);
    let title_x = (map_left as i32 + map_width as i32 / 2 - title_width as i32 / 2).max(0);
    let title_y = ((config.title_height as i32 - title_height as i32) / 2).max(0);
    draw_text_mut(&mut image, HeatmapColors::TEXT, title_x, title_y, scale, font, &title);

    image
}

fn blend_mask(image: &mut RgbImage, mask: &GrayImage, colour: Rgb<u8>, alpha: f32) {
    let alpha = alpha.clamp(0.0, 1.0);
    for (pixel, coverage) in image.pixels_mut().zip(mask.pixels()) {
        if coverage.0[0] == 0 {
            continue;
        }
        for (channel, &target) in pixel.0.iter_mut().zip(colour.0.iter()) {
            let blended = (1.0 - alpha) * *channel as f32 + alpha * target as f32;
            *channel = blended.round() as u8;
        }
    }
}

/// Save a rendered heatmap and log what it shows.
pub fn save_heatmap<P: AsRef<Path>>(image: &RgbImage, filename: P, estimate: &ReceptiveFieldEstimate) -> Result<()> {
    image.save(filename.as_ref())?;
    log::info!(
        "Heatmap saved: {} with {} peak(s). Processing time: {:.3}ms, Method: {}",
        filename.as_ref().display(),
        estimate.peaks.coordinates.len(),
        estimate.elapsed.as_secs_f64() * 1e3,
        estimate.method
    );
    Ok(())
}
