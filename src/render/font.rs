use crate::error::{ReceptiveFieldError, Result};
use ab_glyph::FontVec;
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Locations tried when no font path is configured.
pub const SYSTEM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Load a TrueType font from `path`.
pub fn load_font<P: AsRef<Path>>(path: P) -> Result<FontVec> {
    let bytes = std::fs::read(&path)?;
    FontVec::try_from_vec(bytes).map_err(|_| {
        ReceptiveFieldError::FontError(format!("{} is not a valid font", path.as_ref().display()))
    })
}

/// Resolve the font used for titles and labels.
///
/// An explicitly configured path must load. Without one, the first readable system
/// font wins; `None` means labels are skipped.
pub fn resolve_font(configured: Option<&PathBuf>) -> Result<Option<FontVec>> {
    if let Some(path) = configured {
        return load_font(path).map(Some);
    }

    for candidate in SYSTEM_FONT_PATHS {
        if let Ok(font) = load_font(candidate) {
            debug!("Using font {}", candidate);
            return Ok(Some(font));
        }
    }

    warn!("No usable font found; the heatmap is rendered without title and colorbar labels");
    Ok(None)
}
