//! SVG rendering of a [Bitmap].
//!
//! The markup consists of a full-canvas background rectangle followed by
//! one square per dark cell in row-major order, so identical bitmaps always
//! give byte-identical output.
use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::placement::Bitmap;

/// Default canvas side length.
pub const DEFAULT_SIZE: f64 = 200.0;
/// Default color of dark cells.
pub const DEFAULT_DARK: &str = "#0A0A0A";
/// Default background color.
pub const DEFAULT_LIGHT: &str = "white";

/// Canvas size and colors used by [serialize_to_svg_with].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SvgStyle {
    /// Side length of the square canvas in user units.
    pub size: f64,
    /// Fill of dark cells, any SVG paint value.
    pub dark: String,
    /// Fill of the background.
    pub light: String,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            dark: DEFAULT_DARK.to_owned(),
            light: DEFAULT_LIGHT.to_owned(),
        }
    }
}

impl SvgStyle {
    /// Check that the style can be written into markup.
    pub fn validate(&self) -> Result<(), RenderError> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(RenderError::InvalidSize(self.size));
        }
        for color in [&self.dark, &self.light] {
            if color.is_empty() || color.contains(['<', '>', '"', '\'', '&']) {
                return Err(RenderError::InvalidColor(color.clone()));
            }
        }
        Ok(())
    }
}

/// Render `bitmap` on a `size × size` canvas with the default colors.
pub fn serialize_to_svg(bitmap: &Bitmap, size: f64) -> Result<String, RenderError> {
    serialize_to_svg_with(
        bitmap,
        &SvgStyle {
            size,
            ..SvgStyle::default()
        },
    )
}

/// Render `bitmap` with the given style.
pub fn serialize_to_svg_with(bitmap: &Bitmap, style: &SvgStyle) -> Result<String, RenderError> {
    style.validate()?;
    let size = style.size;
    let cell = size / bitmap.width() as f64;

    // about 80 bytes per cell if every cell is dark
    let mut svg = String::with_capacity(200 + bitmap.width() * bitmap.height() * 80);
    write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\">\
         <rect width=\"{size}\" height=\"{size}\" fill=\"{}\"/>",
        style.light
    )?;
    for (x, y) in bitmap.pixels() {
        write!(
            svg,
            "<rect x=\"{}\" y=\"{}\" width=\"{cell}\" height=\"{cell}\" fill=\"{}\"/>",
            x as f64 * cell,
            y as f64 * cell,
            style.dark
        )?;
    }
    svg.push_str("</svg>");
    Ok(svg)
}
