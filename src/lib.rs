//! Placeholder symbols for tour tickets.
//!
//! A payload, usually a ticket validation URL, is turned into a 21×21 grid
//! resembling a QR code: three finder regions in the corners, timing lines
//! along row and column 6, and data cells derived from the payload. The
//! grid is rendered as SVG and wrapped into a `data:` URL, ready to be
//! used as an image source.
//!
//! ```rust
//! let url = ticketqr::render_symbol("OST-ABC123-XYZ", 150.0).unwrap();
//! assert!(url.starts_with("data:image/svg+xml;base64,"));
//! ```
//!
//! The steps are also available individually:
//!
//! 1. [encode] maps the payload to a short sequence,
//! 2. [synthesize_grid] builds the [Bitmap],
//! 3. [serialize_to_svg] renders it,
//! 4. [wrap_as_data_url] embeds the markup.
//!
//! The symbol is *not* a standards compliant QR code. It has no error
//! correction and no format information, and scanners will not read it.
//! It is deterministic though: the same payload and size always give the
//! same bytes.
mod error;
mod symbol_size;

pub mod config;
pub mod data_url;
pub mod encoding;
pub mod placement;
pub mod svg;
pub mod ticket;

pub use data_url::{unwrap_data_url, wrap_as_data_url};
pub use encoding::{encode, EncodedSequence};
pub use error::RenderError;
pub use placement::{classify_cell, is_finder_filled, synthesize_grid, Bitmap, Region};
pub use svg::{serialize_to_svg, serialize_to_svg_with, SvgStyle};
pub use symbol_size::{FinderCorner, SymbolSize};

use tracing::debug;

/// Render `payload` as a standard 21×21 symbol on a `size × size` canvas
/// and return it as an SVG data URL.
///
/// Fails only if `size` is not a positive finite number.
pub fn render_symbol(payload: &str, size: f64) -> Result<String, RenderError> {
    let encoded = encode(payload);
    let grid = synthesize_grid(&encoded, SymbolSize::STANDARD);
    let svg = serialize_to_svg(&grid, size)?;
    debug!(
        payload_len = payload.len(),
        size,
        svg_len = svg.len(),
        "rendered symbol"
    );
    Ok(wrap_as_data_url(&svg))
}
