//! Embedding markup as `data:` URLs.
//!
//! A data URL carries the whole image, so display surfaces can use it as an
//! image source without a network fetch.
use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::RenderError;

/// Prefix of every URL produced by [wrap_as_data_url].
pub const SVG_DATA_URL_PREFIX: &str = "data:image/svg+xml;base64,";

/// Wrap SVG markup into a base64 data URL.
pub fn wrap_as_data_url(markup: &str) -> String {
    let mut url = String::with_capacity(SVG_DATA_URL_PREFIX.len() + markup.len().div_ceil(3) * 4);
    url.push_str(SVG_DATA_URL_PREFIX);
    STANDARD.encode_string(markup, &mut url);
    url
}

/// Extract the markup from a URL created by [wrap_as_data_url].
pub fn unwrap_data_url(url: &str) -> Result<String, RenderError> {
    let payload = url
        .strip_prefix(SVG_DATA_URL_PREFIX)
        .ok_or(RenderError::NotSvgDataUrl)?;
    let bytes = STANDARD.decode(payload)?;
    Ok(String::from_utf8(bytes)?)
}
