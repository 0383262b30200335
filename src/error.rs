use std::fmt;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors returned while building or unpacking a symbol image.
///
/// Rendering itself is total once its inputs are valid, so every variant
/// except the data URL ones describes a rejected argument.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("a symbol needs between 14 and 177 cells per side, got {0}")]
    InvalidCells(usize),

    #[error("canvas size must be a positive finite number, got {0}")]
    InvalidSize(f64),

    #[error("color {0:?} cannot be written into SVG markup")]
    InvalidColor(String),

    #[error("not a base64 encoded SVG data URL")]
    NotSvgDataUrl,

    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decoded markup is not UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),

    #[error("cannot format markup")]
    Format(#[from] fmt::Error),
}
