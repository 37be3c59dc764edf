//! Static colour-matrix filters for the three image layers.
//!
//! These carry no engine state; the web host renders them once into an
//! inline SVG `<filter>` per layer and points each layer's CSS `filter` at it.

use std::fmt::Write;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorSpace {
    /// Additive: each layer keeps a single channel.
    #[default]
    Rgb,
    /// Subtractive: each layer drops a single channel.
    Cmyk,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown colour space `{0}` (expected rgb or cmyk)")]
pub struct ParseColorSpaceError(pub String);

impl FromStr for ColorSpace {
    type Err = ParseColorSpaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rgb" | "RGB" => Ok(ColorSpace::Rgb),
            "cmyk" | "CMYK" => Ok(ColorSpace::Cmyk),
            other => Err(ParseColorSpaceError(other.to_string())),
        }
    }
}

/// The base image plus the two animated channel copies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Red,
    Green,
    Base,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::Red, Layer::Green, Layer::Base];

    /// Suffix used in filter element ids.
    pub fn suffix(self) -> &'static str {
        match self {
            Layer::Red => "r",
            Layer::Green => "g",
            Layer::Base => "b",
        }
    }
}

pub type ColorMatrix = [f32; 20];

#[rustfmt::skip]
const RGB_RED: ColorMatrix = [
    1.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 1.0, 0.0,
];
#[rustfmt::skip]
const RGB_GREEN: ColorMatrix = [
    0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 1.0, 0.0,
];
#[rustfmt::skip]
const RGB_BLUE: ColorMatrix = [
    0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 1.0, 0.0,
];
#[rustfmt::skip]
const CMY_NO_RED: ColorMatrix = [
    0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 1.0, 0.0,
];
#[rustfmt::skip]
const CMY_NO_GREEN: ColorMatrix = [
    1.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 1.0, 0.0,
];
#[rustfmt::skip]
const CMY_NO_BLUE: ColorMatrix = [
    1.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 1.0, 0.0,
];

pub fn color_matrix(space: ColorSpace, layer: Layer) -> ColorMatrix {
    match (space, layer) {
        (ColorSpace::Rgb, Layer::Red) => RGB_RED,
        (ColorSpace::Rgb, Layer::Green) => RGB_GREEN,
        (ColorSpace::Rgb, Layer::Base) => RGB_BLUE,
        (ColorSpace::Cmyk, Layer::Red) => CMY_NO_RED,
        (ColorSpace::Cmyk, Layer::Green) => CMY_NO_GREEN,
        (ColorSpace::Cmyk, Layer::Base) => CMY_NO_BLUE,
    }
}

/// Matrix in `feColorMatrix` `values` syntax: rows separated by wide gaps.
pub fn matrix_values(space: ColorSpace, layer: Layer) -> String {
    let m = color_matrix(space, layer);
    let mut out = String::with_capacity(64);
    for (row_i, row) in m.chunks(5).enumerate() {
        if row_i > 0 {
            out.push_str("   ");
        }
        for (i, v) in row.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            _ = write!(out, "{}", v);
        }
    }
    out
}

pub fn filter_id(base_id: &str, layer: Layer) -> String {
    format!("{}-{}", base_id, layer.suffix())
}

/// CSS `filter` value for a layer, with the optional grayscale pre-pass first.
pub fn filter_css(grayscale: bool, filter_id: &str) -> String {
    if grayscale {
        format!("grayscale(100%) url(#{})", filter_id)
    } else {
        format!("url(#{})", filter_id)
    }
}
