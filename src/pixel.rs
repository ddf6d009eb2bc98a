use std::fmt;

use image::Rgba;

use crate::colors::{self, Color};
use crate::config::TRANSPARENT_IDENT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_transparent(&self, threshold: u8) -> bool {
        self.a < threshold
    }
}

impl From<Rgba<u8>> for Pixel {
    fn from(Rgba([r, g, b, a]): Rgba<u8>) -> Self {
        Self::new(r, g, b, a)
    }
}

/// 输出表中的一项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodedColor {
    Transparent,
    Packed(Color),
}

impl EncodedColor {
    pub fn from_pixel(pixel: Pixel, threshold: u8) -> Self {
        if pixel.is_transparent(threshold) {
            EncodedColor::Transparent
        } else {
            EncodedColor::Packed(colors::pack_rgb(pixel.r, pixel.g, pixel.b))
        }
    }

    pub fn value(&self) -> Color {
        match self {
            EncodedColor::Transparent => colors::TRANSPARENT,
            EncodedColor::Packed(color) => *color,
        }
    }
}

impl fmt::Display for EncodedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodedColor::Transparent => f.write_str(TRANSPARENT_IDENT),
            EncodedColor::Packed(color) => write!(f, "0x{color:08X}"),
        }
    }
}
