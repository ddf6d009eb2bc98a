use anyhow::{Context, Result};
use image::ImageReader;
use log::debug;
use std::path::Path;

use crate::pixel::Pixel;

#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    /// 按行优先顺序
    pub pixels: Vec<Pixel>,
}

/// 读取图片并统一转换为 RGBA8
pub fn load_pixels(path: impl AsRef<Path>) -> Result<LoadedImage> {
    let path = path.as_ref();
    let img = ImageReader::open(path)
        .with_context(|| format!("Failed to open image {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("Failed to read image {}", path.display()))?
        .decode()
        .with_context(|| format!("Failed to decode image {}", path.display()))?
        .into_rgba8();

    let (width, height) = img.dimensions();
    debug!("Loaded {} ({width}x{height})", path.display());

    let pixels = img.pixels().map(|p| Pixel::from(*p)).collect();
    Ok(LoadedImage {
        width,
        height,
        pixels,
    })
}
