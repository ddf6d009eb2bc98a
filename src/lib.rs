pub mod branding;
pub mod colors;
pub mod config;
pub mod loader;
pub mod pixel;
pub mod transcoder;

use anyhow::Result;
use log::info;

use crate::{config::Config, pixel::EncodedColor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    pub width: u32,
    pub height: u32,
    pub entries: usize,
    pub transparent: usize,
}

/// 读取图片, 编码为颜色表并写入目标文件
pub fn convert(config: &Config) -> Result<Conversion> {
    let image = loader::load_pixels(&config.input_path)?;
    let entries = transcoder::encode_pixels(&image.pixels, config.alpha_threshold);
    transcoder::write_file(&config.output_path, &entries)?;

    let conversion = Conversion {
        width: image.width,
        height: image.height,
        entries: entries.len(),
        transparent: entries
            .iter()
            .filter(|e| matches!(e, EncodedColor::Transparent))
            .count(),
    };
    info!(
        "Converted {} -> {} ({}x{}, {} transparent)",
        config.input_path.display(),
        config.output_path.display(),
        conversion.width,
        conversion.height,
        conversion.transparent
    );
    Ok(conversion)
}
