use anyhow::{Context, Result};
use log::debug;
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::pixel::{EncodedColor, Pixel};

pub fn encode_pixels(pixels: &[Pixel], threshold: u8) -> Vec<EncodedColor> {
    pixels
        .iter()
        .map(|p| EncodedColor::from_pixel(*p, threshold))
        .collect()
}

/// 数组字面量: 首行 `[`, 每项一行, 末行 `];`
pub fn render_array(entries: &[EncodedColor]) -> String {
    let mut text = String::with_capacity(entries.len() * 16 + 8);
    text.push_str("[\n");
    for entry in entries {
        text.push_str("    ");
        text.push_str(&entry.to_string());
        text.push_str(",\n");
    }
    text.push_str("];\n");
    text
}

pub fn write_array<W: Write>(mut writer: W, entries: &[EncodedColor]) -> io::Result<()> {
    writer.write_all(render_array(entries).as_bytes())
}

/// 覆盖写入目标文件
pub fn write_file(path: impl AsRef<Path>, entries: &[EncodedColor]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_array(&mut writer, entries)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;
    debug!("Wrote {} entries to {}", entries.len(), path.display());
    Ok(())
}
