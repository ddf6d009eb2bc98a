//! 颜色常量, 格式 0x00RRGGBB

pub type Color = u32;

pub const BLACK: Color = 0x00000000;
pub const WHITE: Color = 0x00FFFFFF;
pub const RED: Color = 0x00FF0000;
pub const GREEN: Color = 0x0000FF00;
pub const BLUE: Color = 0x000000FF;

/// 透明哨兵值, 最高字节非零, 不会与任何打包颜色冲突
pub const TRANSPARENT: Color = 0xFF000000;

pub const fn pack_rgb(r: u8, g: u8, b: u8) -> Color {
    ((r as Color) << 16) | ((g as Color) << 8) | b as Color
}
