use crate::colors::{Color, TRANSPARENT};

/// 生成的颜色表在使用端的视图
#[derive(Debug, Clone, Copy)]
pub struct RawImage<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [Color],
}

impl<'a> RawImage<'a> {
    pub const fn new(width: usize, height: usize, data: &'a [Color]) -> Self {
        Self { width, height, data }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x).copied()
    }

    /// 绘制到帧缓冲, 跳过透明像素, 超出边界的部分丢弃
    pub fn blit(&self, framebuffer: &mut [Color], fb_width: usize, x0: usize, y0: usize) {
        if fb_width == 0 {
            return;
        }
        let fb_height = framebuffer.len() / fb_width;

        for y in 0..self.height {
            let fy = y0 + y;
            if fy >= fb_height {
                break;
            }
            for x in 0..self.width {
                let fx = x0 + x;
                if fx >= fb_width {
                    break;
                }
                match self.pixel(x, y) {
                    Some(color) if color != TRANSPARENT => framebuffer[fy * fb_width + fx] = color,
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLUE, RED};
    use crate::pixel::Pixel;
    use crate::transcoder::encode_pixels;

    const LOGO: [Color; 4] = [RED, TRANSPARENT, TRANSPARENT, BLUE];

    #[test]
    fn blit_skips_transparent() {
        let img = RawImage::new(2, 2, &LOGO);
        let mut fb = [0x00111111; 9];
        img.blit(&mut fb, 3, 1, 1);
        assert_eq!(
            fb,
            [
                0x00111111, 0x00111111, 0x00111111, //
                0x00111111, RED, 0x00111111, //
                0x00111111, 0x00111111, BLUE,
            ]
        );
    }

    #[test]
    fn blit_clips_at_edges() {
        let img = RawImage::new(2, 2, &LOGO);
        let mut fb = [0u32; 4];
        img.blit(&mut fb, 2, 1, 1);
        assert_eq!(fb, [0, 0, 0, RED]);
    }

    #[test]
    fn blit_encoded_table() {
        let pixels = [
            Pixel::new(255, 0, 0, 255),
            Pixel::new(9, 9, 9, 127),
            Pixel::new(9, 9, 9, 0),
            Pixel::new(0, 0, 255, 128),
        ];
        let table: Vec<Color> = encode_pixels(&pixels, 128).iter().map(|e| e.value()).collect();
        assert_eq!(table, LOGO);

        let mut fb = [0x00111111; 4];
        RawImage::new(2, 2, &table).blit(&mut fb, 2, 0, 0);
        assert_eq!(fb, [RED, 0x00111111, 0x00111111, BLUE]);
    }

    #[test]
    fn pixel_out_of_range() {
        let img = RawImage::new(2, 2, &LOGO);
        assert_eq!(img.pixel(1, 1), Some(BLUE));
        assert_eq!(img.pixel(2, 0), None);
    }
}
