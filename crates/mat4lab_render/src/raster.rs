//! CPU text framebuffer

use mat4lab_display::TextTarget;

use crate::font::{self, GLYPH_ADVANCE, GLYPH_WIDTH};

/// RGBA framebuffer that rasterizes text with the embedded font.
///
/// This is the demo's implementation of [`TextTarget`]: `draw_text`
/// blits glyphs into the pixel buffer, and the blit pipeline uploads
/// the buffer to the GPU once per frame. Drawing outside the buffer is
/// clipped, never an error.
pub struct TextRaster {
    width: u32,
    height: u32,
    scale: u32,
    text_color: [u8; 4],
    clear_color: [u8; 4],
    pixels: Vec<u8>,
}

impl TextRaster {
    /// Create a raster matching the window's pixel size
    pub fn new(width: u32, height: u32) -> Self {
        let mut raster = Self {
            width: width.max(1),
            height: height.max(1),
            scale: 1,
            text_color: [0xFF, 0xFF, 0xFF, 0xFF],
            clear_color: [0x00, 0x00, 0x00, 0xFF],
            pixels: Vec::new(),
        };
        raster.pixels = vec![0; (raster.width * raster.height * 4) as usize];
        raster.clear();
        raster
    }

    /// Integer glyph scale factor (1 = native 5x7 glyphs)
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.max(1);
        self
    }

    /// Set text and background colors from normalized RGBA
    pub fn with_colors(mut self, text: [f32; 4], background: [f32; 4]) -> Self {
        self.text_color = color_to_bytes(text);
        self.clear_color = color_to_bytes(background);
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major from the top-left
    pub fn bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Reallocate for a new window size and clear
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width.max(1);
        self.height = height.max(1);
        self.pixels = vec![0; (self.width * self.height * 4) as usize];
        self.clear();
    }

    /// Fill the whole buffer with the background color
    pub fn clear(&mut self) {
        for pixel in self.pixels.chunks_exact_mut(4) {
            pixel.copy_from_slice(&self.clear_color);
        }
    }

    fn set_pixel(&mut self, x: i32, y: i32) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let offset = ((y as u32 * self.width + x as u32) * 4) as usize;
        self.pixels[offset..offset + 4].copy_from_slice(&self.text_color);
    }

    fn blit_glyph(&mut self, x: i32, y: i32, rows: [u8; 7]) {
        let scale = self.scale as i32;
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (0x10 >> col) == 0 {
                    continue;
                }
                let px = x + col as i32 * scale;
                let py = y + row as i32 * scale;
                for dy in 0..scale {
                    for dx in 0..scale {
                        self.set_pixel(px + dx, py + dy);
                    }
                }
            }
        }
    }
}

impl TextTarget for TextRaster {
    fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        let advance = (GLYPH_ADVANCE * self.scale) as i32;
        for (i, c) in text.chars().enumerate() {
            if let Some(rows) = font::glyph(c) {
                self.blit_glyph(x + i as i32 * advance, y, rows);
            }
        }
    }
}

fn color_to_bytes(color: [f32; 4]) -> [u8; 4] {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    [
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        channel(color[3]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(raster: &TextRaster, x: u32, y: u32) -> [u8; 4] {
        let offset = ((y * raster.width() + x) * 4) as usize;
        let bytes = raster.bytes();
        [
            bytes[offset],
            bytes[offset + 1],
            bytes[offset + 2],
            bytes[offset + 3],
        ]
    }

    #[test]
    fn test_clear_fills_background() {
        let mut raster = TextRaster::new(16, 16).with_colors([1.0; 4], [0.1, 0.2, 0.3, 1.0]);
        raster.clear();
        assert_eq!(pixel(&raster, 0, 0), [26, 51, 77, 255]);
        assert_eq!(pixel(&raster, 15, 15), [26, 51, 77, 255]);
    }

    #[test]
    fn test_draw_text_sets_text_color_pixels() {
        let mut raster = TextRaster::new(32, 16).with_colors([1.0; 4], [0.0, 0.0, 0.0, 1.0]);
        raster.clear();
        raster.draw_text(0, 0, "1");

        let lit: usize = raster
            .bytes()
            .chunks_exact(4)
            .filter(|p| p[0] == 255)
            .count();
        assert!(lit > 0, "glyph should light some pixels");

        // Glyph '1' has its center column set on the top row
        assert_eq!(pixel(&raster, 2, 0), [255, 255, 255, 255]);
    }

    #[test]
    fn test_draw_text_clips_at_edges() {
        let mut raster = TextRaster::new(8, 8);
        raster.draw_text(-100, -100, "X");
        raster.draw_text(100, 100, "X");
        raster.draw_text(6, 6, "X"); // partially off-screen
    }

    #[test]
    fn test_unknown_characters_leave_gap() {
        let mut raster = TextRaster::new(64, 16).with_colors([1.0; 4], [0.0, 0.0, 0.0, 1.0]);
        raster.clear();
        raster.draw_text(0, 0, "€1");

        // The unsupported glyph is skipped but still advances, so '1'
        // starts at the second cell.
        assert_eq!(pixel(&raster, 2, 0), [0, 0, 0, 255]);
        assert_eq!(pixel(&raster, 2 + GLYPH_ADVANCE as u32, 0), [255, 255, 255, 255]);
    }

    #[test]
    fn test_scale_expands_glyph_blocks() {
        let mut raster = TextRaster::new(32, 32)
            .with_scale(2)
            .with_colors([1.0; 4], [0.0, 0.0, 0.0, 1.0]);
        raster.clear();
        raster.draw_text(0, 0, "1");

        // '1' top row bit at column 2 becomes a 2x2 block at (4..6, 0..2)
        assert_eq!(pixel(&raster, 4, 0), [255, 255, 255, 255]);
        assert_eq!(pixel(&raster, 5, 1), [255, 255, 255, 255]);
    }

    #[test]
    fn test_resize_reallocates() {
        let mut raster = TextRaster::new(8, 8);
        raster.resize(20, 10);
        assert_eq!(raster.bytes().len(), 20 * 10 * 4);
        assert_eq!((raster.width(), raster.height()), (20, 10));
    }
}
