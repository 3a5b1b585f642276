//! # Software Canvas
//!
//! An RGB pixel buffer with the handful of drawing primitives the check
//! renderer needs. The same buffer is blitted into the preview window
//! (0RGB `u32` layout, as minifb expects) or encoded to PNG for the print
//! path and the `render` subcommand.

use std::path::Path;

use image::RgbImage;

use crate::error::ChequierError;
use crate::layout::Rect;

/// Pack an RGB triple into the 0RGB `u32` layout.
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

pub const WHITE: u32 = rgb(255, 255, 255);
pub const BLACK: u32 = rgb(0, 0, 0);
/// Placeholder background fill (alice blue).
pub const PLACEHOLDER_FILL: u32 = rgb(240, 248, 255);
/// Placeholder outline gray.
pub const PLACEHOLDER_LINE: u32 = rgb(200, 200, 200);
/// Drag marker accent (the usual selection blue).
pub const ACCENT: u32 = rgb(0, 120, 215);

/// A fixed-size RGB drawing surface.
pub struct Canvas {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u32>,
}

impl Canvas {
    pub fn new(width: usize, height: usize, fill: u32) -> Canvas {
        Canvas {
            width,
            height,
            pixels: vec![fill; width * height],
        }
    }

    /// Set one pixel; out-of-bounds coordinates are ignored.
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.pixels[y as usize * self.width + x as usize] = color;
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let x0 = (rect.x.max(0.0) as usize).min(self.width);
        let y0 = (rect.y.max(0.0) as usize).min(self.height);
        let x1 = ((rect.x + rect.w).max(0.0) as usize).min(self.width);
        let y1 = ((rect.y + rect.h).max(0.0) as usize).min(self.height);
        for y in y0..y1 {
            let row = y * self.width;
            self.pixels[row + x0..row + x1.max(x0)].fill(color);
        }
    }

    /// One-pixel rectangle outline.
    pub fn stroke_rect(&mut self, rect: Rect, color: u32) {
        let (x0, y0) = (rect.x as i32, rect.y as i32);
        let (x1, y1) = ((rect.x + rect.w) as i32 - 1, (rect.y + rect.h) as i32 - 1);
        for x in x0..=x1 {
            self.put(x, y0, color);
            self.put(x, y1, color);
        }
        for y in y0..=y1 {
            self.put(x0, y, color);
            self.put(x1, y, color);
        }
    }

    pub fn hline(&mut self, x0: i32, x1: i32, y: i32, color: u32) {
        for x in x0.min(x1)..=x0.max(x1) {
            self.put(x, y, color);
        }
    }

    /// Blit an image into `rect`, scaled with nearest-neighbor sampling.
    ///
    /// Template scans are photographs; nearest-neighbor is plenty for a
    /// positioning preview and keeps the repaint cheap.
    pub fn blit_scaled(&mut self, img: &RgbImage, rect: Rect) {
        let (src_w, src_h) = img.dimensions();
        if src_w == 0 || src_h == 0 || rect.w < 1.0 || rect.h < 1.0 {
            return;
        }
        let x0 = rect.x.max(0.0) as usize;
        let y0 = rect.y.max(0.0) as usize;
        let x1 = ((rect.x + rect.w) as usize).min(self.width);
        let y1 = ((rect.y + rect.h) as usize).min(self.height);
        for y in y0..y1 {
            let sy = ((y as f32 - rect.y) / rect.h * src_h as f32) as u32;
            let sy = sy.min(src_h - 1);
            for x in x0..x1 {
                let sx = ((x as f32 - rect.x) / rect.w * src_w as f32) as u32;
                let sx = sx.min(src_w - 1);
                let p = img.get_pixel(sx, sy).0;
                self.pixels[y * self.width + x] = rgb(p[0], p[1], p[2]);
            }
        }
    }

    /// Filled disc, used for the drag marker overlay.
    pub fn fill_disc(&mut self, cx: i32, cy: i32, radius: i32, color: u32) {
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= radius * radius {
                    self.put(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Encode the canvas as a PNG file.
    pub fn save_png(&self, path: &Path) -> Result<(), ChequierError> {
        let mut img = RgbImage::new(self.width as u32, self.height as u32);
        for y in 0..self.height {
            for x in 0..self.width {
                let p = self.pixels[y * self.width + x];
                img.put_pixel(
                    x as u32,
                    y as u32,
                    image::Rgb([(p >> 16) as u8, (p >> 8) as u8, p as u8]),
                );
            }
        }
        img.save(path)
            .map_err(|e| ChequierError::Render(format!("failed to save PNG: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_rect_clips_to_canvas() {
        let mut canvas = Canvas::new(10, 10, WHITE);
        canvas.fill_rect(Rect::new(-5.0, -5.0, 100.0, 100.0), BLACK);
        assert!(canvas.pixels.iter().all(|&p| p == BLACK));
    }

    #[test]
    fn put_ignores_out_of_bounds() {
        let mut canvas = Canvas::new(4, 4, WHITE);
        canvas.put(-1, 0, BLACK);
        canvas.put(0, -1, BLACK);
        canvas.put(4, 0, BLACK);
        canvas.put(0, 4, BLACK);
        assert!(canvas.pixels.iter().all(|&p| p == WHITE));
    }

    #[test]
    fn blit_scaled_fills_target_rect() {
        let mut canvas = Canvas::new(20, 20, WHITE);
        let mut img = RgbImage::new(2, 2);
        for p in img.pixels_mut() {
            *p = image::Rgb([10, 20, 30]);
        }
        canvas.blit_scaled(&img, Rect::new(5.0, 5.0, 10.0, 10.0));
        assert_eq!(canvas.pixels[7 * 20 + 7], rgb(10, 20, 30));
        // Outside the rect untouched
        assert_eq!(canvas.pixels[0], WHITE);
    }

    #[test]
    fn blit_scaled_skips_empty_source() {
        let mut canvas = Canvas::new(8, 8, WHITE);
        let img = RgbImage::new(0, 0);
        canvas.blit_scaled(&img, Rect::new(0.0, 0.0, 8.0, 8.0));
        assert!(canvas.pixels.iter().all(|&p| p == WHITE));
    }

    #[test]
    fn disc_is_centered() {
        let mut canvas = Canvas::new(11, 11, WHITE);
        canvas.fill_disc(5, 5, 3, ACCENT);
        assert_eq!(canvas.pixels[5 * 11 + 5], ACCENT);
        assert_eq!(canvas.pixels[0], WHITE);
    }
}
