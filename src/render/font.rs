//! # Bitmap Text
//!
//! Field text rendering on top of [`Canvas`], using the Spleen bitmap font
//! family. Three faces cover the check typography: a 12×24 face for the
//! amount and free-text lines, an 8×16 face for the date, and a 6×12 face
//! for the window HUD. Bold is synthesized by double-striking one pixel to
//! the right, and an integer scale factor lets the print path reuse the same
//! glyphs at print resolution.

use spleen_font::{PSF2Font, FONT_12X24, FONT_6X12, FONT_8X16};

use super::canvas::Canvas;

/// A font face available to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    /// 12×24, fixed width. Amount in words, beneficiary, location.
    Body,
    /// 8×16. The date line.
    Small,
    /// 6×12. Window HUD and form labels only.
    Hud,
}

impl FontFace {
    pub fn char_width(&self) -> usize {
        match self {
            FontFace::Body => 12,
            FontFace::Small => 8,
            FontFace::Hud => 6,
        }
    }

    pub fn char_height(&self) -> usize {
        match self {
            FontFace::Body => 24,
            FontFace::Small => 16,
            FontFace::Hud => 12,
        }
    }

    fn data(&self) -> &'static [u8] {
        match self {
            FontFace::Body => FONT_12X24,
            FontFace::Small => FONT_8X16,
            FontFace::Hud => FONT_6X12,
        }
    }

    /// Baseline distance from the glyph top. Spleen reserves roughly a sixth
    /// of the cell below the baseline for descenders.
    fn ascent(&self) -> usize {
        self.char_height() - self.char_height() / 6
    }
}

/// Pixel width of a string at a given face and scale.
pub fn text_width(text: &str, face: FontFace, scale: usize) -> usize {
    text.chars().count() * face.char_width() * scale
}

/// Draw a string with its baseline at `(x, baseline_y)`.
///
/// Characters missing from the font render as a box outline so a bad input
/// is visible instead of silently absent.
pub fn draw_text(
    canvas: &mut Canvas,
    x: i32,
    baseline_y: i32,
    text: &str,
    face: FontFace,
    scale: usize,
    bold: bool,
    color: u32,
) {
    let scale = scale.max(1);
    let cell_w = (face.char_width() * scale) as i32;
    let top = baseline_y - (face.ascent() * scale) as i32;
    let mut font = PSF2Font::new(face.data()).unwrap();

    for (i, ch) in text.chars().enumerate() {
        let glyph_x = x + i as i32 * cell_w;
        let utf8 = ch.to_string();

        if let Some(glyph) = font.glyph_for_utf8(utf8.as_bytes()) {
            for (row_y, row) in glyph.enumerate() {
                for (col_x, on) in row.enumerate() {
                    if !on {
                        continue;
                    }
                    stamp(canvas, glyph_x, top, col_x, row_y, scale, color);
                    if bold {
                        stamp(canvas, glyph_x + scale as i32, top, col_x, row_y, scale, color);
                    }
                }
            }
        } else if ch != ' ' {
            draw_box(canvas, glyph_x, top, face, scale, color);
        }
    }
}

/// Paint one source pixel as a scale×scale block.
#[inline]
fn stamp(canvas: &mut Canvas, origin_x: i32, origin_y: i32, col: usize, row: usize, scale: usize, color: u32) {
    let px = origin_x + (col * scale) as i32;
    let py = origin_y + (row * scale) as i32;
    for dy in 0..scale as i32 {
        for dx in 0..scale as i32 {
            canvas.put(px + dx, py + dy, color);
        }
    }
}

/// Box outline for characters the font does not cover.
fn draw_box(canvas: &mut Canvas, x: i32, y: i32, face: FontFace, scale: usize, color: u32) {
    let w = (face.char_width() * scale) as i32;
    let h = (face.char_height() * scale) as i32;
    for dx in 0..w {
        canvas.put(x + dx, y, color);
        canvas.put(x + dx, y + h - 1, color);
    }
    for dy in 0..h {
        canvas.put(x, y + dy, color);
        canvas.put(x + w - 1, y + dy, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::canvas::{BLACK, WHITE};

    fn black_count(canvas: &Canvas) -> usize {
        canvas.pixels.iter().filter(|&&p| p == BLACK).count()
    }

    #[test]
    fn drawing_text_marks_pixels() {
        let mut canvas = Canvas::new(200, 60, WHITE);
        draw_text(&mut canvas, 4, 30, "Alger", FontFace::Body, 1, false, BLACK);
        assert!(black_count(&canvas) > 0);
    }

    #[test]
    fn bold_strikes_more_pixels() {
        let mut regular = Canvas::new(200, 60, WHITE);
        let mut bold = Canvas::new(200, 60, WHITE);
        draw_text(&mut regular, 4, 30, "123", FontFace::Body, 1, false, BLACK);
        draw_text(&mut bold, 4, 30, "123", FontFace::Body, 1, true, BLACK);
        assert!(black_count(&bold) > black_count(&regular));
    }

    #[test]
    fn scale_multiplies_footprint() {
        let mut s1 = Canvas::new(400, 120, WHITE);
        let mut s2 = Canvas::new(400, 120, WHITE);
        draw_text(&mut s1, 4, 40, "7", FontFace::Body, 1, false, BLACK);
        draw_text(&mut s2, 4, 80, "7", FontFace::Body, 2, false, BLACK);
        let c1 = black_count(&s1);
        let c2 = black_count(&s2);
        assert_eq!(c2, c1 * 4);
    }

    #[test]
    fn text_width_accounts_for_face_and_scale() {
        assert_eq!(text_width("abcd", FontFace::Body, 1), 48);
        assert_eq!(text_width("abcd", FontFace::Small, 1), 32);
        assert_eq!(text_width("ab", FontFace::Body, 3), 72);
    }

    #[test]
    fn glyphs_stay_above_baseline_mostly() {
        // The baseline sits below the bulk of the glyph: drawing at a
        // baseline near the canvas top should still put ink on the canvas
        // only below y=0 (clipped), so a baseline well inside draws fully.
        let mut canvas = Canvas::new(100, 100, WHITE);
        draw_text(&mut canvas, 4, 50, "X", FontFace::Body, 1, false, BLACK);
        let first_black_row = (0..100)
            .find(|&y| (0..100).any(|x| canvas.pixels[y * 100 + x] == BLACK))
            .unwrap();
        assert!(first_black_row >= 26, "glyph top at {first_black_row}");
        assert!(first_black_row < 50);
    }
}
