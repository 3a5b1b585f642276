//! # Check Renderer
//!
//! Stateless draw routine shared by the preview surface and the print path.
//!
//! Given a snapshot, a position table, and a target rectangle, it paints the
//! background (template scan or a placeholder sketch) and the five text
//! fields at their mapped positions. The caller decides the rectangle and an
//! integer font scale, which is how the same routine serves a screen preview
//! at scale 1 and a 300 DPI page without knowing the difference.

pub mod canvas;
pub mod font;

use image::RgbImage;

use crate::layout::Rect;
use crate::model::{CheckSnapshot, FieldName};
use crate::template::PositionTable;

use canvas::{Canvas, BLACK, PLACEHOLDER_FILL, PLACEHOLDER_LINE};
use font::FontFace;

/// Pixel offset added to the numeric amount's baseline so the number sits
/// inside the amount box of the scanned templates (at font scale 1).
pub const AMOUNT_Y_OFFSET_PX: i32 = 20;

/// Draw a complete check into `rect` on `canvas`.
///
/// With `draw_background` set, the template scan is scaled into the
/// rectangle; a missing or empty scan falls back to a placeholder sketch. The
/// snapshot and position table are never mutated.
pub fn draw(
    canvas: &mut Canvas,
    rect: Rect,
    snapshot: &CheckSnapshot,
    positions: &PositionTable,
    background: Option<&RgbImage>,
    draw_background: bool,
    scale: usize,
) {
    if draw_background {
        match background.filter(|img| is_usable(img)) {
            Some(img) => canvas.blit_scaled(img, rect),
            None => draw_placeholder(canvas, rect),
        }
    }

    let scale = scale.max(1);
    for (field, (fx, fy)) in positions.iter() {
        let (x, y) = rect.at_fraction(fx, fy);
        let text = field_text(snapshot, field);
        let (face, bold, y_offset) = field_style(field, scale);
        font::draw_text(
            canvas,
            x as i32,
            y as i32 + y_offset,
            &text,
            face,
            scale,
            bold,
            BLACK,
        );
    }
}

/// A decoded background can still be unusable (zero-size). Checked
/// explicitly rather than assumed from presence.
fn is_usable(img: &RgbImage) -> bool {
    img.width() > 0 && img.height() > 0
}

/// Font, weight, and baseline offset for a field.
fn field_style(field: FieldName, scale: usize) -> (FontFace, bool, i32) {
    match field {
        FieldName::AmountNum => (FontFace::Body, true, AMOUNT_Y_OFFSET_PX * scale as i32),
        FieldName::Date => (FontFace::Small, false, 0),
        _ => (FontFace::Body, false, 0),
    }
}

fn field_text(snapshot: &CheckSnapshot, field: FieldName) -> String {
    match field {
        FieldName::AmountNum => snapshot.amount_display(),
        FieldName::AmountWords => snapshot.words.clone(),
        FieldName::Beneficiary => snapshot.beneficiary.clone(),
        FieldName::Location => snapshot.location.clone(),
        FieldName::Date => snapshot.date_display(),
    }
}

/// Sketch a blank check: flat fill, an amount box in the upper-right
/// quadrant, and a horizontal rule where the words line usually sits.
fn draw_placeholder(canvas: &mut Canvas, rect: Rect) {
    canvas.fill_rect(rect, PLACEHOLDER_FILL);
    canvas.stroke_rect(
        Rect::new(
            rect.x + rect.w * 0.75,
            rect.y + rect.h * 0.02,
            rect.w * 0.22,
            rect.h * 0.12,
        ),
        PLACEHOLDER_LINE,
    );
    canvas.hline(
        (rect.x + rect.w * 0.1) as i32,
        (rect.x + rect.w * 0.9) as i32,
        (rect.y + rect.h * 0.35) as i32,
        PLACEHOLDER_LINE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::preview_rect;
    use canvas::{rgb, WHITE};
    use chrono::NaiveDate;

    fn sample_snapshot() -> CheckSnapshot {
        CheckSnapshot::new(
            11800.0,
            "Mohammed Benali",
            "Alger",
            NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
        )
    }

    fn count(canvas: &Canvas, color: u32) -> usize {
        canvas.pixels.iter().filter(|&&p| p == color).count()
    }

    #[test]
    fn placeholder_painted_when_background_missing() {
        let mut canvas = Canvas::new(900, 600, WHITE);
        let rect = preview_rect(900.0, 600.0);
        let positions = PositionTable::default();
        draw(&mut canvas, rect, &sample_snapshot(), &positions, None, true, 1);
        assert!(count(&canvas, PLACEHOLDER_FILL) > 0);
        assert!(count(&canvas, PLACEHOLDER_LINE) > 0);
        assert!(count(&canvas, BLACK) > 0, "field text missing");
    }

    #[test]
    fn empty_background_treated_as_absent() {
        let mut canvas = Canvas::new(900, 600, WHITE);
        let rect = preview_rect(900.0, 600.0);
        let positions = PositionTable::default();
        let empty = RgbImage::new(0, 0);
        draw(&mut canvas, rect, &sample_snapshot(), &positions, Some(&empty), true, 1);
        assert!(count(&canvas, PLACEHOLDER_FILL) > 0);
    }

    #[test]
    fn background_image_fills_rect() {
        let mut canvas = Canvas::new(400, 300, WHITE);
        let rect = preview_rect(400.0, 300.0);
        let mut img = RgbImage::new(4, 4);
        for p in img.pixels_mut() {
            *p = image::Rgb([90, 90, 90]);
        }
        let positions = PositionTable::default();
        draw(&mut canvas, rect, &sample_snapshot(), &positions, Some(&img), true, 1);
        let (cx, cy) = rect.at_fraction(0.5, 0.95);
        assert_eq!(canvas.pixels[cy as usize * 400 + cx as usize], rgb(90, 90, 90));
        assert_eq!(count(&canvas, PLACEHOLDER_FILL), 0);
    }

    #[test]
    fn skipping_background_leaves_canvas_fill() {
        let mut canvas = Canvas::new(900, 600, WHITE);
        let rect = preview_rect(900.0, 600.0);
        let positions = PositionTable::default();
        draw(&mut canvas, rect, &sample_snapshot(), &positions, None, false, 1);
        assert_eq!(count(&canvas, PLACEHOLDER_FILL), 0);
        assert!(count(&canvas, BLACK) > 0);
    }

    #[test]
    fn draw_does_not_mutate_inputs() {
        let mut canvas = Canvas::new(900, 600, WHITE);
        let rect = preview_rect(900.0, 600.0);
        let snapshot = sample_snapshot();
        let positions = PositionTable::default();
        let snapshot_before = snapshot.clone();
        let positions_before = positions.clone();
        draw(&mut canvas, rect, &snapshot, &positions, None, true, 1);
        assert_eq!(snapshot, snapshot_before);
        assert_eq!(positions, positions_before);
    }

    #[test]
    fn field_ink_lands_near_anchor() {
        let mut canvas = Canvas::new(900, 600, WHITE);
        let rect = preview_rect(900.0, 600.0);
        let positions = PositionTable::default();
        draw(&mut canvas, rect, &sample_snapshot(), &positions, None, false, 1);

        // The beneficiary line starts at its anchor: some ink within a cell
        // of the mapped position.
        let (ax, ay) = rect.at_fraction(0.20, 0.50);
        let found = (-30..30).any(|dy| {
            (-2..60).any(|dx| {
                let x = ax as i32 + dx;
                let y = ay as i32 + dy;
                x >= 0
                    && y >= 0
                    && (x as usize) < canvas.width
                    && (y as usize) < canvas.height
                    && canvas.pixels[y as usize * canvas.width + x as usize] == BLACK
            })
        });
        assert!(found, "no ink near beneficiary anchor");
    }
}
