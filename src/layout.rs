//! # Fractional Layout
//!
//! The coordinate model shared by the preview surface and the print renderer.
//!
//! Every text field on a check is positioned as a fraction (0.0–1.0) of a
//! drawing rectangle with the fixed aspect ratio of a physical check. The
//! same fractions therefore land on the same spot whether the rectangle is a
//! 900-pixel preview or a 300 DPI print page.

/// Physical check width in millimeters.
pub const CHECK_WIDTH_MM: f32 = 175.0;

/// Physical check height in millimeters.
pub const CHECK_HEIGHT_MM: f32 = 80.0;

/// Horizontal margin of the preview drawing area, in pixels (each side).
pub const PREVIEW_MARGIN_PX: f32 = 10.0;

/// Height/width ratio of a check (≈ 0.457).
#[inline]
pub fn check_aspect() -> f32 {
    CHECK_HEIGHT_MM / CHECK_WIDTH_MM
}

/// An axis-aligned rectangle in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Map a fractional coordinate into absolute surface coordinates.
    ///
    /// Fractions outside [0, 1] are allowed and simply extrapolate beyond the
    /// rectangle; drag handling clamps before storing, not here.
    #[inline]
    pub fn at_fraction(&self, fx: f32, fy: f32) -> (f32, f32) {
        (self.x + self.w * fx, self.y + self.h * fy)
    }

    /// Inverse of [`at_fraction`](Self::at_fraction): express an absolute
    /// point as a fraction of this rectangle. Unclamped.
    #[inline]
    pub fn fraction_of(&self, x: f32, y: f32) -> (f32, f32) {
        ((x - self.x) / self.w, (y - self.y) / self.h)
    }

    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }

    /// This rectangle translated by (dx, dy).
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }
}

/// Compute the check drawing rectangle for a preview container.
///
/// The check spans the container width minus a 10 px margin on each side,
/// keeps the physical aspect ratio, and is vertically centered. Recomputed on
/// every repaint so window resizes are picked up for free.
pub fn preview_rect(container_w: f32, container_h: f32) -> Rect {
    let w = container_w - 2.0 * PREVIEW_MARGIN_PX;
    let h = w * check_aspect();
    let y = (container_h - h) / 2.0;
    Rect::new(PREVIEW_MARGIN_PX, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_endpoints_hit_corners() {
        let rect = Rect::new(10.0, 20.0, 200.0, 100.0);
        assert_eq!(rect.at_fraction(0.0, 0.0), (10.0, 20.0));
        assert_eq!(rect.at_fraction(1.0, 1.0), (210.0, 120.0));
    }

    #[test]
    fn in_range_fractions_stay_inside() {
        let rect = Rect::new(5.0, 7.0, 300.0, 140.0);
        for i in 0..=10 {
            for j in 0..=10 {
                let (fx, fy) = (i as f32 / 10.0, j as f32 / 10.0);
                let (x, y) = rect.at_fraction(fx, fy);
                assert!(x >= rect.x && x <= rect.x + rect.w);
                assert!(y >= rect.y && y <= rect.y + rect.h);
            }
        }
    }

    #[test]
    fn out_of_range_fractions_extrapolate() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(rect.at_fraction(-0.5, 2.0), (-50.0, 100.0));
    }

    #[test]
    fn fraction_of_inverts_at_fraction() {
        let rect = Rect::new(12.0, 34.0, 560.0, 256.0);
        let (x, y) = rect.at_fraction(0.37, 0.82);
        let (fx, fy) = rect.fraction_of(x, y);
        assert!((fx - 0.37).abs() < 1e-5);
        assert!((fy - 0.82).abs() < 1e-5);
    }

    #[test]
    fn preview_rect_keeps_aspect_and_margins() {
        let rect = preview_rect(900.0, 600.0);
        assert_eq!(rect.x, 10.0);
        assert_eq!(rect.w, 880.0);
        assert!((rect.h - 880.0 * (80.0 / 175.0)).abs() < 1e-3);
        // vertically centered
        assert!((rect.y - (600.0 - rect.h) / 2.0).abs() < 1e-3);
    }

    #[test]
    fn preview_rect_is_recomputed_per_size() {
        let a = preview_rect(900.0, 600.0);
        let b = preview_rect(500.0, 600.0);
        assert!(b.w < a.w);
        assert!(b.h < a.h);
    }
}
