//! # Print Path
//!
//! One-shot rendering of the composed check onto a page-sized canvas and
//! submission to the system spooler.
//!
//! The page geometry (size, margins, copies, resolution) lives in
//! [`PrintOptions`]; defaults match a portrait A4 sheet with 10 mm margins
//! and one copy. The check keeps its physical aspect ratio and is placed at
//! the top of the printable area. Submission shells out to `lp`, which is
//! where the OS takes over — printing is fire-and-forget once the job is
//! accepted, and a rejected job surfaces as a single [`ChequierError::Print`].

use std::path::PathBuf;
use std::process::Command;

use image::RgbImage;

use crate::error::ChequierError;
use crate::layout::{check_aspect, Rect};
use crate::model::CheckSnapshot;
use crate::render;
use crate::render::canvas::{Canvas, WHITE};
use crate::template::PositionTable;

/// Print job configuration.
#[derive(Debug, Clone)]
pub struct PrintOptions {
    /// Destination printer name (`lp -d`); system default when unset
    pub printer: Option<String>,
    pub copies: u32,
    /// Render resolution in dots per inch
    pub dpi: u32,
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    /// Margin applied on all four sides
    pub margin_mm: f32,
}

impl Default for PrintOptions {
    /// Portrait A4, 10 mm margins, 300 DPI, one copy.
    fn default() -> Self {
        PrintOptions {
            printer: None,
            copies: 1,
            dpi: 300,
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            margin_mm: 10.0,
        }
    }
}

impl PrintOptions {
    #[inline]
    pub fn dots_per_mm(&self) -> f32 {
        self.dpi as f32 / 25.4
    }

    /// Full page size in dots.
    pub fn page_size_dots(&self) -> (usize, usize) {
        (
            (self.page_width_mm * self.dots_per_mm()).round() as usize,
            (self.page_height_mm * self.dots_per_mm()).round() as usize,
        )
    }

    /// Printable area in dots, margins applied.
    pub fn printable_rect(&self) -> Rect {
        let m = self.margin_mm * self.dots_per_mm();
        let (w, h) = self.page_size_dots();
        Rect::new(m, m, w as f32 - 2.0 * m, h as f32 - 2.0 * m)
    }

    /// The check drawing rectangle: printable width, physical aspect ratio,
    /// anchored at the top of the printable area.
    pub fn check_rect(&self) -> Rect {
        let printable = self.printable_rect();
        Rect::new(printable.x, printable.y, printable.w, printable.w * check_aspect())
    }

    /// Integer font scale matching the render resolution (screen fonts are
    /// sized for ~96 DPI).
    pub fn font_scale(&self) -> usize {
        ((self.dpi as f32 / 96.0).round() as usize).max(1)
    }
}

/// Render the check onto a white page canvas at print resolution.
pub fn compose_page(
    snapshot: &CheckSnapshot,
    positions: &PositionTable,
    background: Option<&RgbImage>,
    options: &PrintOptions,
) -> Canvas {
    let (w, h) = options.page_size_dots();
    let mut canvas = Canvas::new(w, h, WHITE);
    render::draw(
        &mut canvas,
        options.check_rect(),
        snapshot,
        positions,
        background,
        true,
        options.font_scale(),
    );
    canvas
}

/// Compose the page and submit it to the spooler. Returns the spooler's
/// acknowledgement line (e.g. "request id is ...").
pub fn print_check(
    snapshot: &CheckSnapshot,
    positions: &PositionTable,
    background: Option<&RgbImage>,
    options: &PrintOptions,
) -> Result<String, ChequierError> {
    let canvas = compose_page(snapshot, positions, background, options);
    let path = job_file();
    canvas.save_png(&path)?;
    let ack = spool(&path, options);
    std::fs::remove_file(&path).ok();
    ack
}

fn job_file() -> PathBuf {
    std::env::temp_dir().join(format!("chequier-{}.png", std::process::id()))
}

fn spool(path: &PathBuf, options: &PrintOptions) -> Result<String, ChequierError> {
    let mut cmd = Command::new("lp");
    cmd.arg("-n").arg(options.copies.to_string());
    if let Some(printer) = &options.printer {
        cmd.arg("-d").arg(printer);
    }
    cmd.arg(path);

    let output = cmd
        .output()
        .map_err(|e| ChequierError::Print(format!("impossible d'exécuter lp: {e}")))?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        Err(ChequierError::Print(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ))
    }
}
