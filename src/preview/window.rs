//! # Preview Window
//!
//! The event loop around [`PreviewState`](super::PreviewState): a minifb
//! window showing the composed check next to a small keyboard-driven form.
//!
//! ## Keys
//!
//! | Key | Action |
//! |-----|--------|
//! | Tab | focus next form field |
//! | typing / Backspace | edit the focused field |
//! | F1 | cycle template (none → BDR → BNA → CCP) |
//! | F5 | print with the configured options |
//! | Esc | quit |
//!
//! Dragging a text anchor with the left mouse button adjusts its fractional
//! position; releasing prints the calibration dump to the console.

use std::sync::mpsc::{channel, Sender};

use minifb::{CursorStyle, InputCallback, Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use crate::app::{CheckForm, Notice, NoticeLevel};
use crate::error::ChequierError;
use crate::layout::preview_rect;
use crate::model::CheckSnapshot;
use crate::printer::{self, PrintOptions};
use crate::render;
use crate::render::canvas::{rgb, Canvas, ACCENT, BLACK, WHITE};
use crate::render::font::{draw_text, FontFace};
use crate::template::TemplateId;

use super::{CursorHint, PreviewState};

const WIN_W: usize = 960;
const WIN_H: usize = 540;
/// Width of the form panel on the left; the preview container is the rest.
const PANEL_W: usize = 300;
/// How long a notice stays up, in frames (~3 s at 60 fps).
const NOTICE_FRAMES: u32 = 180;

const PANEL_BG: u32 = rgb(250, 250, 250);
const WINDOW_BG: u32 = rgb(235, 235, 235);
const FOCUS_COLOR: u32 = rgb(0, 90, 160);
const HINT_COLOR: u32 = rgb(120, 120, 120);

/// The editable form fields, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormField {
    Amount,
    Beneficiary,
    Location,
    Date,
}

impl FormField {
    const ALL: [FormField; 4] = [
        FormField::Amount,
        FormField::Beneficiary,
        FormField::Location,
        FormField::Date,
    ];

    fn label(&self) -> &'static str {
        match self {
            FormField::Amount => "Montant (DA)",
            FormField::Beneficiary => "A l'ordre de",
            FormField::Location => "Fait a",
            FormField::Date => "Le (jj/mm/aaaa)",
        }
    }

    fn next(&self) -> FormField {
        let i = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Character filter for the field.
    fn accepts(&self, ch: char) -> bool {
        match self {
            FormField::Amount => ch.is_ascii_digit() || ch == '.',
            FormField::Date => ch.is_ascii_digit() || ch == '/',
            _ => !ch.is_control(),
        }
    }
}

/// Forwards typed characters from the window to the event loop.
struct CharSink(Sender<char>);

impl InputCallback for CharSink {
    fn add_char(&mut self, uni_char: u32) {
        if let Some(ch) = char::from_u32(uni_char) {
            let _ = self.0.send(ch);
        }
    }

    fn set_key_state(&mut self, _key: Key, _state: bool) {}
}

fn next_template(current: Option<TemplateId>) -> Option<TemplateId> {
    match current {
        None => Some(TemplateId::Bdr),
        Some(TemplateId::Bdr) => Some(TemplateId::Bna),
        Some(TemplateId::Bna) => Some(TemplateId::Ccp),
        Some(TemplateId::Ccp) => None,
    }
}

fn cursor_style(hint: CursorHint) -> CursorStyle {
    match hint {
        CursorHint::Default => CursorStyle::Arrow,
        CursorHint::OpenHand => CursorStyle::OpenHand,
        CursorHint::Grabbing => CursorStyle::ClosedHand,
    }
}

/// Run the interactive preview until the window closes.
pub fn run(mut form: CheckForm, print_options: PrintOptions) -> Result<(), ChequierError> {
    let mut window = Window::new("Chequier — Aperçu", WIN_W, WIN_H, WindowOptions::default())
        .map_err(|e| ChequierError::Window(e.to_string()))?;
    window.set_target_fps(60);

    let (tx, rx) = channel();
    window.set_input_callback(Box::new(CharSink(tx)));

    let mut state = PreviewState::new(form.template());
    let mut focus = FormField::Amount;
    let mut notice: Option<(Notice, u32)> = None;
    let mut snapshot = form.snapshot();
    let mut prev_left = false;

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let mut dirty = false;

        // ── form editing ────────────────────────────────────────────────
        if window.is_key_pressed(Key::Tab, KeyRepeat::No) {
            focus = focus.next();
        }
        if window.is_key_pressed(Key::Backspace, KeyRepeat::Yes) {
            field_text(&mut form, focus).pop();
            dirty = true;
        }
        for ch in rx.try_iter() {
            if focus.accepts(ch) {
                field_text(&mut form, focus).push(ch);
                dirty = true;
            }
        }

        if window.is_key_pressed(Key::F1, KeyRepeat::No) {
            if let Some(n) = form.select_template(next_template(form.template())) {
                notice = Some((n, NOTICE_FRAMES));
            }
            state.set_template(form.template());
            dirty = true;
        }

        if window.is_key_pressed(Key::F5, KeyRepeat::No) {
            let result = printer::print_check(
                &snapshot,
                state.positions(),
                form.background(),
                &print_options,
            );
            let n = match result {
                Ok(ack) if ack.is_empty() => Notice::info("L'impression a été envoyée."),
                Ok(ack) => Notice::info(format!("L'impression a été envoyée. {ack}")),
                Err(e) => Notice::error(e.to_string()),
            };
            notice = Some((n, NOTICE_FRAMES));
        }

        if dirty {
            snapshot = form.snapshot();
        }

        // ── pointer ─────────────────────────────────────────────────────
        let rect = preview_rect((WIN_W - PANEL_W) as f32, WIN_H as f32)
            .offset(PANEL_W as f32, 0.0);
        let mut hint = CursorHint::Default;
        if let Some((mx, my)) = window.get_mouse_pos(MouseMode::Pass) {
            let down = window.get_mouse_down(MouseButton::Left);
            hint = if down && !prev_left {
                state.press(rect, mx, my)
            } else if !down && prev_left {
                state.release()
            } else {
                state.motion(rect, mx, my)
            };
            prev_left = down;
        }
        window.set_cursor_style(cursor_style(hint));

        // ── repaint ─────────────────────────────────────────────────────
        let mut canvas = Canvas::new(WIN_W, WIN_H, WINDOW_BG);
        render::draw(
            &mut canvas,
            rect,
            &snapshot,
            state.positions(),
            form.background(),
            true,
            1,
        );
        if let Some(field) = state.dragged_field() {
            let (fx, fy) = state.positions().get(field);
            let (x, y) = rect.at_fraction(fx, fy);
            canvas.fill_disc(x as i32, y as i32, 5, ACCENT);
        }
        draw_panel(&mut canvas, &form, &snapshot, focus);
        if let Some((n, frames_left)) = &mut notice {
            draw_notice(&mut canvas, n);
            *frames_left -= 1;
            if *frames_left == 0 {
                notice = None;
            }
        }

        window
            .update_with_buffer(&canvas.pixels, WIN_W, WIN_H)
            .map_err(|e| ChequierError::Window(e.to_string()))?;
    }

    Ok(())
}

fn field_text(form: &mut CheckForm, field: FormField) -> &mut String {
    match field {
        FormField::Amount => &mut form.amount_text,
        FormField::Beneficiary => &mut form.beneficiary,
        FormField::Location => &mut form.location,
        FormField::Date => &mut form.date_text,
    }
}

fn field_value(form: &CheckForm, field: FormField) -> &str {
    match field {
        FormField::Amount => &form.amount_text,
        FormField::Beneficiary => &form.beneficiary,
        FormField::Location => &form.location,
        FormField::Date => &form.date_text,
    }
}

/// Paint the form panel: template line, the four fields with a focus marker,
/// the words line, and the key hints.
fn draw_panel(canvas: &mut Canvas, form: &CheckForm, snapshot: &CheckSnapshot, focus: FormField) {
    use crate::layout::Rect;

    canvas.fill_rect(Rect::new(0.0, 0.0, PANEL_W as f32, WIN_H as f32), PANEL_BG);
    draw_text(canvas, 12, 28, "Informations du cheque", FontFace::Hud, 2, true, BLACK);

    let template_label = form.template().map(|t| t.label()).unwrap_or("Aucun");
    draw_text(
        canvas,
        12,
        58,
        &format!("Modele [F1]: {template_label}"),
        FontFace::Hud,
        1,
        false,
        BLACK,
    );

    let mut y = 96;
    for field in FormField::ALL {
        let focused = field == focus;
        let marker = if focused { "> " } else { "  " };
        let color = if focused { FOCUS_COLOR } else { BLACK };
        draw_text(canvas, 12, y, &format!("{marker}{}", field.label()), FontFace::Hud, 1, focused, color);
        draw_text(canvas, 24, y + 16, field_value(form, field), FontFace::Hud, 1, false, color);
        y += 44;
    }

    // Words line wraps poorly in a narrow panel; show the start of it
    let words: String = snapshot.words.chars().take(44).collect();
    draw_text(canvas, 12, y + 8, &words, FontFace::Hud, 1, false, HINT_COLOR);

    draw_text(canvas, 12, WIN_H as i32 - 40, "Tab: champ suivant", FontFace::Hud, 1, false, HINT_COLOR);
    draw_text(canvas, 12, WIN_H as i32 - 24, "F5: imprimer  Esc: quitter", FontFace::Hud, 1, false, HINT_COLOR);
}

fn draw_notice(canvas: &mut Canvas, notice: &Notice) {
    use crate::layout::Rect;

    let color = match notice.level {
        NoticeLevel::Info => rgb(0, 120, 70),
        NoticeLevel::Warning => rgb(190, 115, 0),
        NoticeLevel::Error => rgb(190, 40, 40),
    };
    let banner = Rect::new(PANEL_W as f32, 0.0, (WIN_W - PANEL_W) as f32, 24.0);
    canvas.fill_rect(banner, color);
    draw_text(canvas, PANEL_W as i32 + 10, 18, &notice.message, FontFace::Hud, 1, false, WHITE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_cycle_covers_all_and_wraps() {
        let mut current = None;
        let mut seen = Vec::new();
        for _ in 0..4 {
            current = next_template(current);
            seen.push(current);
        }
        assert_eq!(
            seen,
            vec![
                Some(TemplateId::Bdr),
                Some(TemplateId::Bna),
                Some(TemplateId::Ccp),
                None
            ]
        );
    }

    #[test]
    fn tab_order_wraps() {
        let mut field = FormField::Amount;
        for _ in 0..FormField::ALL.len() {
            field = field.next();
        }
        assert_eq!(field, FormField::Amount);
    }

    #[test]
    fn amount_field_rejects_letters() {
        assert!(FormField::Amount.accepts('7'));
        assert!(FormField::Amount.accepts('.'));
        assert!(!FormField::Amount.accepts('x'));
        assert!(FormField::Date.accepts('/'));
        assert!(!FormField::Date.accepts('a'));
        assert!(FormField::Beneficiary.accepts('é'));
        assert!(!FormField::Beneficiary.accepts('\u{8}'));
    }
}
