//! # Interactive Preview
//!
//! The live-editable view of the check: the same rendering as the print
//! path, plus draggable text anchors.
//!
//! [`PreviewState`] is toolkit-free on purpose. It owns the mutable position
//! table for the current template and reacts to plain pointer events
//! (press/motion/release in surface coordinates); the window layer in
//! [`window`] owns the event loop and feeds it. That keeps the drag state
//! machine and the hit-testing testable without opening a window.
//!
//! ## Calibration workflow
//!
//! Dragged positions are not persisted. On release, the final fractional
//! position and a dump of the whole table are printed to the console so a
//! developer can copy the constants back into `template.rs`. Switching
//! templates resets the table to that template's defaults and discards any
//! adjustment, by design.

pub mod window;

use crate::layout::Rect;
use crate::model::FieldName;
use crate::template::{PositionTable, TemplateId};

/// Horizontal slack to the left of an anchor where a grab still connects.
pub const HIT_MARGIN_X: f32 = 20.0;

/// Hit box for a field, anchored near the field's mapped position. Boxes are
/// generous on purpose; ties between overlapping boxes go to the field that
/// comes first in table order.
pub fn hit_box(field: FieldName, anchor_x: f32, anchor_y: f32) -> Rect {
    match field {
        FieldName::AmountWords => Rect::new(anchor_x - HIT_MARGIN_X, anchor_y - 20.0, 350.0, 40.0),
        FieldName::AmountNum => Rect::new(anchor_x - HIT_MARGIN_X, anchor_y - 10.0, 150.0, 50.0),
        _ => Rect::new(anchor_x - HIT_MARGIN_X, anchor_y - 20.0, 200.0, 40.0),
    }
}

/// Pointer affordance the window should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    Default,
    /// Hovering a draggable anchor
    OpenHand,
    /// Dragging an anchor
    Grabbing,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    Dragging { field: FieldName, grab: (f32, f32) },
}

/// Mutable preview-side state: the position table for the current template
/// and the drag state machine.
pub struct PreviewState {
    positions: PositionTable,
    template: Option<TemplateId>,
    drag: DragState,
}

impl PreviewState {
    pub fn new(template: Option<TemplateId>) -> PreviewState {
        PreviewState {
            positions: PositionTable::for_template(template),
            template,
            drag: DragState::Idle,
        }
    }

    pub fn positions(&self) -> &PositionTable {
        &self.positions
    }

    pub fn template(&self) -> Option<TemplateId> {
        self.template
    }

    /// The field currently being dragged, if any (drives the marker overlay).
    pub fn dragged_field(&self) -> Option<FieldName> {
        match self.drag {
            DragState::Dragging { field, .. } => Some(field),
            DragState::Idle => None,
        }
    }

    /// Replace the table wholesale for a new template selection.
    ///
    /// Unsaved drag adjustments for the previous template are discarded; the
    /// calibrated defaults are the source of truth.
    pub fn set_template(&mut self, template: Option<TemplateId>) {
        self.template = template;
        self.positions = PositionTable::for_template(template);
        self.drag = DragState::Idle;
    }

    /// Which field's hit box contains the pointer, if any. First match in
    /// table order wins.
    pub fn hit_test(&self, rect: Rect, px: f32, py: f32) -> Option<FieldName> {
        self.positions.iter().find_map(|(field, (fx, fy))| {
            let (ax, ay) = rect.at_fraction(fx, fy);
            hit_box(field, ax, ay).contains(px, py).then_some(field)
        })
    }

    /// Pointer pressed at (px, py). Starts a drag when a hit box connects.
    pub fn press(&mut self, rect: Rect, px: f32, py: f32) -> CursorHint {
        if let Some(field) = self.hit_test(rect, px, py) {
            let (fx, fy) = self.positions.get(field);
            let (ax, ay) = rect.at_fraction(fx, fy);
            self.drag = DragState::Dragging {
                field,
                grab: (px - ax, py - ay),
            };
            CursorHint::Grabbing
        } else {
            CursorHint::Default
        }
    }

    /// Pointer moved. While dragging, recompute and store the field's
    /// fractional position, clamped to [0, 1] per axis; while idle, only the
    /// cursor affordance changes.
    pub fn motion(&mut self, rect: Rect, px: f32, py: f32) -> CursorHint {
        match self.drag {
            DragState::Dragging { field, grab } => {
                let (fx, fy) = rect.fraction_of(px - grab.0, py - grab.1);
                self.positions.set(field, fx.clamp(0.0, 1.0), fy.clamp(0.0, 1.0));
                CursorHint::Grabbing
            }
            DragState::Idle => {
                if self.hit_test(rect, px, py).is_some() {
                    CursorHint::OpenHand
                } else {
                    CursorHint::Default
                }
            }
        }
    }

    /// Pointer released. Ends the drag and prints the calibration dump.
    pub fn release(&mut self) -> CursorHint {
        if let DragState::Dragging { field, .. } = self.drag {
            let (fx, fy) = self.positions.get(field);
            println!("[position] {}: ({fx:.3}, {fy:.3})", field.label());
            let tag = self.template.map(|t| t.label()).unwrap_or("default");
            println!("[positions:{tag}]");
            for (name, (x, y)) in self.positions.iter() {
                println!("    {}: ({x:.3}, {y:.3})", name.label());
            }
            self.drag = DragState::Idle;
        }
        CursorHint::Default
    }
}
