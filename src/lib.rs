//! # Chequier - Bank Check Composer
//!
//! Chequier fills in the fields of a bank check — amount, beneficiary,
//! location, date — lays them over a scanned check template, previews the
//! composition in a window with draggable text anchors, and sends the result
//! to a printer.
//!
//! The heart of the crate is the fractional layout model: each field is
//! positioned as a fraction (0.0–1.0) of a fixed-aspect-ratio check
//! rectangle, so the interactive preview and the print page render from the
//! same tables and necessarily agree.
//!
//! ## Quick Start
//!
//! ```no_run
//! use chequier::{
//!     model::CheckSnapshot,
//!     printer::{self, PrintOptions},
//!     template::{PositionTable, TemplateId},
//! };
//!
//! let date = chrono::NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
//! let snapshot = CheckSnapshot::new(11800.0, "Mohammed Benali", "Alger", date);
//! let positions = PositionTable::for_template(Some(TemplateId::Bna));
//!
//! // Compose and spool; no background image here, so the placeholder is used
//! let ack = printer::print_check(&snapshot, &positions, None, &PrintOptions::default())?;
//! println!("{ack}");
//! # Ok::<(), chequier::ChequierError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`template`] | Check templates and calibrated position tables |
//! | [`layout`] | Fractional coordinate mapping and the preview rectangle |
//! | [`model`] | Check snapshot and French check formatting |
//! | [`render`] | The shared draw routine, canvas, and bitmap fonts |
//! | [`preview`] | Draggable-anchor preview state and the window loop |
//! | [`printer`] | Page composition and spooler submission |
//! | [`app`] | Form controller and user notices |
//! | [`resources`] | Template image path resolution |
//! | [`error`] | Error types |

pub mod app;
pub mod error;
pub mod layout;
pub mod model;
pub mod preview;
pub mod printer;
pub mod render;
pub mod resources;
pub mod template;

// Re-exports for convenience
pub use error::ChequierError;
pub use layout::Rect;
pub use model::{CheckSnapshot, FieldName};
pub use template::{PositionTable, TemplateId};
