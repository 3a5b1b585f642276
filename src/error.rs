//! # Error Types
//!
//! This module defines error types used throughout the chequier crate.
//!
//! None of these are fatal to the application: resource problems fall back to
//! the placeholder background, conversion problems substitute a fixed string,
//! and print problems are surfaced as a notice while the form state is kept
//! so the user can retry.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for chequier operations
#[derive(Debug, Error)]
pub enum ChequierError {
    /// A template image file could not be found
    #[error("Fichier non trouvé: {}", .0.display())]
    ResourceMissing(PathBuf),

    /// A template image file exists but could not be decoded
    #[error("Impossible de charger l'image: {0}")]
    ResourceInvalid(String),

    /// Rendering error (bad canvas target, PNG encode failure)
    #[error("Render error: {0}")]
    Render(String),

    /// Print submission error (spooler unavailable, job rejected)
    #[error("Erreur lors de l'impression: {0}")]
    Print(String),

    /// Preview window error (creation or buffer update)
    #[error("Window error: {0}")]
    Window(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
