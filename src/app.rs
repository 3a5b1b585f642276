//! # Form Controller
//!
//! Collects the raw field inputs, rebuilds the immutable [`CheckSnapshot`]
//! whenever something changes, and manages template selection including the
//! background image lifecycle.
//!
//! Resource problems never propagate past this layer: a missing or
//! undecodable template image produces a [`Notice`] for the user and a full
//! fallback to the no-template state (placeholder background, default
//! positions) — never a partial state.

use chrono::NaiveDate;
use image::RgbImage;

use crate::error::ChequierError;
use crate::model::CheckSnapshot;
use crate::resources::ResourceLocator;
use crate::template::TemplateId;

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A transient, non-blocking notification shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Notice {
        Notice { level: NoticeLevel::Info, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Notice {
        Notice { level: NoticeLevel::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Notice {
        Notice { level: NoticeLevel::Error, message: message.into() }
    }
}

/// The check form: raw editable field text plus the current template
/// selection and its loaded background.
pub struct CheckForm {
    pub amount_text: String,
    pub beneficiary: String,
    pub location: String,
    /// Date as typed, dd/mm/yyyy; falls back to `default_date` while invalid
    pub date_text: String,
    template: Option<TemplateId>,
    background: Option<RgbImage>,
    resources: ResourceLocator,
    default_date: NaiveDate,
}

impl CheckForm {
    pub fn new(resources: ResourceLocator) -> CheckForm {
        let today = chrono::Local::now().date_naive();
        CheckForm {
            amount_text: "11800.00".to_string(),
            beneficiary: String::new(),
            location: "Alger".to_string(),
            date_text: today.format("%d/%m/%Y").to_string(),
            template: None,
            background: None,
            resources,
            default_date: today,
        }
    }

    pub fn template(&self) -> Option<TemplateId> {
        self.template
    }

    pub fn background(&self) -> Option<&RgbImage> {
        self.background.as_ref()
    }

    /// Build the immutable snapshot for the current field text.
    ///
    /// Partial input is tolerated while the user types: an unparseable
    /// amount renders as zero and an unparseable date as today.
    pub fn snapshot(&self) -> CheckSnapshot {
        let amount = self.amount_text.parse::<f64>().unwrap_or(0.0);
        let date = NaiveDate::parse_from_str(&self.date_text, "%d/%m/%Y")
            .unwrap_or(self.default_date);
        CheckSnapshot::new(amount, &self.beneficiary, &self.location, date)
    }

    /// Select a template and load its background image.
    ///
    /// On any failure the selection fully falls back to "no template" and the
    /// returned notice describes what went wrong.
    pub fn select_template(&mut self, template: Option<TemplateId>) -> Option<Notice> {
        let Some(id) = template else {
            self.template = None;
            self.background = None;
            return None;
        };

        match self.load_background(id) {
            Ok(img) => {
                self.background = Some(img);
                self.template = Some(id);
                None
            }
            Err(e @ ChequierError::ResourceMissing(_)) => {
                self.template = None;
                self.background = None;
                Some(Notice::warning(e.to_string()))
            }
            Err(e) => {
                self.template = None;
                self.background = None;
                Some(Notice::error(e.to_string()))
            }
        }
    }

    fn load_background(&self, id: TemplateId) -> Result<RgbImage, ChequierError> {
        let path = self.resources.resolve(id.image_file());
        if !path.exists() {
            return Err(ChequierError::ResourceMissing(path));
        }
        let img = image::open(&path)
            .map_err(|e| ChequierError::ResourceInvalid(format!("{}: {e}", id.label())))?;
        // The BDR scans are stored sideways
        let img = if id.needs_rotation() { img.rotate270() } else { img };
        Ok(img.to_rgb8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CONVERSION_ERROR;
    use std::fs;

    fn form_with_missing_resources() -> CheckForm {
        CheckForm::new(ResourceLocator::rooted_at("/nonexistent/resource/root"))
    }

    #[test]
    fn snapshot_parses_fields() {
        let mut form = form_with_missing_resources();
        form.amount_text = "11800.00".into();
        form.beneficiary = "Mohammed Benali".into();
        form.date_text = "03/01/2025".into();
        let snapshot = form.snapshot();
        assert_eq!(snapshot.amount, 11800.0);
        assert_eq!(snapshot.beneficiary, "Mohammed Benali");
        assert_eq!(snapshot.date_display(), "le 03/01/2025");
        assert_ne!(snapshot.words, CONVERSION_ERROR);
    }

    #[test]
    fn partial_amount_renders_as_zero() {
        let mut form = form_with_missing_resources();
        form.amount_text = "12.".into();
        assert_eq!(form.snapshot().amount, 12.0);
        form.amount_text = ".".into();
        assert_eq!(form.snapshot().amount, 0.0);
    }

    #[test]
    fn invalid_date_falls_back_to_default() {
        let mut form = form_with_missing_resources();
        form.date_text = "31/02/20".into();
        assert_eq!(form.snapshot().date, form.default_date);
    }

    #[test]
    fn missing_image_falls_back_fully() {
        let mut form = form_with_missing_resources();
        let notice = form.select_template(Some(TemplateId::Bna));
        let notice = notice.expect("expected a warning notice");
        assert_eq!(notice.level, NoticeLevel::Warning);
        // Full fallback: no template AND no background
        assert_eq!(form.template(), None);
        assert!(form.background().is_none());
    }

    #[test]
    fn invalid_image_falls_back_fully() {
        let dir = std::env::temp_dir().join(format!("chequier-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(TemplateId::Ccp.image_file()), b"not an image").unwrap();

        let mut form = CheckForm::new(ResourceLocator::rooted_at(&dir));
        let notice = form.select_template(Some(TemplateId::Ccp));
        let notice = notice.expect("expected an error notice");
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(form.template(), None);
        assert!(form.background().is_none());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn selecting_none_clears_background() {
        let mut form = form_with_missing_resources();
        assert!(form.select_template(None).is_none());
        assert_eq!(form.template(), None);
        assert!(form.background().is_none());
    }
}
