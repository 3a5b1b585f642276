//! # Check Templates
//!
//! Known check templates and their calibrated field positions.
//!
//! Each template pairs a background scan with a table of fractional
//! coordinates, one per text field. The constants were calibrated by dragging
//! the anchors in the preview and copying the values printed on release back
//! into this file (see [`crate::preview`]).

use crate::model::FieldName;

/// A known check template.
///
/// | Template | Bank | Background file |
/// |----------|------|-----------------|
/// | `Bdr` | Banque de Développement Rural | `bdr_1.jpg` |
/// | `Bna` | Banque Nationale d'Algérie | `bna_1.jpg` |
/// | `Ccp` | Compte Chèque Postal | `chèque-ccp.png` |
///
/// "No template" is modeled as `Option<TemplateId>::None` and uses the
/// default position table with a placeholder background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateId {
    Bdr,
    Bna,
    Ccp,
}

impl TemplateId {
    pub const ALL: [TemplateId; 3] = [TemplateId::Bdr, TemplateId::Bna, TemplateId::Ccp];

    /// Short display label, matching the original bank acronyms.
    pub fn label(&self) -> &'static str {
        match self {
            TemplateId::Bdr => "BDR",
            TemplateId::Bna => "BNA",
            TemplateId::Ccp => "CCP",
        }
    }

    /// Background image file name, resolved against the resource root.
    pub fn image_file(&self) -> &'static str {
        match self {
            TemplateId::Bdr => "bdr_1.jpg",
            TemplateId::Bna => "bna_1.jpg",
            TemplateId::Ccp => "chèque-ccp.png",
        }
    }

    /// The BDR scans are stored rotated; they need a 90° counter-clockwise
    /// turn before use.
    pub fn needs_rotation(&self) -> bool {
        matches!(self, TemplateId::Bdr)
    }

    /// Parse a label as accepted on the command line. Case-insensitive;
    /// unknown labels are `None` (callers fall back to the default layout).
    pub fn from_label(label: &str) -> Option<TemplateId> {
        match label.to_ascii_uppercase().as_str() {
            "BDR" => Some(TemplateId::Bdr),
            "BNA" => Some(TemplateId::Bna),
            "CCP" => Some(TemplateId::Ccp),
            _ => None,
        }
    }
}

/// Calibrated fractional positions, indexed in [`FieldName::ALL`] order:
/// amount_num, amount_words, beneficiary, location, date.
const BDR_POSITIONS: [(f32, f32); 5] = [
    (0.820, 0.009),
    (0.289, 0.264),
    (0.246, 0.416),
    (0.623, 0.508),
    (0.750, 0.516),
];

const BNA_POSITIONS: [(f32, f32); 5] = [
    (0.831, 0.044),
    (0.044, 0.375),
    (0.263, 0.440),
    (0.580, 0.567),
    (0.771, 0.567),
];

const CCP_POSITIONS: [(f32, f32); 5] = [
    (0.804, 0.028),
    (0.272, 0.244),
    (0.180, 0.424),
    (0.639, 0.472),
    (0.765, 0.480),
];

/// Layout used when no template is selected.
const DEFAULT_POSITIONS: [(f32, f32); 5] = [
    (0.78, 0.05),
    (0.25, 0.28),
    (0.20, 0.50),
    (0.15, 0.65),
    (0.50, 0.65),
];

/// Fractional (fx, fy) position of each text field within the check
/// rectangle.
///
/// Owned value type: the preview surface holds a mutable copy per template
/// selection and replaces it wholesale on template switch, which is what
/// makes the "drag adjustments are discarded on switch" rule explicit.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionTable {
    slots: [(f32, f32); 5],
}

impl PositionTable {
    /// Fresh copy of the calibrated table for a template, or the default
    /// table when no template is selected. No error case.
    pub fn for_template(template: Option<TemplateId>) -> PositionTable {
        let slots = match template {
            Some(TemplateId::Bdr) => BDR_POSITIONS,
            Some(TemplateId::Bna) => BNA_POSITIONS,
            Some(TemplateId::Ccp) => CCP_POSITIONS,
            None => DEFAULT_POSITIONS,
        };
        PositionTable { slots }
    }

    #[inline]
    pub fn get(&self, field: FieldName) -> (f32, f32) {
        self.slots[field as usize]
    }

    #[inline]
    pub fn set(&mut self, field: FieldName, fx: f32, fy: f32) {
        self.slots[field as usize] = (fx, fy);
    }

    /// Iterate fields in table order. Hit-testing relies on this order to
    /// break ties between overlapping hit boxes (first match wins).
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, (f32, f32))> + '_ {
        FieldName::ALL.iter().map(|&f| (f, self.get(f)))
    }
}

impl Default for PositionTable {
    fn default() -> Self {
        PositionTable::for_template(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_lookups_are_identical() {
        for template in [None, Some(TemplateId::Bdr), Some(TemplateId::Bna), Some(TemplateId::Ccp)] {
            let a = PositionTable::for_template(template);
            let b = PositionTable::for_template(template);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn returned_copies_are_independent() {
        let mut first = PositionTable::for_template(Some(TemplateId::Bna));
        first.set(FieldName::Date, 0.99, 0.99);
        let second = PositionTable::for_template(Some(TemplateId::Bna));
        assert_eq!(second.get(FieldName::Date), (0.771, 0.567));
    }

    #[test]
    fn none_uses_default_table() {
        let table = PositionTable::for_template(None);
        assert_eq!(table.get(FieldName::AmountNum), (0.78, 0.05));
        assert_eq!(table.get(FieldName::Date), (0.50, 0.65));
    }

    #[test]
    fn all_tables_have_five_fields_in_range() {
        for template in [None, Some(TemplateId::Bdr), Some(TemplateId::Bna), Some(TemplateId::Ccp)] {
            let table = PositionTable::for_template(template);
            let fields: Vec<_> = table.iter().collect();
            assert_eq!(fields.len(), 5);
            for (field, (fx, fy)) in fields {
                assert!((0.0..=1.0).contains(&fx), "{field:?} fx out of range");
                assert!((0.0..=1.0).contains(&fy), "{field:?} fy out of range");
            }
        }
    }

    #[test]
    fn iteration_order_matches_field_order() {
        let table = PositionTable::default();
        let order: Vec<_> = table.iter().map(|(f, _)| f).collect();
        assert_eq!(order, FieldName::ALL.to_vec());
    }

    #[test]
    fn label_round_trip() {
        for id in TemplateId::ALL {
            assert_eq!(TemplateId::from_label(id.label()), Some(id));
        }
        assert_eq!(TemplateId::from_label("bdr"), Some(TemplateId::Bdr));
        assert_eq!(TemplateId::from_label("unknown"), None);
    }
}
