//! # Check Data Model
//!
//! The immutable snapshot of form values used for one render pass, plus the
//! field naming and the French check formatting rules.

use chrono::NaiveDate;
use num2words::{Lang, Num2Words};

/// Fixed string substituted when amount-to-words conversion fails.
pub const CONVERSION_ERROR: &str = "Erreur de conversion";

/// The five text fields drawn on a check.
///
/// The declaration order is the table iteration order: rendering walks it for
/// determinism and hit-testing uses it to resolve overlapping hit boxes
/// (first match wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    /// Numeric amount in the top-right box
    AmountNum,
    /// Amount spelled out in words
    AmountWords,
    /// "À l'ordre de" line
    Beneficiary,
    /// "Fait à" line
    Location,
    /// Date line
    Date,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::AmountNum,
        FieldName::AmountWords,
        FieldName::Beneficiary,
        FieldName::Location,
        FieldName::Date,
    ];

    /// Identifier used in calibration dumps, stable across versions.
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::AmountNum => "amount_num",
            FieldName::AmountWords => "amount_words",
            FieldName::Beneficiary => "beneficiary",
            FieldName::Location => "location",
            FieldName::Date => "date",
        }
    }
}

/// One render pass worth of check data.
///
/// Built by the form controller on every edit and handed by reference to the
/// preview surface and the print renderer; neither mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckSnapshot {
    /// Amount in currency units, never negative
    pub amount: f64,
    /// Amount spelled out (French), already carrying the currency word
    pub words: String,
    pub beneficiary: String,
    pub location: String,
    pub date: NaiveDate,
}

impl CheckSnapshot {
    /// Build a snapshot, deriving the words line from the amount.
    pub fn new(amount: f64, beneficiary: &str, location: &str, date: NaiveDate) -> CheckSnapshot {
        let amount = amount.max(0.0);
        CheckSnapshot {
            amount,
            words: amount_to_words(amount),
            beneficiary: beneficiary.to_string(),
            location: location.to_string(),
            date,
        }
    }

    /// The numeric amount as printed on the check: "11 800,00".
    pub fn amount_display(&self) -> String {
        format_amount(self.amount)
    }

    /// The date line as printed on the check: "le 03/01/2025".
    pub fn date_display(&self) -> String {
        format!("le {}", self.date.format("%d/%m/%Y"))
    }
}

/// Format an amount the way French checks write numbers: two decimal digits,
/// thousands grouped with spaces, comma as the decimal separator, no currency
/// symbol.
pub fn format_amount(amount: f64) -> String {
    let plain = format!("{:.2}", amount.max(0.0));
    let (int_part, dec_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    format!("{grouped},{dec_part}")
}

/// Spell an amount out in French, suffixed with the currency word.
///
/// Only the whole-dinar part is spelled; centimes stay on the numeric field.
/// Conversion failures never propagate: the fixed [`CONVERSION_ERROR`] string
/// is substituted so a render pass always has something to draw.
pub fn amount_to_words(amount: f64) -> String {
    match Num2Words::new(amount.max(0.0).trunc() as i64).lang(Lang::French).to_words() {
        Ok(words) => capitalize(&format!("{words} dinars")),
        Err(e) => {
            eprintln!("amount-to-words failed for {amount}: {e}");
            CONVERSION_ERROR.to_string()
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
