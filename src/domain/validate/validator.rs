// Straight-line structural check of a decoded receipt.
//
// Patterns use ASCII classes: `\w` is `[0-9A-Za-z_]` and `\s` is ASCII whitespace.

use crate::domain::receipt::{parse_purchase_date, parse_purchase_time, Item, Receipt};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

const RETAILER_PATTERN: &str = r"(?-u)^[\w\s\-&]+$";
const DESCRIPTION_PATTERN: &str = r"(?-u)^[\w\s\-]+$";
const AMOUNT_PATTERN: &str = r"^[0-9]+\.[0-9]{2}$";

static RETAILER_RE: LazyLock<Regex> = LazyLock::new(|| compile(RETAILER_PATTERN));
static DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| compile(DESCRIPTION_PATTERN));
static AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| compile(AMOUNT_PATTERN));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("validation pattern is a valid regex")
}

/// A single field that failed its format rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Path of the offending field, e.g. `items[2].price`.
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Every field failure found in one receipt. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for e in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
            first = false;
        }
        Ok(())
    }
}

/// Checks every field of `receipt` against its format rule.
///
/// Any single failure rejects the whole receipt; all failures are collected so the
/// caller can log them together.
pub fn validate_receipt(receipt: &Receipt) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    if !is_present(&receipt.retailer) || !RETAILER_RE.is_match(&receipt.retailer) {
        errors.push(FieldError::new(
            "retailer",
            "must be non-empty and contain only letters, digits, '_', whitespace, '-' or '&'",
        ));
    }

    if !is_calendar_date(&receipt.purchase_date) {
        errors.push(FieldError::new("purchaseDate", "expected a date as YYYY-MM-DD"));
    }

    if !is_clock_time(&receipt.purchase_time) {
        errors.push(FieldError::new("purchaseTime", "expected a 24-hour time as HH:MM"));
    }

    if receipt.items.is_empty() {
        errors.push(FieldError::new("items", "at least one item is required"));
    }
    for (index, item) in receipt.items.iter().enumerate() {
        validate_item(index, item, &mut errors);
    }

    if !AMOUNT_RE.is_match(&receipt.total) {
        errors.push(FieldError::new("total", "expected an amount like 12.34"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors { errors })
    }
}

fn validate_item(index: usize, item: &Item, errors: &mut Vec<FieldError>) {
    if !is_present(&item.short_description) || !DESCRIPTION_RE.is_match(&item.short_description) {
        errors.push(FieldError::new(
            format!("items[{index}].shortDescription"),
            "must be non-empty and contain only letters, digits, '_', whitespace or '-'",
        ));
    }
    if !AMOUNT_RE.is_match(&item.price) {
        errors.push(FieldError::new(
            format!("items[{index}].price"),
            "expected an amount like 12.34",
        ));
    }
}

fn is_present(s: &str) -> bool {
    !s.trim().is_empty()
}

fn is_calendar_date(s: &str) -> bool {
    parse_purchase_date(s).is_some()
}

fn is_clock_time(s: &str) -> bool {
    parse_purchase_time(s).is_some()
}
