//! Receipt data model as submitted by clients.
//!
//! Field values are kept as the strings the client sent. Format checks live in
//! [`crate::domain::validate`] and numeric interpretation in [`crate::domain::points`],
//! so a stored receipt is always byte-for-byte what was accepted.

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use utoipa::ToSchema;

pub mod id;

pub use id::{ReceiptId, ReceiptIdParseError};

// Hour may be one or two digits; month, day and minute are always two.
static DATE_SHAPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date shape is a valid regex")
});
static TIME_SHAPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,2}:[0-9]{2}$").expect("time shape is a valid regex")
});

/// Parses a purchase date written as `YYYY-MM-DD`.
pub fn parse_purchase_date(s: &str) -> Option<NaiveDate> {
    if !DATE_SHAPE_RE.is_match(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parses a 24-hour purchase time written as `H:MM` or `HH:MM`.
pub fn parse_purchase_time(s: &str) -> Option<NaiveTime> {
    if !TIME_SHAPE_RE.is_match(s) {
        return None;
    }
    NaiveTime::parse_from_str(s, "%H:%M").ok()
}

/// One line entry on a receipt.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Free-text description, e.g. `"Mountain Dew 12PK"`.
    #[schema(example = "Mountain Dew 12PK")]
    pub short_description: String,
    /// Price with exactly two fraction digits, e.g. `"6.49"`.
    #[schema(example = "6.49")]
    pub price: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

/// A purchase record submitted for scoring.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    #[schema(example = "Target")]
    pub retailer: String,
    /// Calendar date, `YYYY-MM-DD`.
    #[schema(example = "2022-01-01")]
    pub purchase_date: String,
    /// 24-hour time, `H:MM` or `HH:MM`.
    #[schema(example = "13:01")]
    pub purchase_time: String,
    pub items: Vec<Item>,
    #[schema(example = "35.35")]
    pub total: String,
}
