//! The seven scoring rules.
//!
//! Each rule reads only its own input and returns a non-negative contribution.
//! A value that does not parse contributes 0 for that rule; no rule can fail.

use crate::domain::receipt::{parse_purchase_date, parse_purchase_time, Item};
use chrono::{Datelike, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

pub const ROUND_TOTAL_POINTS: u64 = 50;
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;
pub const ITEM_PAIR_POINTS: u64 = 5;
pub const ODD_DAY_POINTS: u64 = 6;
pub const AFTERNOON_POINTS: u64 = 10;

fn quarter() -> Decimal {
    Decimal::new(25, 2)
}

fn description_multiplier() -> Decimal {
    Decimal::new(2, 1)
}

// Values that cannot be represented without rounding do not parse.
fn parse_amount(s: &str) -> Option<Decimal> {
    Decimal::from_str_exact(s.trim()).ok()
}

// ceil(price * 0.2), saturating at u64::MAX; negative prices give 0.
fn description_bonus(price: Decimal) -> u64 {
    let Some(scaled) = price.checked_mul(description_multiplier()) else {
        return 0;
    };
    let rounded = scaled.ceil();
    if rounded.is_sign_negative() || rounded.is_zero() {
        return 0;
    }
    rounded.to_u64().unwrap_or(u64::MAX)
}

/// One point per ASCII letter or digit in the retailer name.
pub fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

/// 50 points when the total has no cents.
pub fn round_total_points(total: &str) -> u64 {
    match parse_amount(total) {
        Some(t) if t.fract().is_zero() => ROUND_TOTAL_POINTS,
        _ => 0,
    }
}

/// 25 points when the total is a multiple of 0.25.
pub fn quarter_multiple_points(total: &str) -> u64 {
    match parse_amount(total) {
        Some(t) if (t % quarter()).is_zero() => QUARTER_MULTIPLE_POINTS,
        _ => 0,
    }
}

/// 5 points for every two items.
pub fn item_pair_points(items: &[Item]) -> u64 {
    ITEM_PAIR_POINTS * (items.len() / 2) as u64
}

/// For each item whose trimmed description length is a multiple of 3, adds the
/// price times 0.2 rounded up.
pub fn description_points(items: &[Item]) -> u64 {
    items
        .iter()
        .filter(|item| item.short_description.trim().chars().count() % 3 == 0)
        .filter_map(|item| parse_amount(&item.price))
        .map(description_bonus)
        .fold(0, u64::saturating_add)
}

/// 6 points when the day of the purchase date is odd.
pub fn odd_day_points(purchase_date: &str) -> u64 {
    match parse_purchase_date(purchase_date) {
        Some(date) if date.day() % 2 == 1 => ODD_DAY_POINTS,
        _ => 0,
    }
}

/// 10 points when the purchase time is after 14:00 and before 16:00, both exclusive.
pub fn afternoon_points(purchase_time: &str) -> u64 {
    let Some(time) = parse_purchase_time(purchase_time) else {
        return 0;
    };
    match (time.hour(), time.minute()) {
        (14, m) if m > 0 => AFTERNOON_POINTS,
        (15, _) => AFTERNOON_POINTS,
        _ => 0,
    }
}
