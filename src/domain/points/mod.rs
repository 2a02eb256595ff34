//! Points Engine: a pure, total scoring function over a receipt.
//!
//! The score is the sum of seven independent rules (see [`rules`]). The engine performs
//! no I/O, holds no state and never fails; a field that does not parse simply contributes
//! nothing to its rule.

use crate::domain::receipt::Receipt;
use serde::Serialize;

pub mod rules;

/// Per-rule contributions for one receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PointsBreakdown {
    pub retailer: u64,
    pub round_total: u64,
    pub quarter_multiple: u64,
    pub item_pairs: u64,
    pub descriptions: u64,
    pub odd_day: u64,
    pub afternoon: u64,
}

impl PointsBreakdown {
    /// Sum of every rule, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        [
            self.retailer,
            self.round_total,
            self.quarter_multiple,
            self.item_pairs,
            self.descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

/// Applies every rule to `receipt`.
pub fn score(receipt: &Receipt) -> PointsBreakdown {
    PointsBreakdown {
        retailer: rules::retailer_points(&receipt.retailer),
        round_total: rules::round_total_points(&receipt.total),
        quarter_multiple: rules::quarter_multiple_points(&receipt.total),
        item_pairs: rules::item_pair_points(&receipt.items),
        descriptions: rules::description_points(&receipt.items),
        odd_day: rules::odd_day_points(&receipt.purchase_date),
        afternoon: rules::afternoon_points(&receipt.purchase_time),
    }
}

/// Total points awarded for `receipt`.
pub fn compute_points(receipt: &Receipt) -> u64 {
    score(receipt).total()
}
