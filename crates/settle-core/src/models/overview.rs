//! Aggregated views over a user's active payment plans.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Amounts scheduled per account within one calendar month.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WaterfallMonth {
    pub year: i16,
    pub month: i8,
    pub account_to_amount: BTreeMap<String, f64>,
}

impl WaterfallMonth {
    /// Total scheduled across all accounts this month.
    pub fn total(&self) -> f64 {
        self.account_to_amount.values().sum()
    }
}

/// Share of a user's balances covered by pending payment actions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Coverage {
    pub overall_covered: f64,
    pub account_to_percent_covered: BTreeMap<String, f64>,
}
