//! Account attributes read from the account source.

use serde::{Deserialize, Serialize};

/// Purchase APR assumed when the account source does not report one.
pub const DEFAULT_PURCHASE_APR: f64 = 10.0;

/// Read-only view of an account at allocation time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountSnapshot {
    pub account_id: String,

    /// Owner of the account, when the source knows it
    #[serde(default)]
    pub user_id: Option<String>,

    /// Purchase APR in percent
    #[serde(default)]
    pub purchase_apr: Option<f64>,

    pub current_balance: f64,

    pub credit_limit: f64,
}

impl AccountSnapshot {
    /// Purchase APR, falling back to [`DEFAULT_PURCHASE_APR`].
    pub fn apr(&self) -> f64 {
        self.purchase_apr.unwrap_or(DEFAULT_PURCHASE_APR)
    }

    /// Balance divided by credit limit.
    ///
    /// An account without a positive limit is treated as fully utilized when
    /// it carries a balance, and unused otherwise.
    pub fn utilization(&self) -> f64 {
        utilization(self.current_balance, self.credit_limit)
    }
}

pub(crate) fn utilization(balance: f64, credit_limit: f64) -> f64 {
    if credit_limit > 0.0 {
        balance / credit_limit
    } else if balance > 0.0 {
        f64::INFINITY
    } else {
        0.0
    }
}
