//! Payment plan and payment action models.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{PaymentActionStatus, PaymentFrequency, PaymentStatus, PlanType};

/// One scheduled partial payment on one date for one account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentAction {
    pub account_id: String,

    /// Amount paid, always positive
    pub amount: f64,

    pub transaction_date: Date,

    #[serde(default)]
    pub status: PaymentActionStatus,
}

impl PaymentAction {
    pub(crate) fn pending(account_id: impl Into<String>, amount: f64, date: Date) -> Self {
        Self {
            account_id: account_id.into(),
            amount,
            transaction_date: date,
            status: PaymentActionStatus::Pending,
        }
    }
}

/// Full dated schedule satisfying one task set under one strategy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentPlan {
    /// Storage identifier, assigned once the plan is saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    pub user_id: String,

    pub payment_task_ids: Vec<String>,

    /// Sum of all task amounts
    pub total_amount: f64,

    pub timeline_months: f64,

    pub payment_frequency: PaymentFrequency,

    /// Budget of each period, rounded up to the cent
    pub amount_per_payment: f64,

    pub plan_type: PlanType,

    /// Date of the last scheduled action
    pub end_date: Date,

    #[serde(default = "default_active")]
    pub active: bool,

    #[serde(default)]
    pub status: PaymentStatus,

    #[serde(default)]
    pub payment_actions: Vec<PaymentAction>,
}

fn default_active() -> bool {
    true
}

impl PaymentPlan {
    /// Sum of every scheduled action amount.
    pub fn scheduled_amount(&self) -> f64 {
        self.payment_actions.iter().map(|a| a.amount).sum()
    }

    /// Number of distinct payment dates.
    pub fn period_count(&self) -> usize {
        let mut dates: Vec<Date> = self
            .payment_actions
            .iter()
            .map(|a| a.transaction_date)
            .collect();
        dates.dedup();
        dates.len()
    }
}
