//! Payment task and preference inputs.

use serde::{Deserialize, Serialize};

use super::{PaymentFrequency, PlanType};
use crate::error::Result;

/// One debt amount owed on one account, awaiting allocation into a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentTask {
    /// Identifier of the task, carried into the plan's task id list
    pub id: String,

    /// Owner of the debt
    pub user_id: String,

    /// Account the amount is owed on
    pub account_id: String,

    /// Amount owed, in currency units
    pub amount: f64,
}

impl PaymentTask {
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        account_id: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            account_id: account_id.into(),
            amount,
        }
    }
}

/// Optional user preferences; every unset field is expanded into defaults.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Preferences {
    #[serde(default)]
    pub plan_type: Option<PlanType>,

    #[serde(default)]
    pub timeline_months: Option<f64>,

    #[serde(default)]
    pub payment_frequency: Option<PaymentFrequency>,
}

impl Preferences {
    /// Build preferences from wire values, where `0` / `0.0` mean unspecified.
    ///
    /// # Errors
    ///
    /// Returns `PlanningError::InvalidPreference` naming the field whose wire
    /// code is unknown.
    pub fn from_wire(
        plan_type: i32,
        timeline_months: f64,
        payment_frequency: i32,
    ) -> Result<Self> {
        Ok(Self {
            plan_type: PlanType::from_wire_code(plan_type)?,
            timeline_months: (timeline_months != 0.0).then_some(timeline_months),
            payment_frequency: PaymentFrequency::from_wire_code(payment_frequency)?,
        })
    }
}

/// One concrete combination the allocator builds a plan for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PlanOption {
    pub plan_type: PlanType,
    pub timeline_months: f64,
    pub payment_frequency: PaymentFrequency,
}

impl PlanOption {
    pub fn new(
        plan_type: PlanType,
        timeline_months: f64,
        payment_frequency: PaymentFrequency,
    ) -> Self {
        Self {
            plan_type,
            timeline_months,
            payment_frequency,
        }
    }

    /// Number of payment periods the timeline spans.
    pub fn num_periods(&self) -> f64 {
        self.timeline_months / self.payment_frequency.months_per_period()
    }
}
