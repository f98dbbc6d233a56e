//! Enumerations for plan types, payment frequencies and statuses.
//!
//! Every enumeration has two explicit representations besides its serde form:
//! a lowercase storage string (`as_str` / [`FromStr`]) used by the database
//! layer, and an integer wire code (`wire_code` / `from_wire_code`) matching
//! the planning protocol, where `0` always means "unspecified".

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlanningError, Result as PlanningResult};

/// Allocation strategy for a payment plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanType {
    /// Debt avalanche: highest APR first, minimizing finance charges
    MinFees,

    /// Highest utilization first, minimizing credit utilization
    OptimCreditScore,
}

impl PlanType {
    /// Both strategies, in expansion order.
    pub const ALL: [PlanType; 2] = [PlanType::MinFees, PlanType::OptimCreditScore];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::MinFees => "min_fees",
            PlanType::OptimCreditScore => "optim_credit_score",
        }
    }

    /// Integer code used on the wire.
    pub fn wire_code(self) -> i32 {
        match self {
            PlanType::OptimCreditScore => 1,
            PlanType::MinFees => 2,
        }
    }

    /// Decode a wire code; `0` is the unspecified sentinel.
    pub fn from_wire_code(code: i32) -> PlanningResult<Option<Self>> {
        match code {
            0 => Ok(None),
            1 => Ok(Some(PlanType::OptimCreditScore)),
            2 => Ok(Some(PlanType::MinFees)),
            _ => Err(PlanningError::invalid_preference("plan_type")
                .with_reason(format!("unknown wire code {code}"))),
        }
    }
}

impl FromStr for PlanType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "min_fees" => Ok(PlanType::MinFees),
            "optim_credit_score" => Ok(PlanType::OptimCreditScore),
            _ => Err(format!("Invalid plan type: {s}")),
        }
    }
}

/// How often a payment is scheduled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentFrequency {
    Weekly,
    Biweekly,
    Monthly,
    Quarterly,
}

impl PaymentFrequency {
    /// Length of one payment period expressed in months.
    pub fn months_per_period(self) -> f64 {
        match self {
            PaymentFrequency::Weekly => 0.25,
            PaymentFrequency::Biweekly => 0.5,
            PaymentFrequency::Monthly => 1.0,
            PaymentFrequency::Quarterly => 3.0,
        }
    }

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentFrequency::Weekly => "weekly",
            PaymentFrequency::Biweekly => "biweekly",
            PaymentFrequency::Monthly => "monthly",
            PaymentFrequency::Quarterly => "quarterly",
        }
    }

    /// Integer code used on the wire.
    pub fn wire_code(self) -> i32 {
        match self {
            PaymentFrequency::Weekly => 1,
            PaymentFrequency::Biweekly => 2,
            PaymentFrequency::Monthly => 3,
            PaymentFrequency::Quarterly => 4,
        }
    }

    /// Decode a wire code; `0` is the unspecified sentinel.
    pub fn from_wire_code(code: i32) -> PlanningResult<Option<Self>> {
        match code {
            0 => Ok(None),
            1 => Ok(Some(PaymentFrequency::Weekly)),
            2 => Ok(Some(PaymentFrequency::Biweekly)),
            3 => Ok(Some(PaymentFrequency::Monthly)),
            4 => Ok(Some(PaymentFrequency::Quarterly)),
            _ => Err(PlanningError::invalid_preference("payment_frequency")
                .with_reason(format!("unknown wire code {code}"))),
        }
    }
}

impl FromStr for PaymentFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weekly" => Ok(PaymentFrequency::Weekly),
            "biweekly" => Ok(PaymentFrequency::Biweekly),
            "monthly" => Ok(PaymentFrequency::Monthly),
            "quarterly" => Ok(PaymentFrequency::Quarterly),
            _ => Err(format!("Invalid payment frequency: {s}")),
        }
    }
}

/// Lifecycle status of a whole payment plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    /// Plan is being serviced
    #[default]
    Current,

    /// Every action has been paid
    Completed,

    /// Payments were missed
    InDefault,

    /// Plan was abandoned by the user
    Cancelled,
}

impl PaymentStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Current => "current",
            PaymentStatus::Completed => "completed",
            PaymentStatus::InDefault => "in_default",
            PaymentStatus::Cancelled => "cancelled",
        }
    }

    /// Integer code used on the wire.
    pub fn wire_code(self) -> i32 {
        match self {
            PaymentStatus::Current => 1,
            PaymentStatus::Completed => 2,
            PaymentStatus::InDefault => 4,
            PaymentStatus::Cancelled => 5,
        }
    }

    /// Decode a wire code; `0` is the unspecified sentinel.
    pub fn from_wire_code(code: i32) -> PlanningResult<Option<Self>> {
        match code {
            0 => Ok(None),
            1 => Ok(Some(PaymentStatus::Current)),
            2 => Ok(Some(PaymentStatus::Completed)),
            4 => Ok(Some(PaymentStatus::InDefault)),
            5 => Ok(Some(PaymentStatus::Cancelled)),
            _ => Err(PlanningError::invalid_request(format!(
                "unknown payment status wire code {code}"
            ))),
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "current" => Ok(PaymentStatus::Current),
            "completed" => Ok(PaymentStatus::Completed),
            "in_default" | "indefault" => Ok(PaymentStatus::InDefault),
            "cancelled" | "canceled" => Ok(PaymentStatus::Cancelled),
            _ => Err(format!("Invalid payment status: {s}")),
        }
    }
}

/// Status of a single scheduled payment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentActionStatus {
    /// Scheduled but not yet paid
    #[default]
    Pending,

    /// Paid
    Completed,

    /// Missed
    InDefault,
}

impl PaymentActionStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentActionStatus::Pending => "pending",
            PaymentActionStatus::Completed => "completed",
            PaymentActionStatus::InDefault => "in_default",
        }
    }

    /// Integer code used on the wire.
    pub fn wire_code(self) -> i32 {
        match self {
            PaymentActionStatus::Pending => 1,
            PaymentActionStatus::Completed => 2,
            PaymentActionStatus::InDefault => 3,
        }
    }

    /// Decode a wire code; `0` is the unspecified sentinel.
    pub fn from_wire_code(code: i32) -> PlanningResult<Option<Self>> {
        match code {
            0 => Ok(None),
            1 => Ok(Some(PaymentActionStatus::Pending)),
            2 => Ok(Some(PaymentActionStatus::Completed)),
            3 => Ok(Some(PaymentActionStatus::InDefault)),
            _ => Err(PlanningError::invalid_request(format!(
                "unknown payment action status wire code {code}"
            ))),
        }
    }

    /// Get status with a leading icon for display.
    pub fn with_icon(&self) -> &'static str {
        match self {
            PaymentActionStatus::Completed => "✓ Completed",
            PaymentActionStatus::Pending => "○ Pending",
            PaymentActionStatus::InDefault => "✗ In Default",
        }
    }
}

impl FromStr for PaymentActionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "pending" => Ok(PaymentActionStatus::Pending),
            "completed" => Ok(PaymentActionStatus::Completed),
            "in_default" | "indefault" => Ok(PaymentActionStatus::InDefault),
            _ => Err(format!("Invalid payment action status: {s}")),
        }
    }
}
