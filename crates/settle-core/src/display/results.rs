//! Result wrapper types for displaying operation outcomes.
//!
//! These wrap the resource returned by a store, update or delete operation
//! with a confirmation line and the resource itself.

use std::fmt;

use crate::models::{AccountSnapshot, PaymentPlan};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use settle_core::{
///     display::CreateResult,
///     models::{PaymentFrequency, PaymentPlan, PaymentStatus, PlanType},
/// };
///
/// let plan = PaymentPlan {
///     id: Some(1),
///     user_id: "user-1".to_string(),
///     payment_task_ids: vec!["t1".to_string()],
///     total_amount: 500.0,
///     timeline_months: 2.0,
///     payment_frequency: PaymentFrequency::Monthly,
///     amount_per_payment: 250.0,
///     plan_type: PlanType::MinFees,
///     end_date: date(2024, 3, 15),
///     active: true,
///     status: PaymentStatus::Current,
///     payment_actions: vec![],
/// };
///
/// let output = CreateResult::new(plan).to_string();
/// assert!(output.contains("Saved payment plan with ID: 1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<PaymentPlan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.resource.id {
            Some(id) => writeln!(f, "Saved payment plan with ID: {id}")?,
            None => writeln!(f, "Built payment plan (not saved)")?,
        }
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<AccountSnapshot> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stored account '{}'", self.resource.account_id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, optionally
/// listing what changed.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<PaymentPlan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.resource.id {
            Some(id) => writeln!(f, "Updated payment plan with ID: {id}")?,
            None => writeln!(f, "Updated payment plan")?,
        }

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<PaymentPlan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = &self.resource;
        write!(f, "Deleted {} plan", plan.plan_type)?;
        if let Some(id) = plan.id {
            write!(f, " (ID: {id})")?;
        }
        writeln!(f, " for user '{}'", plan.user_id)
    }
}
