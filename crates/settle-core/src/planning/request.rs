//! Validated, column-oriented view of a plan request.

use super::money::{checked_total, to_cents, MAX_AMOUNT};
use crate::{
    error::{PlanningError, Result},
    models::PaymentTask,
};

/// Index-aligned task columns for a single user.
///
/// `amounts[i]` is owed on `account_ids[i]` under `payment_task_ids[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    pub user_id: String,
    pub payment_task_ids: Vec<String>,
    pub account_ids: Vec<String>,
    pub amounts: Vec<f64>,
}

impl PlanRequest {
    /// Splits tasks into columns.
    ///
    /// # Errors
    ///
    /// Returns `PlanningError::InvalidRequest` when the task list is empty,
    /// spans more than one user, or carries an amount that is negative,
    /// non-finite or above [`MAX_AMOUNT`].
    pub fn from_tasks(tasks: &[PaymentTask]) -> Result<Self> {
        let first = tasks
            .first()
            .ok_or_else(|| PlanningError::invalid_request("no payment tasks given"))?;

        if let Some(other) = tasks.iter().find(|t| t.user_id != first.user_id) {
            return Err(PlanningError::invalid_request(format!(
                "tasks belong to more than one user ('{}' and '{}')",
                first.user_id, other.user_id
            )));
        }

        Self::from_columns(
            first.user_id.clone(),
            tasks.iter().map(|t| t.id.clone()).collect(),
            tasks.iter().map(|t| t.account_id.clone()).collect(),
            tasks.iter().map(|t| t.amount).collect(),
        )
    }

    /// Builds a request from already separated columns.
    ///
    /// # Errors
    ///
    /// Returns `PlanningError::InvalidRequest` when the columns differ in
    /// length, an amount is negative, non-finite or above [`MAX_AMOUNT`], or
    /// the amounts together exceed [`MAX_AMOUNT`].
    pub fn from_columns(
        user_id: String,
        payment_task_ids: Vec<String>,
        account_ids: Vec<String>,
        amounts: Vec<f64>,
    ) -> Result<Self> {
        if payment_task_ids.len() != account_ids.len() || account_ids.len() != amounts.len() {
            return Err(PlanningError::invalid_request(format!(
                "misaligned task columns: {} task ids, {} account ids, {} amounts",
                payment_task_ids.len(),
                account_ids.len(),
                amounts.len()
            )));
        }

        if let Some((account_id, amount)) = account_ids
            .iter()
            .zip(&amounts)
            .find(|(_, amount)| !amount.is_finite() || **amount < 0.0)
        {
            return Err(PlanningError::invalid_request(format!(
                "amount {amount} owed on account {account_id} is not a non-negative number"
            )));
        }

        let cents = account_ids
            .iter()
            .zip(&amounts)
            .map(|(account_id, &amount)| {
                to_cents(amount).ok_or_else(|| {
                    PlanningError::invalid_request(format!(
                        "amount {amount} owed on account {account_id} exceeds the maximum of {MAX_AMOUNT}"
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if checked_total(cents).is_none() {
            return Err(PlanningError::invalid_request(format!(
                "total amount owed exceeds the maximum of {MAX_AMOUNT}"
            )));
        }

        Ok(Self {
            user_id,
            payment_task_ids,
            account_ids,
            amounts,
        })
    }

    pub fn total_amount(&self) -> f64 {
        self.amounts.iter().sum()
    }
}
