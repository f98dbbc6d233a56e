//! Plan allocation for one concrete plan option.

use std::collections::{hash_map::Entry, HashMap};

use jiff::civil::Date;
use log::debug;

use super::{
    avalanche::schedule_min_fees,
    calendar::PaymentCalendar,
    money::{ceil_per_period, checked_total, from_cents, to_cents, MAX_AMOUNT},
    options::validate_option,
    request::PlanRequest,
    utilization::schedule_optim_credit_score,
    PaymentPlanBuilder,
};
use crate::{
    accounts::AccountLookup,
    error::{PlanningError, Result},
    models::{
        account::utilization, AccountSnapshot, PaymentAction, PaymentPlan, PaymentStatus,
        PlanOption, PlanType,
    },
};

/// One task in the allocator's working table, amounts in cents.
#[derive(Debug, Clone)]
pub(super) struct WorkingRow {
    pub account_id: String,
    pub remaining: i64,
    pub apr: f64,
    pub balance: i64,
    pub credit_limit: i64,
}

impl WorkingRow {
    fn new(account_id: &str, amount: f64, snapshot: &AccountSnapshot) -> Result<Self> {
        let cents = |field: &str, value: f64| {
            to_cents(value).ok_or_else(|| {
                PlanningError::invalid_request(format!(
                    "{field} {value} on account {account_id} is not a number within {MAX_AMOUNT}"
                ))
            })
        };

        Ok(Self {
            account_id: account_id.to_string(),
            remaining: cents("amount", amount)?,
            apr: snapshot.apr(),
            balance: cents("balance", snapshot.current_balance)?,
            credit_limit: cents("credit limit", snapshot.credit_limit)?,
        })
    }

    pub fn utilization(&self) -> f64 {
        utilization(self.balance as f64, self.credit_limit as f64)
    }

    /// Records a payment against this task and returns the matching action.
    pub fn pay(&mut self, cents: i64, date: Date) -> PaymentAction {
        self.remaining -= cents;
        PaymentAction::pending(self.account_id.clone(), from_cents(cents), date)
    }
}

impl<L: AccountLookup> PaymentPlanBuilder<L> {
    /// Builds the plan for one option over index-aligned task columns.
    ///
    /// # Errors
    ///
    /// - `PlanningError::InvalidPreference` if the timeline is not positive
    /// - `PlanningError::InvalidRequest` if the columns are misaligned
    /// - `PlanningError::AccountNotFound` if an account cannot be resolved
    /// - `PlanningError::EmptyAllocation` if the tasks owe nothing
    pub fn allocate(
        &self,
        user_id: &str,
        option: PlanOption,
        payment_task_ids: &[String],
        account_ids: &[String],
        amounts: &[f64],
    ) -> Result<PaymentPlan> {
        let request = PlanRequest::from_columns(
            user_id.to_string(),
            payment_task_ids.to_vec(),
            account_ids.to_vec(),
            amounts.to_vec(),
        )?;
        self.allocate_request(self.today(), option, &request)
    }

    pub(crate) fn allocate_request(
        &self,
        today: Date,
        option: PlanOption,
        request: &PlanRequest,
    ) -> Result<PaymentPlan> {
        validate_option(&option)?;

        let rows = self.load_working_table(&request.account_ids, &request.amounts)?;
        let total_cents = checked_total(rows.iter().map(|row| row.remaining)).ok_or_else(|| {
            PlanningError::invalid_request(format!(
                "total amount owed exceeds the maximum of {MAX_AMOUNT}"
            ))
        })?;
        if total_cents == 0 {
            return Err(PlanningError::EmptyAllocation);
        }

        let per_period = ceil_per_period(total_cents, option.num_periods());
        debug!(
            "Allocating {} for user {}: {} cents over {:.2} periods, {} per period",
            option,
            request.user_id,
            total_cents,
            option.num_periods(),
            per_period
        );

        let schedule_error = |e: jiff::Error| {
            PlanningError::invalid_preference(option.to_string())
                .with_reason(format!("payment date out of range: {e}"))
        };

        let mut calendar =
            PaymentCalendar::starting_after(today, option.payment_frequency).map_err(schedule_error)?;
        let payment_actions = match option.plan_type {
            PlanType::MinFees => schedule_min_fees(rows, per_period, &mut calendar),
            PlanType::OptimCreditScore => {
                schedule_optim_credit_score(rows, per_period, &mut calendar)
            }
        }
        .map_err(schedule_error)?;

        let end_date = payment_actions
            .last()
            .map(|action| action.transaction_date)
            .ok_or(PlanningError::EmptyAllocation)?;

        Ok(PaymentPlan {
            id: None,
            user_id: request.user_id.clone(),
            payment_task_ids: request.payment_task_ids.clone(),
            total_amount: from_cents(total_cents),
            timeline_months: option.timeline_months,
            payment_frequency: option.payment_frequency,
            amount_per_payment: from_cents(per_period),
            plan_type: option.plan_type,
            end_date,
            active: true,
            status: PaymentStatus::Current,
            payment_actions,
        })
    }

    /// Looks up each distinct account once and builds one row per task.
    fn load_working_table(&self, account_ids: &[String], amounts: &[f64]) -> Result<Vec<WorkingRow>> {
        let mut snapshots: HashMap<&str, AccountSnapshot> = HashMap::new();
        let mut rows = Vec::with_capacity(account_ids.len());

        for (account_id, &amount) in account_ids.iter().zip(amounts) {
            let snapshot = match snapshots.entry(account_id.as_str()) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => entry.insert(self.accounts.get_account(account_id)?),
            };
            rows.push(WorkingRow::new(account_id, amount, snapshot)?);
        }

        Ok(rows)
    }
}
