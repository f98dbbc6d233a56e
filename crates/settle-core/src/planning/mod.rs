//! The payment plan builder: option expansion and allocation.
//!
//! A request flows through two stages:
//!
//! ```text
//! ┌──────────────────┐    ┌──────────────────┐    ┌──────────────────┐
//! │  PaymentTasks +  │    │ Option Expander  │    │  Plan Allocator  │
//! │   Preferences    │───▶│ (expand_options) │───▶│   (allocate)     │
//! └──────────────────┘    └──────────────────┘    └──────────────────┘
//!                           N plan options          one plan per option
//! ```
//!
//! ## Submodules
//!
//! - [`options`]: resolves unset preferences into concrete [`PlanOption`]s
//! - [`allocator`]: builds one [`PaymentPlan`] for one option
//! - [`calendar`]: payment date shifting
//! - [`request`]: validated task columns
//!
//! The avalanche (MIN_FEES) and utilization (OPTIM_CREDIT_SCORE) strategies
//! are private to the allocator.
//!
//! # Example
//!
//! ```rust
//! use jiff::civil::date;
//! use settle_core::{
//!     accounts::InMemoryAccounts,
//!     models::{AccountSnapshot, PaymentFrequency, PaymentTask, PlanType, Preferences},
//!     PaymentPlanBuilder,
//! };
//!
//! let accounts = InMemoryAccounts::new().with_account(AccountSnapshot {
//!     account_id: "amex".to_string(),
//!     user_id: None,
//!     purchase_apr: Some(42.0),
//!     current_balance: 1000.0,
//!     credit_limit: 5000.0,
//! });
//! let builder = PaymentPlanBuilder::new(accounts).with_start_date(date(2024, 1, 15));
//!
//! let preferences = Preferences {
//!     plan_type: Some(PlanType::MinFees),
//!     timeline_months: Some(2.0),
//!     payment_frequency: Some(PaymentFrequency::Monthly),
//! };
//! let plans = builder
//!     .create_payment_plans(&[PaymentTask::new("t1", "u1", "amex", 500.0)], Some(&preferences))
//!     .unwrap();
//!
//! assert_eq!(plans.len(), 1);
//! assert_eq!(plans[0].amount_per_payment, 250.0);
//! assert_eq!(plans[0].end_date, date(2024, 3, 15));
//! ```

use jiff::{civil::Date, Zoned};
use log::{info, warn};

use crate::{
    accounts::AccountLookup,
    error::Result,
    models::{PaymentPlan, PaymentTask, PlanOption, Preferences},
};

pub mod allocator;
mod avalanche;
pub mod calendar;
mod money;
pub mod options;
pub mod request;
mod utilization;


pub use calendar::{shift_date, PaymentCalendar};
pub use money::MAX_AMOUNT;
pub use options::{expand_options, SMALL_DEBT_THRESHOLD};
pub use request::PlanRequest;

/// Builds payment plans against an injected account source.
#[derive(Debug, Clone)]
pub struct PaymentPlanBuilder<L> {
    accounts: L,
    start_date: Option<Date>,
}

impl<L: AccountLookup> PaymentPlanBuilder<L> {
    pub fn new(accounts: L) -> Self {
        Self {
            accounts,
            start_date: None,
        }
    }

    /// Pins the day schedules are computed from. Defaults to today in the
    /// system time zone.
    pub fn with_start_date(mut self, start_date: Date) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// The day the first period is counted from.
    pub fn today(&self) -> Date {
        self.start_date.unwrap_or_else(|| Zoned::now().date())
    }

    /// Expands the preferences and builds one plan per resulting option.
    ///
    /// Plans come back in expansion order. The call is all-or-nothing: the
    /// first option that fails aborts the request with that option's error.
    ///
    /// # Errors
    ///
    /// Returns `PlanningError::InvalidRequest` for an empty or multi-user task
    /// list, and otherwise any error from [`expand_options`] or
    /// [`PaymentPlanBuilder::allocate`].
    pub fn create_payment_plans(
        &self,
        tasks: &[PaymentTask],
        preferences: Option<&Preferences>,
    ) -> Result<Vec<PaymentPlan>> {
        let request = PlanRequest::from_tasks(tasks)?;
        let options = self.plan_options(&request, preferences)?;
        let today = self.today();

        options
            .into_iter()
            .map(|option| {
                self.allocate_request(today, option, &request).map_err(|e| {
                    warn!("Plan option {option} failed: {e}");
                    e
                })
            })
            .collect()
    }

    /// Expands the preferences for a validated request.
    pub fn plan_options(
        &self,
        request: &PlanRequest,
        preferences: Option<&Preferences>,
    ) -> Result<Vec<PlanOption>> {
        let preferences = preferences.copied().unwrap_or_default();
        let options = expand_options(&preferences, request.total_amount())?;
        info!(
            "Building {} payment plan option(s) for user {} over {} task(s)",
            options.len(),
            request.user_id,
            request.payment_task_ids.len()
        );
        Ok(options)
    }
}
