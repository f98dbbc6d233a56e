//! Async facade over the plan builder and the plan store.
//!
//! [`Planner`] owns configuration only (database path, deadline, start
//! date). Every operation runs its blocking work on tokio's blocking pool and
//! opens its own database connection there.
//!
//! ```text
//! ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────┐
//! │     Planner     │    │ PaymentPlanBuilder│    │    Database     │
//! │  (async ops)    │───▶│  (one blocking   │───▶│   (via db/)     │
//! │                 │    │  task per option)│    │                 │
//! └─────────────────┘    └──────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: configures and creates [`Planner`] instances
//! - [`plan_ops`]: plan creation, storage and lifecycle updates
//! - [`account_ops`]: account snapshot storage
//! - [`overview_ops`]: waterfall, paid percentage and coverage per user
//!
//! # Example
//!
//! ```rust
//! use jiff::civil::date;
//! use settle_core::{
//!     models::{AccountSnapshot, PaymentTask},
//!     params::CreatePlans,
//!     PlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::TempDir::new()?;
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some(dir.path().join("settle.db")))
//!     .with_start_date(date(2024, 1, 15))
//!     .build()
//!     .await?;
//!
//! planner
//!     .upsert_account(&AccountSnapshot {
//!         account_id: "amex".to_string(),
//!         user_id: Some("user-1".to_string()),
//!         purchase_apr: Some(42.0),
//!         current_balance: 1000.0,
//!         credit_limit: 5000.0,
//!     })
//!     .await?;
//!
//! let plans = planner
//!     .create_payment_plans(&CreatePlans {
//!         tasks: vec![PaymentTask::new("t1", "user-1", "amex", 500.0)],
//!         save: true,
//!         ..Default::default()
//!     })
//!     .await?;
//! assert!(plans.iter().all(|plan| plan.id.is_some()));
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, time::Duration};

use jiff::civil::Date;

use crate::{
    accounts::{AccountLookup, SqliteAccounts},
    planning::PaymentPlanBuilder,
};

pub mod account_ops;
pub mod builder;
pub mod overview_ops;
pub mod plan_ops;

#[cfg(test)]
mod tests;

pub use builder::PlannerBuilder;

/// Main planner interface for building and managing payment plans.
#[derive(Debug, Clone)]
pub struct Planner {
    pub(crate) db_path: PathBuf,
    pub(crate) deadline: Option<Duration>,
    pub(crate) start_date: Option<Date>,
}

impl Planner {
    pub(crate) fn new(db_path: PathBuf, deadline: Option<Duration>, start_date: Option<Date>) -> Self {
        Self {
            db_path,
            deadline,
            start_date,
        }
    }

    /// Path of the SQLite database backing this planner.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// A plan builder that reads account snapshots from this planner's
    /// database.
    pub fn plan_builder(&self) -> PaymentPlanBuilder<SqliteAccounts> {
        self.builder_with(SqliteAccounts::new(&self.db_path))
    }

    fn builder_with<L: AccountLookup>(&self, accounts: L) -> PaymentPlanBuilder<L> {
        let builder = PaymentPlanBuilder::new(accounts);
        match self.start_date {
            Some(start_date) => builder.with_start_date(start_date),
            None => builder,
        }
    }

    /// The day overviews and new plans are computed from.
    pub fn today(&self) -> Date {
        self.plan_builder().today()
    }
}
