//! Core library for Settle, a debt payment plan builder.
//!
//! Given a user's outstanding payment tasks and optional preferences, the
//! crate expands the preferences into concrete plan options and allocates the
//! debt into a dated schedule of payments for each option, using one of two
//! strategies:
//!
//! - **MIN_FEES**: pay the highest-APR account first (debt avalanche)
//! - **OPTIM_CREDIT_SCORE**: pay down the highest-utilization account first
//!
//! Around that engine sit a SQLite store for plans and account snapshots
//! ([`db`]), an async [`Planner`] facade, per-user overviews ([`overview`])
//! and markdown Display formatting ([`display`]).
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::civil::date;
//! use settle_core::{
//!     accounts::InMemoryAccounts,
//!     models::{AccountSnapshot, PaymentTask, PlanType, Preferences},
//!     PaymentPlanBuilder,
//! };
//!
//! let accounts = InMemoryAccounts::new()
//!     .with_account(AccountSnapshot {
//!         account_id: "amex".to_string(),
//!         user_id: Some("user-1".to_string()),
//!         purchase_apr: Some(42.0),
//!         current_balance: 1000.0,
//!         credit_limit: 5000.0,
//!     })
//!     .with_account(AccountSnapshot {
//!         account_id: "chase".to_string(),
//!         user_id: Some("user-1".to_string()),
//!         purchase_apr: Some(22.0),
//!         current_balance: 500.0,
//!         credit_limit: 3000.0,
//!     });
//!
//! let builder = PaymentPlanBuilder::new(accounts).with_start_date(date(2024, 1, 15));
//! let tasks = vec![
//!     PaymentTask::new("t1", "user-1", "amex", 500.0),
//!     PaymentTask::new("t2", "user-1", "chase", 500.0),
//! ];
//! let preferences = Preferences {
//!     plan_type: Some(PlanType::OptimCreditScore),
//!     ..Default::default()
//! };
//!
//! let plans = builder.create_payment_plans(&tasks, Some(&preferences)).unwrap();
//! assert_eq!(plans.len(), 3);
//! for plan in &plans {
//!     println!("{plan}");
//! }
//! ```

pub mod accounts;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod overview;
pub mod params;
pub mod planner;
pub mod planning;

// Re-export commonly used types
pub use accounts::{AccountLookup, CancellableAccounts, InMemoryAccounts, SqliteAccounts};
pub use db::Database;
pub use display::{
    Accounts, CreateResult, DeleteResult, OperationStatus, PaymentPlans, UpdateResult, Waterfall,
};
pub use error::{PlanningError, Result};
pub use models::{
    AccountSnapshot, PaymentAction, PaymentActionStatus, PaymentFrequency, PaymentPlan,
    PaymentStatus, PaymentTask, PlanFilter, PlanOption, PlanType, Preferences,
};
pub use params::{CreatePlans, Id, ListPlans, UpdateAction, UpdatePlan, UserId};
pub use planner::{Planner, PlannerBuilder};
pub use planning::{expand_options, PaymentPlanBuilder, MAX_AMOUNT};
