//! Data models for payment tasks, accounts and payment plans.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping presentation apart from data.
//!
//! # Examples
//!
//! ```rust
//! use settle_core::models::{PaymentFrequency, PlanOption, PlanType};
//!
//! let option = PlanOption::new(PlanType::MinFees, 3.0, PaymentFrequency::Biweekly);
//! assert_eq!(option.num_periods(), 6.0);
//! ```

pub mod account;
pub mod filters;
pub mod overview;
pub mod plan;
pub mod status;
pub mod task;


pub use account::{AccountSnapshot, DEFAULT_PURCHASE_APR};
pub use filters::PlanFilter;
pub use overview::{Coverage, WaterfallMonth};
pub use plan::{PaymentAction, PaymentPlan};
pub use status::{PaymentActionStatus, PaymentFrequency, PaymentStatus, PlanType};
pub use task::{PaymentTask, PlanOption, Preferences};
