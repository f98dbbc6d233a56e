//! Markdown formatting for plans, accounts and overviews.
//!
//! Domain models implement Display directly (see [`models`]); collections and
//! operation results get newtype wrappers so that each output context formats
//! consistently.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │  Wrappers and   │    │    Markdown     │
//! │ (PaymentPlan,   │───▶│  result types   │───▶│     output      │
//! │  Account, ...)  │    │                 │    │   (terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`amount`]: money and percentage formatting
//! - [`collections`]: collection wrappers (PaymentPlans, Accounts, Waterfall)
//! - [`results`]: operation results (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: one-line confirmations (OperationStatus)
//! - [`models`]: Display implementations for domain models
//!
//! # Example
//!
//! ```rust
//! use settle_core::display::{OperationStatus, Percent};
//!
//! let status = OperationStatus::success(format!("Paid {} of scheduled payments", Percent(0.25)));
//! assert_eq!(status.to_string(), "Success: Paid 25.0% of scheduled payments\n");
//! ```

pub mod amount;
pub mod collections;
pub mod models;
pub mod results;
pub mod status;

pub use amount::{Amount, Percent};
pub use collections::{Accounts, PaymentPlans, Waterfall};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
