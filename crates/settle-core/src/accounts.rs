//! Account lookup capability consumed by the plan allocator.
//!
//! The allocator never reaches for a global client: whoever builds a
//! [`PaymentPlanBuilder`](crate::PaymentPlanBuilder) hands it an
//! [`AccountLookup`]. Two implementations ship with the crate: an in-memory
//! table for tests and embedding, and [`SqliteAccounts`], which opens a
//! connection per lookup against the planner database.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use crate::{
    db::Database,
    error::{PlanningError, Result},
    models::AccountSnapshot,
};

/// Resolves account attributes by id.
pub trait AccountLookup: Send + Sync {
    /// Fetches the current snapshot of an account.
    ///
    /// # Errors
    ///
    /// Returns `PlanningError::AccountNotFound` when the id is unknown.
    fn get_account(&self, account_id: &str) -> Result<AccountSnapshot>;
}

impl<T: AccountLookup + ?Sized> AccountLookup for &T {
    fn get_account(&self, account_id: &str) -> Result<AccountSnapshot> {
        (**self).get_account(account_id)
    }
}

impl<T: AccountLookup + ?Sized> AccountLookup for Arc<T> {
    fn get_account(&self, account_id: &str) -> Result<AccountSnapshot> {
        (**self).get_account(account_id)
    }
}

/// Accounts held in memory, keyed by account id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccounts {
    accounts: HashMap<String, AccountSnapshot>,
}

impl InMemoryAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an account.
    pub fn insert(&mut self, account: AccountSnapshot) {
        self.accounts.insert(account.account_id.clone(), account);
    }

    /// Builder-style variant of [`InMemoryAccounts::insert`].
    pub fn with_account(mut self, account: AccountSnapshot) -> Self {
        self.insert(account);
        self
    }
}

impl FromIterator<AccountSnapshot> for InMemoryAccounts {
    fn from_iter<I: IntoIterator<Item = AccountSnapshot>>(iter: I) -> Self {
        let mut accounts = Self::new();
        for account in iter {
            accounts.insert(account);
        }
        accounts
    }
}

impl AccountLookup for InMemoryAccounts {
    fn get_account(&self, account_id: &str) -> Result<AccountSnapshot> {
        self.accounts
            .get(account_id)
            .cloned()
            .ok_or_else(|| PlanningError::account_not_found(account_id))
    }
}

/// Accounts stored in the planner's SQLite database.
///
/// Each lookup opens its own connection and drops it before returning, so no
/// session outlives a single allocation.
#[derive(Debug, Clone)]
pub struct SqliteAccounts {
    db_path: PathBuf,
}

impl SqliteAccounts {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Self {
        Self {
            db_path: db_path.as_ref().to_path_buf(),
        }
    }
}

impl AccountLookup for SqliteAccounts {
    fn get_account(&self, account_id: &str) -> Result<AccountSnapshot> {
        let db = Database::new(&self.db_path)?;
        db.get_account(account_id)?
            .ok_or_else(|| PlanningError::account_not_found(account_id))
    }
}

/// A lookup that fails with `PlanningError::Cancelled` once its shared flag
/// is raised.
///
/// Allocations running on the blocking pool cannot be aborted from outside;
/// behind this wrapper they stop at their next account lookup instead.
#[derive(Debug, Clone)]
pub struct CancellableAccounts<L> {
    inner: L,
    cancelled: Arc<AtomicBool>,
}

impl<L> CancellableAccounts<L> {
    pub fn new(inner: L, cancelled: Arc<AtomicBool>) -> Self {
        Self { inner, cancelled }
    }
}

impl<L: AccountLookup> AccountLookup for CancellableAccounts<L> {
    fn get_account(&self, account_id: &str) -> Result<AccountSnapshot> {
        if self.cancelled.load(Ordering::Acquire) {
            return Err(PlanningError::Cancelled {
                reason: format!("lookup of account {account_id} skipped after cancellation"),
            });
        }
        self.inner.get_account(account_id)
    }
}
