//! Account operations for the Planner.

use tokio::task;

use super::Planner;
use crate::{
    db::Database,
    error::{PlanningError, Result},
    models::AccountSnapshot,
    planning::MAX_AMOUNT,
};

impl Planner {
    /// Stores an account snapshot, replacing any snapshot with the same id.
    ///
    /// # Errors
    ///
    /// Returns `PlanningError::InvalidRequest` for an empty account id, a
    /// non-finite balance, limit or APR, or a balance or limit whose magnitude
    /// exceeds [`MAX_AMOUNT`].
    pub async fn upsert_account(&self, account: &AccountSnapshot) -> Result<AccountSnapshot> {
        validate_account(account)?;

        let db_path = self.db_path.clone();
        let account = account.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.upsert_account(&account)?;
            Ok(account)
        })
        .await
        .map_err(PlanningError::join)?
    }

    /// Retrieves an account snapshot by id.
    pub async fn get_account(&self, account_id: &str) -> Result<Option<AccountSnapshot>> {
        let db_path = self.db_path.clone();
        let account_id = account_id.to_string();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_account(&account_id)
        })
        .await
        .map_err(PlanningError::join)?
    }

    /// Lists the accounts owned by a user, or every account.
    pub async fn list_accounts(&self, user_id: Option<&str>) -> Result<Vec<AccountSnapshot>> {
        let db_path = self.db_path.clone();
        let user_id = user_id.map(str::to_string);

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_accounts(user_id.as_deref())
        })
        .await
        .map_err(PlanningError::join)?
    }
}

fn validate_account(account: &AccountSnapshot) -> Result<()> {
    if account.account_id.trim().is_empty() {
        return Err(PlanningError::invalid_request("account id must not be empty"));
    }
    let finite = account.current_balance.is_finite()
        && account.credit_limit.is_finite()
        && account.purchase_apr.map_or(true, f64::is_finite);
    if !finite {
        return Err(PlanningError::invalid_request(format!(
            "account '{}' has a non-finite balance, limit or APR",
            account.account_id
        )));
    }
    if account.current_balance.abs() > MAX_AMOUNT || account.credit_limit.abs() > MAX_AMOUNT {
        return Err(PlanningError::invalid_request(format!(
            "account '{}' has a balance or limit beyond {MAX_AMOUNT}",
            account.account_id
        )));
    }
    Ok(())
}
