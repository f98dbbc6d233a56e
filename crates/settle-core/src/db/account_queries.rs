//! Account snapshot storage.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, Result},
    models::AccountSnapshot,
};

const UPSERT_ACCOUNT_SQL: &str = "INSERT INTO accounts (account_id, user_id, purchase_apr, current_balance, credit_limit, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
    ON CONFLICT (account_id) DO UPDATE SET user_id = excluded.user_id, purchase_apr = excluded.purchase_apr, current_balance = excluded.current_balance, credit_limit = excluded.credit_limit, updated_at = excluded.updated_at";
const SELECT_ACCOUNT_SQL: &str = "SELECT account_id, user_id, purchase_apr, current_balance, credit_limit FROM accounts WHERE account_id = ?1";
const SELECT_USER_ACCOUNTS_SQL: &str = "SELECT account_id, user_id, purchase_apr, current_balance, credit_limit FROM accounts WHERE user_id = ?1 ORDER BY account_id";
const SELECT_ALL_ACCOUNTS_SQL: &str = "SELECT account_id, user_id, purchase_apr, current_balance, credit_limit FROM accounts ORDER BY account_id";

impl super::Database {
    /// Inserts an account or replaces the stored attributes of an existing one.
    pub fn upsert_account(&mut self, account: &AccountSnapshot) -> Result<()> {
        self.connection
            .execute(
                UPSERT_ACCOUNT_SQL,
                params![
                    account.account_id,
                    account.user_id,
                    account.purchase_apr,
                    account.current_balance,
                    account.credit_limit,
                    Timestamp::now().to_string(),
                ],
            )
            .db_context("Failed to store account")?;
        Ok(())
    }

    /// Retrieves an account by id.
    pub fn get_account(&self, account_id: &str) -> Result<Option<AccountSnapshot>> {
        self.connection
            .query_row(SELECT_ACCOUNT_SQL, params![account_id], Self::build_account_from_row)
            .optional()
            .db_context("Failed to query account")
    }

    /// Lists accounts, optionally only those owned by one user.
    pub fn list_accounts(&self, user_id: Option<&str>) -> Result<Vec<AccountSnapshot>> {
        let mut stmt = self
            .connection
            .prepare(if user_id.is_some() {
                SELECT_USER_ACCOUNTS_SQL
            } else {
                SELECT_ALL_ACCOUNTS_SQL
            })
            .db_context("Failed to prepare query")?;

        let rows = match user_id {
            Some(user_id) => stmt.query_map(params![user_id], Self::build_account_from_row),
            None => stmt.query_map([], Self::build_account_from_row),
        }
        .db_context("Failed to query accounts")?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch accounts")
    }

    fn build_account_from_row(row: &Row) -> rusqlite::Result<AccountSnapshot> {
        Ok(AccountSnapshot {
            account_id: row.get(0)?,
            user_id: row.get(1)?,
            purchase_apr: row.get(2)?,
            current_balance: row.get(3)?,
            credit_limit: row.get(4)?,
        })
    }
}
