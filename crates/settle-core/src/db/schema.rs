//! Schema setup and versioning.
//!
//! A fresh file gets the embedded schema and `user_version` is stamped with
//! [`SCHEMA_VERSION`]. Files already at that version are left untouched, so
//! the short-lived connections opened per account lookup only read.

use std::time::Duration;

use log::debug;

use crate::error::{DatabaseResultExt, PlanningError, Result};

/// Version stored in `PRAGMA user_version` by this build.
pub const SCHEMA_VERSION: i64 = 1;

/// Concurrent allocations open connections at the same time.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

impl super::Database {
    pub(super) fn initialize_schema(&self) -> Result<()> {
        self.connection
            .busy_timeout(BUSY_TIMEOUT)
            .db_context("Failed to set busy timeout")?;

        // Cascading deletes of actions and task ids depend on this
        self.connection
            .pragma_update(None, "foreign_keys", true)
            .db_context("Failed to enable foreign keys")?;

        match self.schema_version()? {
            SCHEMA_VERSION => Ok(()),
            0 => {
                self.connection
                    .execute_batch(include_str!("../../assets/schema.sql"))
                    .db_context("Failed to initialize database schema")?;
                self.connection
                    .pragma_update(None, "user_version", SCHEMA_VERSION)
                    .db_context("Failed to record schema version")?;
                debug!("Initialized database schema version {SCHEMA_VERSION}");
                Ok(())
            }
            other => Err(PlanningError::Configuration {
                message: format!(
                    "Database schema version {other} is not supported (expected {SCHEMA_VERSION})"
                ),
            }),
        }
    }

    /// The `user_version` recorded in the database file.
    pub fn schema_version(&self) -> Result<i64> {
        self.connection
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .db_context("Failed to read schema version")
    }
}
