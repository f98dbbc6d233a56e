//! Error types for the payment plan library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for every payment planning operation.
#[derive(Error, Debug)]
pub enum PlanningError {
    /// A resolved plan option violates an option invariant
    #[error("Invalid preference '{option}': {reason}")]
    InvalidPreference { option: String, reason: String },
    /// The account source could not resolve an account id
    #[error("Account with ID {account_id} not found")]
    AccountNotFound { account_id: String },
    /// Nothing left to schedule
    #[error("Nothing to allocate: total amount owed is zero")]
    EmptyAllocation,
    /// The request itself is malformed
    #[error("Invalid request: {reason}")]
    InvalidRequest { reason: String },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Payment plan not found for the given ID
    #[error("Payment plan with ID {id} not found")]
    PlanNotFound { id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// A blocking worker task panicked
    #[error("Worker task failed: {message}")]
    TaskFailed { message: String },
    /// Configuration and runtime wiring errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// The caller's deadline elapsed before all plans were built
    #[error("Plan creation cancelled: {reason}")]
    Cancelled { reason: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> PlanningError {
        PlanningError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating preference validation errors.
pub struct InvalidPreferenceBuilder {
    option: String,
}

impl InvalidPreferenceBuilder {
    /// Create a new builder for the offending option.
    pub fn new(option: impl Into<String>) -> Self {
        Self {
            option: option.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlanningError {
        PlanningError::InvalidPreference {
            option: self.option,
            reason: reason.into(),
        }
    }
}

impl PlanningError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for preference validation errors.
    pub fn invalid_preference(option: impl Into<String>) -> InvalidPreferenceBuilder {
        InvalidPreferenceBuilder::new(option)
    }

    /// Creates an invalid request error.
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self::InvalidRequest {
            reason: reason.into(),
        }
    }

    /// Creates an account-not-found error for the given id.
    pub fn account_not_found(account_id: impl Into<String>) -> Self {
        Self::AccountNotFound {
            account_id: account_id.into(),
        }
    }

    /// Wraps a tokio join failure: a cancelled task becomes `Cancelled`,
    /// a panicked one `TaskFailed`.
    pub(crate) fn join(source: tokio::task::JoinError) -> Self {
        if source.is_cancelled() {
            Self::Cancelled {
                reason: "worker task was cancelled".to_string(),
            }
        } else {
            Self::TaskFailed {
                message: source.to_string(),
            }
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| PlanningError::database(message).with_source(e))
    }
}

/// Result type alias for planning operations
pub type Result<T> = std::result::Result<T, PlanningError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_preference_message_names_option() {
        let err = PlanningError::invalid_preference("MIN_FEES/-1/MONTHLY")
            .with_reason("timeline must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid preference 'MIN_FEES/-1/MONTHLY': timeline must be positive"
        );
    }

    #[test]
    fn test_account_not_found_message() {
        let err = PlanningError::account_not_found("acc-42");
        assert_eq!(err.to_string(), "Account with ID acc-42 not found");
    }

    #[test]
    fn test_db_context_wraps_source() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        let err = result.db_context("Failed to load plan").unwrap_err();
        assert!(matches!(err, PlanningError::Database { .. }));
        assert_eq!(err.to_string(), "Database error: Failed to load plan");
    }

    #[tokio::test]
    async fn test_join_maps_panic_and_cancellation() {
        let panicked = tokio::spawn(async { panic!("allocation blew up") })
            .await
            .unwrap_err();
        assert!(matches!(
            PlanningError::join(panicked),
            PlanningError::TaskFailed { .. }
        ));

        let handle = tokio::spawn(std::future::pending::<()>());
        handle.abort();
        let cancelled = handle.await.unwrap_err();
        assert!(matches!(
            PlanningError::join(cancelled),
            PlanningError::Cancelled { .. }
        ));
    }
}
