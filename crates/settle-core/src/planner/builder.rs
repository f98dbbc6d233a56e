//! Builder for creating and configuring Planner instances.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use jiff::civil::Date;
use log::debug;
use tokio::task;

use super::Planner;
use crate::{
    db::Database,
    error::{PlanningError, Result},
};

/// Builder for creating and configuring Planner instances.
#[derive(Debug, Clone, Default)]
pub struct PlannerBuilder {
    database_path: Option<PathBuf>,
    deadline: Option<Duration>,
    start_date: Option<Date>,
}

impl PlannerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/settle/settle.db` or `~/.local/share/settle/settle.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Bounds how long plan creation may take. When the deadline elapses the
    /// call fails with `PlanningError::Cancelled` and returns no plans.
    ///
    /// Allocations already running on the blocking pool are not aborted.
    /// They finish their current account lookup, then fail and are discarded.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Pins "today" instead of reading the system clock.
    pub fn with_start_date(mut self, start_date: Date) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Builds the configured planner, creating the database if needed.
    ///
    /// # Errors
    ///
    /// Returns `PlanningError::FileSystem` if the database directory cannot be
    /// created and `PlanningError::Database` if schema initialization fails.
    pub async fn build(self) -> Result<Planner> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| PlanningError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let init_path = db_path.clone();
        task::spawn_blocking(move || Database::new(&init_path).map(|_| ()))
            .await
            .map_err(PlanningError::join)??;

        debug!("Using database at {}", db_path.display());
        Ok(Planner::new(db_path, self.deadline, self.start_date))
    }

    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("settle")
            .place_data_file("settle.db")
            .map_err(|e| PlanningError::XdgDirectory(e.to_string()))
    }
}
