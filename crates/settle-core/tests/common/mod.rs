use jiff::civil::date;
use settle_core::{AccountSnapshot, Planner, PlannerBuilder};
use tempfile::TempDir;

/// Helper function to create a test planner pinned to 2024-01-15
pub async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_start_date(date(2024, 1, 15))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

pub fn account(id: &str, apr: Option<f64>, balance: f64, limit: f64) -> AccountSnapshot {
    AccountSnapshot {
        account_id: id.to_string(),
        user_id: Some("user-1".to_string()),
        purchase_apr: apr,
        current_balance: balance,
        credit_limit: limit,
    }
}
