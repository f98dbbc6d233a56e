use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a Command with plain output, a pinned date and
/// a database inside `dir`
fn settle_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("settle").expect("Failed to find settle binary");
    cmd.arg("--no-color")
        .args(["--today", "2024-01-15"])
        .arg("--database-file")
        .arg(dir.join("cli_test.db"));
    cmd
}

/// Stores amex (42% APR, 1000/5000) and chase (22% APR, 500/3000) for user-1
fn add_accounts(dir: &Path) {
    settle_cmd(dir)
        .args(["account", "add", "amex", "--user", "user-1"])
        .args(["--balance", "1000", "--limit", "5000", "--apr", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stored account 'amex'"));
    settle_cmd(dir)
        .args(["account", "add", "chase", "--user", "user-1"])
        .args(["--balance", "500", "--limit", "3000", "--apr", "22"])
        .assert()
        .success();
}

fn write_tasks(dir: &Path, tasks: &str) -> String {
    let path = dir.join("tasks.json");
    fs::write(&path, tasks).expect("Failed to write tasks file");
    path.to_string_lossy().into_owned()
}

const AMEX_TASK: &str =
    r#"[{"id": "t1", "user_id": "user-1", "account_id": "amex", "amount": 500.0}]"#;

#[test]
fn test_cli_help_output() {
    Command::cargo_bin("settle")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("plan"))
        .stdout(predicate::str::contains("account"))
        .stdout(predicate::str::contains("overview"));
}

#[test]
fn test_cli_version_output() {
    Command::cargo_bin("settle")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("settle"));
}

#[test]
fn test_cli_list_empty_plans() {
    let temp_dir = TempDir::new().unwrap();

    settle_cmd(temp_dir.path())
        .args(["plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No payment plans found."));

    // no subcommand lists active plans too
    settle_cmd(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No payment plans found."));
}

#[test]
fn test_cli_account_list_and_show() {
    let temp_dir = TempDir::new().unwrap();
    add_accounts(temp_dir.path());

    settle_cmd(temp_dir.path())
        .args(["account", "list", "user-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### amex"))
        .stdout(predicate::str::contains("### chase"));

    settle_cmd(temp_dir.path())
        .args(["account", "show", "chase"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- APR: 22%"))
        .stdout(predicate::str::contains("- Utilization: 16.7%"));

    settle_cmd(temp_dir.path())
        .args(["account", "show", "discover"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Account 'discover' not found"));
}

#[test]
fn test_cli_create_plan_preview() {
    let temp_dir = TempDir::new().unwrap();
    add_accounts(temp_dir.path());
    let tasks = write_tasks(temp_dir.path(), AMEX_TASK);

    settle_cmd(temp_dir.path())
        .args(["plan", "create", &tasks])
        .args(["--plan-type", "min-fees", "--timeline", "2", "--frequency", "monthly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# MIN_FEES plan, MONTHLY over 2 months"))
        .stdout(predicate::str::contains("0. 2024-02-15 amex 250.00 (○ Pending)"))
        .stdout(predicate::str::contains("1. 2024-03-15 amex 250.00 (○ Pending)"));

    // a preview stores nothing
    settle_cmd(temp_dir.path())
        .args(["plan", "list", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No payment plans found."));
}

#[test]
fn test_cli_create_plan_json() {
    let temp_dir = TempDir::new().unwrap();
    add_accounts(temp_dir.path());
    let tasks = write_tasks(temp_dir.path(), AMEX_TASK);

    settle_cmd(temp_dir.path())
        .args(["plan", "create", &tasks, "--plan-type", "optim-credit-score", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""plan_type": "OPTIM_CREDIT_SCORE""#))
        .stdout(predicate::str::contains(r#""timeline_months": 12.0"#));
}

#[test]
fn test_cli_create_plan_from_stdin() {
    let temp_dir = TempDir::new().unwrap();
    add_accounts(temp_dir.path());

    settle_cmd(temp_dir.path())
        .args(["plan", "create", "-", "--plan-type", "min-fees"])
        .write_stdin(r#"[{"id": "t1", "user_id": "user-1", "account_id": "chase", "amount": 100.0}]"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("0. 2024-02-15 chase 100.00"));
}

#[test]
fn test_cli_create_plan_unknown_account() {
    let temp_dir = TempDir::new().unwrap();
    add_accounts(temp_dir.path());
    let tasks = write_tasks(
        temp_dir.path(),
        r#"[{"id": "t1", "user_id": "user-1", "account_id": "discover", "amount": 80.0}]"#,
    );

    settle_cmd(temp_dir.path())
        .args(["plan", "create", &tasks, "--save"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Account with ID discover not found"));
}

#[test]
fn test_cli_create_plan_invalid_timeline() {
    let temp_dir = TempDir::new().unwrap();
    let tasks = write_tasks(temp_dir.path(), AMEX_TASK);

    settle_cmd(temp_dir.path())
        .args(["plan", "create", &tasks, "--timeline", "-3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid preference"));
}

#[test]
fn test_cli_plan_lifecycle() {
    let temp_dir = TempDir::new().unwrap();
    add_accounts(temp_dir.path());
    let tasks = write_tasks(temp_dir.path(), AMEX_TASK);

    settle_cmd(temp_dir.path())
        .args(["plan", "create", &tasks, "--save"])
        .args(["--plan-type", "min-fees", "--timeline", "2", "--frequency", "monthly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved payment plan with ID: 1"));

    settle_cmd(temp_dir.path())
        .args(["plan", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 1. MIN_FEES plan"));

    settle_cmd(temp_dir.path())
        .args(["plan", "action", "1", "0", "completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Payment 0 marked completed"))
        .stdout(predicate::str::contains("0. 2024-02-15 amex 250.00 (✓ Completed)"));

    settle_cmd(temp_dir.path())
        .args(["overview", "paid", "user-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: 50.0% of scheduled payments made by user-1"));

    settle_cmd(temp_dir.path())
        .args(["overview", "waterfall", "user-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### 2024-02: 250.00"))
        .stdout(predicate::str::contains("### 2024-03: 250.00"));

    settle_cmd(temp_dir.path())
        .args(["overview", "coverage", "user-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- amex: 25.0%"))
        .stdout(predicate::str::contains("- chase: 0.0%"));

    settle_cmd(temp_dir.path())
        .args(["plan", "update", "1", "--inactive", "--status", "cancelled"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Deactivated"))
        .stdout(predicate::str::contains("- Status: cancelled (inactive)"));

    settle_cmd(temp_dir.path())
        .args(["plan", "list", "--user", "user-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No payment plans found."));

    settle_cmd(temp_dir.path())
        .args(["plan", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted MIN_FEES plan (ID: 1) for user 'user-1'"));
}

#[test]
fn test_cli_invalid_plan_id() {
    let temp_dir = TempDir::new().unwrap();

    settle_cmd(temp_dir.path())
        .args(["plan", "show", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Plan with ID 999 not found"));

    settle_cmd(temp_dir.path())
        .args(["plan", "action", "999", "0", "completed"])
        .assert()
        .failure();
}
