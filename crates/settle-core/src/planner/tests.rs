//! Tests for the planner facade.

use std::time::Duration;

use jiff::civil::date;
use tempfile::TempDir;

use super::*;
use crate::{
    error::PlanningError,
    models::{
        AccountSnapshot, PaymentActionStatus, PaymentFrequency, PaymentStatus, PaymentTask,
        PlanType, Preferences,
    },
    params::{CreatePlans, Id, ListPlans, UpdateAction, UpdatePlan, UserId},
};

/// Helper function to create a test planner pinned to 2024-01-15
async fn create_test_planner() -> (TempDir, Planner) {
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

async fn store_accounts(planner: &Planner) {
    for (id, apr, balance, limit) in [("amex", 42.0, 1000.0, 5000.0), ("chase", 22.0, 500.0, 3000.0)] {
        planner
            .upsert_account(&AccountSnapshot {
                account_id: id.to_string(),
                user_id: Some("user-1".to_string()),
                purchase_apr: Some(apr),
                current_balance: balance,
                credit_limit: limit,
            })
            .await
            .expect("Failed to store account");
    }
}

fn min_fees_monthly(timeline_months: f64) -> Preferences {
    Preferences {
        plan_type: Some(PlanType::MinFees),
        timeline_months: Some(timeline_months),
        payment_frequency: Some(PaymentFrequency::Monthly),
    }
}

#[tokio::test]
async fn test_create_payment_plans_reads_stored_accounts() {
    let (_temp_dir, planner) = create_test_planner().await;
    store_accounts(&planner).await;

    let plans = planner
        .create_payment_plans(&CreatePlans {
            tasks: vec![PaymentTask::new("t1", "user-1", "amex", 500.0)],
            preferences: min_fees_monthly(2.0),
            save: false,
        })
        .await
        .expect("Failed to create plans");

    assert_eq!(plans.len(), 1);
    let plan = &plans[0];
    assert_eq!(plan.id, None);
    assert_eq!(plan.amount_per_payment, 250.0);
    assert_eq!(plan.end_date, date(2024, 3, 15));
    assert_eq!(
        plan.payment_actions
            .iter()
            .map(|a| (a.transaction_date, a.amount))
            .collect::<Vec<_>>(),
        vec![(date(2024, 2, 15), 250.0), (date(2024, 3, 15), 250.0)]
    );

    let stored = planner
        .list_plans(&ListPlans {
            user_id: None,
            all: true,
        })
        .await
        .unwrap();
    assert!(stored.is_empty());
}

#[tokio::test]
async fn test_create_payment_plans_keeps_expansion_order() {
    let (_temp_dir, planner) = create_test_planner().await;
    store_accounts(&planner).await;

    let plans = planner
        .create_payment_plans(&CreatePlans {
            tasks: vec![
                PaymentTask::new("t1", "user-1", "amex", 500.0),
                PaymentTask::new("t2", "user-1", "chase", 500.0),
            ],
            preferences: Preferences {
                plan_type: Some(PlanType::OptimCreditScore),
                ..Default::default()
            },
            save: false,
        })
        .await
        .unwrap();

    let shape: Vec<(f64, PaymentFrequency)> = plans
        .iter()
        .map(|p| (p.timeline_months, p.payment_frequency))
        .collect();
    assert_eq!(
        shape,
        vec![
            (3.0, PaymentFrequency::Monthly),
            (6.0, PaymentFrequency::Monthly),
            (12.0, PaymentFrequency::Monthly),
        ]
    );
    assert_eq!(plans[0].amount_per_payment, 333.34);
    assert!(plans
        .iter()
        .all(|p| (p.scheduled_amount() - 1000.0).abs() < 0.005));
}

#[tokio::test]
async fn test_create_payment_plans_saves_with_ids() {
    let (_temp_dir, planner) = create_test_planner().await;
    store_accounts(&planner).await;

    let plans = planner
        .create_payment_plans(&CreatePlans {
            tasks: vec![PaymentTask::new("t1", "user-1", "chase", 100.0)],
            preferences: Preferences::default(),
            save: true,
        })
        .await
        .unwrap();

    // small debt: one 1-month monthly plan per plan type
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].plan_type, PlanType::MinFees);
    assert_eq!(plans[1].plan_type, PlanType::OptimCreditScore);

    for plan in &plans {
        let id = plan.id.expect("saved plan has an id");
        let stored = planner.get_plan(&Id { id }).await.unwrap().unwrap();
        assert_eq!(&stored, plan);
    }
}

#[tokio::test]
async fn test_create_payment_plans_unknown_account_saves_nothing() {
    let (_temp_dir, planner) = create_test_planner().await;
    store_accounts(&planner).await;

    let result = planner
        .create_payment_plans(&CreatePlans {
            tasks: vec![
                PaymentTask::new("t1", "user-1", "amex", 500.0),
                PaymentTask::new("t2", "user-1", "discover", 50.0),
            ],
            preferences: Preferences::default(),
            save: true,
        })
        .await;

    match result {
        Err(PlanningError::AccountNotFound { account_id }) => assert_eq!(account_id, "discover"),
        other => panic!("Expected AccountNotFound, got {other:?}"),
    }

    let stored = planner
        .list_plans(&ListPlans {
            user_id: Some("user-1".to_string()),
            all: true,
        })
        .await
        .unwrap();
    assert!(stored.is_empty());
}

#[tokio::test]
async fn test_create_payment_plans_deadline_cancels() {
    let temp_dir = TempDir::new().unwrap();
    let planner = PlannerBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_deadline(Duration::ZERO)
        .build()
        .await
        .unwrap();
    store_accounts(&planner).await;

    let result = planner
        .create_payment_plans(&CreatePlans {
            tasks: vec![PaymentTask::new("t1", "user-1", "amex", 500.0)],
            preferences: Preferences::default(),
            save: true,
        })
        .await;

    assert!(matches!(result, Err(PlanningError::Cancelled { .. })));

    let stored = planner
        .list_plans(&ListPlans {
            user_id: None,
            all: true,
        })
        .await
        .unwrap();
    assert!(stored.is_empty());
}

#[tokio::test]
async fn test_create_payment_plans_rejects_oversized_amount() {
    let (_temp_dir, planner) = create_test_planner().await;
    store_accounts(&planner).await;

    let result = planner
        .create_payment_plans(&CreatePlans {
            tasks: vec![PaymentTask::new("t1", "user-1", "amex", 1.0e17)],
            preferences: min_fees_monthly(1.0),
            save: true,
        })
        .await;

    assert!(matches!(result, Err(PlanningError::InvalidRequest { .. })));
}

#[tokio::test]
async fn test_plan_lifecycle_updates() {
    let (_temp_dir, planner) = create_test_planner().await;
    store_accounts(&planner).await;

    let plans = planner
        .create_payment_plans(&CreatePlans {
            tasks: vec![PaymentTask::new("t1", "user-1", "amex", 500.0)],
            preferences: min_fees_monthly(2.0),
            save: true,
        })
        .await
        .unwrap();
    let id = plans[0].id.unwrap();

    let updated = planner
        .update_action_status(&UpdateAction {
            plan_id: id,
            position: 0,
            status: PaymentActionStatus::Completed,
        })
        .await
        .unwrap();
    assert_eq!(updated.payment_actions[0].status, PaymentActionStatus::Completed);
    assert_eq!(updated.payment_actions[1].status, PaymentActionStatus::Pending);

    let paid = planner
        .amount_paid_percentage(&UserId {
            user_id: "user-1".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(paid, 0.5);

    let updated = planner
        .update_plan(&UpdatePlan {
            id,
            active: Some(false),
            status: Some(PaymentStatus::Cancelled),
        })
        .await
        .unwrap();
    assert!(!updated.active);
    assert_eq!(updated.status, PaymentStatus::Cancelled);

    // inactive plans drop out of the default listing and the overviews
    let active = planner
        .list_plans(&ListPlans {
            user_id: Some("user-1".to_string()),
            all: false,
        })
        .await
        .unwrap();
    assert!(active.is_empty());

    let deleted = planner.delete_plan(&Id { id }).await.unwrap();
    assert_eq!(deleted.id, Some(id));
    assert!(planner.get_plan(&Id { id }).await.unwrap().is_none());
    assert!(matches!(
        planner.delete_plan(&Id { id }).await,
        Err(PlanningError::PlanNotFound { .. })
    ));
}

#[tokio::test]
async fn test_overviews_for_user() {
    let (_temp_dir, planner) = create_test_planner().await;
    store_accounts(&planner).await;

    planner
        .create_payment_plans(&CreatePlans {
            tasks: vec![PaymentTask::new("t1", "user-1", "amex", 500.0)],
            preferences: min_fees_monthly(2.0),
            save: true,
        })
        .await
        .unwrap();

    let user = UserId {
        user_id: "user-1".to_string(),
    };

    let months = planner.waterfall(&user).await.unwrap();
    assert_eq!(months.len(), 12);
    assert_eq!((months[0].year, months[0].month), (2024, 1));
    assert_eq!(months[0].total(), 0.0);
    assert_eq!(months[1].account_to_amount.get("amex"), Some(&250.0));
    assert_eq!(months[2].account_to_amount.get("amex"), Some(&250.0));

    // 500 pending against 1500 of balances
    let coverage = planner.coverage(&user).await.unwrap();
    assert!((coverage.overall_covered - 1.0 / 3.0).abs() < 1e-9);
    assert_eq!(coverage.account_to_percent_covered["amex"], 0.5);
    assert_eq!(coverage.account_to_percent_covered["chase"], 0.0);
}

#[tokio::test]
async fn test_upsert_account_rejects_blank_id() {
    let (_temp_dir, planner) = create_test_planner().await;

    let result = planner
        .upsert_account(&AccountSnapshot {
            account_id: "  ".to_string(),
            user_id: None,
            purchase_apr: None,
            current_balance: 10.0,
            credit_limit: 100.0,
        })
        .await;
    assert!(matches!(result, Err(PlanningError::InvalidRequest { .. })));
    assert!(planner.list_accounts(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_upsert_account_rejects_oversized_balance() {
    let (_temp_dir, planner) = create_test_planner().await;

    let result = planner
        .upsert_account(&AccountSnapshot {
            account_id: "whale".to_string(),
            user_id: None,
            purchase_apr: None,
            current_balance: 1.0e17,
            credit_limit: 100.0,
        })
        .await;
    assert!(matches!(result, Err(PlanningError::InvalidRequest { .. })));
    assert!(planner.get_account("whale").await.unwrap().is_none());
}
