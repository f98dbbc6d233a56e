mod common;

use jiff::civil::date;
use settle_core::{
    CreatePlans, Id, ListPlans, PaymentActionStatus, PaymentFrequency, PaymentPlanBuilder,
    PaymentTask, PlanType, PlanningError, Preferences, SqliteAccounts, UpdateAction, UserId,
};

use common::{account, create_test_planner};

#[tokio::test]
async fn test_complete_payment_plan_workflow() {
    let (_temp_dir, planner) = create_test_planner().await;

    planner
        .upsert_account(&account("amex", Some(42.0), 1000.0, 5000.0))
        .await
        .expect("Failed to store amex");
    planner
        .upsert_account(&account("chase", Some(22.0), 500.0, 3000.0))
        .await
        .expect("Failed to store chase");

    let plans = planner
        .create_payment_plans(&CreatePlans {
            tasks: vec![
                PaymentTask::new("task-chase", "user-1", "chase", 500.0),
                PaymentTask::new("task-amex", "user-1", "amex", 500.0),
            ],
            preferences: Preferences {
                timeline_months: Some(2.0),
                payment_frequency: Some(PaymentFrequency::Monthly),
                ..Default::default()
            },
            save: true,
        })
        .await
        .expect("Failed to create plans");

    // one plan per strategy, both paying amex first
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].plan_type, PlanType::MinFees);
    assert_eq!(plans[1].plan_type, PlanType::OptimCreditScore);
    for plan in &plans {
        assert_eq!(plan.payment_actions[0].account_id, "amex");
        assert_eq!(plan.payment_actions[1].account_id, "chase");
        assert_eq!(plan.end_date, date(2024, 3, 15));
    }

    let stored = planner
        .list_plans(&ListPlans {
            user_id: Some("user-1".to_string()),
            all: false,
        })
        .await
        .expect("Failed to list plans");
    assert_eq!(stored.len(), 2);
    // newest first
    assert_eq!(stored[0].id, plans[1].id);

    let plan_id = plans[0].id.expect("saved plan has an id");
    planner
        .update_action_status(&UpdateAction {
            plan_id,
            position: 0,
            status: PaymentActionStatus::Completed,
        })
        .await
        .expect("Failed to update action");

    let user = UserId {
        user_id: "user-1".to_string(),
    };
    // 500 of 2000 scheduled across both plans
    let paid = planner.amount_paid_percentage(&user).await.unwrap();
    assert!((paid - 0.25).abs() < 1e-9);

    let months = planner.waterfall(&user).await.unwrap();
    assert_eq!(months[1].account_to_amount.get("amex"), Some(&1000.0));
    assert_eq!(months[2].account_to_amount.get("chase"), Some(&1000.0));

    planner.delete_plan(&Id { id: plan_id }).await.unwrap();
    let remaining = planner.list_plans(&ListPlans::default()).await.unwrap();
    assert_eq!(remaining.len(), 1);
}

#[tokio::test]
async fn test_invalid_preference_rejected_before_lookup() {
    let (_temp_dir, planner) = create_test_planner().await;

    let result = planner
        .create_payment_plans(&CreatePlans {
            tasks: vec![PaymentTask::new("t1", "user-1", "nowhere", 10.0)],
            preferences: Preferences {
                timeline_months: Some(-1.0),
                ..Default::default()
            },
            save: false,
        })
        .await;

    assert!(matches!(
        result,
        Err(PlanningError::InvalidPreference { .. })
    ));
}

#[tokio::test]
async fn test_empty_task_list_rejected() {
    let (_temp_dir, planner) = create_test_planner().await;

    let result = planner.create_payment_plans(&CreatePlans::default()).await;
    assert!(matches!(result, Err(PlanningError::InvalidRequest { .. })));
}

#[tokio::test]
async fn test_sqlite_accounts_drive_synchronous_builder() {
    let (_temp_dir, planner) = create_test_planner().await;
    planner
        .upsert_account(&account("amex", None, 200.0, 1000.0))
        .await
        .unwrap();

    let builder = PaymentPlanBuilder::new(SqliteAccounts::new(planner.database_path()))
        .with_start_date(date(2024, 1, 31));
    let plans = builder
        .create_payment_plans(
            &[PaymentTask::new("t1", "user-1", "amex", 200.0)],
            Some(&Preferences {
                plan_type: Some(PlanType::MinFees),
                timeline_months: Some(2.0),
                payment_frequency: Some(PaymentFrequency::Monthly),
            }),
        )
        .unwrap();

    // month-end clamping carries forward from the clamped date
    let dates: Vec<_> = plans[0]
        .payment_actions
        .iter()
        .map(|a| a.transaction_date)
        .collect();
    assert_eq!(dates, vec![date(2024, 2, 29), date(2024, 3, 29)]);
}

#[tokio::test]
async fn test_plan_json_shape() {
    let (_temp_dir, planner) = create_test_planner().await;
    planner
        .upsert_account(&account("amex", Some(30.0), 100.0, 1000.0))
        .await
        .unwrap();

    let plans = planner
        .create_payment_plans(&CreatePlans {
            tasks: vec![PaymentTask::new("t1", "user-1", "amex", 100.0)],
            preferences: Preferences {
                plan_type: Some(PlanType::MinFees),
                ..Default::default()
            },
            save: false,
        })
        .await
        .unwrap();

    let json = serde_json::to_value(&plans[0]).unwrap();
    assert_eq!(json["plan_type"], "MIN_FEES");
    assert_eq!(json["payment_frequency"], "MONTHLY");
    assert_eq!(json["status"], "CURRENT");
    assert_eq!(json["end_date"], "2024-02-15");
    assert_eq!(json["payment_actions"][0]["status"], "PENDING");
    assert!(json.get("id").is_none());
}
