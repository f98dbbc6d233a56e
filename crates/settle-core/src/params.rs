//! Parameter structures for planner operations.
//!
//! These are framework-free: the CLI wraps them in clap `Args` structs and
//! converts with `From`, keeping clap out of the core crate.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐
//! │    CLI Args     │    │   Core Params   │
//! │ (clap derives)  │───▶│ (serde derives) │
//! └─────────────────┘    └─────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::models::{
    PaymentActionStatus, PaymentStatus, PaymentTask, PlanFilter, Preferences,
};

/// Parameters for building payment plans from a set of tasks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePlans {
    /// Tasks to schedule; all must belong to one user
    pub tasks: Vec<PaymentTask>,
    /// Unset fields are expanded into every applicable option
    #[serde(default)]
    pub preferences: Preferences,
    /// Persist every built plan and assign ids
    #[serde(default)]
    pub save: bool,
}

/// Parameters for operations addressing a plan by id.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Id {
    pub id: u64,
}

/// Parameters for operations scoped to one user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserId {
    pub user_id: String,
}

/// Parameters for listing plans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPlans {
    /// Only plans owned by this user
    pub user_id: Option<String>,
    /// Include inactive plans
    #[serde(default)]
    pub all: bool,
}

impl From<&ListPlans> for PlanFilter {
    fn from(params: &ListPlans) -> Self {
        PlanFilter {
            user_id: params.user_id.clone(),
            active_only: !params.all,
        }
    }
}

/// Parameters for changing a plan's lifecycle fields. Unset fields are kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePlan {
    pub id: u64,
    pub active: Option<bool>,
    pub status: Option<PaymentStatus>,
}

impl UpdatePlan {
    /// Human-readable list of the requested changes.
    pub fn changes(&self) -> Vec<String> {
        let mut changes = Vec::new();
        if let Some(active) = self.active {
            changes.push(if active { "Activated" } else { "Deactivated" }.to_string());
        }
        if let Some(status) = self.status {
            changes.push(format!("Status set to {status}"));
        }
        changes
    }
}

/// Parameters for recording the outcome of one scheduled payment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAction {
    pub plan_id: u64,
    /// 0-based position in the plan's schedule
    pub position: u32,
    pub status: PaymentActionStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_plans_filter() {
        let filter = PlanFilter::from(&ListPlans::default());
        assert_eq!(filter.user_id, None);
        assert!(filter.active_only);

        let filter = PlanFilter::from(&ListPlans {
            user_id: Some("user-1".to_string()),
            all: true,
        });
        assert_eq!(filter.user_id.as_deref(), Some("user-1"));
        assert!(!filter.active_only);
    }

    #[test]
    fn test_update_plan_changes() {
        assert!(UpdatePlan::default().changes().is_empty());

        let params = UpdatePlan {
            id: 1,
            active: Some(false),
            status: Some(PaymentStatus::Cancelled),
        };
        assert_eq!(
            params.changes(),
            vec!["Deactivated".to_string(), "Status set to cancelled".to_string()]
        );
    }

    #[test]
    fn test_create_plans_defaults_from_json() {
        let params: CreatePlans = serde_json::from_str(
            r#"{"tasks": [{"id": "t1", "user_id": "u1", "account_id": "amex", "amount": 50.0}]}"#,
        )
        .unwrap();
        assert_eq!(params.tasks.len(), 1);
        assert!(!params.save);
        assert_eq!(params.preferences, Preferences::default());
    }
}
