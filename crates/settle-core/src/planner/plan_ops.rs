//! Plan operations for the Planner.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use log::{info, warn};
use tokio::{task, task::JoinSet, time};

use super::Planner;
use crate::{
    accounts::{CancellableAccounts, SqliteAccounts},
    db::Database,
    error::{PlanningError, Result},
    models::{PaymentPlan, PlanFilter},
    params::{CreatePlans, Id, ListPlans, UpdateAction, UpdatePlan},
    planning::PlanRequest,
};

impl Planner {
    /// Builds one plan per expanded option, allocating the options
    /// concurrently on the blocking pool.
    ///
    /// Plans come back in expansion order. If any option fails, the error of
    /// the earliest failing option is returned and no plans are saved. With
    /// `params.save` set, every plan is stored and carries its new id.
    ///
    /// # Errors
    ///
    /// Returns `PlanningError::Cancelled` when the configured deadline
    /// elapses, and otherwise any validation, lookup or allocation error.
    pub async fn create_payment_plans(&self, params: &CreatePlans) -> Result<Vec<PaymentPlan>> {
        let cancelled = Arc::new(AtomicBool::new(false));
        let builder = Arc::new(self.builder_with(CancellableAccounts::new(
            SqliteAccounts::new(&self.db_path),
            Arc::clone(&cancelled),
        )));
        let request = Arc::new(PlanRequest::from_tasks(&params.tasks)?);
        let options = builder.plan_options(&request, Some(&params.preferences))?;
        let today = builder.today();

        let allocations = async {
            let mut set = JoinSet::new();
            for (index, option) in options.iter().copied().enumerate() {
                let builder = Arc::clone(&builder);
                let request = Arc::clone(&request);
                set.spawn_blocking(move || {
                    (index, builder.allocate_request(today, option, &request))
                });
            }

            let mut slots: Vec<Option<Result<PaymentPlan>>> =
                std::iter::repeat_with(|| None).take(options.len()).collect();
            while let Some(joined) = set.join_next().await {
                let (index, result) = joined.map_err(PlanningError::join)?;
                if let Err(e) = &result {
                    warn!("Plan option {} failed: {e}", options[index]);
                }
                slots[index] = Some(result);
            }

            slots
                .into_iter()
                .map(|slot| {
                    slot.unwrap_or_else(|| {
                        Err(PlanningError::Configuration {
                            message: "allocation task produced no result".to_string(),
                        })
                    })
                })
                .collect::<Result<Vec<_>>>()
        };

        let mut plans = match self.deadline {
            Some(deadline) => time::timeout(deadline, allocations).await.map_err(|_| {
                cancelled.store(true, Ordering::Release);
                PlanningError::Cancelled {
                    reason: format!("plan creation exceeded the {deadline:?} deadline"),
                }
            })??,
            None => allocations.await?,
        };

        if params.save {
            plans = self.save_plans(plans).await?;
        }

        Ok(plans)
    }

    /// Stores plans and returns them with their assigned ids.
    pub async fn save_plans(&self, mut plans: Vec<PaymentPlan>) -> Result<Vec<PaymentPlan>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            for plan in &mut plans {
                let id = db.save_plan(plan)?;
                plan.id = Some(id);
            }
            info!("Saved {} payment plan(s)", plans.len());
            Ok(plans)
        })
        .await
        .map_err(PlanningError::join)?
    }

    /// Retrieves a plan by its ID.
    pub async fn get_plan(&self, params: &Id) -> Result<Option<PaymentPlan>> {
        let db_path = self.db_path.clone();
        let plan_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_plan(plan_id)
        })
        .await
        .map_err(PlanningError::join)?
    }

    /// Lists stored plans, newest first.
    pub async fn list_plans(&self, params: &ListPlans) -> Result<Vec<PaymentPlan>> {
        self.list_plans_filtered(PlanFilter::from(params)).await
    }

    pub(crate) async fn list_plans_filtered(&self, filter: PlanFilter) -> Result<Vec<PaymentPlan>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_plans(Some(&filter))
        })
        .await
        .map_err(PlanningError::join)?
    }

    /// Changes a plan's active flag and/or status.
    ///
    /// # Errors
    ///
    /// Returns `PlanningError::PlanNotFound` if no plan has the given id.
    pub async fn update_plan(&self, params: &UpdatePlan) -> Result<PaymentPlan> {
        let db_path = self.db_path.clone();
        let UpdatePlan { id, active, status } = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_plan(id, active, status)
        })
        .await
        .map_err(PlanningError::join)?
    }

    /// Records the status of one scheduled payment.
    ///
    /// # Errors
    ///
    /// Returns `PlanningError::InvalidRequest` if the plan has no action at
    /// the given position.
    pub async fn update_action_status(&self, params: &UpdateAction) -> Result<PaymentPlan> {
        let db_path = self.db_path.clone();
        let UpdateAction {
            plan_id,
            position,
            status,
        } = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_action_status(plan_id, position, status)
        })
        .await
        .map_err(PlanningError::join)?
    }

    /// Permanently deletes a plan and its actions, returning the plan as it
    /// was stored.
    pub async fn delete_plan(&self, params: &Id) -> Result<PaymentPlan> {
        let db_path = self.db_path.clone();
        let plan_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_plan(plan_id)
        })
        .await
        .map_err(PlanningError::join)?
    }
}
