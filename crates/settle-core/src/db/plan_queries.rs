//! Payment plan CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension, Row};

use super::parse_column;
use crate::{
    error::{DatabaseResultExt, PlanningError, Result},
    models::{PaymentAction, PaymentActionStatus, PaymentPlan, PaymentStatus, PlanFilter},
};

const INSERT_PLAN_SQL: &str = "INSERT INTO payment_plans (user_id, total_amount, timeline_months, payment_frequency, amount_per_payment, plan_type, end_date, active, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)";
const INSERT_PLAN_TASK_SQL: &str =
    "INSERT INTO payment_plan_tasks (plan_id, position, task_id) VALUES (?1, ?2, ?3)";
const INSERT_ACTION_SQL: &str = "INSERT INTO payment_actions (plan_id, position, account_id, amount, transaction_date, status) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const PLAN_COLUMNS: &str = "id, user_id, total_amount, timeline_months, payment_frequency, amount_per_payment, plan_type, end_date, active, status";
const SELECT_PLAN_TASKS_SQL: &str =
    "SELECT task_id FROM payment_plan_tasks WHERE plan_id = ?1 ORDER BY position";
const SELECT_ACTIONS_SQL: &str = "SELECT account_id, amount, transaction_date, status FROM payment_actions WHERE plan_id = ?1 ORDER BY position";
const UPDATE_PLAN_SQL: &str =
    "UPDATE payment_plans SET active = ?1, status = ?2, updated_at = ?3 WHERE id = ?4";
const UPDATE_ACTION_STATUS_SQL: &str =
    "UPDATE payment_actions SET status = ?1 WHERE plan_id = ?2 AND position = ?3";
const TOUCH_PLAN_SQL: &str = "UPDATE payment_plans SET updated_at = ?1 WHERE id = ?2";
const DELETE_PLAN_SQL: &str = "DELETE FROM payment_plans WHERE id = ?1";

impl super::Database {
    /// Stores a plan with its task ids and actions in one transaction and
    /// returns the new plan id. Any id already on the plan is ignored.
    pub fn save_plan(&mut self, plan: &PaymentPlan) -> Result<u64> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now().to_string();

        tx.execute(
            INSERT_PLAN_SQL,
            params![
                plan.user_id,
                plan.total_amount,
                plan.timeline_months,
                plan.payment_frequency.as_str(),
                plan.amount_per_payment,
                plan.plan_type.as_str(),
                plan.end_date.to_string(),
                plan.active,
                plan.status.as_str(),
                &now,
                &now,
            ],
        )
        .db_context("Failed to insert payment plan")?;

        let id = tx.last_insert_rowid();

        for (position, task_id) in plan.payment_task_ids.iter().enumerate() {
            tx.execute(INSERT_PLAN_TASK_SQL, params![id, position as i64, task_id])
                .db_context("Failed to insert payment plan task")?;
        }

        for (position, action) in plan.payment_actions.iter().enumerate() {
            tx.execute(
                INSERT_ACTION_SQL,
                params![
                    id,
                    position as i64,
                    action.account_id,
                    action.amount,
                    action.transaction_date.to_string(),
                    action.status.as_str(),
                ],
            )
            .db_context("Failed to insert payment action")?;
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(id as u64)
    }

    /// Retrieves a plan with its task ids and actions.
    pub fn get_plan(&self, id: u64) -> Result<Option<PaymentPlan>> {
        let query = format!("SELECT {PLAN_COLUMNS} FROM payment_plans WHERE id = ?1");
        let plan = self
            .connection
            .query_row(&query, params![id as i64], Self::build_plan_from_row)
            .optional()
            .db_context("Failed to query payment plan")?;

        match plan {
            Some(mut plan) => {
                self.load_plan_children(id, &mut plan)?;
                Ok(Some(plan))
            }
            None => Ok(None),
        }
    }

    /// Lists plans, newest first, with optional user and activity filtering.
    pub fn list_plans(&self, filter: Option<&PlanFilter>) -> Result<Vec<PaymentPlan>> {
        let mut query = format!("SELECT {PLAN_COLUMNS} FROM payment_plans");

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(f) = filter {
            if let Some(ref user_id) = f.user_id {
                conditions.push("user_id = ?");
                params_vec.push(Box::new(user_id.clone()));
            }

            if f.active_only {
                conditions.push("active = 1");
            }
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY id DESC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let mut plans = stmt
            .query_map(&params_refs[..], Self::build_plan_from_row)
            .db_context("Failed to query payment plans")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch payment plans")?;

        for plan in &mut plans {
            if let Some(id) = plan.id {
                self.load_plan_children(id, plan)?;
            }
        }

        Ok(plans)
    }

    /// Changes a plan's activity flag and/or status; unset fields are kept.
    pub fn update_plan(
        &mut self,
        id: u64,
        active: Option<bool>,
        status: Option<PaymentStatus>,
    ) -> Result<PaymentPlan> {
        let current = self
            .get_plan(id)?
            .ok_or(PlanningError::PlanNotFound { id })?;

        self.connection
            .execute(
                UPDATE_PLAN_SQL,
                params![
                    active.unwrap_or(current.active),
                    status.unwrap_or(current.status).as_str(),
                    Timestamp::now().to_string(),
                    id as i64,
                ],
            )
            .db_context("Failed to update payment plan")?;

        self.get_plan(id)?.ok_or(PlanningError::PlanNotFound { id })
    }

    /// Sets the status of the action at `position` (0-based, schedule order).
    pub fn update_action_status(
        &mut self,
        plan_id: u64,
        position: u32,
        status: PaymentActionStatus,
    ) -> Result<PaymentPlan> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let changed = tx
            .execute(
                UPDATE_ACTION_STATUS_SQL,
                params![status.as_str(), plan_id as i64, position as i64],
            )
            .db_context("Failed to update payment action")?;

        if changed == 0 {
            return Err(PlanningError::invalid_request(format!(
                "payment plan {plan_id} has no action at position {position}"
            )));
        }

        tx.execute(
            TOUCH_PLAN_SQL,
            params![Timestamp::now().to_string(), plan_id as i64],
        )
        .db_context("Failed to update payment plan timestamp")?;

        tx.commit().db_context("Failed to commit transaction")?;

        self.get_plan(plan_id)?
            .ok_or(PlanningError::PlanNotFound { id: plan_id })
    }

    /// Permanently deletes a plan and returns it as it was stored.
    pub fn delete_plan(&mut self, id: u64) -> Result<PaymentPlan> {
        let plan = self
            .get_plan(id)?
            .ok_or(PlanningError::PlanNotFound { id })?;

        self.connection
            .execute(DELETE_PLAN_SQL, params![id as i64])
            .db_context("Failed to delete payment plan")?;

        Ok(plan)
    }

    fn build_plan_from_row(row: &Row) -> rusqlite::Result<PaymentPlan> {
        Ok(PaymentPlan {
            id: Some(row.get::<_, i64>(0)? as u64),
            user_id: row.get(1)?,
            payment_task_ids: Vec::new(),
            total_amount: row.get(2)?,
            timeline_months: row.get(3)?,
            payment_frequency: parse_column(row, 4)?,
            amount_per_payment: row.get(5)?,
            plan_type: parse_column(row, 6)?,
            end_date: parse_column(row, 7)?,
            active: row.get(8)?,
            status: parse_column(row, 9)?,
            payment_actions: Vec::new(),
        })
    }

    fn load_plan_children(&self, id: u64, plan: &mut PaymentPlan) -> Result<()> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PLAN_TASKS_SQL)
            .db_context("Failed to prepare query")?;
        plan.payment_task_ids = stmt
            .query_map(params![id as i64], |row| row.get(0))
            .db_context("Failed to query payment plan tasks")?
            .collect::<std::result::Result<Vec<String>, _>>()
            .db_context("Failed to fetch payment plan tasks")?;

        let mut stmt = self
            .connection
            .prepare(SELECT_ACTIONS_SQL)
            .db_context("Failed to prepare query")?;
        plan.payment_actions = stmt
            .query_map(params![id as i64], |row| {
                Ok(PaymentAction {
                    account_id: row.get(0)?,
                    amount: row.get(1)?,
                    transaction_date: parse_column(row, 2)?,
                    status: parse_column(row, 3)?,
                })
            })
            .db_context("Failed to query payment actions")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch payment actions")?;

        Ok(())
    }
}
