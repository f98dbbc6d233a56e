//! Per-user overviews over active plans.

use super::Planner;
use crate::{
    error::Result,
    models::{Coverage, PaymentPlan, PlanFilter, WaterfallMonth},
    overview,
    params::UserId,
};

impl Planner {
    /// Scheduled amounts per account for this month and the next eleven.
    pub async fn waterfall(&self, params: &UserId) -> Result<Vec<WaterfallMonth>> {
        let plans = self.active_plans(params).await?;
        Ok(overview::waterfall(&plans, self.today()))
    }

    /// Share of scheduled amounts on active plans already paid.
    pub async fn amount_paid_percentage(&self, params: &UserId) -> Result<f64> {
        let plans = self.active_plans(params).await?;
        Ok(overview::amount_paid_percentage(&plans))
    }

    /// Share of the user's positive balances covered by pending payments.
    pub async fn coverage(&self, params: &UserId) -> Result<Coverage> {
        let plans = self.active_plans(params).await?;
        let accounts = self.list_accounts(Some(&params.user_id)).await?;
        Ok(overview::coverage(&plans, &accounts))
    }

    async fn active_plans(&self, params: &UserId) -> Result<Vec<PaymentPlan>> {
        self.list_plans_filtered(PlanFilter::active_for_user(&params.user_id))
            .await
    }
}
