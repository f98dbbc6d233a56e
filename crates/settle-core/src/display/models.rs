//! Display implementations for domain models.
//!
//! Plans, accounts and overviews render as markdown for the terminal
//! renderer; enumerations render as their protocol names.

use std::fmt;

use super::amount::{Amount, Percent};
use crate::models::{
    AccountSnapshot, Coverage, PaymentAction, PaymentActionStatus, PaymentFrequency, PaymentPlan,
    PaymentStatus, PlanOption, PlanType, WaterfallMonth,
};

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PlanType::MinFees => "MIN_FEES",
            PlanType::OptimCreditScore => "OPTIM_CREDIT_SCORE",
        })
    }
}

impl fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PaymentFrequency::Weekly => "WEEKLY",
            PaymentFrequency::Biweekly => "BIWEEKLY",
            PaymentFrequency::Monthly => "MONTHLY",
            PaymentFrequency::Quarterly => "QUARTERLY",
        })
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PaymentActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PlanOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} months/{}",
            self.plan_type, self.timeline_months, self.payment_frequency
        )
    }
}

impl fmt::Display for PaymentAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.transaction_date,
            self.account_id,
            Amount(self.amount),
            self.status.with_icon()
        )
    }
}

impl fmt::Display for PaymentPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "# {id}. ")?,
            None => write!(f, "# ")?,
        }
        writeln!(
            f,
            "{} plan, {} over {} months",
            self.plan_type, self.payment_frequency, self.timeline_months
        )?;
        writeln!(f)?;

        writeln!(f, "- User: {}", self.user_id)?;
        writeln!(
            f,
            "- Status: {}{}",
            self.status,
            if self.active { "" } else { " (inactive)" }
        )?;
        writeln!(f, "- Total: {}", Amount(self.total_amount))?;
        writeln!(f, "- Per payment: {}", Amount(self.amount_per_payment))?;
        writeln!(f, "- Ends: {}", self.end_date)?;
        if !self.payment_task_ids.is_empty() {
            writeln!(f, "- Tasks: {}", self.payment_task_ids.join(", "))?;
        }

        if self.payment_actions.is_empty() {
            writeln!(f, "\nNo payments scheduled.")?;
        } else {
            writeln!(f, "\n## Payments")?;
            writeln!(f)?;
            for (position, action) in self.payment_actions.iter().enumerate() {
                writeln!(f, "{position}. {action}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for AccountSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}", self.account_id)?;
        writeln!(f)?;
        if let Some(user_id) = &self.user_id {
            writeln!(f, "- User: {user_id}")?;
        }
        match self.purchase_apr {
            Some(apr) => writeln!(f, "- APR: {apr}%")?,
            None => writeln!(f, "- APR: {}% (default)", self.apr())?,
        }
        writeln!(f, "- Balance: {}", Amount(self.current_balance))?;
        writeln!(f, "- Credit limit: {}", Amount(self.credit_limit))?;
        writeln!(f, "- Utilization: {}", Percent(self.utilization()))?;
        writeln!(f)
    }
}

impl fmt::Display for WaterfallMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}-{:02}: {}",
            self.year,
            self.month,
            Amount(self.total())
        )?;
        for (account_id, amount) in &self.account_to_amount {
            writeln!(f, "- {account_id}: {}", Amount(*amount))?;
        }
        Ok(())
    }
}

impl fmt::Display for Coverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Overall covered: {}", Percent(self.overall_covered))?;
        if !self.account_to_percent_covered.is_empty() {
            writeln!(f)?;
            for (account_id, covered) in &self.account_to_percent_covered {
                writeln!(f, "- {account_id}: {}", Percent(*covered))?;
            }
        }
        Ok(())
    }
}
