//! Overviews computed from a user's active payment plans.
//!
//! All functions here are pure: callers load the plans (and, for coverage,
//! the accounts) and pass them in.

use std::collections::{BTreeMap, HashMap};

use jiff::civil::Date;

use crate::models::{AccountSnapshot, Coverage, PaymentActionStatus, PaymentPlan, WaterfallMonth};

/// Number of months a waterfall spans, starting with the current one.
pub const WATERFALL_MONTHS: usize = 12;

/// Groups scheduled amounts by calendar month and account, for the month
/// containing `today` and the eleven months after it.
///
/// Actions outside that window are left out.
pub fn waterfall(plans: &[PaymentPlan], today: Date) -> Vec<WaterfallMonth> {
    let mut months: Vec<WaterfallMonth> = (0..WATERFALL_MONTHS)
        .map(|offset| {
            let index = month_index(today) + offset as i32;
            WaterfallMonth {
                year: index.div_euclid(12) as i16,
                month: (index.rem_euclid(12) + 1) as i8,
                account_to_amount: BTreeMap::new(),
            }
        })
        .collect();

    for action in plans.iter().flat_map(|plan| &plan.payment_actions) {
        let offset = month_index(action.transaction_date) - month_index(today);
        if let Ok(offset) = usize::try_from(offset) {
            if let Some(month) = months.get_mut(offset) {
                *month
                    .account_to_amount
                    .entry(action.account_id.clone())
                    .or_default() += action.amount;
            }
        }
    }

    months
}

/// Share of all scheduled amounts already paid.
///
/// Returns `1.0` when nothing is scheduled.
pub fn amount_paid_percentage(plans: &[PaymentPlan]) -> f64 {
    let (paid, total) = plans
        .iter()
        .flat_map(|plan| &plan.payment_actions)
        .fold((0.0, 0.0), |(paid, total), action| {
            let paid = if action.status == PaymentActionStatus::Completed {
                paid + action.amount
            } else {
                paid
            };
            (paid, total + action.amount)
        });

    if total > 0.0 {
        paid / total
    } else {
        1.0
    }
}

/// How much of each positive account balance pending actions will pay off.
///
/// The overall figure divides every pending amount by the sum of positive
/// balances; both figures are `1.0` when there is no balance to cover.
pub fn coverage(plans: &[PaymentPlan], accounts: &[AccountSnapshot]) -> Coverage {
    let balances: Vec<(&str, f64)> = accounts
        .iter()
        .filter(|account| account.current_balance > 0.0)
        .map(|account| (account.account_id.as_str(), account.current_balance))
        .collect();

    let mut pending: HashMap<&str, f64> = HashMap::new();
    for action in plans.iter().flat_map(|plan| &plan.payment_actions) {
        if action.status == PaymentActionStatus::Pending {
            *pending.entry(action.account_id.as_str()).or_default() += action.amount;
        }
    }

    let total_balance: f64 = balances.iter().map(|(_, balance)| balance).sum();
    let total_pending: f64 = pending.values().sum();

    let account_to_percent_covered = balances
        .iter()
        .map(|&(account_id, balance)| {
            let covered = pending.get(account_id).copied().unwrap_or(0.0);
            (account_id.to_string(), covered / balance)
        })
        .collect();

    Coverage {
        overall_covered: if total_balance > 0.0 {
            total_pending / total_balance
        } else {
            1.0
        },
        account_to_percent_covered,
    }
}

fn month_index(date: Date) -> i32 {
    i32::from(date.year()) * 12 + i32::from(date.month()) - 1
}
