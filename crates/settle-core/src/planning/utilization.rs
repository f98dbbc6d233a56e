//! OPTIM_CREDIT_SCORE scheduling: highest utilization first.

use std::collections::HashMap;

use super::{allocator::WorkingRow, calendar::PaymentCalendar};
use crate::models::PaymentAction;

/// Spends each period's budget on the most utilized accounts, then re-ranks.
///
/// Paying an account lowers its balance and therefore its utilization, so the
/// ranking is recomputed after every period. Settled tasks leave the table.
pub(super) fn schedule_optim_credit_score(
    mut rows: Vec<WorkingRow>,
    per_period: i64,
    calendar: &mut PaymentCalendar,
) -> Result<Vec<PaymentAction>, jiff::Error> {
    rows.retain(|row| row.remaining > 0);
    sort_by_utilization(&mut rows);

    let mut actions = Vec::new();

    while !rows.is_empty() {
        let mut paid_this_period = 0;
        let mut paid_by_account: HashMap<String, i64> = HashMap::new();

        for row in &mut rows {
            let payment = (per_period - paid_this_period).min(row.remaining);
            if payment == 0 {
                break;
            }
            actions.push(row.pay(payment, calendar.current()));
            paid_this_period += payment;
            *paid_by_account.entry(row.account_id.clone()).or_default() += payment;
        }

        // Tasks sharing an account share its balance.
        for row in &mut rows {
            if let Some(paid) = paid_by_account.get(&row.account_id) {
                row.balance -= paid;
            }
        }

        rows.retain(|row| row.remaining > 0);
        if rows.is_empty() {
            break;
        }
        sort_by_utilization(&mut rows);
        calendar.advance()?;
    }

    Ok(actions)
}

fn sort_by_utilization(rows: &mut [WorkingRow]) {
    rows.sort_by(|a, b| b.utilization().total_cmp(&a.utilization()));
}
