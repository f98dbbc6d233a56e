//! MIN_FEES scheduling: the debt avalanche.

use std::collections::VecDeque;

use super::{allocator::WorkingRow, calendar::PaymentCalendar};
use crate::models::PaymentAction;

/// Pays debts strictly in descending APR order, filling each period's budget
/// before moving to the next date.
///
/// Equal APRs keep their input order. A task that only partly fits into the
/// current period is paid what fits and its remainder opens the next period.
pub(super) fn schedule_min_fees(
    mut rows: Vec<WorkingRow>,
    per_period: i64,
    calendar: &mut PaymentCalendar,
) -> Result<Vec<PaymentAction>, jiff::Error> {
    rows.sort_by(|a, b| b.apr.total_cmp(&a.apr));

    let mut queue: VecDeque<WorkingRow> = rows.into();
    let mut actions = Vec::new();
    let mut paid_this_period = 0;

    while let Some(mut row) = queue.pop_front() {
        let payment = (per_period - paid_this_period).min(row.remaining);
        if payment > 0 {
            actions.push(row.pay(payment, calendar.current()));
            paid_this_period += payment;
        }

        if row.remaining > 0 {
            queue.push_front(row);
            paid_this_period = 0;
            calendar.advance()?;
        }
    }

    Ok(actions)
}
