//! Cent arithmetic for allocation.
//!
//! Amounts enter and leave the allocator as `f64` currency units but are
//! scheduled in whole cents so that every plan conserves its total exactly.

/// Largest amount, in currency units, a task, balance, credit limit or plan
/// total may carry. Cent values up to this bound are exact in an `f64`.
pub const MAX_AMOUNT: f64 = 10_000_000_000_000.0;

pub(crate) const MAX_CENTS: i64 = 1_000_000_000_000_000;

/// Converts to whole cents, or `None` when the amount is not finite or its
/// magnitude exceeds [`MAX_AMOUNT`].
pub(crate) fn to_cents(amount: f64) -> Option<i64> {
    if !amount.is_finite() || amount.abs() > MAX_AMOUNT {
        return None;
    }
    Some((amount * 100.0).round() as i64)
}

/// Sums cent values, or `None` when the sum exceeds [`MAX_CENTS`].
pub(crate) fn checked_total(cents: impl IntoIterator<Item = i64>) -> Option<i64> {
    cents
        .into_iter()
        .try_fold(0_i64, |total, value| total.checked_add(value))
        .filter(|total| *total <= MAX_CENTS)
}

pub(crate) fn from_cents(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// `total_cents / periods`, rounded up to the next whole cent.
///
/// Quotients within a millionth of a cent of an integer are taken as exact so
/// float noise never adds a spurious cent.
pub(crate) fn ceil_per_period(total_cents: i64, periods: f64) -> i64 {
    let exact = total_cents as f64 / periods;
    let nearest = exact.round();
    if (exact - nearest).abs() < 1e-6 {
        nearest as i64
    } else {
        exact.ceil() as i64
    }
}
