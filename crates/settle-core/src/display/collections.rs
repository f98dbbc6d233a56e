//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper formats its items with their own Display impl and prints a
//! single line when the collection is empty.

use std::{fmt, ops::Index};

use crate::models::{AccountSnapshot, PaymentPlan, WaterfallMonth};

/// Newtype wrapper for displaying a list of payment plans.
///
/// # Examples
///
/// ```rust
/// use settle_core::display::PaymentPlans;
///
/// let plans = PaymentPlans(vec![]);
/// assert_eq!(plans.to_string(), "No payment plans found.\n");
/// ```
pub struct PaymentPlans(pub Vec<PaymentPlan>);

impl PaymentPlans {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PaymentPlan> {
        self.0.iter()
    }
}

impl Index<usize> for PaymentPlans {
    type Output = PaymentPlan;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for PaymentPlans {
    type Item = PaymentPlan;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for PaymentPlans {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No payment plans found.");
        }
        for (i, plan) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{plan}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying stored accounts.
pub struct Accounts(pub Vec<AccountSnapshot>);

impl fmt::Display for Accounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No accounts found.")
        } else {
            for account in &self.0 {
                write!(f, "{account}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying a month-by-month payment waterfall.
///
/// Months with nothing scheduled are listed with a zero total.
pub struct Waterfall(pub Vec<WaterfallMonth>);

impl fmt::Display for Waterfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.iter().all(|month| month.account_to_amount.is_empty()) {
            return writeln!(f, "No payments scheduled.");
        }
        for month in &self.0 {
            write!(f, "{month}")?;
        }
        Ok(())
    }
}
