//! Payment date shifting.

use jiff::{civil::Date, ToSpan};

use crate::models::PaymentFrequency;

/// Shifts `date` forward by one payment period.
///
/// Weekly and biweekly periods add 7 and 14 days. Monthly and quarterly
/// periods add calendar months and keep the day of month, clamped to the end
/// of shorter months (Jan 31 + 1 month = Feb 28/29).
pub fn shift_date(date: Date, frequency: PaymentFrequency) -> Result<Date, jiff::Error> {
    match frequency {
        PaymentFrequency::Weekly => date.checked_add(7.days()),
        PaymentFrequency::Biweekly => date.checked_add(14.days()),
        PaymentFrequency::Monthly => date.checked_add(1.month()),
        PaymentFrequency::Quarterly => date.checked_add(3.months()),
    }
}

/// Walks payment dates one period at a time, starting one period after
/// the given day.
#[derive(Debug, Clone)]
pub struct PaymentCalendar {
    frequency: PaymentFrequency,
    current: Date,
}

impl PaymentCalendar {
    pub fn starting_after(today: Date, frequency: PaymentFrequency) -> Result<Self, jiff::Error> {
        Ok(Self {
            frequency,
            current: shift_date(today, frequency)?,
        })
    }

    /// Date of the period currently being filled.
    pub fn current(&self) -> Date {
        self.current
    }

    /// Moves to the next period and returns its date.
    pub fn advance(&mut self) -> Result<Date, jiff::Error> {
        self.current = shift_date(self.current, self.frequency)?;
        Ok(self.current)
    }
}
