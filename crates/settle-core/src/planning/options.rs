//! Expansion of partial preferences into concrete plan options.

use crate::{
    error::{PlanningError, Result},
    models::{PaymentFrequency, PlanOption, PlanType, Preferences},
};

/// Debts at or below this total default to a single one-month plan.
pub const SMALL_DEBT_THRESHOLD: f64 = 250.0;

const SHORT_TIMELINES: [f64; 2] = [1.0, 2.0];
const LONG_TIMELINES: [f64; 3] = [3.0, 6.0, 12.0];

/// Resolves every unset preference and returns the cartesian product of the
/// resolved plan types, timelines and frequencies.
///
/// Ordering is fixed: plan type outermost, then timeline, then frequency.
///
/// # Errors
///
/// Returns `PlanningError::InvalidPreference` when a resolved option carries a
/// timeline that is not a positive, finite number of months.
///
/// # Examples
///
/// ```rust
/// use settle_core::{expand_options, models::{PaymentFrequency, PlanType, Preferences}};
///
/// let options = expand_options(&Preferences::default(), 100.0).unwrap();
/// assert_eq!(options.len(), 2);
/// assert_eq!(options[0].plan_type, PlanType::MinFees);
/// assert_eq!(options[1].plan_type, PlanType::OptimCreditScore);
/// assert!(options.iter().all(|o| o.timeline_months == 1.0
///     && o.payment_frequency == PaymentFrequency::Monthly));
/// ```
pub fn expand_options(preferences: &Preferences, total_amount: f64) -> Result<Vec<PlanOption>> {
    let plan_types: Vec<PlanType> = match preferences.plan_type {
        Some(plan_type) => vec![plan_type],
        None => PlanType::ALL.to_vec(),
    };

    let (timelines, frequencies) = resolve_schedule(preferences, total_amount);

    let mut options = Vec::with_capacity(plan_types.len() * timelines.len() * frequencies.len());
    for &plan_type in &plan_types {
        for &timeline_months in &timelines {
            for &payment_frequency in &frequencies {
                let option = PlanOption::new(plan_type, timeline_months, payment_frequency);
                validate_option(&option)?;
                options.push(option);
            }
        }
    }

    Ok(options)
}

/// Timeline and frequency are resolved together: the default timelines depend
/// on whether a frequency was chosen.
fn resolve_schedule(
    preferences: &Preferences,
    total_amount: f64,
) -> (Vec<f64>, Vec<PaymentFrequency>) {
    let given = preferences.timeline_months.map(|t| vec![t]);

    match preferences.payment_frequency {
        None => {
            let timelines = given.unwrap_or_else(|| {
                if total_amount <= SMALL_DEBT_THRESHOLD {
                    vec![1.0]
                } else {
                    LONG_TIMELINES.to_vec()
                }
            });
            (timelines, vec![PaymentFrequency::Monthly])
        }
        Some(frequency @ (PaymentFrequency::Weekly | PaymentFrequency::Biweekly)) => (
            given.unwrap_or_else(|| SHORT_TIMELINES.to_vec()),
            vec![frequency],
        ),
        Some(frequency @ (PaymentFrequency::Monthly | PaymentFrequency::Quarterly)) => (
            given.unwrap_or_else(|| LONG_TIMELINES.to_vec()),
            vec![frequency],
        ),
    }
}

pub(crate) fn validate_option(option: &PlanOption) -> Result<()> {
    if !option.timeline_months.is_finite() || option.timeline_months <= 0.0 {
        return Err(PlanningError::invalid_preference(option.to_string())
            .with_reason("timeline must be a positive number of months"));
    }
    Ok(())
}
