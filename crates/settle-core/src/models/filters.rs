//! Filter types for querying stored payment plans.

/// Filter options for listing payment plans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanFilter {
    /// Only plans belonging to this user
    pub user_id: Option<String>,

    /// Only plans still marked active
    pub active_only: bool,
}

impl PlanFilter {
    /// Filter for the active plans of a single user, the set every overview
    /// is computed from.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use settle_core::models::PlanFilter;
    ///
    /// let filter = PlanFilter::active_for_user("user-1");
    /// assert_eq!(filter.user_id.as_deref(), Some("user-1"));
    /// assert!(filter.active_only);
    /// ```
    pub fn active_for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            active_only: true,
        }
    }
}
