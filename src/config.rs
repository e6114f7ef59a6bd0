//! Enrollment engine configuration.

use serde::{Deserialize, Serialize};

use crate::waitlist::TieBreaker;

/// Configuration parameters for an [`EnrollmentManager`](crate::manager::EnrollmentManager).
///
/// # Examples
///
/// ```
/// use u_enroll::config::EnrollmentConfig;
/// use u_enroll::waitlist::TieBreaker;
///
/// let config = EnrollmentConfig::default()
///     .with_tie_breaker(TieBreaker::ById)
///     .with_demand_limit(3);
/// assert_eq!(config.demand_limit, 3);
/// assert_eq!(config.tie_breaker, TieBreaker::ById);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrollmentConfig {
    /// Final ordering rule for waitlisted students equal on gpa and semester.
    pub tie_breaker: TieBreaker,
    /// Number of rows returned by `demand_top_default`.
    pub demand_limit: usize,
    /// Upper bound of the gpa scale accepted at registration.
    pub max_gpa: f64,
}

impl Default for EnrollmentConfig {
    fn default() -> Self {
        Self {
            tie_breaker: TieBreaker::ArrivalOrder,
            demand_limit: 5,
            max_gpa: 10.0,
        }
    }
}

impl EnrollmentConfig {
    /// Sets the waitlist tie-breaker.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Sets the default row limit of the demand report.
    pub fn with_demand_limit(mut self, limit: usize) -> Self {
        self.demand_limit = limit;
        self
    }

    /// Sets the upper bound of the gpa scale.
    pub fn with_max_gpa(mut self, max_gpa: f64) -> Self {
        self.max_gpa = max_gpa;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EnrollmentConfig::default();
        assert_eq!(config.tie_breaker, TieBreaker::ArrivalOrder);
        assert_eq!(config.demand_limit, 5);
        assert!((config.max_gpa - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: EnrollmentConfig =
            serde_json::from_str(r#"{"tie_breaker":"ById","max_gpa":4.0}"#).unwrap();
        assert_eq!(config.tie_breaker, TieBreaker::ById);
        assert_eq!(config.demand_limit, 5);
        assert!((config.max_gpa - 4.0).abs() < 1e-10);
    }
}
