//! Income profile - the two income sources summed for total income.

use serde::{Deserialize, Serialize};

/// Monthly income.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    /// Primary salary
    #[serde(default)]
    pub main_salary: f64,
    /// Secondary (mini job) income
    #[serde(default)]
    pub mini_job: f64,
}

impl UserProfile {
    /// Creates a profile from both income sources.
    #[must_use]
    pub const fn new(main_salary: f64, mini_job: f64) -> Self {
        Self {
            main_salary,
            mini_job,
        }
    }

    /// Sum of both income sources.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.main_salary + self.mini_job
    }
}
