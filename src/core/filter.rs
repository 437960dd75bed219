//! Debt list filtering by status and creditor name.

use crate::entities::{Debt, DebtStatus};
use serde::{Deserialize, Serialize};

/// Status predicate of a [`DebtFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    /// Every status passes
    #[default]
    All,
    /// Only debts with this status pass
    Only(DebtStatus),
}

impl StatusFilter {
    /// Whether `status` passes this filter.
    #[must_use]
    pub fn matches(self, status: DebtStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

impl From<DebtStatus> for StatusFilter {
    fn from(value: DebtStatus) -> Self {
        Self::Only(value)
    }
}

/// Status filter plus a case-insensitive creditor substring search.
///
/// An empty search term matches every creditor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DebtFilter {
    /// Status predicate
    pub status: StatusFilter,
    /// Creditor substring, compared case-insensitively
    pub search: String,
}

impl DebtFilter {
    /// Creates a filter from a status predicate and a search term.
    pub fn new(status: impl Into<StatusFilter>, search: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            search: search.into(),
        }
    }

    /// Whether `debt` passes both the status predicate and the search.
    #[must_use]
    pub fn matches(&self, debt: &Debt) -> bool {
        self.status.matches(debt.status)
            && debt
                .creditor
                .to_lowercase()
                .contains(&self.search.to_lowercase())
    }

    /// Returns the matching debts in their original order.
    #[must_use]
    pub fn apply<'a>(&self, debts: &'a [Debt]) -> Vec<&'a Debt> {
        debts.iter().filter(|debt| self.matches(debt)).collect()
    }
}
