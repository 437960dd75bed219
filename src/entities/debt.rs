//! Debt entity - a single creditor obligation.
//!
//! Each debt has a principal (`original_amount`), the amount still owed
//! (`remaining_balance`), a scheduled monthly installment, a category tag and
//! a lifecycle status.

use super::RecordId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a debt.
///
/// `Pending` debts are tracked but not yet being paid down, `Active` debts are
/// being paid, and `Paid` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DebtStatus {
    /// Currently being paid down; its installment counts against the balance
    #[default]
    Active,
    /// Not yet being paid down
    Pending,
    /// Fully settled
    Paid,
}

impl DebtStatus {
    /// Whether an edit may move a debt from `self` to `next`.
    ///
    /// `Paid` only ever stays `Paid`.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        match (self, next) {
            (Self::Paid, Self::Paid) => true,
            (Self::Paid, Self::Active | Self::Pending) => false,
            (Self::Active | Self::Pending, _) => true,
        }
    }

    /// Whether the settle operation applies to a debt in this status.
    #[must_use]
    pub const fn is_settleable(self) -> bool {
        match self {
            Self::Active | Self::Pending => true,
            Self::Paid => false,
        }
    }

    /// Stable label used in seed files and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Pending => "Pending",
            Self::Paid => "Paid",
        }
    }
}

impl fmt::Display for DebtStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status a debt may be created with. A debt is never created already paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InitialStatus {
    /// Starts being paid down right away
    #[default]
    Active,
    /// Tracked but not yet being paid down
    Pending,
}

impl From<InitialStatus> for DebtStatus {
    fn from(value: InitialStatus) -> Self {
        match value {
            InitialStatus::Active => Self::Active,
            InitialStatus::Pending => Self::Pending,
        }
    }
}

/// Classification tag for a debt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DebtCategory {
    /// `"Category A"`
    #[default]
    #[serde(rename = "Category A")]
    A,
    /// `"Category B"`
    #[serde(rename = "Category B")]
    B,
    /// `"Category C"`
    #[serde(rename = "Category C")]
    C,
    /// `"Category D"`
    #[serde(rename = "Category D")]
    D,
}

impl DebtCategory {
    /// Label used in seed files and reports, e.g. `"Category A"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "Category A",
            Self::B => "Category B",
            Self::C => "Category C",
            Self::D => "Category D",
        }
    }
}

impl fmt::Display for DebtCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored debt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    /// Identifier assigned at creation, never changes
    pub id: RecordId,
    /// Creditor display name
    pub creditor: String,
    /// Principal at creation time
    pub original_amount: f64,
    /// Amount still owed
    pub remaining_balance: f64,
    /// Scheduled monthly payment
    pub monthly_installment: f64,
    /// Classification tag
    pub category: DebtCategory,
    /// Lifecycle status
    pub status: DebtStatus,
}

impl Debt {
    /// Returns a copy with a new principal, fully outstanding again.
    ///
    /// This mirrors editing the amount field of a debt form: the remaining
    /// balance follows the original amount.
    #[must_use]
    pub fn with_original_amount(mut self, amount: f64) -> Self {
        self.original_amount = amount;
        self.remaining_balance = amount;
        self
    }
}

/// Payload for creating a debt. The ledger assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDebt {
    /// Creditor display name
    pub creditor: String,
    /// Principal
    pub original_amount: f64,
    /// Amount still owed, normally equal to the principal
    pub remaining_balance: f64,
    /// Scheduled monthly payment
    pub monthly_installment: f64,
    /// Classification tag, `Category A` when omitted
    #[serde(default)]
    pub category: DebtCategory,
    /// Starting status, `Active` when omitted
    #[serde(default)]
    pub status: InitialStatus,
}

impl NewDebt {
    /// Creates a fully outstanding `Active` debt in the default category.
    pub fn new(creditor: impl Into<String>, original_amount: f64, monthly_installment: f64) -> Self {
        Self {
            creditor: creditor.into(),
            original_amount,
            remaining_balance: original_amount,
            monthly_installment,
            category: DebtCategory::default(),
            status: InitialStatus::default(),
        }
    }

    /// Sets the principal and resets the remaining balance to match.
    #[must_use]
    pub fn with_original_amount(mut self, amount: f64) -> Self {
        self.original_amount = amount;
        self.remaining_balance = amount;
        self
    }

    /// Overrides the remaining balance, e.g. for a debt already partly repaid.
    #[must_use]
    pub fn with_remaining_balance(mut self, remaining: f64) -> Self {
        self.remaining_balance = remaining;
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: DebtCategory) -> Self {
        self.category = category;
        self
    }

    /// Sets the starting status.
    #[must_use]
    pub fn with_status(mut self, status: InitialStatus) -> Self {
        self.status = status;
        self
    }

    /// Attaches an id, producing the stored form of this debt.
    #[must_use]
    pub fn into_debt(self, id: RecordId) -> Debt {
        Debt {
            id,
            creditor: self.creditor,
            original_amount: self.original_amount,
            remaining_balance: self.remaining_balance,
            monthly_installment: self.monthly_installment,
            category: self.category,
            status: self.status.into(),
        }
    }
}
