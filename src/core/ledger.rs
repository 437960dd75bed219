//! Ledger engine - owns the debts, fixed expenses, income profile and payment
//! history, and is the only place they change.
//!
//! Mutations are total: referencing an unknown id is a logged no-op rather
//! than an error, and out-of-range amounts are clamped on the way in. Each
//! mutation reports what happened through a [`MutationOutcome`].

use crate::{
    core::{
        amount::sanitize_amount,
        filter::DebtFilter,
        ids::{IdGenerator, UuidIds},
        summary::{Totals, compute_totals},
    },
    entities::{
        Debt, DebtStatus, FixedExpense, NewDebt, NewExpense, PaymentRecord, PaymentType, RecordId,
        UserProfile,
    },
    errors::{Error, Result},
};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Result of a ledger mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// State changed
    Applied,
    /// Target exists but the payload matched what was already stored
    Unchanged,
    /// No record with the given id
    NotFound,
    /// The change would break a lifecycle rule (e.g. reviving a paid debt)
    Rejected,
}

/// Owned copy of the ledger contents plus the totals derived from them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerSnapshot {
    /// Debts in insertion order
    pub debts: Vec<Debt>,
    /// Fixed expenses in insertion order
    pub expenses: Vec<FixedExpense>,
    /// Income profile
    pub income: UserProfile,
    /// Totals derived from the fields above
    pub totals: Totals,
}

/// In-memory personal finance ledger.
#[derive(Debug, Clone)]
pub struct Ledger<G = UuidIds> {
    debts: Vec<Debt>,
    expenses: Vec<FixedExpense>,
    income: UserProfile,
    payments: Vec<PaymentRecord>,
    ids: G,
}

impl Ledger<UuidIds> {
    /// Creates an empty ledger that assigns UUIDv7 ids.
    #[must_use]
    pub fn new() -> Self {
        Self::with_id_generator(UuidIds)
    }
}

impl Default for Ledger<UuidIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> Ledger<G> {
    /// Creates an empty ledger drawing ids from `ids`.
    pub fn with_id_generator(ids: G) -> Self {
        Self {
            debts: Vec::new(),
            expenses: Vec::new(),
            income: UserProfile::default(),
            payments: Vec::new(),
            ids,
        }
    }

    /// All debts, in insertion order.
    pub fn debts(&self) -> &[Debt] {
        &self.debts
    }

    /// All fixed expenses, in insertion order.
    pub fn expenses(&self) -> &[FixedExpense] {
        &self.expenses
    }

    /// Current income profile.
    pub const fn income(&self) -> &UserProfile {
        &self.income
    }

    /// All recorded payments, oldest first.
    pub fn payments(&self) -> &[PaymentRecord] {
        &self.payments
    }

    /// Looks up a debt by id.
    pub fn debt(&self, id: &RecordId) -> Option<&Debt> {
        self.debts.iter().find(|d| &d.id == id)
    }

    /// Looks up a fixed expense by id.
    pub fn expense(&self, id: &RecordId) -> Option<&FixedExpense> {
        self.expenses.iter().find(|e| &e.id == id)
    }

    /// Payments recorded against one debt, oldest first.
    pub fn payments_for<'a>(
        &'a self,
        debt_id: &'a RecordId,
    ) -> impl Iterator<Item = &'a PaymentRecord> + 'a {
        self.payments.iter().filter(move |p| &p.debt_id == debt_id)
    }

    /// Adds a debt at the end of the collection and returns its fresh id.
    pub fn add_debt(&mut self, new_debt: NewDebt) -> RecordId {
        let id = self.ids.next_id();
        let mut debt = new_debt.into_debt(id.clone());
        sanitize_debt(&mut debt);

        if debt.creditor.trim().is_empty() {
            warn!("Debt {} added without a creditor name", id);
        }
        debug!("Added debt {} ({})", id, debt.creditor);

        self.debts.push(debt);
        id
    }

    /// Replaces the stored debt with the same id.
    ///
    /// A paid debt stays paid: a payload that would move it back to `Active`
    /// or `Pending` is rejected. Any payload with status `Paid` is stored with
    /// a zero remaining balance.
    pub fn update_debt(&mut self, mut debt: Debt) -> MutationOutcome {
        let Some(stored) = self.debts.iter_mut().find(|d| d.id == debt.id) else {
            debug!("Ignoring update for unknown debt {}", debt.id);
            return MutationOutcome::NotFound;
        };

        if !stored.status.can_transition_to(debt.status) {
            warn!(
                "Rejected update moving debt {} from {} to {}",
                debt.id, stored.status, debt.status
            );
            return MutationOutcome::Rejected;
        }

        sanitize_debt(&mut debt);
        if debt.status == DebtStatus::Paid {
            debt.remaining_balance = 0.0;
        }

        if *stored == debt {
            return MutationOutcome::Unchanged;
        }

        debug!("Updated debt {}", debt.id);
        *stored = debt;
        MutationOutcome::Applied
    }

    /// Removes a debt, whatever its status, along with its payment history.
    pub fn delete_debt(&mut self, id: &RecordId) -> MutationOutcome {
        let before = self.debts.len();
        self.debts.retain(|d| &d.id != id);
        if self.debts.len() == before {
            debug!("Ignoring delete for unknown debt {}", id);
            return MutationOutcome::NotFound;
        }

        self.payments.retain(|p| &p.debt_id != id);
        debug!("Deleted debt {}", id);
        MutationOutcome::Applied
    }

    /// Marks a debt as paid and zeroes its remaining balance.
    ///
    /// Settling an already paid debt leaves it untouched.
    pub fn settle_debt(&mut self, id: &RecordId) -> MutationOutcome {
        let Some(debt) = self.debts.iter_mut().find(|d| &d.id == id) else {
            debug!("Ignoring settle for unknown debt {}", id);
            return MutationOutcome::NotFound;
        };

        if !debt.status.is_settleable() {
            return MutationOutcome::Unchanged;
        }

        debt.status = DebtStatus::Paid;
        debt.remaining_balance = 0.0;
        info!("Settled debt {} ({})", id, debt.creditor);
        MutationOutcome::Applied
    }

    /// Adds a fixed expense at the end of the collection and returns its fresh id.
    pub fn add_expense(&mut self, new_expense: NewExpense) -> RecordId {
        let id = self.ids.next_id();
        let mut expense = new_expense.into_expense(id.clone());
        expense.amount = clamp_logged(expense.amount, "expense amount");

        debug!("Added expense {} ({})", id, expense.name);
        self.expenses.push(expense);
        id
    }

    /// Replaces the stored expense with the same id.
    pub fn update_expense(&mut self, mut expense: FixedExpense) -> MutationOutcome {
        let Some(stored) = self.expenses.iter_mut().find(|e| e.id == expense.id) else {
            debug!("Ignoring update for unknown expense {}", expense.id);
            return MutationOutcome::NotFound;
        };

        expense.amount = clamp_logged(expense.amount, "expense amount");
        if *stored == expense {
            return MutationOutcome::Unchanged;
        }

        debug!("Updated expense {}", expense.id);
        *stored = expense;
        MutationOutcome::Applied
    }

    /// Removes a fixed expense.
    pub fn delete_expense(&mut self, id: &RecordId) -> MutationOutcome {
        let before = self.expenses.len();
        self.expenses.retain(|e| &e.id != id);
        if self.expenses.len() == before {
            debug!("Ignoring delete for unknown expense {}", id);
            return MutationOutcome::NotFound;
        }

        debug!("Deleted expense {}", id);
        MutationOutcome::Applied
    }

    /// Replaces the income profile. Negative values are clamped to zero.
    pub fn set_income(&mut self, income: UserProfile) -> MutationOutcome {
        let income = UserProfile {
            main_salary: clamp_logged(income.main_salary, "main salary"),
            mini_job: clamp_logged(income.mini_job, "mini job income"),
        };

        if self.income == income {
            return MutationOutcome::Unchanged;
        }

        self.income = income;
        debug!("Income set to {}", income.total());
        MutationOutcome::Applied
    }

    /// Records a payment against an active debt.
    ///
    /// `Regular` and `Extra` payments reduce the remaining balance by `amount`,
    /// capped at what is still owed. `Final` payments ignore `amount` and pay
    /// off the remainder. A debt whose balance reaches zero is settled.
    ///
    /// # Errors
    /// - [`Error::DebtNotFound`] if no debt has `debt_id`
    /// - [`Error::DebtAlreadyPaid`] if the debt is already settled
    /// - [`Error::DebtNotActive`] if the debt is still pending
    /// - [`Error::InvalidAmount`] for a non-positive `Regular`/`Extra` amount,
    ///   or one against a debt with nothing left to pay
    pub fn record_payment(
        &mut self,
        debt_id: &RecordId,
        amount: f64,
        date: NaiveDate,
        payment_type: PaymentType,
    ) -> Result<PaymentRecord> {
        let debt = self
            .debts
            .iter_mut()
            .find(|d| &d.id == debt_id)
            .ok_or_else(|| Error::DebtNotFound {
                id: debt_id.to_string(),
            })?;

        match debt.status {
            DebtStatus::Active => {}
            DebtStatus::Pending => {
                return Err(Error::DebtNotActive {
                    id: debt_id.to_string(),
                });
            }
            DebtStatus::Paid => {
                return Err(Error::DebtAlreadyPaid {
                    id: debt_id.to_string(),
                });
            }
        }

        let applied = match payment_type {
            PaymentType::Final => debt.remaining_balance,
            PaymentType::Regular | PaymentType::Extra => {
                if !amount.is_finite() || amount <= 0.0 || debt.remaining_balance <= 0.0 {
                    return Err(Error::InvalidAmount { amount });
                }
                amount.min(debt.remaining_balance)
            }
        };

        debt.remaining_balance = (debt.remaining_balance - applied).max(0.0);
        if payment_type == PaymentType::Final || debt.remaining_balance <= 0.0 {
            debt.remaining_balance = 0.0;
            debt.status = DebtStatus::Paid;
            info!("Debt {} paid off by payment on {}", debt_id, date);
        }

        let record = PaymentRecord {
            id: self.ids.next_id(),
            debt_id: debt_id.clone(),
            amount: applied,
            date,
            payment_type,
        };
        debug!("Recorded {:?} payment of {} for debt {}", payment_type, applied, debt_id);
        self.payments.push(record.clone());
        Ok(record)
    }

    /// Monthly totals derived from the current contents.
    pub fn totals(&self) -> Totals {
        compute_totals(&self.income, &self.debts, &self.expenses)
    }

    /// Debts matching `filter`, in collection order.
    pub fn filter_debts(&self, filter: &DebtFilter) -> Vec<&Debt> {
        filter.apply(&self.debts)
    }

    /// Owned copy of the current state for handing to another thread or view.
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            debts: self.debts.clone(),
            expenses: self.expenses.clone(),
            income: self.income,
            totals: self.totals(),
        }
    }
}

fn sanitize_debt(debt: &mut Debt) {
    debt.original_amount = clamp_logged(debt.original_amount, "original amount");
    debt.remaining_balance = clamp_logged(debt.remaining_balance, "remaining balance");
    debt.monthly_installment = clamp_logged(debt.monthly_installment, "monthly installment");
}

fn clamp_logged(value: f64, field: &str) -> f64 {
    if !(value.is_finite() && value >= 0.0) {
        warn!("Clamped {} from {} to 0", field, value);
    }
    sanitize_amount(value)
}
