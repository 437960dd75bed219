//! Monthly cash-flow summary.
//!
//! Totals are always derived from the current collections and never stored,
//! so they cannot drift from the debts and expenses they summarize.

use crate::entities::{Debt, DebtStatus, FixedExpense, UserProfile};
use serde::Serialize;

/// Aggregate figures for one month.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Totals {
    /// Main salary plus mini job
    pub total_income: f64,
    /// Sum of all fixed expenses
    pub total_fixed_expenses: f64,
    /// Installments of `Active` debts
    pub total_installments: f64,
    /// Installments of `Paid` debts, no longer owed each month
    pub freed_money: f64,
    /// Installments of `Pending` debts, not yet being paid
    pub pending_installments: f64,
    /// Income minus fixed expenses minus active installments
    pub balance: f64,
    /// Outstanding balance across all debts that are not paid
    pub total_remaining: f64,
    /// Number of `Active` debts
    pub active_count: usize,
    /// Number of `Pending` debts
    pub pending_count: usize,
    /// Number of `Paid` debts
    pub paid_count: usize,
}

/// Computes the monthly summary from the current ledger contents.
#[must_use]
pub fn compute_totals(income: &UserProfile, debts: &[Debt], expenses: &[FixedExpense]) -> Totals {
    let mut totals = Totals {
        total_income: income.total(),
        total_fixed_expenses: expenses.iter().map(|e| e.amount).sum(),
        ..Totals::default()
    };

    for debt in debts {
        match debt.status {
            DebtStatus::Active => {
                totals.total_installments += debt.monthly_installment;
                totals.total_remaining += debt.remaining_balance;
                totals.active_count += 1;
            }
            DebtStatus::Pending => {
                totals.pending_installments += debt.monthly_installment;
                totals.total_remaining += debt.remaining_balance;
                totals.pending_count += 1;
            }
            DebtStatus::Paid => {
                totals.freed_money += debt.monthly_installment;
                totals.paid_count += 1;
            }
        }
    }

    totals.balance =
        totals.total_income - (totals.total_fixed_expenses + totals.total_installments);
    totals
}
