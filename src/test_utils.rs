//! Shared test utilities.
//!
//! Helpers for building ledgers with predictable ids and debts with
//! sensible defaults.

use crate::{
    core::{Ledger, SequentialIds},
    entities::{Debt, DebtCategory, DebtStatus, NewDebt, NewExpense, RecordId, UserProfile},
};

/// Creates an empty ledger whose ids count up from `"1"`.
/// This is the standard setup for ledger tests.
#[must_use]
pub fn test_ledger() -> Ledger<SequentialIds> {
    Ledger::with_id_generator(SequentialIds::new())
}

/// Adds a fully outstanding `Active` debt in the default category.
pub fn add_test_debt(
    ledger: &mut Ledger<SequentialIds>,
    creditor: &str,
    original_amount: f64,
    monthly_installment: f64,
) -> RecordId {
    ledger.add_debt(NewDebt::new(creditor, original_amount, monthly_installment))
}

/// Adds a fixed expense with only a default name.
pub fn add_test_expense(ledger: &mut Ledger<SequentialIds>, name: &str, amount: f64) -> RecordId {
    ledger.add_expense(NewExpense::new(name, amount))
}

/// Builds a detached `Active` debt with the given amounts.
///
/// # Defaults
/// * `id`: `"d"`
/// * `creditor`: `"Test Creditor"`
/// * `category`: A
#[must_use]
pub fn debt_with(original_amount: f64, remaining_balance: f64, monthly_installment: f64) -> Debt {
    Debt {
        id: RecordId::new("d"),
        creditor: "Test Creditor".to_string(),
        original_amount,
        remaining_balance,
        monthly_installment,
        category: DebtCategory::A,
        status: DebtStatus::Active,
    }
}

/// Builds a detached debt with a given id, creditor and status.
#[must_use]
pub fn debt_named(id: &str, creditor: &str, status: DebtStatus) -> Debt {
    Debt {
        id: RecordId::new(id),
        creditor: creditor.to_string(),
        status,
        ..debt_with(100.0, 100.0, 10.0)
    }
}

/// Income 2000 + 500, one fixed expense of 300 and one active debt of 1200
/// paid at 100 a month. Returns the ledger and the debt's id.
#[must_use]
pub fn scenario_ledger() -> (Ledger<SequentialIds>, RecordId) {
    let mut ledger = test_ledger();
    ledger.set_income(UserProfile::new(2000.0, 500.0));
    add_test_expense(&mut ledger, "Rent", 300.0);
    let debt_id = add_test_debt(&mut ledger, "Bank", 1200.0, 100.0);
    (ledger, debt_id)
}
