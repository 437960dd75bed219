//! Per-debt derived figures: repayment progress, months remaining and the
//! projected payoff date.

use crate::entities::Debt;
use chrono::{Months, NaiveDate};

/// Percentage of the principal already repaid, clamped to `0..=100`.
///
/// A zero principal has no meaningful progress and yields 0. A remaining
/// balance above the principal (anomalous input) also yields 0.
#[must_use]
pub fn progress_percent(debt: &Debt) -> f64 {
    if debt.original_amount <= 0.0 {
        return 0.0;
    }

    let repaid = debt.original_amount - debt.remaining_balance;
    (repaid / debt.original_amount * 100.0).clamp(0.0, 100.0)
}

/// Whole months of installments needed to clear the remaining balance.
///
/// Returns 0 when there is no installment, since such a debt never clears on
/// its own.
// Float-to-int casts saturate, and the quotient is positive here.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn months_remaining(debt: &Debt) -> u32 {
    if debt.monthly_installment <= 0.0 || debt.remaining_balance <= 0.0 {
        return 0;
    }

    (debt.remaining_balance / debt.monthly_installment).ceil() as u32
}

/// Month in which the debt is cleared if installments start at `from`.
///
/// Returns `from` for a debt with nothing left to pay and `None` when the debt
/// has a balance but no installment.
#[must_use]
pub fn projected_payoff(debt: &Debt, from: NaiveDate) -> Option<NaiveDate> {
    if debt.remaining_balance <= 0.0 {
        return Some(from);
    }

    match months_remaining(debt) {
        0 => None,
        months => from.checked_add_months(Months::new(months)),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::debt_with;

    #[test]
    fn test_progress_half_repaid() {
        let debt = debt_with(1000.0, 500.0, 100.0);
        assert_eq!(progress_percent(&debt), 50.0);
    }

    #[test]
    fn test_progress_untouched_and_cleared() {
        assert_eq!(progress_percent(&debt_with(1000.0, 1000.0, 100.0)), 0.0);
        assert_eq!(progress_percent(&debt_with(1000.0, 0.0, 100.0)), 100.0);
    }

    #[test]
    fn test_progress_clamps_overdrawn_balance() {
        let debt = debt_with(1000.0, 1200.0, 100.0);
        assert_eq!(progress_percent(&debt), 0.0);
    }

    #[test]
    fn test_progress_clamps_negative_balance() {
        let debt = debt_with(1000.0, -200.0, 100.0);
        assert_eq!(progress_percent(&debt), 100.0);
    }

    #[test]
    fn test_progress_zero_principal() {
        let debt = debt_with(0.0, 0.0, 100.0);
        assert_eq!(progress_percent(&debt), 0.0);
    }

    #[test]
    fn test_months_remaining_rounds_up() {
        assert_eq!(months_remaining(&debt_with(1200.0, 1200.0, 100.0)), 12);
        assert_eq!(months_remaining(&debt_with(1200.0, 1150.0, 100.0)), 12);
        assert_eq!(months_remaining(&debt_with(1200.0, 1201.0, 100.0)), 13);
    }

    #[test]
    fn test_months_remaining_zero_installment() {
        assert_eq!(months_remaining(&debt_with(1200.0, 1200.0, 0.0)), 0);
    }

    #[test]
    fn test_months_remaining_nothing_owed() {
        assert_eq!(months_remaining(&debt_with(1200.0, 0.0, 100.0)), 0);
    }

    #[test]
    fn test_projected_payoff() {
        let from = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();

        let debt = debt_with(300.0, 300.0, 100.0);
        assert_eq!(
            projected_payoff(&debt, from),
            NaiveDate::from_ymd_opt(2025, 4, 30)
        );

        let cleared = debt_with(300.0, 0.0, 100.0);
        assert_eq!(projected_payoff(&cleared, from), Some(from));

        let stalled = debt_with(300.0, 300.0, 0.0);
        assert_eq!(projected_payoff(&stalled, from), None);
    }
}
