//! Plain-text report rendering.
//!
//! Turns ledger data into display strings: Euro amounts, progress bars, one
//! line per debt and the monthly cash-flow summary. Everything here is pure
//! formatting over values computed elsewhere.

use crate::{
    core::{
        debt::{months_remaining, progress_percent},
        summary::Totals,
    },
    entities::{Debt, DebtStatus, FixedExpense, Locale},
};
use std::fmt::Write as _;

/// Generates a progress bar string for visual representation.
///
/// Creates a text-based progress bar like: `[████████░░] 80%`
///
/// # Arguments
/// * `progress_percent` - Progress percentage (0-100)
/// * `bar_length` - Length of the progress bar in characters (default 10)
#[must_use]
pub fn format_progress_bar(progress_percent: f64, bar_length: Option<usize>) -> String {
    let length = bar_length.unwrap_or(10);
    let clamped_progress = progress_percent.clamp(0.0, 100.0);

    // Cast safety: clamped_progress ∈ [0, 100], length is small (10-20).
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((clamped_progress / 100.0) * length as f64).round() as usize;
    let empty = length.saturating_sub(filled);

    let filled_str = "█".repeat(filled);
    let empty_str = "░".repeat(empty);

    format!("[{filled_str}{empty_str}] {clamped_progress:.1}%")
}

/// Formats a Euro amount, e.g. `"€1200.00"` or `"-€50.00"`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    // Anything that rounds to zero cents prints unsigned.
    if amount < 0.0 && (amount * 100.0).round() != 0.0 {
        format!("-€{:.2}", amount.abs())
    } else {
        format!("€{:.2}", amount.abs())
    }
}

/// Short status badge used in debt listings.
#[must_use]
pub const fn status_badge(status: DebtStatus) -> &'static str {
    match status {
        DebtStatus::Active => "ACTIVE",
        DebtStatus::Pending => "PENDING",
        DebtStatus::Paid => "PAID",
    }
}

/// One listing line for a debt.
///
/// Format: `Klarna | Category A | ACTIVE | €800.00 / €1200.00 | [███░░░░░░░] 33.3% | 8 mo`
#[must_use]
pub fn format_debt_line(debt: &Debt) -> String {
    let months = match months_remaining(debt) {
        0 => "-".to_string(),
        m => format!("{m} mo"),
    };

    format!(
        "{} | {} | {} | {} / {} | {} | {}",
        debt.creditor,
        debt.category,
        status_badge(debt.status),
        format_currency(debt.remaining_balance),
        format_currency(debt.original_amount),
        format_progress_bar(progress_percent(debt), None),
        months,
    )
}

/// One listing line for a fixed expense, named for `locale`.
#[must_use]
pub fn format_expense_line(expense: &FixedExpense, locale: Locale) -> String {
    format!(
        "{} | {}",
        expense.display_name(locale),
        format_currency(expense.amount)
    )
}

/// Multi-line monthly summary.
#[must_use]
pub fn format_summary(totals: &Totals) -> String {
    let rows = [
        ("Income", totals.total_income),
        ("Fixed expenses", totals.total_fixed_expenses),
        ("Installments", totals.total_installments),
        ("Balance", totals.balance),
        ("Freed money", totals.freed_money),
        ("Still owed", totals.total_remaining),
    ];

    let mut out = String::new();
    for (label, value) in rows {
        let _ = writeln!(out, "{label:<16}{:>14}", format_currency(value));
    }
    let _ = write!(
        out,
        "Debts: {} active, {} pending, {} paid",
        totals.active_count, totals.pending_count, totals.paid_count
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{entities::RecordId, test_utils::debt_with};

    #[test]
    fn test_format_progress_bar_full() {
        let bar = format_progress_bar(100.0, Some(10));
        assert_eq!(bar, "[██████████] 100.0%");
    }

    #[test]
    fn test_format_progress_bar_half() {
        let bar = format_progress_bar(50.0, Some(10));
        assert_eq!(bar, "[█████░░░░░] 50.0%");
    }

    #[test]
    fn test_format_progress_bar_zero() {
        let bar = format_progress_bar(0.0, Some(10));
        assert_eq!(bar, "[░░░░░░░░░░] 0.0%");
    }

    #[test]
    fn test_format_progress_bar_out_of_range_is_clamped() {
        assert_eq!(format_progress_bar(-25.0, Some(4)), "[░░░░] 0.0%");
        assert_eq!(format_progress_bar(130.0, Some(4)), "[████] 100.0%");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1200.0), "€1200.00");
        assert_eq!(format_currency(12.346), "€12.35");
        assert_eq!(format_currency(0.0), "€0.00");
        assert_eq!(format_currency(-50.0), "-€50.00");
    }

    #[test]
    fn test_format_currency_negative_zero_is_unsigned() {
        assert_eq!(format_currency(-0.0), "€0.00");
        assert_eq!(format_currency(-0.001), "€0.00");
        assert_eq!(format_currency(-0.006), "-€0.01");
    }

    #[test]
    fn test_format_debt_line() {
        let mut debt = debt_with(1200.0, 800.0, 100.0);
        debt.creditor = "Klarna".to_string();

        assert_eq!(
            format_debt_line(&debt),
            "Klarna | Category A | ACTIVE | €800.00 / €1200.00 | [███░░░░░░░] 33.3% | 8 mo"
        );
    }

    #[test]
    fn test_format_debt_line_without_installment() {
        let mut debt = debt_with(0.0, 0.0, 0.0);
        debt.creditor = "Debt Item 1".to_string();
        debt.status = DebtStatus::Pending;

        assert_eq!(
            format_debt_line(&debt),
            "Debt Item 1 | Category A | PENDING | €0.00 / €0.00 | [░░░░░░░░░░] 0.0% | -"
        );
    }

    #[test]
    fn test_format_expense_line_uses_locale() {
        let expense = FixedExpense {
            id: RecordId::new("f1"),
            name: "Fixed Expense 1".to_string(),
            name_fa: "هزینه ثابت 1".to_string(),
            name_de: "Fixkosten 1".to_string(),
            amount: 55.5,
        };

        assert_eq!(format_expense_line(&expense, Locale::German), "Fixkosten 1 | €55.50");
        assert_eq!(format_expense_line(&expense, Locale::Persian), "هزینه ثابت 1 | €55.50");
    }

    #[test]
    fn test_format_summary() {
        let totals = Totals {
            total_income: 2500.0,
            total_fixed_expenses: 300.0,
            total_installments: 100.0,
            balance: 2100.0,
            total_remaining: 1200.0,
            active_count: 1,
            ..Totals::default()
        };

        let summary = format_summary(&totals);
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("Income"));
        assert!(lines[0].ends_with("€2500.00"));
        assert!(lines[3].starts_with("Balance"));
        assert!(lines[3].ends_with("€2100.00"));
        assert_eq!(lines[6], "Debts: 1 active, 0 pending, 0 paid");
    }
}
