//! Seed-file loading.
//!
//! A seed file pre-populates the ledger at start-up: the income profile, the
//! debts and the fixed expenses. Debts listed as `Paid` are added and then
//! settled, so they go through the same lifecycle as any other debt.
//!
//! ```toml
//! [income]
//! main_salary = 2000.0
//! mini_job = 500.0
//!
//! [[debts]]
//! creditor = "Klarna"
//! original_amount = 1200.0
//! monthly_installment = 100.0
//! category = "Category B"
//! status = "Active"
//!
//! [[expenses]]
//! name = "Rent"
//! name_de = "Miete"
//! amount = 300.0
//! ```

use crate::{
    core::{IdGenerator, Ledger},
    entities::{DebtCategory, DebtStatus, InitialStatus, NewDebt, NewExpense, UserProfile},
    errors::{Error, Result},
};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Configuration structure representing the entire seed file
#[derive(Debug, Default, Deserialize)]
pub struct SeedFile {
    /// Income profile, zero when omitted
    #[serde(default)]
    pub income: UserProfile,
    /// Debts to add, in order
    #[serde(default)]
    pub debts: Vec<DebtSeed>,
    /// Fixed expenses to add, in order
    #[serde(default)]
    pub expenses: Vec<NewExpense>,
}

/// Configuration for a single seeded debt
#[derive(Debug, Clone, Deserialize)]
pub struct DebtSeed {
    /// Creditor display name
    pub creditor: String,
    /// Principal
    #[serde(default)]
    pub original_amount: f64,
    /// Defaults to the original amount (nothing repaid yet)
    #[serde(default)]
    pub remaining_balance: Option<f64>,
    /// Scheduled monthly payment
    #[serde(default)]
    pub monthly_installment: f64,
    /// Classification tag
    #[serde(default)]
    pub category: DebtCategory,
    /// Status after seeding; `Paid` debts are added and then settled
    #[serde(default)]
    pub status: DebtStatus,
}

impl DebtSeed {
    fn to_new_debt(&self) -> NewDebt {
        let initial = match self.status {
            DebtStatus::Pending => InitialStatus::Pending,
            DebtStatus::Active | DebtStatus::Paid => InitialStatus::Active,
        };

        let draft = NewDebt::new(
            self.creditor.clone(),
            self.original_amount,
            self.monthly_installment,
        )
        .with_category(self.category)
        .with_status(initial);

        match self.remaining_balance {
            Some(remaining) => draft.with_remaining_balance(remaining),
            None => draft,
        }
    }
}

impl SeedFile {
    /// Checks names and amounts before anything is added to a ledger.
    ///
    /// # Errors
    /// Returns [`Error::Config`] naming the first offending entry.
    pub fn validate(&self) -> Result<()> {
        for (index, debt) in self.debts.iter().enumerate() {
            if debt.creditor.trim().is_empty() {
                return Err(Error::Config {
                    message: format!("debts[{index}]: creditor cannot be empty"),
                });
            }
            let amounts = [
                debt.original_amount,
                debt.remaining_balance.unwrap_or(0.0),
                debt.monthly_installment,
            ];
            if amounts.iter().any(|a| !a.is_finite() || *a < 0.0) {
                return Err(Error::Config {
                    message: format!("debts[{index}] ({}): amounts cannot be negative", debt.creditor),
                });
            }
        }

        for (index, expense) in self.expenses.iter().enumerate() {
            if expense.name.trim().is_empty() {
                return Err(Error::Config {
                    message: format!("expenses[{index}]: name cannot be empty"),
                });
            }
            if !expense.amount.is_finite() || expense.amount < 0.0 {
                return Err(Error::Config {
                    message: format!("expenses[{index}] ({}): amount cannot be negative", expense.name),
                });
            }
        }

        let income = [self.income.main_salary, self.income.mini_job];
        if income.iter().any(|a| !a.is_finite() || *a < 0.0) {
            return Err(Error::Config {
                message: "income cannot be negative".to_string(),
            });
        }

        Ok(())
    }

    /// Adds the seeded income, debts and expenses to `ledger`, in file order.
    pub fn apply<G: IdGenerator>(&self, ledger: &mut Ledger<G>) {
        ledger.set_income(self.income);

        for seed in &self.debts {
            let id = ledger.add_debt(seed.to_new_debt());
            if seed.status == DebtStatus::Paid {
                ledger.settle_debt(&id);
            }
        }

        for expense in &self.expenses {
            ledger.add_expense(expense.clone());
        }

        info!(
            "Seeded ledger with {} debts and {} fixed expenses",
            self.debts.len(),
            self.expenses.len()
        );
    }

    /// Validates the seed and builds a fresh ledger from it.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if validation fails.
    pub fn into_ledger<G: IdGenerator>(self, ids: G) -> Result<Ledger<G>> {
        self.validate()?;
        let mut ledger = Ledger::with_id_generator(ids);
        self.apply(&mut ledger);
        Ok(ledger)
    }
}

/// Parses seed-file contents.
///
/// # Errors
/// Returns [`Error::Config`] if the TOML is malformed or has the wrong shape.
pub fn parse_seed(contents: &str) -> Result<SeedFile> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse seed file: {e}"),
    })
}

/// Loads a seed file from disk.
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_seed<P: AsRef<Path>>(path: P) -> Result<SeedFile> {
    let path_ref = path.as_ref();
    debug!("Attempting to load seed file from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read seed file {}: {e}", path_ref.display()),
    })?;
    parse_seed(&contents)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::SequentialIds;

    const SAMPLE: &str = r#"
        [income]
        main_salary = 2000.0
        mini_job = 500.0

        [[debts]]
        creditor = "Klarna"
        original_amount = 1200.0
        monthly_installment = 100.0
        category = "Category B"

        [[debts]]
        creditor = "Barmer"
        original_amount = 600.0
        remaining_balance = 450.0
        monthly_installment = 50.0
        status = "Pending"

        [[debts]]
        creditor = "Old Loan"
        original_amount = 900.0
        monthly_installment = 75.0
        category = "Category D"
        status = "Paid"

        [[expenses]]
        name = "Rent"
        name_fa = "اجاره"
        name_de = "Miete"
        amount = 300.0
    "#;

    #[test]
    fn test_parse_seed_file() {
        let seed = parse_seed(SAMPLE).unwrap();

        assert_eq!(seed.income, UserProfile::new(2000.0, 500.0));
        assert_eq!(seed.debts.len(), 3);
        assert_eq!(seed.debts[0].category, DebtCategory::B);
        assert_eq!(seed.debts[0].status, DebtStatus::Active);
        assert_eq!(seed.debts[0].remaining_balance, None);
        assert_eq!(seed.debts[1].remaining_balance, Some(450.0));
        assert_eq!(seed.expenses[0].name_de, "Miete");
    }

    #[test]
    fn test_seed_into_ledger() {
        let ledger = parse_seed(SAMPLE)
            .unwrap()
            .into_ledger(SequentialIds::new())
            .unwrap();

        let debts = ledger.debts();
        assert_eq!(debts.len(), 3);
        assert_eq!(debts[0].remaining_balance, 1200.0);
        assert_eq!(debts[1].status, DebtStatus::Pending);
        assert_eq!(debts[1].remaining_balance, 450.0);
        assert_eq!(debts[2].status, DebtStatus::Paid);
        assert_eq!(debts[2].remaining_balance, 0.0);

        let totals = ledger.totals();
        assert_eq!(totals.total_income, 2500.0);
        assert_eq!(totals.total_fixed_expenses, 300.0);
        assert_eq!(totals.total_installments, 100.0);
        assert_eq!(totals.pending_installments, 50.0);
        assert_eq!(totals.freed_money, 75.0);
        assert_eq!(totals.balance, 2100.0);
    }

    #[test]
    fn test_empty_seed_is_valid() {
        let ledger = parse_seed("").unwrap().into_ledger(SequentialIds::new()).unwrap();
        assert!(ledger.debts().is_empty());
        assert!(ledger.expenses().is_empty());
    }

    #[test]
    fn test_seed_rejects_empty_creditor() {
        let seed = parse_seed(
            r#"
            [[debts]]
            creditor = "  "
            original_amount = 10.0
            "#,
        )
        .unwrap();

        let result = seed.into_ledger(SequentialIds::new());
        assert!(matches!(result, Err(Error::Config { message }) if message.contains("creditor")));
    }

    #[test]
    fn test_seed_rejects_negative_amounts() {
        let seed = parse_seed(
            r#"
            [[expenses]]
            name = "Rent"
            amount = -300.0
            "#,
        )
        .unwrap();

        assert!(matches!(seed.validate(), Err(Error::Config { .. })));
    }

    #[test]
    fn test_seed_rejects_non_finite_income() {
        let seed = SeedFile {
            income: UserProfile::new(f64::NAN, 500.0),
            ..SeedFile::default()
        };
        assert!(matches!(seed.validate(), Err(Error::Config { message }) if message.contains("income")));

        let seed = parse_seed("[income]\nmain_salary = inf\n").unwrap();
        assert!(matches!(seed.validate(), Err(Error::Config { .. })));
    }

    #[test]
    fn test_parse_seed_reports_bad_toml() {
        let result = parse_seed("[[debts]]\noriginal_amount = 10.0");
        assert!(matches!(result, Err(Error::Config { message }) if message.contains("seed file")));
    }

    #[test]
    fn test_load_seed_missing_file() {
        let result = load_seed("definitely/not/here.toml");
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
