//! Entity module - plain data types owned by the ledger.
//!
//! These types carry no behavior beyond construction helpers and labels;
//! all state changes go through [`crate::core::ledger::Ledger`].

pub mod debt;
pub mod expense;
pub mod id;
pub mod payment;
pub mod profile;

pub use debt::{Debt, DebtCategory, DebtStatus, InitialStatus, NewDebt};
pub use expense::{FixedExpense, Locale, NewExpense};
pub use id::RecordId;
pub use payment::{PaymentRecord, PaymentType};
pub use profile::UserProfile;
