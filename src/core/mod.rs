//! Core business logic - the ledger engine and the pure computations it is
//! built from. Nothing here performs I/O.

/// Money value coercion at the ledger boundary
pub mod amount;
/// Per-debt progress, months remaining and payoff projection
pub mod debt;
/// Debt list filtering by status and creditor
pub mod filter;
/// Record id generation
pub mod ids;
/// The ledger engine
pub mod ledger;
/// Text rendering of ledger data
pub mod report;
/// Monthly cash-flow totals
pub mod summary;

pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use ledger::{Ledger, LedgerSnapshot, MutationOutcome};
pub use summary::Totals;
