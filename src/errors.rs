//! Unified error type for the ledger.
//!
//! The mutation API of [`crate::core::ledger::Ledger`] is total and never
//! returns these; they surface from seed-file loading and payment recording.

use thiserror::Error;

/// Errors raised outside the total mutation API.
#[derive(Debug, Error)]
pub enum Error {
    /// Seed file or environment settings are unreadable or invalid
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong, naming the offending entry
        message: String,
    },

    /// A payment amount that cannot be applied
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount as given
        amount: f64,
    },

    /// No debt with the given id
    #[error("Debt not found: {id}")]
    DebtNotFound {
        /// The id that was looked up
        id: String,
    },

    /// The debt is settled and accepts no further payments
    #[error("Debt {id} is already paid")]
    DebtAlreadyPaid {
        /// Id of the settled debt
        id: String,
    },

    /// The debt is pending and not yet being paid down
    #[error("Debt {id} is not active")]
    DebtNotActive {
        /// Id of the pending debt
        id: String,
    },

    /// An environment variable is set but not valid unicode
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
