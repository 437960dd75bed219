/// Seed-file loading into a ledger
pub mod seed;

/// Environment-driven runtime settings
pub mod settings;
