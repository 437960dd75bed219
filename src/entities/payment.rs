//! Payment record - a single payment made against a debt.

use super::RecordId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PaymentType {
    /// Scheduled installment
    #[default]
    Regular,
    /// Additional payment on top of the schedule
    Extra,
    /// Pays off whatever remains and settles the debt
    Final,
}

/// A recorded payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Identifier of this payment
    pub id: RecordId,
    /// Debt the payment was made against
    pub debt_id: RecordId,
    /// Amount actually applied to the debt
    pub amount: f64,
    /// Day the payment was made
    pub date: NaiveDate,
    /// Regular, extra or final
    pub payment_type: PaymentType,
}
