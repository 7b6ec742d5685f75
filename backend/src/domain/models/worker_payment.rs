//! Domain model for a worker payment.
//!
//! Payments are the audit trail of money actually handed to workers. They
//! are append-only: never edited, never deleted. A worker's "paid" total is
//! the sum of these records.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::random_suffix;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerPayment {
    pub id: String,
    pub worker_id: String,
    /// Always strictly positive.
    pub amount: Decimal,
    /// Date the payment was registered. Payments attribute to the period
    /// they were made in, not the period the commission was earned in.
    pub date: NaiveDate,
}

impl WorkerPayment {
    /// Generate a unique payment ID.
    /// Format: pay-<timestamp_ms>-<random_suffix>
    pub fn generate_id(timestamp_ms: u64) -> String {
        format!("pay-{}-{}", timestamp_ms, random_suffix(4))
    }
}
