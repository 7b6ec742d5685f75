//! Domain model for a worker.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    pub id: String,
    pub name: String,
    pub phone: String,
    /// Default commission rate in percent (0-100). This is only the template
    /// applied to new appointments; the rate that governs a job is the one
    /// snapshotted onto the appointment at creation and is never re-read
    /// from here.
    pub default_commission_rate: Decimal,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Worker {
    /// Generate a unique ID for a worker
    pub fn generate_id(timestamp_millis: u64) -> String {
        format!("worker::{}", timestamp_millis)
    }
}
