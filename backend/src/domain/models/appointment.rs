//! Domain model for an appointment.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::random_suffix;
use super::status::JobStatus;

/// How the client paid for a completed appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    Transfer,
    Card,
}

impl PaymentMethod {
    /// Convert to string for CSV storage
    pub fn to_storage_string(&self) -> String {
        match self {
            PaymentMethod::Cash => "cash".to_string(),
            PaymentMethod::Transfer => "transfer".to_string(),
            PaymentMethod::Card => "card".to_string(),
        }
    }

    /// Parse from string for CSV loading
    pub fn from_storage_string(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "cash" => Ok(PaymentMethod::Cash),
            "transfer" => Ok(PaymentMethod::Transfer),
            "card" => Ok(PaymentMethod::Card),
            _ => Err(format!("Invalid payment method: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub client_name: String,
    pub worker_id: String,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: u32,
    /// Price charged to the client. Never negative.
    pub cost: Decimal,
    /// Commission rate in percent, captured at creation time. Immutable so
    /// a later change to the worker's default rate never recomputes past
    /// commissions.
    pub commission_rate: Decimal,
    pub status: JobStatus,
    pub payment_method: Option<PaymentMethod>,
    /// Whether this job's commission was settled with the worker. Can only
    /// become true once the appointment is completed.
    pub paid_to_worker: bool,
}

impl Appointment {
    /// Generate a unique appointment ID.
    /// Format: apt-<timestamp_ms>-<random_suffix>
    pub fn generate_id(timestamp_ms: u64) -> String {
        format!("apt-{}-{}", timestamp_ms, random_suffix(4))
    }
}
