//! Domain model for a retouch.
//!
//! A retouch is a follow-up visit to correct or complete prior work. It is
//! rework, not new revenue: it carries no cost and never contributes to
//! income totals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::random_suffix;
use super::status::JobStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Retouch {
    pub id: String,
    /// The appointment being corrected. Must reference an existing
    /// non-cancelled appointment.
    pub appointment_id: String,
    pub worker_id: String,
    pub scheduled_at: DateTime<Utc>,
    pub reason: String,
    pub status: JobStatus,
}

impl Retouch {
    /// Generate a unique retouch ID.
    /// Format: ret-<timestamp_ms>-<random_suffix>
    pub fn generate_id(timestamp_ms: u64) -> String {
        format!("ret-{}-{}", timestamp_ms, random_suffix(4))
    }
}
