use chrono::{DateTime, Utc};

use crate::domain::models::retouch::Retouch;
use crate::domain::models::status::JobStatus;

#[derive(Debug, Clone)]
pub struct CreateRetouchCommand {
    /// Appointment this retouch corrects.
    pub appointment_id: String,
    /// Worker performing the retouch. Defaults to the parent appointment's
    /// worker when absent.
    pub worker_id: Option<String>,
    pub scheduled_at: DateTime<Utc>,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct CreateRetouchResult {
    pub retouch: Retouch,
}

#[derive(Debug, Clone)]
pub struct UpdateRetouchStatusCommand {
    pub retouch_id: String,
    pub new_status: JobStatus,
}

#[derive(Debug, Clone)]
pub struct UpdateRetouchStatusResult {
    pub retouch: Retouch,
}
