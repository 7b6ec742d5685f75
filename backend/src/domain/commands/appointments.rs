use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::models::appointment::{Appointment, PaymentMethod};
use crate::domain::models::status::JobStatus;

#[derive(Debug, Clone)]
pub struct CreateAppointmentCommand {
    pub client_name: String,
    pub worker_id: String,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: u32,
    pub cost: Decimal,
    /// Commission rate in percent. When absent, the worker's current default
    /// rate is snapshotted onto the appointment.
    pub commission_rate: Option<Decimal>,
    pub payment_method: Option<PaymentMethod>,
}

#[derive(Debug, Clone)]
pub struct CreateAppointmentResult {
    pub appointment: Appointment,
}

#[derive(Debug, Clone)]
pub struct UpdateAppointmentStatusCommand {
    pub appointment_id: String,
    pub new_status: JobStatus,
}

#[derive(Debug, Clone)]
pub struct UpdateAppointmentStatusResult {
    pub appointment: Appointment,
}

#[derive(Debug, Clone)]
pub struct MarkPaidToWorkerCommand {
    pub appointment_id: String,
}

#[derive(Debug, Clone)]
pub struct MarkPaidToWorkerResult {
    pub appointment: Appointment,
}
