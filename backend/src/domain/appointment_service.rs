//! Appointment and retouch lifecycle logic.
//!
//! This service owns the schedule side of the ledger: creating jobs,
//! moving them through their status lifecycle, and flagging completed jobs
//! as settled with the worker. Financial aggregation lives elsewhere; the
//! rules enforced here are what make that aggregation trustworthy.

use log::info;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::domain::commands::appointments::{
    CreateAppointmentCommand, CreateAppointmentResult, MarkPaidToWorkerCommand,
    MarkPaidToWorkerResult, UpdateAppointmentStatusCommand, UpdateAppointmentStatusResult,
};
use crate::domain::commands::retouches::{
    CreateRetouchCommand, CreateRetouchResult, UpdateRetouchStatusCommand,
    UpdateRetouchStatusResult,
};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::models::appointment::Appointment as DomainAppointment;
use crate::domain::models::now_millis;
use crate::domain::models::retouch::Retouch as DomainRetouch;
use crate::domain::models::status::JobStatus;
use crate::domain::worker_service::validate_rate;
use crate::storage::traits::{AppointmentStorage, Connection, RetouchStorage, WorkerStorage};

#[derive(Clone)]
pub struct AppointmentService<C: Connection> {
    appointment_repository: C::AppointmentRepository,
    retouch_repository: C::RetouchRepository,
    worker_repository: C::WorkerRepository,
}

impl<C: Connection> AppointmentService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        Self {
            appointment_repository: connection.create_appointment_repository(),
            retouch_repository: connection.create_retouch_repository(),
            worker_repository: connection.create_worker_repository(),
        }
    }

    /// Create a new appointment.
    ///
    /// The commission rate is snapshotted here, once. When the command does
    /// not carry an explicit rate, the worker's current default is copied
    /// onto the appointment; after this point the worker record is never
    /// consulted again for this job.
    pub fn create_appointment(
        &self,
        command: CreateAppointmentCommand,
    ) -> DomainResult<CreateAppointmentResult> {
        if command.client_name.trim().is_empty() {
            return Err(DomainError::validation("Client name cannot be empty"));
        }
        if command.cost < Decimal::ZERO {
            return Err(DomainError::validation(format!(
                "Appointment cost cannot be negative, got {}",
                command.cost
            )));
        }

        let worker = self
            .worker_repository
            .get_worker(&command.worker_id)?
            .ok_or_else(|| DomainError::not_found("worker", command.worker_id.clone()))?;

        let commission_rate = match command.commission_rate {
            Some(rate) => {
                validate_rate(rate)?;
                rate
            }
            None => worker.default_commission_rate,
        };

        let appointment = DomainAppointment {
            id: DomainAppointment::generate_id(now_millis()),
            client_name: command.client_name.trim().to_string(),
            worker_id: worker.id,
            scheduled_at: command.scheduled_at,
            duration_minutes: command.duration_minutes,
            cost: command.cost,
            commission_rate,
            status: JobStatus::Pending,
            payment_method: command.payment_method,
            paid_to_worker: false,
        };

        self.appointment_repository.store_appointment(&appointment)?;
        info!(
            "Created appointment {} for worker {} at rate {}%",
            appointment.id, appointment.worker_id, appointment.commission_rate
        );

        Ok(CreateAppointmentResult { appointment })
    }

    pub fn get_appointment(&self, appointment_id: &str) -> DomainResult<DomainAppointment> {
        self.appointment_repository
            .get_appointment(appointment_id)?
            .ok_or_else(|| DomainError::not_found("appointment", appointment_id))
    }

    /// Move an appointment through its lifecycle. Completed and cancelled
    /// are terminal; everything else follows `JobStatus::can_transition_to`.
    pub fn update_status(
        &self,
        command: UpdateAppointmentStatusCommand,
    ) -> DomainResult<UpdateAppointmentStatusResult> {
        let mut appointment = self.get_appointment(&command.appointment_id)?;

        if !appointment.status.can_transition_to(command.new_status) {
            return Err(DomainError::InvalidTransition {
                from: appointment.status,
                to: command.new_status,
            });
        }

        info!(
            "Appointment {} transitioning {:?} -> {:?}",
            appointment.id, appointment.status, command.new_status
        );
        appointment.status = command.new_status;
        self.appointment_repository.update_appointment(&appointment)?;

        Ok(UpdateAppointmentStatusResult { appointment })
    }

    /// Flag a completed appointment's commission as settled with the worker.
    pub fn mark_paid_to_worker(
        &self,
        command: MarkPaidToWorkerCommand,
    ) -> DomainResult<MarkPaidToWorkerResult> {
        let mut appointment = self.get_appointment(&command.appointment_id)?;

        if appointment.status != JobStatus::Completed {
            return Err(DomainError::InvalidState {
                entity: "appointment",
                id: appointment.id.clone(),
                actual: appointment.status,
                required: JobStatus::Completed,
            });
        }

        appointment.paid_to_worker = true;
        self.appointment_repository.update_appointment(&appointment)?;

        Ok(MarkPaidToWorkerResult { appointment })
    }

    /// Create a retouch against an existing appointment.
    ///
    /// The parent must exist and must not be cancelled: there is nothing to
    /// rework on a job that never happened.
    pub fn create_retouch(&self, command: CreateRetouchCommand) -> DomainResult<CreateRetouchResult> {
        if command.reason.trim().is_empty() {
            return Err(DomainError::validation("Retouch reason cannot be empty"));
        }

        let parent = self.get_appointment(&command.appointment_id)?;
        if parent.status == JobStatus::Cancelled {
            return Err(DomainError::InvalidState {
                entity: "appointment",
                id: parent.id.clone(),
                actual: parent.status,
                required: JobStatus::Completed,
            });
        }

        let worker_id = match command.worker_id {
            Some(worker_id) => {
                self.worker_repository
                    .get_worker(&worker_id)?
                    .ok_or_else(|| DomainError::not_found("worker", worker_id.clone()))?;
                worker_id
            }
            None => parent.worker_id.clone(),
        };

        let retouch = DomainRetouch {
            id: DomainRetouch::generate_id(now_millis()),
            appointment_id: parent.id,
            worker_id,
            scheduled_at: command.scheduled_at,
            reason: command.reason.trim().to_string(),
            status: JobStatus::Pending,
        };

        self.retouch_repository.store_retouch(&retouch)?;
        info!("Created retouch {} for appointment {}", retouch.id, retouch.appointment_id);

        Ok(CreateRetouchResult { retouch })
    }

    /// Retouches follow the same lifecycle rules as appointments.
    pub fn update_retouch_status(
        &self,
        command: UpdateRetouchStatusCommand,
    ) -> DomainResult<UpdateRetouchStatusResult> {
        let mut retouch = self
            .retouch_repository
            .get_retouch(&command.retouch_id)?
            .ok_or_else(|| DomainError::not_found("retouch", command.retouch_id.clone()))?;

        if !retouch.status.can_transition_to(command.new_status) {
            return Err(DomainError::InvalidTransition {
                from: retouch.status,
                to: command.new_status,
            });
        }

        retouch.status = command.new_status;
        self.retouch_repository.update_retouch(&retouch)?;

        Ok(UpdateRetouchStatusResult { retouch })
    }
}
