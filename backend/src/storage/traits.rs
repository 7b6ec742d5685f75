//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer. The
//! accounting core never holds global state of its own; everything goes
//! through these interfaces.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::models::appointment::Appointment as DomainAppointment;
use crate::domain::models::expense::Expense as DomainExpense;
use crate::domain::models::retouch::Retouch as DomainRetouch;
use crate::domain::models::worker::Worker as DomainWorker;
use crate::domain::models::worker_payment::WorkerPayment as DomainWorkerPayment;

/// Trait defining the interface for worker storage operations
pub trait WorkerStorage: Send + Sync {
    /// Store a new worker
    fn store_worker(&self, worker: &DomainWorker) -> Result<()>;

    /// Retrieve a specific worker by ID
    fn get_worker(&self, worker_id: &str) -> Result<Option<DomainWorker>>;

    /// List all workers ordered by name
    fn list_workers(&self) -> Result<Vec<DomainWorker>>;

    /// Update an existing worker
    fn update_worker(&self, worker: &DomainWorker) -> Result<()>;
}

/// Trait defining the interface for appointment storage operations
pub trait AppointmentStorage: Send + Sync {
    /// Store a new appointment
    fn store_appointment(&self, appointment: &DomainAppointment) -> Result<()>;

    /// Retrieve a specific appointment by ID
    fn get_appointment(&self, appointment_id: &str) -> Result<Option<DomainAppointment>>;

    /// Update an existing appointment (status transitions and the
    /// paid-to-worker flag; cost and commission rate never change)
    fn update_appointment(&self, appointment: &DomainAppointment) -> Result<()>;

    /// List appointments scheduled within [start, end), chronological order
    fn list_appointments_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<DomainAppointment>>;

    /// List every appointment assigned to a worker, chronological order
    fn list_appointments_for_worker(&self, worker_id: &str) -> Result<Vec<DomainAppointment>>;
}

/// Trait defining the interface for retouch storage operations
pub trait RetouchStorage: Send + Sync {
    /// Store a new retouch
    fn store_retouch(&self, retouch: &DomainRetouch) -> Result<()>;

    /// Retrieve a specific retouch by ID
    fn get_retouch(&self, retouch_id: &str) -> Result<Option<DomainRetouch>>;

    /// Update an existing retouch (status transitions only)
    fn update_retouch(&self, retouch: &DomainRetouch) -> Result<()>;

    /// List retouches scheduled within [start, end), chronological order
    fn list_retouches_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<DomainRetouch>>;
}

/// Trait defining the interface for expense storage operations
///
/// Expenses are append-only apart from explicit deletion; there is no
/// update operation on purpose.
pub trait ExpenseStorage: Send + Sync {
    /// Store a new expense
    fn store_expense(&self, expense: &DomainExpense) -> Result<()>;

    /// Retrieve a specific expense by ID
    fn get_expense(&self, expense_id: &str) -> Result<Option<DomainExpense>>;

    /// Delete a single expense
    /// Returns true if the expense was found and deleted, false otherwise
    fn delete_expense(&self, expense_id: &str) -> Result<bool>;

    /// List expenses incurred within [start, end_exclusive), by date ascending
    fn list_expenses_in_range(
        &self,
        start: NaiveDate,
        end_exclusive: NaiveDate,
    ) -> Result<Vec<DomainExpense>>;
}

/// Trait defining the interface for worker payment storage operations
///
/// Strictly append-only: payments are a financial audit trail and are never
/// edited or deleted.
pub trait PaymentStorage: Send + Sync {
    /// Append a new payment record
    fn append_payment(&self, payment: &DomainWorkerPayment) -> Result<()>;

    /// List all payments for a worker, by date ascending
    fn list_payments_for_worker(&self, worker_id: &str) -> Result<Vec<DomainWorkerPayment>>;

    /// List payments across all workers recorded within [start, end_exclusive)
    fn list_payments_in_range(
        &self,
        start: NaiveDate,
        end_exclusive: NaiveDate,
    ) -> Result<Vec<DomainWorkerPayment>>;
}

/// Trait defining the interface for storage connections
///
/// This trait abstracts away the specific connection type (database, CSV,
/// etc.) and provides factory methods for creating repositories, so the
/// domain services can work with any storage backend without knowing the
/// implementation details.
pub trait Connection: Send + Sync + Clone {
    type WorkerRepository: WorkerStorage + Clone;
    type AppointmentRepository: AppointmentStorage + Clone;
    type RetouchRepository: RetouchStorage + Clone;
    type ExpenseRepository: ExpenseStorage + Clone;
    type PaymentRepository: PaymentStorage + Clone;

    fn create_worker_repository(&self) -> Self::WorkerRepository;
    fn create_appointment_repository(&self) -> Self::AppointmentRepository;
    fn create_retouch_repository(&self) -> Self::RetouchRepository;
    fn create_expense_repository(&self) -> Self::ExpenseRepository;
    fn create_payment_repository(&self) -> Self::PaymentRepository;
}
