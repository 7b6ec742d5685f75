//! Worker payment registration against the pending-balance ledger.
//!
//! The invariant this service protects: for every worker, at every point in
//! history, `paid <= earned`. A payment is checked against the outstanding
//! balance and appended in one serialized step per worker, so two
//! concurrent partial payments cannot together overdraw what is owed.

use log::info;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::commands::payments::{
    QuickAmountsQuery, RegisterPaymentCommand, RegisterPaymentResult,
};
use crate::domain::commission::{commission_for, round_to_minor_unit};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::models::now_millis;
use crate::domain::models::status::JobStatus;
use crate::domain::models::summary::WorkerBalance;
use crate::domain::models::worker_payment::WorkerPayment as DomainWorkerPayment;
use crate::storage::traits::{AppointmentStorage, Connection, PaymentStorage, WorkerStorage};
use chrono::NaiveDate;
use shared::QuickAmounts;

#[derive(Clone)]
pub struct PaymentService<C: Connection> {
    payment_repository: C::PaymentRepository,
    appointment_repository: C::AppointmentRepository,
    worker_repository: C::WorkerRepository,
    /// One lock per worker, serializing the check-then-append sequence.
    worker_locks: Arc<Mutex<HashMap<String, Arc<Mutex<()>>>>>,
}

impl<C: Connection> PaymentService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        Self {
            payment_repository: connection.create_payment_repository(),
            appointment_repository: connection.create_appointment_repository(),
            worker_repository: connection.create_worker_repository(),
            worker_locks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn lock_for_worker(&self, worker_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.worker_locks.lock().unwrap();
        locks
            .entry(worker_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Cumulative balance for a worker as of a date: commission earned from
    /// completed appointments scheduled up to and including `date`, minus
    /// payments registered up to and including `date`.
    ///
    /// A reporting view. The overpayment check does not use this: it counts
    /// every recorded payment regardless of date, see
    /// [`register_payment`](Self::register_payment).
    pub fn balance_as_of(&self, worker_id: &str, date: NaiveDate) -> DomainResult<WorkerBalance> {
        self.worker_repository
            .get_worker(worker_id)?
            .ok_or_else(|| DomainError::not_found("worker", worker_id))?;

        let mut earned = Decimal::ZERO;
        for appointment in self.appointment_repository.list_appointments_for_worker(worker_id)? {
            if appointment.status == JobStatus::Completed
                && appointment.scheduled_at.date_naive() <= date
            {
                earned += commission_for(&appointment)?;
            }
        }

        let paid: Decimal = self
            .payment_repository
            .list_payments_for_worker(worker_id)?
            .iter()
            .filter(|p| p.date <= date)
            .map(|p| p.amount)
            .sum();

        Ok(WorkerBalance {
            worker_id: worker_id.to_string(),
            earned,
            paid,
            pending: earned - paid,
        })
    }

    /// Amount still payable to a worker for a payment dated `date`:
    /// commission earned up to and including `date`, minus every payment
    /// already recorded regardless of its date. Counting all recorded
    /// payments keeps a backdated payment from overdrawing money that was
    /// already disbursed under a later date.
    fn available_for_payment(&self, worker_id: &str, date: NaiveDate) -> DomainResult<Decimal> {
        self.worker_repository
            .get_worker(worker_id)?
            .ok_or_else(|| DomainError::not_found("worker", worker_id))?;

        let mut earned = Decimal::ZERO;
        for appointment in self.appointment_repository.list_appointments_for_worker(worker_id)? {
            if appointment.status == JobStatus::Completed
                && appointment.scheduled_at.date_naive() <= date
            {
                earned += commission_for(&appointment)?;
            }
        }

        let paid: Decimal = self
            .payment_repository
            .list_payments_for_worker(worker_id)?
            .iter()
            .map(|p| p.amount)
            .sum();

        Ok(earned - paid)
    }

    /// Register a payment to a worker.
    ///
    /// Rejects non-positive amounts and anything above what is still
    /// payable for the payment date. On success the payment is appended
    /// to the ledger (never mutating prior records) and the new pending
    /// balance is returned.
    pub fn register_payment(
        &self,
        command: RegisterPaymentCommand,
    ) -> DomainResult<RegisterPaymentResult> {
        if command.amount <= Decimal::ZERO {
            return Err(DomainError::validation(format!(
                "Payment amount must be positive, got {}",
                command.amount
            )));
        }

        // Serialize the balance check and the append per worker; overlapping
        // registrations for different workers proceed independently.
        let lock = self.lock_for_worker(&command.worker_id);
        let _guard = lock.lock().unwrap();

        let pending = self.available_for_payment(&command.worker_id, command.date)?;
        if command.amount > pending {
            return Err(DomainError::Overpayment {
                worker_id: command.worker_id,
                amount: command.amount,
                pending,
            });
        }

        let payment = DomainWorkerPayment {
            id: DomainWorkerPayment::generate_id(now_millis()),
            worker_id: command.worker_id,
            amount: command.amount,
            date: command.date,
        };
        self.payment_repository.append_payment(&payment)?;

        let pending_after = pending - payment.amount;
        info!(
            "💰 Registered payment {} of {} to worker {} (pending now {})",
            payment.id, payment.amount, payment.worker_id, pending_after
        );

        Ok(RegisterPaymentResult {
            payment,
            pending_after,
        })
    }

    /// Suggested 25/50/75/100% amounts computed from the same pending
    /// balance read the overpayment check uses. Presentation convenience
    /// only; registering one of these still goes through `register_payment`.
    pub fn quick_amounts(&self, query: QuickAmountsQuery) -> DomainResult<QuickAmounts> {
        let pending = self.available_for_payment(&query.worker_id, query.date)?;

        let fraction = |numerator: u32| -> Decimal {
            round_to_minor_unit(pending * Decimal::from(numerator) / Decimal::from(4))
        };

        Ok(QuickAmounts {
            pending,
            quarter: fraction(1),
            half: fraction(2),
            three_quarters: fraction(3),
            full: pending,
        })
    }
}
