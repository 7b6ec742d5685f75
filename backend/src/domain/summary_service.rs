//! Monthly aggregation over the ledger.
//!
//! Every figure here is recomputed from stored records on each call. The
//! summary is a view, never a stored document, so late status changes or
//! newly registered payments are always reflected.

use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::commands::reports::{
    ExpenseBreakdownQuery, ExpenseBreakdownResult, MonthSummaryQuery, MonthSummaryResult,
    TimelineQuery, TimelineResult, WorkerBalanceQuery, WorkerBalanceResult,
};
use crate::domain::commission::commission_for;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::expense_service::ExpenseService;
use crate::domain::models::status::JobStatus;
use crate::domain::models::summary::{MonthSummary, TimelineEntry, WorkerBalance};
use crate::domain::period::Period;
use crate::storage::traits::{
    AppointmentStorage, Connection, ExpenseStorage, PaymentStorage, RetouchStorage, WorkerStorage,
};
use chrono::NaiveDate;

#[derive(Clone)]
pub struct SummaryService<C: Connection> {
    appointment_repository: C::AppointmentRepository,
    retouch_repository: C::RetouchRepository,
    expense_repository: C::ExpenseRepository,
    payment_repository: C::PaymentRepository,
    worker_repository: C::WorkerRepository,
    expense_service: ExpenseService<C>,
}

/// In-period flows for one worker, accumulated while walking the month's
/// records. Pending is resolved separately because it is cumulative.
#[derive(Default)]
struct WorkerFlows {
    earned: Decimal,
    paid: Decimal,
}

impl<C: Connection> SummaryService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        Self {
            appointment_repository: connection.create_appointment_repository(),
            retouch_repository: connection.create_retouch_repository(),
            expense_repository: connection.create_expense_repository(),
            payment_repository: connection.create_payment_repository(),
            worker_repository: connection.create_worker_repository(),
            expense_service: ExpenseService::new(connection),
        }
    }

    /// Full financial summary for a calendar month.
    ///
    /// Income counts completed appointments scheduled in the month at full
    /// cost. Retouches never contribute income. Salaries earned are the
    /// commissions of those same completed appointments; salaries paid are
    /// the payments recorded in the month regardless of when the underlying
    /// work happened. A month with no activity yields an all-zero summary.
    pub fn get_month_summary(&self, query: MonthSummaryQuery) -> DomainResult<MonthSummaryResult> {
        let period = Period::new(query.month, query.year)?;

        let appointments = self
            .appointment_repository
            .list_appointments_in_range(period.start(), period.end())?;
        let payments = self
            .payment_repository
            .list_payments_in_range(period.start_date(), period.end_date())?;
        let expenses = self
            .expense_repository
            .list_expenses_in_range(period.start_date(), period.end_date())?;

        let mut total_income = Decimal::ZERO;
        let mut flows: BTreeMap<String, WorkerFlows> = BTreeMap::new();

        for appointment in &appointments {
            if appointment.status != JobStatus::Completed {
                continue;
            }
            total_income += appointment.cost;
            flows
                .entry(appointment.worker_id.clone())
                .or_default()
                .earned += commission_for(appointment)?;
        }
        for payment in &payments {
            flows.entry(payment.worker_id.clone()).or_default().paid += payment.amount;
        }

        // Pending is cumulative: whatever is still owed at month end, not
        // just this month's earned-minus-paid. Every worker is checked, so
        // debt carried from earlier months shows up even in a month where
        // the worker had no appointments or payments.
        let as_of = period.end_date().pred_opt().unwrap_or(period.start_date());
        let mut worker_balances = Vec::new();
        for worker in self.worker_repository.list_workers()? {
            let flow = flows.remove(&worker.id).unwrap_or_default();
            let pending = self.cumulative_pending(&worker.id, as_of)?;
            if flow.earned.is_zero() && flow.paid.is_zero() && pending.is_zero() {
                continue;
            }
            worker_balances.push(WorkerBalance {
                worker_id: worker.id,
                earned: flow.earned,
                paid: flow.paid,
                pending,
            });
        }
        // Records referencing a worker missing from the workers ledger
        // still count rather than silently vanishing.
        for (worker_id, flow) in flows {
            let pending = self.cumulative_pending(&worker_id, as_of)?;
            worker_balances.push(WorkerBalance {
                worker_id,
                earned: flow.earned,
                paid: flow.paid,
                pending,
            });
        }

        if total_income.is_zero()
            && worker_balances.is_empty()
            && payments.is_empty()
            && expenses.is_empty()
            && appointments.is_empty()
        {
            return Ok(MonthSummaryResult {
                summary: MonthSummary::empty(query.month, query.year),
            });
        }

        let salaries_earned: Decimal = worker_balances.iter().map(|b| b.earned).sum();
        let salaries_paid: Decimal = worker_balances.iter().map(|b| b.paid).sum();
        let salaries_pending: Decimal = worker_balances.iter().map(|b| b.pending).sum();

        let total_expenses: Decimal = expenses.iter().map(|e| e.amount).sum();
        let expenses_by_category = self
            .expense_service
            .breakdown_by_category(query.month, query.year)?;

        let gross_profit = total_income - salaries_paid;
        Ok(MonthSummaryResult {
            summary: MonthSummary {
                month: query.month,
                year: query.year,
                total_income,
                total_expenses,
                expenses_by_category,
                salaries_earned,
                salaries_paid,
                salaries_pending,
                worker_balances,
                gross_profit,
                net_profit: gross_profit - total_expenses,
                theoretical_profit: total_income - salaries_earned,
            },
        })
    }

    /// Period-scoped balance: commissions earned and payments received in
    /// the given month, plus the cumulative pending balance at month end.
    pub fn get_worker_balance(&self, query: WorkerBalanceQuery) -> DomainResult<WorkerBalanceResult> {
        let period = Period::new(query.month, query.year)?;
        self.worker_repository
            .get_worker(&query.worker_id)?
            .ok_or_else(|| DomainError::not_found("worker", query.worker_id.clone()))?;

        let mut earned = Decimal::ZERO;
        for appointment in self
            .appointment_repository
            .list_appointments_for_worker(&query.worker_id)?
        {
            if appointment.status == JobStatus::Completed && period.contains(appointment.scheduled_at)
            {
                earned += commission_for(&appointment)?;
            }
        }

        let paid: Decimal = self
            .payment_repository
            .list_payments_for_worker(&query.worker_id)?
            .iter()
            .filter(|p| period.contains_date(p.date))
            .map(|p| p.amount)
            .sum();

        let as_of = period.end_date().pred_opt().unwrap_or(period.start_date());
        let pending = self.cumulative_pending(&query.worker_id, as_of)?;

        Ok(WorkerBalanceResult {
            balance: WorkerBalance {
                worker_id: query.worker_id,
                earned,
                paid,
                pending,
            },
        })
    }

    /// Per-category expense totals for a month.
    pub fn expense_breakdown(
        &self,
        query: ExpenseBreakdownQuery,
    ) -> DomainResult<ExpenseBreakdownResult> {
        let totals = self
            .expense_service
            .breakdown_by_category(query.month, query.year)?;
        Ok(ExpenseBreakdownResult { totals })
    }

    /// Appointments and retouches of a month merged into one list, sorted
    /// by scheduled time ascending.
    pub fn list_timeline(&self, query: TimelineQuery) -> DomainResult<TimelineResult> {
        let period = Period::new(query.month, query.year)?;

        let mut entries: Vec<TimelineEntry> = self
            .appointment_repository
            .list_appointments_in_range(period.start(), period.end())?
            .into_iter()
            .map(TimelineEntry::Appointment)
            .collect();
        entries.extend(
            self.retouch_repository
                .list_retouches_in_range(period.start(), period.end())?
                .into_iter()
                .map(TimelineEntry::Retouch),
        );
        entries.sort_by_key(|entry| entry.scheduled_at());

        Ok(TimelineResult { entries })
    }

    fn cumulative_pending(&self, worker_id: &str, as_of: NaiveDate) -> DomainResult<Decimal> {
        let mut earned = Decimal::ZERO;
        for appointment in self.appointment_repository.list_appointments_for_worker(worker_id)? {
            if appointment.status == JobStatus::Completed
                && appointment.scheduled_at.date_naive() <= as_of
            {
                earned += commission_for(&appointment)?;
            }
        }
        let paid: Decimal = self
            .payment_repository
            .list_payments_for_worker(worker_id)?
            .iter()
            .filter(|p| p.date <= as_of)
            .map(|p| p.amount)
            .sum();
        Ok(earned - paid)
    }
}
