//! # Tapiz Tracker Backend
//!
//! Synchronous accounting core for the scheduling app: appointments,
//! retouches, expenses, worker commissions and payments, plus monthly
//! summaries. Storage is CSV-file based; every service goes through the
//! [`Connection`] abstraction so the backend owns no global state.
//!
//! [`Connection`]: storage::traits::Connection

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

pub mod domain;
pub mod mappers;
pub mod storage;

pub use storage::csv::CsvConnection;

use domain::commands::payments::{QuickAmountsQuery, RegisterPaymentCommand};
use domain::commands::reports::{
    ExpenseBreakdownQuery, MonthSummaryQuery, TimelineQuery, WorkerBalanceQuery,
};
use domain::error::DomainResult;
use rust_decimal::Decimal;

/// Main backend struct that orchestrates all services
pub struct Backend {
    pub worker_service: domain::WorkerService<CsvConnection>,
    pub appointment_service: domain::AppointmentService<CsvConnection>,
    pub expense_service: domain::ExpenseService<CsvConnection>,
    pub payment_service: domain::PaymentService<CsvConnection>,
    pub summary_service: domain::SummaryService<CsvConnection>,
}

impl Backend {
    /// Create a backend storing its CSV files under the given directory.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let connection = Arc::new(CsvConnection::new(base_directory)?);

        Ok(Backend {
            worker_service: domain::WorkerService::new(connection.clone()),
            appointment_service: domain::AppointmentService::new(connection.clone()),
            expense_service: domain::ExpenseService::new(connection.clone()),
            payment_service: domain::PaymentService::new(connection.clone()),
            summary_service: domain::SummaryService::new(connection),
        })
    }

    /// Create a backend using the default data directory under the user's
    /// Documents folder.
    pub fn new_default() -> Result<Self> {
        let connection = Arc::new(CsvConnection::new_default()?);

        Ok(Backend {
            worker_service: domain::WorkerService::new(connection.clone()),
            appointment_service: domain::AppointmentService::new(connection.clone()),
            expense_service: domain::ExpenseService::new(connection.clone()),
            payment_service: domain::PaymentService::new(connection.clone()),
            summary_service: domain::SummaryService::new(connection),
        })
    }

    /// Monthly financial summary as a presentation DTO.
    pub fn get_month_summary(&self, month: u32, year: i32) -> DomainResult<shared::MonthSummary> {
        let result = self
            .summary_service
            .get_month_summary(MonthSummaryQuery { month, year })?;
        Ok(mappers::to_dto_month_summary(result.summary))
    }

    /// Period-scoped commission balance for one worker.
    pub fn get_worker_balance(
        &self,
        worker_id: &str,
        month: u32,
        year: i32,
    ) -> DomainResult<shared::WorkerBalance> {
        let result = self.summary_service.get_worker_balance(WorkerBalanceQuery {
            worker_id: worker_id.to_string(),
            month,
            year,
        })?;
        Ok(mappers::to_dto_balance(result.balance))
    }

    /// Register a payment to a worker against their pending balance.
    pub fn register_payment(
        &self,
        worker_id: &str,
        amount: Decimal,
        date: chrono::NaiveDate,
    ) -> DomainResult<shared::RegisteredPayment> {
        let result = self.payment_service.register_payment(RegisterPaymentCommand {
            worker_id: worker_id.to_string(),
            amount,
            date,
        })?;
        Ok(shared::RegisteredPayment {
            payment: mappers::to_dto_payment(result.payment),
            pending_after: result.pending_after,
        })
    }

    /// Suggested 25/50/75/100% payment amounts for a worker's balance.
    pub fn get_quick_amounts(
        &self,
        worker_id: &str,
        date: chrono::NaiveDate,
    ) -> DomainResult<shared::QuickAmounts> {
        self.payment_service.quick_amounts(QuickAmountsQuery {
            worker_id: worker_id.to_string(),
            date,
        })
    }

    /// Per-category expense totals for a month.
    pub fn list_expenses_by_category(
        &self,
        month: u32,
        year: i32,
    ) -> DomainResult<Vec<shared::CategoryTotal>> {
        let result = self
            .summary_service
            .expense_breakdown(ExpenseBreakdownQuery { month, year })?;
        Ok(result
            .totals
            .into_iter()
            .map(mappers::to_dto_category_total)
            .collect())
    }

    /// Appointments and retouches of a month merged into one chronological
    /// list, retouches tagged distinctly and carrying zero cost.
    pub fn list_timeline(&self, month: u32, year: i32) -> DomainResult<Vec<shared::TimelineEntry>> {
        let result = self
            .summary_service
            .list_timeline(TimelineQuery { month, year })?;
        Ok(result
            .entries
            .into_iter()
            .map(mappers::to_dto_timeline_entry)
            .collect())
    }
}
