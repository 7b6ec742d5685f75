//! Derived reporting models.
//!
//! Everything in this file is a view computed on demand from the ledger.
//! None of it is stored, and none of it is a source of truth.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::appointment::Appointment;
use super::expense::ExpenseCategory;
use super::retouch::Retouch;
use super::status::JobStatus;

/// Per-worker commission balance. In the cumulative as-of-date form,
/// earned = paid + pending. In the period-scoped form earned and paid are
/// that month's flows while pending is still the cumulative outstanding
/// balance at month end, so pending is never negative after any sequence
/// of valid payment registrations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerBalance {
    pub worker_id: String,
    pub earned: Decimal,
    pub paid: Decimal,
    pub pending: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSummary {
    pub month: u32,
    pub year: i32,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub expenses_by_category: Vec<CategoryTotal>,
    pub salaries_earned: Decimal,
    pub salaries_paid: Decimal,
    pub salaries_pending: Decimal,
    pub worker_balances: Vec<WorkerBalance>,
    /// income - salaries paid
    pub gross_profit: Decimal,
    /// income - salaries paid - expenses
    pub net_profit: Decimal,
    /// income - salaries earned, ignoring payment timing
    pub theoretical_profit: Decimal,
}

impl MonthSummary {
    /// All-zero summary for a month with no activity. A quiet month is a
    /// valid result, not an error.
    pub fn empty(month: u32, year: i32) -> Self {
        MonthSummary {
            month,
            year,
            total_income: Decimal::ZERO,
            total_expenses: Decimal::ZERO,
            expenses_by_category: Vec::new(),
            salaries_earned: Decimal::ZERO,
            salaries_paid: Decimal::ZERO,
            salaries_pending: Decimal::ZERO,
            worker_balances: Vec::new(),
            gross_profit: Decimal::ZERO,
            net_profit: Decimal::ZERO,
            theoretical_profit: Decimal::ZERO,
        }
    }
}

/// One entry of the combined appointments + retouches timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TimelineEntry {
    Appointment(Appointment),
    Retouch(Retouch),
}

impl TimelineEntry {
    pub fn scheduled_at(&self) -> DateTime<Utc> {
        match self {
            TimelineEntry::Appointment(a) => a.scheduled_at,
            TimelineEntry::Retouch(r) => r.scheduled_at,
        }
    }

    pub fn status(&self) -> JobStatus {
        match self {
            TimelineEntry::Appointment(a) => a.status,
            TimelineEntry::Retouch(r) => r.status,
        }
    }

    /// Revenue this entry generates. Retouches are rework and always
    /// contribute zero.
    pub fn cost(&self) -> Decimal {
        match self {
            TimelineEntry::Appointment(a) => a.cost,
            TimelineEntry::Retouch(_) => Decimal::ZERO,
        }
    }
}
