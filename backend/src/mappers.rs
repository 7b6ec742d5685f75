//! Conversions from domain models to the `shared` DTOs handed to
//! presentation layers. Timestamps become RFC 3339 strings and calendar
//! dates become `YYYY-MM-DD`, matching what the storage layer parses back.

use crate::domain::models::appointment::{Appointment, PaymentMethod};
use crate::domain::models::expense::{Expense, ExpenseCategory};
use crate::domain::models::retouch::Retouch;
use crate::domain::models::status::JobStatus;
use crate::domain::models::summary::{CategoryTotal, MonthSummary, TimelineEntry, WorkerBalance};
use crate::domain::models::worker::Worker;
use crate::domain::models::worker_payment::WorkerPayment;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn to_dto_status(status: JobStatus) -> shared::JobStatus {
    match status {
        JobStatus::Pending => shared::JobStatus::Pending,
        JobStatus::InProgress => shared::JobStatus::InProgress,
        JobStatus::Completed => shared::JobStatus::Completed,
        JobStatus::Cancelled => shared::JobStatus::Cancelled,
    }
}

pub fn to_dto_payment_method(method: PaymentMethod) -> shared::PaymentMethod {
    match method {
        PaymentMethod::Cash => shared::PaymentMethod::Cash,
        PaymentMethod::Transfer => shared::PaymentMethod::Transfer,
        PaymentMethod::Card => shared::PaymentMethod::Card,
    }
}

pub fn to_dto_category(category: ExpenseCategory) -> shared::ExpenseCategory {
    match category {
        ExpenseCategory::Fuel => shared::ExpenseCategory::Fuel,
        ExpenseCategory::Advertising => shared::ExpenseCategory::Advertising,
        ExpenseCategory::Supplies => shared::ExpenseCategory::Supplies,
        ExpenseCategory::Maintenance => shared::ExpenseCategory::Maintenance,
        ExpenseCategory::Other => shared::ExpenseCategory::Other,
    }
}

pub fn to_dto_worker(worker: Worker) -> shared::Worker {
    shared::Worker {
        id: worker.id,
        name: worker.name,
        phone: worker.phone,
        default_commission_rate: worker.default_commission_rate,
        is_active: worker.is_active,
    }
}

pub fn to_dto_appointment(appointment: Appointment) -> shared::Appointment {
    shared::Appointment {
        id: appointment.id,
        client_name: appointment.client_name,
        worker_id: appointment.worker_id,
        scheduled_at: appointment.scheduled_at.to_rfc3339(),
        duration_minutes: appointment.duration_minutes,
        cost: appointment.cost,
        commission_rate: appointment.commission_rate,
        status: to_dto_status(appointment.status),
        payment_method: appointment.payment_method.map(to_dto_payment_method),
        paid_to_worker: appointment.paid_to_worker,
    }
}

pub fn to_dto_retouch(retouch: Retouch) -> shared::Retouch {
    shared::Retouch {
        id: retouch.id,
        appointment_id: retouch.appointment_id,
        worker_id: retouch.worker_id,
        scheduled_at: retouch.scheduled_at.to_rfc3339(),
        reason: retouch.reason,
        status: to_dto_status(retouch.status),
    }
}

pub fn to_dto_expense(expense: Expense) -> shared::Expense {
    shared::Expense {
        id: expense.id,
        category: to_dto_category(expense.category),
        description: expense.description,
        amount: expense.amount,
        incurred_on: expense.incurred_on.format(DATE_FORMAT).to_string(),
        recorded_by: expense.recorded_by,
    }
}

pub fn to_dto_payment(payment: WorkerPayment) -> shared::WorkerPayment {
    shared::WorkerPayment {
        id: payment.id,
        worker_id: payment.worker_id,
        amount: payment.amount,
        date: payment.date.format(DATE_FORMAT).to_string(),
    }
}

pub fn to_dto_balance(balance: WorkerBalance) -> shared::WorkerBalance {
    shared::WorkerBalance {
        worker_id: balance.worker_id,
        earned: balance.earned,
        paid: balance.paid,
        pending: balance.pending,
    }
}

pub fn to_dto_category_total(total: CategoryTotal) -> shared::CategoryTotal {
    shared::CategoryTotal {
        category: to_dto_category(total.category),
        total: total.total,
    }
}

pub fn to_dto_month_summary(summary: MonthSummary) -> shared::MonthSummary {
    shared::MonthSummary {
        month: summary.month,
        year: summary.year,
        total_income: summary.total_income,
        total_expenses: summary.total_expenses,
        expenses_by_category: summary
            .expenses_by_category
            .into_iter()
            .map(to_dto_category_total)
            .collect(),
        salaries_earned: summary.salaries_earned,
        salaries_paid: summary.salaries_paid,
        salaries_pending: summary.salaries_pending,
        worker_balances: summary
            .worker_balances
            .into_iter()
            .map(to_dto_balance)
            .collect(),
        gross_profit: summary.gross_profit,
        net_profit: summary.net_profit,
        theoretical_profit: summary.theoretical_profit,
    }
}

pub fn to_dto_timeline_entry(entry: TimelineEntry) -> shared::TimelineEntry {
    match entry {
        TimelineEntry::Appointment(a) => shared::TimelineEntry {
            kind: shared::TimelineEntryKind::Appointment,
            id: a.id,
            worker_id: a.worker_id,
            scheduled_at: a.scheduled_at.to_rfc3339(),
            cost: a.cost,
            status: to_dto_status(a.status),
            label: a.client_name,
        },
        TimelineEntry::Retouch(r) => shared::TimelineEntry {
            kind: shared::TimelineEntryKind::Retouch,
            id: r.id,
            worker_id: r.worker_id,
            scheduled_at: r.scheduled_at.to_rfc3339(),
            cost: rust_decimal::Decimal::ZERO,
            status: to_dto_status(r.status),
            label: r.reason,
        },
    }
}
