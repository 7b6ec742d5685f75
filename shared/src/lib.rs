use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Worker profile as presented to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    pub id: String,
    pub name: String,
    pub phone: String,
    /// Default commission rate in percent (0-100). Only a template: the rate
    /// that actually applies to a job is snapshotted onto the appointment.
    pub default_commission_rate: Decimal,
    pub is_active: bool,
}

/// Lifecycle status shared by appointments and retouches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

/// How the client paid for an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    Transfer,
    Card,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub client_name: String,
    pub worker_id: String,
    /// Scheduled timestamp (RFC 3339)
    pub scheduled_at: String,
    pub duration_minutes: u32,
    /// Price charged to the client
    pub cost: Decimal,
    /// Commission rate in percent captured at creation time
    pub commission_rate: Decimal,
    pub status: JobStatus,
    pub payment_method: Option<PaymentMethod>,
    /// Whether the worker's commission for this job was settled
    pub paid_to_worker: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Retouch {
    pub id: String,
    /// Appointment this retouch corrects
    pub appointment_id: String,
    pub worker_id: String,
    /// Scheduled timestamp (RFC 3339)
    pub scheduled_at: String,
    pub reason: String,
    pub status: JobStatus,
}

/// Expense category for grouping in the monthly breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Fuel,
    Advertising,
    Supplies,
    Maintenance,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub category: ExpenseCategory,
    pub description: String,
    pub amount: Decimal,
    /// Date the expense was incurred (YYYY-MM-DD)
    pub incurred_on: String,
    pub recorded_by: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerPayment {
    pub id: String,
    pub worker_id: String,
    pub amount: Decimal,
    /// Date the payment was registered (YYYY-MM-DD)
    pub date: String,
}

/// Per-worker commission balance for a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerBalance {
    pub worker_id: String,
    /// Commission accrued from completed appointments
    pub earned: Decimal,
    /// Amount actually disbursed via registered payments
    pub paid: Decimal,
    /// earned - paid; what is still owed
    pub pending: Decimal,
}

/// One row of the per-category expense breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub total: Decimal,
}

/// Monthly financial summary. Derived on demand, never authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSummary {
    pub month: u32,
    pub year: i32,
    /// Revenue from completed appointments scheduled in the month
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub expenses_by_category: Vec<CategoryTotal>,
    /// Commission accrued by all workers in the month
    pub salaries_earned: Decimal,
    /// Payments registered during the month. Payments attribute to the month
    /// they were made in, not the month the commission was earned in, so
    /// "paid" and "earned" can legitimately disagree.
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

/// Kind tag so the UI can render retouches distinctly from revenue jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimelineEntryKind {
    Appointment,
    Retouch,
}

/// One entry of the combined appointments + retouches timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub kind: TimelineEntryKind,
    pub id: String,
    pub worker_id: String,
    /// Scheduled timestamp (RFC 3339)
    pub scheduled_at: String,
    /// Revenue this entry generates; always zero for retouches
    pub cost: Decimal,
    pub status: JobStatus,
    /// Client name for appointments, retouch reason for retouches
    pub label: String,
}

/// Outcome of registering a payment: the stored record plus the balance
/// still owed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisteredPayment {
    pub payment: WorkerPayment,
    pub pending_after: Decimal,
}

/// Suggested partial-payment amounts derived from the pending balance.
/// Convenience only: registering any of these still goes through the
/// overpayment check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickAmounts {
    pub pending: Decimal,
    pub quarter: Decimal,
    pub half: Decimal,
    pub three_quarters: Decimal,
    pub full: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_summary_serializes_round_trip() {
        let summary = MonthSummary {
            month: 3,
            year: 2025,
            total_income: "1500.00".parse().unwrap(),
            total_expenses: "120.50".parse().unwrap(),
            expenses_by_category: vec![CategoryTotal {
                category: ExpenseCategory::Fuel,
                total: "120.50".parse().unwrap(),
            }],
            salaries_earned: "900.00".parse().unwrap(),
            salaries_paid: "600.00".parse().unwrap(),
            salaries_pending: "300.00".parse().unwrap(),
            worker_balances: vec![],
            gross_profit: "900.00".parse().unwrap(),
            net_profit: "779.50".parse().unwrap(),
            theoretical_profit: "600.00".parse().unwrap(),
        };

        let json = serde_json::to_string(&summary).unwrap();
        let back: MonthSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, back);
    }

    #[test]
    fn job_status_serializes_as_variant_name() {
        let json = serde_json::to_string(&JobStatus::InProgress).unwrap();
        assert_eq!(json, "\"InProgress\"");
    }
}
