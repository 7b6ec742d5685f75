use crate::domain::models::summary::{CategoryTotal, MonthSummary, TimelineEntry, WorkerBalance};

#[derive(Debug, Clone)]
pub struct MonthSummaryQuery {
    pub month: u32,
    pub year: i32,
}

#[derive(Debug, Clone)]
pub struct MonthSummaryResult {
    pub summary: MonthSummary,
}

#[derive(Debug, Clone)]
pub struct WorkerBalanceQuery {
    pub worker_id: String,
    pub month: u32,
    pub year: i32,
}

#[derive(Debug, Clone)]
pub struct WorkerBalanceResult {
    pub balance: WorkerBalance,
}

#[derive(Debug, Clone)]
pub struct ExpenseBreakdownQuery {
    pub month: u32,
    pub year: i32,
}

#[derive(Debug, Clone)]
pub struct ExpenseBreakdownResult {
    pub totals: Vec<CategoryTotal>,
}

#[derive(Debug, Clone)]
pub struct TimelineQuery {
    pub month: u32,
    pub year: i32,
}

#[derive(Debug, Clone)]
pub struct TimelineResult {
    pub entries: Vec<TimelineEntry>,
}
