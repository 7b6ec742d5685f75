use rust_decimal::Decimal;

use crate::domain::models::worker::Worker;

#[derive(Debug, Clone)]
pub struct CreateWorkerCommand {
    pub name: String,
    pub phone: String,
    /// Default commission rate in percent (0-100).
    pub default_commission_rate: Decimal,
}

#[derive(Debug, Clone)]
pub struct CreateWorkerResult {
    pub worker: Worker,
}

#[derive(Debug, Clone)]
pub struct UpdateWorkerCommand {
    pub worker_id: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    /// New default rate for future appointments. Rates already snapshotted
    /// onto appointments are untouched.
    pub default_commission_rate: Option<Decimal>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct UpdateWorkerResult {
    pub worker: Worker,
}

#[derive(Debug, Clone)]
pub struct ListWorkersResult {
    pub workers: Vec<Worker>,
}
