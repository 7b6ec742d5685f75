use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::models::worker_payment::WorkerPayment;

#[derive(Debug, Clone)]
pub struct RegisterPaymentCommand {
    pub worker_id: String,
    pub amount: Decimal,
    pub date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct RegisterPaymentResult {
    pub payment: WorkerPayment,
    /// Outstanding balance after this payment was appended.
    pub pending_after: Decimal,
}

#[derive(Debug, Clone)]
pub struct QuickAmountsQuery {
    pub worker_id: String,
    /// Balance is read as of this date.
    pub date: NaiveDate,
}
