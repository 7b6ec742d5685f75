use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::models::expense::{Expense, ExpenseCategory};

#[derive(Debug, Clone)]
pub struct CreateExpenseCommand {
    pub category: ExpenseCategory,
    pub description: String,
    pub amount: Decimal,
    pub incurred_on: NaiveDate,
    pub recorded_by: String,
}

#[derive(Debug, Clone)]
pub struct CreateExpenseResult {
    pub expense: Expense,
}

#[derive(Debug, Clone)]
pub struct DeleteExpenseCommand {
    pub expense_id: String,
}

#[derive(Debug, Clone)]
pub struct DeleteExpenseResult {
    pub deleted: Expense,
}

#[derive(Debug, Clone)]
pub struct ExpenseListQuery {
    pub month: u32,
    pub year: i32,
}

#[derive(Debug, Clone)]
pub struct ExpenseListResult {
    pub expenses: Vec<Expense>,
}
