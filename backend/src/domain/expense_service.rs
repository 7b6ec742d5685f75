//! Expense recording and monthly breakdowns.

use log::info;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::domain::commands::expenses::{
    CreateExpenseCommand, CreateExpenseResult, DeleteExpenseCommand, DeleteExpenseResult,
    ExpenseListQuery, ExpenseListResult,
};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::models::expense::{Expense as DomainExpense, ExpenseCategory};
use crate::domain::models::now_millis;
use crate::domain::models::summary::CategoryTotal;
use crate::domain::period::Period;
use crate::storage::traits::{Connection, ExpenseStorage};

#[derive(Clone)]
pub struct ExpenseService<C: Connection> {
    expense_repository: C::ExpenseRepository,
}

impl<C: Connection> ExpenseService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        Self {
            expense_repository: connection.create_expense_repository(),
        }
    }

    /// Record a new expense. Expenses are immutable once created; the only
    /// later mutation the system allows is explicit deletion.
    pub fn create_expense(&self, command: CreateExpenseCommand) -> DomainResult<CreateExpenseResult> {
        if command.amount <= Decimal::ZERO {
            return Err(DomainError::validation(format!(
                "Expense amount must be positive, got {}",
                command.amount
            )));
        }
        if command.description.trim().is_empty() {
            return Err(DomainError::validation("Expense description cannot be empty"));
        }

        let expense = DomainExpense {
            id: DomainExpense::generate_id(now_millis()),
            category: command.category,
            description: command.description.trim().to_string(),
            amount: command.amount,
            incurred_on: command.incurred_on,
            recorded_by: command.recorded_by,
        };

        self.expense_repository.store_expense(&expense)?;
        info!("Recorded expense {} ({:?}: {})", expense.id, expense.category, expense.amount);

        Ok(CreateExpenseResult { expense })
    }

    /// Delete an expense by ID (explicit admin action).
    pub fn delete_expense(&self, command: DeleteExpenseCommand) -> DomainResult<DeleteExpenseResult> {
        let expense = self
            .expense_repository
            .get_expense(&command.expense_id)?
            .ok_or_else(|| DomainError::not_found("expense", command.expense_id.clone()))?;

        self.expense_repository.delete_expense(&command.expense_id)?;
        info!("Deleted expense {}", expense.id);

        Ok(DeleteExpenseResult { deleted: expense })
    }

    /// List expenses incurred in a calendar month, oldest first.
    pub fn list_expenses(&self, query: ExpenseListQuery) -> DomainResult<ExpenseListResult> {
        let period = Period::new(query.month, query.year)?;
        let expenses = self
            .expense_repository
            .list_expenses_in_range(period.start_date(), period.end_date())?;
        Ok(ExpenseListResult { expenses })
    }

    /// Per-category totals for a calendar month. Categories with no spend
    /// are omitted; output order follows `ExpenseCategory::all`.
    pub fn breakdown_by_category(&self, month: u32, year: i32) -> DomainResult<Vec<CategoryTotal>> {
        let period = Period::new(month, year)?;
        let expenses = self
            .expense_repository
            .list_expenses_in_range(period.start_date(), period.end_date())?;

        let mut totals = Vec::new();
        for category in ExpenseCategory::all() {
            let total: Decimal = expenses
                .iter()
                .filter(|e| e.category == category)
                .map(|e| e.amount)
                .sum();
            if total > Decimal::ZERO {
                totals.push(CategoryTotal { category, total });
            }
        }

        Ok(totals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::csv::CsvConnection;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_service() -> (ExpenseService<CsvConnection>, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let connection = Arc::new(CsvConnection::new(temp_dir.path()).unwrap());
        (ExpenseService::new(connection), temp_dir)
    }

    fn expense_command(category: ExpenseCategory, amount: &str, day: u32) -> CreateExpenseCommand {
        CreateExpenseCommand {
            category,
            description: "Supplies run".to_string(),
            amount: amount.parse().unwrap(),
            incurred_on: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
            recorded_by: "admin".to_string(),
        }
    }

    #[test]
    fn non_positive_amount_is_rejected() {
        let (service, _temp_dir) = create_test_service();
        for amount in ["0", "-5.00"] {
            let err = service
                .create_expense(expense_command(ExpenseCategory::Fuel, amount, 5))
                .unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
        }
    }

    #[test]
    fn breakdown_groups_by_category() {
        let (service, _temp_dir) = create_test_service();
        service
            .create_expense(expense_command(ExpenseCategory::Fuel, "40.00", 5))
            .unwrap();
        service
            .create_expense(expense_command(ExpenseCategory::Fuel, "35.50", 12))
            .unwrap();
        service
            .create_expense(expense_command(ExpenseCategory::Supplies, "20.00", 8))
            .unwrap();

        let totals = service.breakdown_by_category(3, 2025).unwrap();
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].category, ExpenseCategory::Fuel);
        assert_eq!(totals[0].total, "75.50".parse().unwrap());
        assert_eq!(totals[1].category, ExpenseCategory::Supplies);
        assert_eq!(totals[1].total, "20.00".parse().unwrap());
    }

    #[test]
    fn deleting_a_missing_expense_is_not_found() {
        let (service, _temp_dir) = create_test_service();
        let err = service
            .delete_expense(DeleteExpenseCommand {
                expense_id: "exp-404-dead".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[test]
    fn deleted_expenses_leave_the_month_totals() {
        let (service, _temp_dir) = create_test_service();
        let created = service
            .create_expense(expense_command(ExpenseCategory::Other, "10.00", 5))
            .unwrap();
        service
            .delete_expense(DeleteExpenseCommand {
                expense_id: created.expense.id,
            })
            .unwrap();

        assert!(service.breakdown_by_category(3, 2025).unwrap().is_empty());
    }
}
