use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use csv::{Reader, Writer};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};

use crate::domain::models::expense::{Expense as DomainExpense, ExpenseCategory};
use crate::storage::traits::ExpenseStorage;

use super::connection::CsvConnection;
use super::fields::{field, parse_date, parse_decimal};

const HEADER: [&str; 6] = [
    "id",
    "category",
    "description",
    "amount",
    "incurred_on",
    "recorded_by",
];

/// CSV-based expense repository
#[derive(Clone)]
pub struct ExpenseRepository {
    connection: CsvConnection,
}

impl ExpenseRepository {
    /// Create a new CSV expense repository
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    fn read_expenses(&self) -> Result<Vec<DomainExpense>> {
        let file_path = self.connection.expenses_file_path();
        self.connection.ensure_file_exists(&file_path, &HEADER)?;

        let file = File::open(&file_path)?;
        let mut csv_reader = Reader::from_reader(BufReader::new(file));

        let mut expenses = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            expenses.push(DomainExpense {
                id: field(&record, 0).to_string(),
                category: ExpenseCategory::from_storage_string(field(&record, 1))
                    .map_err(|e| anyhow!(e))?,
                description: field(&record, 2).to_string(),
                amount: parse_decimal(field(&record, 3))?,
                incurred_on: parse_date(field(&record, 4))?,
                recorded_by: field(&record, 5).to_string(),
            });
        }

        Ok(expenses)
    }

    fn write_expenses(&self, expenses: &[DomainExpense]) -> Result<()> {
        let file_path = self.connection.expenses_file_path();
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&file_path)?;

        let mut csv_writer = Writer::from_writer(BufWriter::new(file));
        csv_writer.write_record(&HEADER)?;

        for expense in expenses {
            csv_writer.write_record(&[
                &expense.id,
                &expense.category.to_storage_string(),
                &expense.description,
                &expense.amount.to_string(),
                &expense.incurred_on.format("%Y-%m-%d").to_string(),
                &expense.recorded_by,
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

impl ExpenseStorage for ExpenseRepository {
    fn store_expense(&self, expense: &DomainExpense) -> Result<()> {
        let mut expenses = self.read_expenses()?;
        if expenses.iter().any(|e| e.id == expense.id) {
            return Err(anyhow!("Expense already exists: {}", expense.id));
        }
        expenses.push(expense.clone());
        self.write_expenses(&expenses)
    }

    fn get_expense(&self, expense_id: &str) -> Result<Option<DomainExpense>> {
        let expenses = self.read_expenses()?;
        Ok(expenses.into_iter().find(|e| e.id == expense_id))
    }

    fn delete_expense(&self, expense_id: &str) -> Result<bool> {
        let mut expenses = self.read_expenses()?;
        let before = expenses.len();
        expenses.retain(|e| e.id != expense_id);

        if expenses.len() == before {
            return Ok(false);
        }

        self.write_expenses(&expenses)?;
        Ok(true)
    }

    fn list_expenses_in_range(
        &self,
        start: NaiveDate,
        end_exclusive: NaiveDate,
    ) -> Result<Vec<DomainExpense>> {
        let mut expenses: Vec<DomainExpense> = self
            .read_expenses()?
            .into_iter()
            .filter(|e| start <= e.incurred_on && e.incurred_on < end_exclusive)
            .collect();
        expenses.sort_by(|a, b| a.incurred_on.cmp(&b.incurred_on));
        Ok(expenses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_expense(id: &str, day: u32, amount: &str) -> DomainExpense {
        DomainExpense {
            id: id.to_string(),
            category: ExpenseCategory::Fuel,
            description: "Gas for the van".to_string(),
            amount: amount.parse().unwrap(),
            incurred_on: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
            recorded_by: "admin".to_string(),
        }
    }

    #[test]
    fn delete_removes_only_the_target() {
        let temp_dir = TempDir::new().unwrap();
        let connection = CsvConnection::new(temp_dir.path()).unwrap();
        let repo = ExpenseRepository::new(connection);

        repo.store_expense(&test_expense("exp-1-aaaa", 5, "40.00")).unwrap();
        repo.store_expense(&test_expense("exp-2-bbbb", 6, "25.00")).unwrap();

        assert!(repo.delete_expense("exp-1-aaaa").unwrap());
        assert!(!repo.delete_expense("exp-1-aaaa").unwrap());

        let remaining = repo
            .list_expenses_in_range(
                NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            )
            .unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "exp-2-bbbb");
    }

    #[test]
    fn range_filter_excludes_the_end_date() {
        let temp_dir = TempDir::new().unwrap();
        let connection = CsvConnection::new(temp_dir.path()).unwrap();
        let repo = ExpenseRepository::new(connection);

        repo.store_expense(&test_expense("exp-1-aaaa", 31, "40.00")).unwrap();

        let march = repo
            .list_expenses_in_range(
                NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            )
            .unwrap();
        let april = repo
            .list_expenses_in_range(
                NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            )
            .unwrap();

        assert_eq!(march.len(), 1);
        assert!(april.is_empty());
    }
}
