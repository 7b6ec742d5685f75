//! Domain model for a business expense.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::random_suffix;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Fuel,
    Advertising,
    Supplies,
    Maintenance,
    Other,
}

impl ExpenseCategory {
    /// All categories in presentation order, used for stable breakdown output.
    pub fn all() -> [ExpenseCategory; 5] {
        [
            ExpenseCategory::Fuel,
            ExpenseCategory::Advertising,
            ExpenseCategory::Supplies,
            ExpenseCategory::Maintenance,
            ExpenseCategory::Other,
        ]
    }

    /// Convert to string for CSV storage
    pub fn to_storage_string(&self) -> String {
        match self {
            ExpenseCategory::Fuel => "fuel".to_string(),
            ExpenseCategory::Advertising => "advertising".to_string(),
            ExpenseCategory::Supplies => "supplies".to_string(),
            ExpenseCategory::Maintenance => "maintenance".to_string(),
            ExpenseCategory::Other => "other".to_string(),
        }
    }

    /// Parse from string for CSV loading
    pub fn from_storage_string(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "fuel" => Ok(ExpenseCategory::Fuel),
            "advertising" => Ok(ExpenseCategory::Advertising),
            "supplies" => Ok(ExpenseCategory::Supplies),
            "maintenance" => Ok(ExpenseCategory::Maintenance),
            "other" => Ok(ExpenseCategory::Other),
            _ => Err(format!("Invalid expense category: {}", s)),
        }
    }
}

/// An expense is immutable once recorded; the only mutation the system
/// allows is explicit admin deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub category: ExpenseCategory,
    pub description: String,
    /// Always strictly positive.
    pub amount: Decimal,
    pub incurred_on: NaiveDate,
    pub recorded_by: String,
}

impl Expense {
    /// Generate a unique expense ID.
    /// Format: exp-<timestamp_ms>-<random_suffix>
    pub fn generate_id(timestamp_ms: u64) -> String {
        format!("exp-{}-{}", timestamp_ms, random_suffix(4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_storage_strings_round_trip() {
        for category in ExpenseCategory::all() {
            let s = category.to_storage_string();
            assert_eq!(ExpenseCategory::from_storage_string(&s).unwrap(), category);
        }
        assert!(ExpenseCategory::from_storage_string("groceries").is_err());
    }
}
